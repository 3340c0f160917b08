//! Autocomplete popup state machine
//!
//! The controller is the single writer of [`AutocompleteState`]. Every editor
//! event maps to one transition:
//!
//! - edit / caret move: reclassify and resuggest; open on a non-empty list, close otherwise
//! - ArrowDown / ArrowUp: move the highlight, clamped, context untouched
//! - Escape: close
//! - Tab / Enter / pointer pick: splice the candidate in, reposition the caret, close
//! - focus loss: close once the grace window has elapsed; edits arriving
//!   while unfocused never reopen the popup
//!
//! Time is passed in explicitly so the blur grace window is driven by the
//! caller's clock.

use std::time::{Duration, Instant};

use tracing::debug;

use crate::config::CompletionConfig;
use crate::context::classify;
use crate::mode::EditorMode;
use crate::providers::SuggestionProvider;
use crate::types::{AutocompleteState, CaretContext, Edit};

/// Keys the controller reacts to while the popup is open
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorKey {
    ArrowDown,
    ArrowUp,
    Escape,
    Tab,
    Enter,
}

/// What the editor should do with a key press
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyOutcome {
    /// Popup closed or key not relevant: let the editor handle it
    Ignored,
    /// Consumed by the popup
    Handled,
    /// A suggestion was accepted; apply the edit
    Accepted(Edit),
}

/// Text spliced in for an accepted candidate and the caret position relative
/// to the start of the insertion
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Insertion {
    pub text: String,
    pub caret: usize,
}

/// Whether `name` conventionally takes a quoted value.
///
/// Patterns ending in `*` match by prefix, everything else matches exactly
/// (case-insensitive).
pub fn takes_quoted_value(name: &str, quoted_attributes: &[String]) -> bool {
    let name = name.to_ascii_lowercase();
    quoted_attributes.iter().any(|pattern| {
        let pattern = pattern.to_ascii_lowercase();
        match pattern.strip_suffix('*') {
            Some(prefix) => name.starts_with(prefix),
            None => name == pattern,
        }
    })
}

/// Decide what text an accepted `candidate` inserts for `context`
pub fn resolve_insertion(
    candidate: &str,
    context: &CaretContext,
    quoted_attributes: &[String],
) -> Insertion {
    match context {
        CaretContext::AttributeName { .. } if takes_quoted_value(candidate, quoted_attributes) => {
            Insertion {
                text: format!("{}=\"\"", candidate),
                caret: candidate.len() + 2,
            }
        }
        CaretContext::StyleProperty { .. } => {
            let text = format!("{}: ", candidate);
            let caret = text.len();
            Insertion { text, caret }
        }
        _ => Insertion {
            text: candidate.to_string(),
            caret: candidate.len(),
        },
    }
}

/// Owner of the autocomplete popup state for one editor surface
#[derive(Debug, Clone)]
pub struct AutocompleteController {
    provider: SuggestionProvider,
    quoted_attributes: Vec<String>,
    blur_grace: Duration,
    state: AutocompleteState,
    focused: bool,
    close_deadline: Option<Instant>,
}

impl AutocompleteController {
    pub fn new(config: &CompletionConfig) -> Self {
        Self {
            provider: SuggestionProvider::from_config(config),
            quoted_attributes: config.quoted_attributes.clone(),
            blur_grace: Duration::from_millis(config.blur_grace_ms),
            state: AutocompleteState::closed(),
            focused: true,
            close_deadline: None,
        }
    }

    pub fn state(&self) -> &AutocompleteState {
        &self.state
    }

    pub fn is_open(&self) -> bool {
        self.state.is_open
    }

    pub fn provider(&self) -> &SuggestionProvider {
        &self.provider
    }

    /// Reclassify after an edit or caret move
    pub fn on_edit(&mut self, text: &str, caret: usize, mode: EditorMode) -> &AutocompleteState {
        if !self.focused {
            self.close("edit while unfocused");
            return &self.state;
        }

        let context = classify(text, caret, mode);
        let items = self.provider.suggest_in(text, &context);

        if items.is_empty() {
            self.close("no suggestions");
        } else {
            debug!(
                kind = context.kind_label(),
                count = items.len(),
                "autocomplete opened"
            );
            self.state = AutocompleteState {
                is_open: true,
                items,
                highlighted_index: 0,
                context,
            };
        }

        &self.state
    }

    /// Dispatch a key press against the current buffer
    pub fn handle_key(&mut self, key: EditorKey, text: &str) -> KeyOutcome {
        if !self.state.is_open {
            return KeyOutcome::Ignored;
        }

        match key {
            EditorKey::ArrowDown => {
                self.move_highlight(1);
                KeyOutcome::Handled
            }
            EditorKey::ArrowUp => {
                self.move_highlight(-1);
                KeyOutcome::Handled
            }
            EditorKey::Escape => {
                self.cancel();
                KeyOutcome::Handled
            }
            EditorKey::Tab | EditorKey::Enter => match self.accept(text) {
                Some(edit) => KeyOutcome::Accepted(edit),
                None => KeyOutcome::Handled,
            },
        }
    }

    /// Move the highlight by `delta`, clamped to the item range
    pub fn move_highlight(&mut self, delta: isize) {
        if !self.state.is_open {
            return;
        }
        let last = self.state.items.len().saturating_sub(1);
        let target = self.state.highlighted_index.saturating_add_signed(delta);
        self.state.highlighted_index = target.min(last);
    }

    /// Close the popup, discarding the context
    pub fn cancel(&mut self) {
        self.close("cancelled");
    }

    /// Accept the highlighted candidate
    pub fn accept(&mut self, text: &str) -> Option<Edit> {
        self.accept_index(self.state.highlighted_index, text)
    }

    /// Accept the candidate at `index` (pointer selection).
    ///
    /// Returns `None` and closes the popup when the stored span no longer fits
    /// `text`.
    pub fn accept_index(&mut self, index: usize, text: &str) -> Option<Edit> {
        if !self.state.is_open {
            return None;
        }
        let candidate = self.state.items.get(index)?.clone();
        let (start, end) = self.state.context.span()?;

        if start > end
            || end > text.len()
            || !text.is_char_boundary(start)
            || !text.is_char_boundary(end)
        {
            self.close("stale replacement span");
            return None;
        }

        let insertion = resolve_insertion(&candidate, &self.state.context, &self.quoted_attributes);

        let mut spliced = String::with_capacity(text.len() - (end - start) + insertion.text.len());
        spliced.push_str(&text[..start]);
        spliced.push_str(&insertion.text);
        spliced.push_str(&text[end..]);

        let edit = Edit {
            text: spliced,
            caret: start + insertion.caret,
        };
        debug!(candidate = %candidate, caret = edit.caret, "suggestion accepted");
        self.close("accepted");

        Some(edit)
    }

    /// The editor lost focus; the popup closes once the grace window elapses
    pub fn blur(&mut self, now: Instant) {
        self.focused = false;
        if self.state.is_open {
            self.close_deadline = Some(now + self.blur_grace);
        }
    }

    /// The editor regained focus before the grace window elapsed
    pub fn focus(&mut self) {
        self.focused = true;
        self.close_deadline = None;
    }

    /// Apply a pending focus-loss close. Returns `true` if the popup closed.
    pub fn tick(&mut self, now: Instant) -> bool {
        match self.close_deadline {
            Some(deadline) if now >= deadline => {
                self.close("focus lost");
                true
            }
            _ => false,
        }
    }

    fn close(&mut self, reason: &str) {
        if self.state.is_open {
            debug!(reason, "autocomplete closed");
        }
        self.state = AutocompleteState::closed();
        self.close_deadline = None;
    }
}

impl Default for AutocompleteController {
    fn default() -> Self {
        Self::new(&CompletionConfig::default())
    }
}
