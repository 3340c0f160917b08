//! Suggestion generation from static vocabularies
//!
//! Candidates are filtered by case-insensitive prefix, deduplicated in
//! first-seen order and capped. Vocabulary order is preserved: nothing is
//! re-sorted by score or alphabetically.

use itertools::Itertools;

use crate::config::{CompletionConfig, MAX_SUGGESTIONS};
use crate::tag_stack::innermost_open_tag;
use crate::types::{CaretContext, SuggestionList};
use crate::vocabulary::Vocabulary;

/// Produces suggestion lists for classified caret contexts
#[derive(Debug, Clone)]
pub struct SuggestionProvider {
    vocabulary: Vocabulary,
    max_items: usize,
}

impl SuggestionProvider {
    pub fn new(vocabulary: Vocabulary, max_items: usize) -> Self {
        Self {
            vocabulary,
            max_items: max_items.clamp(1, MAX_SUGGESTIONS),
        }
    }

    pub fn from_config(config: &CompletionConfig) -> Self {
        Self::new(config.vocabulary.clone(), config.max_suggestions)
    }

    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    /// Suggest candidates for `context`.
    ///
    /// `innermost_open` is only consulted for closing tag names, where the
    /// element actually open at the caret is listed ahead of the generic
    /// vocabulary. An attribute context with an empty prefix yields nothing.
    pub fn suggest(&self, context: &CaretContext, innermost_open: Option<&str>) -> SuggestionList {
        match context {
            CaretContext::TagName {
                prefix,
                is_closing: false,
                ..
            } => self.filter(self.vocabulary.tags.iter().map(String::as_str), prefix),
            CaretContext::TagName {
                prefix,
                is_closing: true,
                ..
            } => self.filter(
                innermost_open
                    .into_iter()
                    .chain(self.vocabulary.tags.iter().map(String::as_str)),
                prefix,
            ),
            CaretContext::AttributeName { prefix, .. } if prefix.is_empty() => Vec::new(),
            CaretContext::AttributeName { prefix, .. } => {
                self.filter(self.vocabulary.attributes.iter().map(String::as_str), prefix)
            }
            CaretContext::StyleProperty { prefix, .. } => {
                self.filter(self.vocabulary.properties.iter().map(String::as_str), prefix)
            }
            CaretContext::None => Vec::new(),
        }
    }

    /// Suggest candidates for a context classified from `text`, resolving the
    /// open-element stack when a closing tag name is being typed.
    pub fn suggest_in(&self, text: &str, context: &CaretContext) -> SuggestionList {
        match context {
            CaretContext::TagName {
                is_closing: true,
                replace_start,
                ..
            } => {
                // Replay up to the `</` so the partially typed name is not counted
                let tag_start = replace_start.saturating_sub(2);
                let innermost = innermost_open_tag(text, tag_start);
                self.suggest(context, innermost.as_deref())
            }
            _ => self.suggest(context, None),
        }
    }

    fn filter<'a>(&self, candidates: impl Iterator<Item = &'a str>, prefix: &str) -> SuggestionList {
        let prefix = prefix.to_lowercase();
        candidates
            .filter(|candidate| candidate.to_lowercase().starts_with(&prefix))
            .unique()
            .take(self.max_items)
            .map(str::to_string)
            .collect()
    }
}

impl Default for SuggestionProvider {
    fn default() -> Self {
        Self::new(Vocabulary::builtin(), MAX_SUGGESTIONS)
    }
}
