//! Core data types shared by the completion components

use serde::{Deserialize, Serialize};

/// Suggestion candidates in display order
pub type SuggestionList = Vec<String>;

/// What kind of token the caret is currently inside.
///
/// `replace_start..replace_end` is the byte span of already-typed characters a
/// chosen suggestion overwrites. It always contains the caret offset that
/// produced the context.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CaretContext {
    /// Typing a tag name after `<` or `</`
    TagName {
        prefix: String,
        replace_start: usize,
        replace_end: usize,
        is_closing: bool,
    },
    /// Typing an attribute name inside an opening tag
    AttributeName {
        prefix: String,
        replace_start: usize,
        replace_end: usize,
    },
    /// Typing a property name inside a rule body
    StyleProperty {
        prefix: String,
        replace_start: usize,
        replace_end: usize,
    },
    /// Not a completable position
    #[default]
    None,
}

impl CaretContext {
    pub fn is_none(&self) -> bool {
        matches!(self, CaretContext::None)
    }

    /// The typed fragment, if any
    pub fn prefix(&self) -> Option<&str> {
        match self {
            CaretContext::TagName { prefix, .. }
            | CaretContext::AttributeName { prefix, .. }
            | CaretContext::StyleProperty { prefix, .. } => Some(prefix),
            CaretContext::None => None,
        }
    }

    /// The replacement span as `(start, end)`
    pub fn span(&self) -> Option<(usize, usize)> {
        match self {
            CaretContext::TagName {
                replace_start,
                replace_end,
                ..
            }
            | CaretContext::AttributeName {
                replace_start,
                replace_end,
                ..
            }
            | CaretContext::StyleProperty {
                replace_start,
                replace_end,
                ..
            } => Some((*replace_start, *replace_end)),
            CaretContext::None => None,
        }
    }

    /// Short human-readable name of the context kind
    pub fn kind_label(&self) -> &'static str {
        match self {
            CaretContext::TagName {
                is_closing: true, ..
            } => "closing tag name",
            CaretContext::TagName { .. } => "tag name",
            CaretContext::AttributeName { .. } => "attribute name",
            CaretContext::StyleProperty { .. } => "style property",
            CaretContext::None => "none",
        }
    }
}

/// Result of accepting a suggestion: the spliced text and the new caret
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edit {
    pub text: String,
    pub caret: usize,
}

/// Popup state observed by the editor UI.
///
/// While `is_open`, `items` is non-empty and `highlighted_index < items.len()`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AutocompleteState {
    pub is_open: bool,
    pub items: SuggestionList,
    pub highlighted_index: usize,
    pub context: CaretContext,
}

impl AutocompleteState {
    pub fn closed() -> Self {
        Self::default()
    }

    /// The currently highlighted candidate
    pub fn highlighted(&self) -> Option<&str> {
        if !self.is_open {
            return None;
        }
        self.items.get(self.highlighted_index).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_context_accessors() {
        let context = CaretContext::AttributeName {
            prefix: "hr".to_string(),
            replace_start: 3,
            replace_end: 5,
        };
        assert_eq!(context.prefix(), Some("hr"));
        assert_eq!(context.span(), Some((3, 5)));
        assert_eq!(context.kind_label(), "attribute name");
        assert!(!context.is_none());

        assert_eq!(CaretContext::None.prefix(), None);
        assert_eq!(CaretContext::None.span(), None);
    }

    #[test]
    fn test_context_serializes_with_kind_tag() {
        let context = CaretContext::StyleProperty {
            prefix: "disp".to_string(),
            replace_start: 7,
            replace_end: 11,
        };
        let json = serde_json::to_value(&context).unwrap();
        assert_eq!(json["kind"], "style_property");
        assert_eq!(json["prefix"], "disp");
    }

    #[test]
    fn test_closed_state_has_no_highlight() {
        let state = AutocompleteState {
            is_open: false,
            items: vec!["div".to_string()],
            highlighted_index: 0,
            context: CaretContext::None,
        };
        assert_eq!(state.highlighted(), None);
    }
}
