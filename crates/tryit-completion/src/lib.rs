//! Try-it Completion Engine
//!
//! Caret-context autocompletion for the playground's HTML and CSS buffers.
//!
//! # Architecture
//!
//! The engine is a pipeline of small synchronous stages, each a pure function
//! of the buffer snapshot and caret offset it receives:
//!
//! 1. **Tag stack resolution** ([`resolve_open_stack`]): replay tag tokens up
//!    to the caret to find the elements still open there
//! 2. **Caret classification** ([`classify`]): decide whether the caret is in a
//!    tag name, closing tag name, attribute name or style property name
//! 3. **Suggestion** ([`SuggestionProvider`]): prefix-filter the static
//!    vocabularies, deduplicate and cap at [`MAX_SUGGESTIONS`]
//! 4. **Popup control** ([`AutocompleteController`]): own the popup state,
//!    react to keys and splice accepted candidates into the buffer
//!
//! Nothing in the pipeline fails. Malformed or truncated input degrades to an
//! empty suggestion list so typing is never interrupted; only configuration
//! loading returns [`CompletionError`].
//!
//! # Offsets
//!
//! Carets and replacement spans are byte offsets into the UTF-8 buffer. Out of
//! range carets are clamped to the buffer.
//!
//! # Example
//!
//! ```ignore
//! use tryit_completion::{AutocompleteController, EditorKey, EditorMode, KeyOutcome};
//!
//! let mut controller = AutocompleteController::default();
//! let text = "<a hr";
//! controller.on_edit(text, text.len(), EditorMode::Markup);
//!
//! if let KeyOutcome::Accepted(edit) = controller.handle_key(EditorKey::Tab, text) {
//!     assert_eq!(edit.text, "<a href=\"\"");
//!     assert_eq!(edit.caret, 9);
//! }
//! ```

pub mod config;
pub mod context;
pub mod controller;
pub mod error;
pub mod mode;
pub mod providers;
pub mod tag_stack;
pub mod types;
pub mod vocabulary;

pub use config::{ConfigFormat, ConfigLoader, CompletionConfig, MAX_SUGGESTIONS};
pub use context::classify;
pub use controller::{
    resolve_insertion, takes_quoted_value, AutocompleteController, EditorKey, Insertion,
    KeyOutcome,
};
pub use error::{CompletionError, CompletionResult};
pub use mode::EditorMode;
pub use providers::SuggestionProvider;
pub use tag_stack::{innermost_open_tag, resolve_open_stack};
pub use types::*;
pub use vocabulary::Vocabulary;
