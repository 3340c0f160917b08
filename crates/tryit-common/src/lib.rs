//! Shared building blocks for the Try-it playground editor
//!
//! Both the autocomplete pipeline and the structural validator need the same
//! view of "which tags appear in this text". This crate owns that view:
//!
//! - [`html`]: the void-element set and a linear tag scanner producing [`TagToken`]s
//! - [`offset`]: caret clamping so every public entry point is total over any offset
//! - [`config_format`]: YAML/JSON selection shared by the configuration loaders

pub mod config_format;
pub mod html;
pub mod offset;

pub use config_format::ConfigFormat;
pub use html::{is_void_element, scan_tags, TagScanner, TagToken, VOID_ELEMENTS};
pub use offset::{clamp_caret, clamp_span};
