//! Try-it Preview Pipeline
//!
//! Turns the playground's markup and style buffers into a single document for
//! the sandboxed preview.
//!
//! # Architecture
//!
//! - [`StructuralValidator`]: document-level checks (root, body, doctype and
//!   tag balance) producing a [`ValidationReport`]
//! - [`assemble`]: merges the style buffer into the markup as an inline
//!   `<style>` block
//! - [`PreviewPipeline`]: gates rendering on a clean report and hands the
//!   assembled document to a [`SandboxRenderer`]
//! - [`AutoRunner`]: debounced auto-run on a tokio task
//!
//! # Example
//!
//! ```ignore
//! use tryit_preview::{PreviewConfig, PreviewPipeline, RunOutcome};
//!
//! let mut shown = Vec::new();
//! let mut pipeline = PreviewPipeline::new(&PreviewConfig::default(), |doc: &str| {
//!     shown.push(doc.to_string())
//! });
//! let markup = "<!DOCTYPE html><html><head></head><body></body></html>";
//! assert_eq!(pipeline.run(markup, "body { margin: 0; }"), RunOutcome::Rendered);
//! ```

pub mod assembler;
pub mod config;
pub mod debounce;
pub mod error;
pub mod pipeline;
pub mod validator;

pub use assembler::assemble;
pub use config::{ConfigFormat, PreviewConfig, DEFAULT_DEBOUNCE_MS};
pub use debounce::{AutoRunner, Debouncer};
pub use error::{PreviewError, PreviewResult};
pub use pipeline::{PreviewPipeline, RunOutcome, SandboxRenderer};
pub use validator::{
    validate, BalanceCheck, StructuralValidator, ValidationReport, MISSING_BODY, MISSING_DOCTYPE,
    MISSING_HTML,
};
