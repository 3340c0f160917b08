//! Error types for the preview pipeline

use thiserror::Error;

/// Errors raised at the edges of the preview pipeline.
///
/// Validation problems are not errors: they are reported in a
/// [`ValidationReport`](crate::ValidationReport).
#[derive(Debug, Error)]
pub enum PreviewError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    YamlError(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Auto-run task is no longer accepting edits")]
    AutoRunStopped,

    #[error("Auto-run task failed: {0}")]
    TaskFailed(String),
}

pub type PreviewResult<T> = Result<T, PreviewError>;
