//! Error types for completion configuration

use thiserror::Error;

/// Errors raised while loading or validating completion configuration.
///
/// The completion pipeline itself (classification, suggestion, acceptance)
/// never fails; only the configuration edge does.
#[derive(Debug, Error)]
pub enum CompletionError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    YamlError(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

pub type CompletionResult<T> = Result<T, CompletionError>;
