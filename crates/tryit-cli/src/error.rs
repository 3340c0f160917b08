use thiserror::Error;

/// CLI-specific errors
#[derive(Error, Debug)]
pub enum CliError {
    #[error("Invalid argument: {message}")]
    InvalidArgument { message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Validation failed with {0} error(s)")]
    ValidationFailed(usize),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl From<tryit_completion::CompletionError> for CliError {
    fn from(e: tryit_completion::CompletionError) -> Self {
        CliError::Config(e.to_string())
    }
}

impl From<tryit_preview::PreviewError> for CliError {
    fn from(e: tryit_preview::PreviewError) -> Self {
        CliError::Config(e.to_string())
    }
}

impl CliError {
    /// Get a user-friendly error message with suggestions
    pub fn user_message(&self) -> String {
        match self {
            CliError::InvalidArgument { message } => {
                format!("Invalid argument: {}\n\nRun 'tryit --help' for usage information.", message)
            }
            CliError::Io(e) => format!("File operation failed: {}", e),
            CliError::Config(msg) => {
                format!("Configuration error: {}\n\nCheck the file passed with --config.", msg)
            }
            CliError::ValidationFailed(count) => {
                format!("Document has {} structural error(s); nothing was assembled.", count)
            }
            CliError::Serialization(e) => format!("Could not encode output: {}", e),
        }
    }

    /// Exit status for the process
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::InvalidArgument { .. } => 2,
            _ => 1,
        }
    }
}

pub type CliResult<T> = Result<T, CliError>;
