// Command handlers for the tryit CLI

pub mod assemble;
pub mod complete;
pub mod validate;

pub use assemble::AssembleCommand;
pub use complete::{CompleteCommand, CompletionReport};
pub use validate::ValidateCommand;

use crate::config::PlaygroundConfig;
use crate::error::CliResult;

/// Trait for command handlers
pub trait Command {
    /// Execute the command, printing its output
    fn execute(&self, config: &PlaygroundConfig) -> CliResult<()>;
}
