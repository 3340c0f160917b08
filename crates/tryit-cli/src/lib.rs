// Try-it CLI library

pub mod commands;
pub mod config;
pub mod error;
pub mod logging;
pub mod router;

pub use config::PlaygroundConfig;
pub use error::{CliError, CliResult};
pub use router::{Cli, CommandRouter, Commands};
