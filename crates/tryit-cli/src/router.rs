// Command-line parsing and dispatch

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing::debug;
use tryit_completion::EditorMode;

use crate::commands::{AssembleCommand, Command, CompleteCommand, ValidateCommand};
use crate::config::PlaygroundConfig;
use crate::error::CliResult;

/// Try-it - HTML/CSS playground tools
#[derive(Parser, Debug)]
#[command(name = "tryit")]
#[command(bin_name = "tryit")]
#[command(about = "Validate, complete and assemble HTML/CSS playground documents")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Configuration file (YAML or JSON) with `completion` and `preview` sections
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Check a markup document for structural errors
    Validate {
        /// Markup file
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },

    /// Show the caret context and suggestions at a byte offset
    Complete {
        /// Markup or style file
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Caret position as a byte offset
        #[arg(long)]
        offset: usize,

        /// Editor mode (default: from the file extension)
        #[arg(long)]
        mode: Option<EditorMode>,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Build the sandbox document from markup and style files
    Assemble {
        /// Markup file
        #[arg(value_name = "MARKUP")]
        markup: PathBuf,

        /// Style sheet file
        #[arg(value_name = "STYLE")]
        style: PathBuf,

        /// Write the document here instead of stdout
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },
}

/// Command router
pub struct CommandRouter;

impl CommandRouter {
    /// Execute a parsed command line
    pub fn execute(cli: &Cli) -> CliResult<()> {
        let config = PlaygroundConfig::load_or_default(cli.config.as_deref())?;
        debug!(command = ?cli.command, "dispatching");

        match &cli.command {
            Commands::Validate { file } => ValidateCommand::new(file.clone()).execute(&config),
            Commands::Complete {
                file,
                offset,
                mode,
                json,
            } => CompleteCommand::new(file.clone(), *offset, *mode, *json).execute(&config),
            Commands::Assemble {
                markup,
                style,
                output,
            } => AssembleCommand::new(markup.clone(), style.clone(), output.clone())
                .execute(&config),
        }
    }
}
