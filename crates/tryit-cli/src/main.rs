// Try-it CLI entry point

use anyhow::Result;
use clap::Parser;
use tryit_cli::{logging, Cli, CommandRouter};

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose);

    if let Err(e) = CommandRouter::execute(&cli) {
        tracing::debug!("command failed: {:?}", e);
        eprintln!("{}", e.user_message());
        std::process::exit(e.exit_code());
    }
    Ok(())
}
