// Sandbox document assembly from markup and style files

use std::path::PathBuf;

use tracing::info;
use tryit_preview::{PreviewPipeline, RunOutcome, ValidationReport};

use crate::commands::validate::format_report;
use crate::commands::Command;
use crate::config::PlaygroundConfig;
use crate::error::{CliError, CliResult};

/// Validate markup and write the assembled document
pub struct AssembleCommand {
    markup: PathBuf,
    style: PathBuf,
    output: Option<PathBuf>,
}

impl AssembleCommand {
    pub fn new(markup: PathBuf, style: PathBuf, output: Option<PathBuf>) -> Self {
        Self {
            markup,
            style,
            output,
        }
    }
}

/// Run the preview pipeline once over in-memory buffers.
///
/// Returns the rendered document, or the report when validation blocked it.
pub fn assemble_buffers(
    markup: &str,
    style: &str,
    config: &PlaygroundConfig,
) -> Result<(String, ValidationReport), ValidationReport> {
    let mut rendered: Option<String> = None;
    let (outcome, report) = {
        let mut pipeline = PreviewPipeline::new(&config.preview, |document: &str| {
            rendered = Some(document.to_string());
        });
        let outcome = pipeline.run(markup, style);
        (outcome, pipeline.report().clone())
    };

    match (outcome, rendered) {
        (RunOutcome::Rendered, Some(document)) => Ok((document, report)),
        _ => Err(report),
    }
}

impl Command for AssembleCommand {
    fn execute(&self, config: &PlaygroundConfig) -> CliResult<()> {
        let markup = std::fs::read_to_string(&self.markup)?;
        let style = std::fs::read_to_string(&self.style)?;

        let (document, report) = match assemble_buffers(&markup, &style, config) {
            Ok(assembled) => assembled,
            Err(report) => {
                eprintln!("{}", format_report(&report));
                return Err(CliError::ValidationFailed(report.errors.len()));
            }
        };

        for warning in report.visible_warnings() {
            eprintln!("warning: {}", warning);
        }

        match &self.output {
            Some(path) => {
                std::fs::write(path, &document)?;
                info!(path = %path.display(), bytes = document.len(), "document written");
            }
            None => print!("{}", document),
        }
        Ok(())
    }
}
