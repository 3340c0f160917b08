// Structural validation of a markup file

use std::path::PathBuf;

use tracing::info;
use tryit_preview::{StructuralValidator, ValidationReport};

use crate::commands::Command;
use crate::config::PlaygroundConfig;
use crate::error::{CliError, CliResult};

/// Validate a markup file and print its findings
pub struct ValidateCommand {
    file: PathBuf,
}

impl ValidateCommand {
    pub fn new(file: PathBuf) -> Self {
        Self { file }
    }

    /// Read and validate the file
    pub fn report(&self, config: &PlaygroundConfig) -> CliResult<ValidationReport> {
        let markup = std::fs::read_to_string(&self.file)?;
        Ok(StructuralValidator::new(config.preview.balance_check).validate(&markup))
    }
}

/// Human-readable listing: errors first, warnings only when there are no errors
pub fn format_report(report: &ValidationReport) -> String {
    let mut lines: Vec<String> = report
        .errors
        .iter()
        .map(|e| format!("error: {}", e))
        .collect();
    lines.extend(
        report
            .visible_warnings()
            .iter()
            .map(|w| format!("warning: {}", w)),
    );
    if lines.is_empty() {
        lines.push("ok".to_string());
    }
    lines.join("\n")
}

impl Command for ValidateCommand {
    fn execute(&self, config: &PlaygroundConfig) -> CliResult<()> {
        let report = self.report(config)?;
        println!("{}", format_report(&report));
        info!(
            file = %self.file.display(),
            errors = report.errors.len(),
            "validation finished"
        );

        if report.is_ok() {
            Ok(())
        } else {
            Err(CliError::ValidationFailed(report.errors.len()))
        }
    }
}
