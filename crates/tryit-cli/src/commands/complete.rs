// Caret context and suggestions at a byte offset

use std::path::PathBuf;

use serde::Serialize;
use tracing::debug;
use tryit_completion::{classify, CaretContext, EditorMode, SuggestionProvider};

use crate::commands::Command;
use crate::config::PlaygroundConfig;
use crate::error::{CliError, CliResult};

/// Result of a completion query
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompletionReport {
    pub mode: EditorMode,
    pub context: CaretContext,
    pub suggestions: Vec<String>,
}

/// Query completions for a file at a caret offset
pub struct CompleteCommand {
    file: PathBuf,
    offset: usize,
    mode: Option<EditorMode>,
    json: bool,
}

impl CompleteCommand {
    pub fn new(file: PathBuf, offset: usize, mode: Option<EditorMode>, json: bool) -> Self {
        Self {
            file,
            offset,
            mode,
            json,
        }
    }

    /// Explicit mode, else the file extension, else markup
    pub fn resolve_mode(&self) -> EditorMode {
        self.mode
            .or_else(|| EditorMode::from_path(&self.file))
            .unwrap_or_default()
    }

    /// Read the file and complete at the offset; an offset past the end is rejected
    pub fn report(&self, config: &PlaygroundConfig) -> CliResult<CompletionReport> {
        let text = std::fs::read_to_string(&self.file)?;
        if self.offset > text.len() {
            return Err(CliError::InvalidArgument {
                message: format!(
                    "--offset {} is past the end of {} ({} bytes)",
                    self.offset,
                    self.file.display(),
                    text.len()
                ),
            });
        }
        Ok(complete_text(&text, self.offset, self.resolve_mode(), config))
    }
}

/// Classify the caret and produce suggestions for in-memory text
pub fn complete_text(
    text: &str,
    offset: usize,
    mode: EditorMode,
    config: &PlaygroundConfig,
) -> CompletionReport {
    let context = classify(text, offset, mode);
    let suggestions = SuggestionProvider::from_config(&config.completion).suggest_in(text, &context);
    debug!(kind = context.kind_label(), count = suggestions.len(), "completion query");

    CompletionReport {
        mode,
        context,
        suggestions,
    }
}

/// Plain-text rendering of a completion report
pub fn format_completion(report: &CompletionReport) -> String {
    let mut out = format!("mode: {}\ncontext: {}", report.mode, report.context.kind_label());
    if let (Some(prefix), Some((start, end))) = (report.context.prefix(), report.context.span()) {
        out.push_str(&format!("\nprefix: {:?}\nreplace: {}..{}", prefix, start, end));
    }
    for item in &report.suggestions {
        out.push_str(&format!("\n  {}", item));
    }
    out
}

impl Command for CompleteCommand {
    fn execute(&self, config: &PlaygroundConfig) -> CliResult<()> {
        let report = self.report(config)?;
        if self.json {
            println!("{}", serde_json::to_string_pretty(&report)?);
        } else {
            println!("{}", format_completion(&report));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_from_extension() {
        let command = CompleteCommand::new(PathBuf::from("site.css"), 0, None, false);
        assert_eq!(command.resolve_mode(), EditorMode::Style);

        let command = CompleteCommand::new(PathBuf::from("notes.txt"), 0, None, false);
        assert_eq!(command.resolve_mode(), EditorMode::Markup);
    }

    #[test]
    fn test_explicit_mode_wins() {
        let command =
            CompleteCommand::new(PathBuf::from("site.css"), 0, Some(EditorMode::Markup), false);
        assert_eq!(command.resolve_mode(), EditorMode::Markup);
    }

    #[test]
    fn test_offset_past_end_is_invalid_argument() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("index.html");
        std::fs::write(&path, "<ul><li").unwrap();

        let command = CompleteCommand::new(path.clone(), 8, None, false);
        let err = command.report(&PlaygroundConfig::default()).unwrap_err();
        assert!(matches!(err, CliError::InvalidArgument { ref message } if message.contains("7 bytes")));
        assert_eq!(err.exit_code(), 2);

        let at_end = CompleteCommand::new(path, 7, None, false);
        assert_eq!(
            at_end.report(&PlaygroundConfig::default()).unwrap().suggestions,
            vec!["link", "li"]
        );
    }

    #[test]
    fn test_complete_style_property() {
        let text = ".box { disp";
        let report = complete_text(text, text.len(), EditorMode::Style, &PlaygroundConfig::default());
        assert_eq!(report.suggestions, vec!["display"]);
        assert!(format_completion(&report).contains("prefix: \"disp\""));
    }

    #[test]
    fn test_complete_respects_configured_cap() {
        let mut config = PlaygroundConfig::default();
        config.completion.max_suggestions = 2;
        let report = complete_text("<", 1, EditorMode::Markup, &config);
        assert_eq!(report.suggestions.len(), 2);
    }

    #[test]
    fn test_json_shape() {
        let report = complete_text("<p cl", 5, EditorMode::Markup, &PlaygroundConfig::default());
        let value = serde_json::to_value(&report).unwrap();
        assert_eq!(value["mode"], "markup");
        assert_eq!(value["context"]["kind"], "attribute_name");
        assert_eq!(value["suggestions"][0], "class");
    }
}
