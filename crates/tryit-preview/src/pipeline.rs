//! Run / auto-run preview pipeline
//!
//! Every change is validated. A document is assembled and handed to the
//! sandbox only when validation reports no errors, and only on an explicit
//! run or when auto-run is enabled. On errors the previously rendered
//! document stays in place.

use tracing::{debug, info};

use crate::assembler::assemble;
use crate::config::PreviewConfig;
use crate::validator::{StructuralValidator, ValidationReport};

/// The sandboxed renderer that displays assembled documents.
///
/// Rendering is fire-and-forget: nothing flows back into the pipeline.
pub trait SandboxRenderer {
    fn render(&mut self, document: &str);
}

impl<F> SandboxRenderer for F
where
    F: FnMut(&str),
{
    fn render(&mut self, document: &str) {
        self(document)
    }
}

/// What a pipeline call did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    /// A new document was assembled and sent to the sandbox
    Rendered,
    /// Inputs equal the last rendered ones; the sandbox was not reloaded
    Unchanged,
    /// Validation reported errors; the last document was kept
    Blocked,
    /// Auto-run is off; the change was only validated
    Validated,
}

#[derive(Debug)]
pub struct PreviewPipeline<R> {
    validator: StructuralValidator,
    renderer: R,
    auto_run: bool,
    report: ValidationReport,
    rendered_inputs: Option<(String, String)>,
    document: Option<String>,
}

impl<R: SandboxRenderer> PreviewPipeline<R> {
    pub fn new(config: &PreviewConfig, renderer: R) -> Self {
        Self {
            validator: StructuralValidator::new(config.balance_check),
            renderer,
            auto_run: config.auto_run,
            report: ValidationReport::default(),
            rendered_inputs: None,
            document: None,
        }
    }

    pub fn auto_run(&self) -> bool {
        self.auto_run
    }

    pub fn set_auto_run(&mut self, enabled: bool) {
        self.auto_run = enabled;
    }

    /// Report of the most recent validation
    pub fn report(&self) -> &ValidationReport {
        &self.report
    }

    /// The document currently shown in the sandbox
    pub fn document(&self) -> Option<&str> {
        self.document.as_deref()
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn into_renderer(self) -> R {
        self.renderer
    }

    /// Explicit run: validate, then assemble and render when error-free
    pub fn run(&mut self, markup: &str, style: &str) -> RunOutcome {
        self.report = self.validator.validate(markup);

        if !self.report.is_ok() {
            debug!(errors = self.report.errors.len(), "preview blocked by validation errors");
            return RunOutcome::Blocked;
        }

        if let Some((last_markup, last_style)) = &self.rendered_inputs {
            if last_markup == markup && last_style == style {
                return RunOutcome::Unchanged;
            }
        }

        let document = assemble(markup, style);
        self.renderer.render(&document);
        info!(bytes = document.len(), "preview rendered");

        self.rendered_inputs = Some((markup.to_string(), style.to_string()));
        self.document = Some(document);
        RunOutcome::Rendered
    }

    /// A buffer changed: always validate, run only when auto-run is enabled
    pub fn on_change(&mut self, markup: &str, style: &str) -> RunOutcome {
        if self.auto_run {
            return self.run(markup, style);
        }
        self.report = self.validator.validate(markup);
        RunOutcome::Validated
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VALID: &str = "<!DOCTYPE html><html><head></head><body><p>hi</p></body></html>";
    const NO_BODY: &str = "<!DOCTYPE html><html><head></head></html>";

    #[derive(Debug, Default)]
    struct Recorder(Vec<String>);

    impl SandboxRenderer for Recorder {
        fn render(&mut self, document: &str) {
            self.0.push(document.to_string());
        }
    }

    fn recording() -> PreviewPipeline<Recorder> {
        PreviewPipeline::new(&PreviewConfig::default(), Recorder::default())
    }

    #[test]
    fn test_run_renders_valid_markup() {
        let mut pipeline = recording();
        assert_eq!(pipeline.run(VALID, "p{}"), RunOutcome::Rendered);
        assert_eq!(pipeline.renderer().0.len(), 1);
        assert_eq!(pipeline.document(), Some(assemble(VALID, "p{}").as_str()));
    }

    #[test]
    fn test_identical_run_does_not_reload() {
        let mut pipeline = recording();
        pipeline.run(VALID, "p{}");
        assert_eq!(pipeline.run(VALID, "p{}"), RunOutcome::Unchanged);
        assert_eq!(pipeline.renderer().0.len(), 1);
    }

    #[test]
    fn test_style_change_rerenders() {
        let mut pipeline = recording();
        pipeline.run(VALID, "p{}");
        assert_eq!(pipeline.run(VALID, "p{color:red}"), RunOutcome::Rendered);
        assert_eq!(pipeline.renderer().0.len(), 2);
    }

    #[test]
    fn test_errors_keep_previous_document() {
        let mut pipeline = recording();
        pipeline.run(VALID, "");
        let before = pipeline.document().map(str::to_string);

        assert_eq!(pipeline.run(NO_BODY, ""), RunOutcome::Blocked);
        assert_eq!(pipeline.document().map(str::to_string), before);
        assert_eq!(pipeline.report().errors, vec!["Missing <body> element."]);
        assert_eq!(pipeline.renderer().0.len(), 1);
    }

    #[test]
    fn test_change_without_auto_run_only_validates() {
        let mut pipeline = recording();
        assert_eq!(pipeline.on_change(VALID, ""), RunOutcome::Validated);
        assert!(pipeline.document().is_none());
        assert!(pipeline.report().is_ok());

        pipeline.on_change(NO_BODY, "");
        assert!(!pipeline.report().is_ok());
    }

    #[test]
    fn test_change_with_auto_run_renders() {
        let mut pipeline = recording();
        pipeline.set_auto_run(true);
        assert_eq!(pipeline.on_change(VALID, ""), RunOutcome::Rendered);
        assert_eq!(pipeline.on_change(NO_BODY, ""), RunOutcome::Blocked);
        assert_eq!(pipeline.renderer().0.len(), 1);
    }

    #[test]
    fn test_closure_renderer() {
        let mut seen = 0;
        {
            let mut pipeline =
                PreviewPipeline::new(&PreviewConfig::default(), |_: &str| seen += 1);
            pipeline.run(VALID, "");
        }
        assert_eq!(seen, 1);
    }
}
