//! Structural validation of markup documents
//!
//! The validator checks document-level invariants without a grammar: the
//! presence of the root and body elements, a doctype, and tag balance. Tag
//! balance is count-based by default, so misordered but balanced markup such
//! as `<a><b></a></b>` passes. [`BalanceCheck::Nesting`] additionally reports
//! misordered closes.

use std::collections::HashMap;

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::debug;
use tryit_common::scan_tags;

lazy_static! {
    static ref DOCTYPE_REGEX: Regex = Regex::new(r"(?i)<!doctype\s+html\b[^>]*>").unwrap();
}

pub const MISSING_HTML: &str = "Missing <html> element.";
pub const MISSING_BODY: &str = "Missing <body> element.";
pub const MISSING_DOCTYPE: &str = "Missing <!DOCTYPE html> declaration.";

/// How tag balance is checked
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BalanceCheck {
    /// Compare open and close counts per tag name
    #[default]
    Counts,
    /// Counts, plus a report for every close that does not match the innermost open element
    Nesting,
}

/// Outcome of a validation pass
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ValidationReport {
    /// Problems that block preview assembly
    pub errors: Vec<String>,
    /// Advisory findings
    pub warnings: Vec<String>,
}

impl ValidationReport {
    pub fn is_ok(&self) -> bool {
        self.errors.is_empty()
    }

    /// Warnings to surface: none while there are errors to fix first
    pub fn visible_warnings(&self) -> &[String] {
        if self.is_ok() {
            &self.warnings
        } else {
            &[]
        }
    }
}

#[derive(Debug)]
struct TagTally {
    name: String,
    opened: usize,
    closed: usize,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct StructuralValidator {
    balance: BalanceCheck,
}

impl StructuralValidator {
    pub fn new(balance: BalanceCheck) -> Self {
        Self { balance }
    }

    pub fn balance(&self) -> BalanceCheck {
        self.balance
    }

    /// Validate a complete markup document
    pub fn validate(&self, markup: &str) -> ValidationReport {
        let mut report = ValidationReport::default();

        let mut has_html = false;
        let mut has_body = false;
        let mut tallies: Vec<TagTally> = Vec::new();
        let mut positions: HashMap<String, usize> = HashMap::new();
        let mut open_stack: Vec<String> = Vec::new();
        let mut misnested: Vec<String> = Vec::new();

        for token in scan_tags(markup) {
            if !token.is_closing {
                has_html |= token.name == "html";
                has_body |= token.name == "body";
                if !token.affects_nesting() {
                    continue;
                }
            }

            let index = *positions.entry(token.name.clone()).or_insert_with(|| {
                tallies.push(TagTally {
                    name: token.name.clone(),
                    opened: 0,
                    closed: 0,
                });
                tallies.len() - 1
            });

            if token.is_closing {
                tallies[index].closed += 1;
                if self.balance == BalanceCheck::Nesting {
                    match open_stack.iter().rposition(|open| *open == token.name) {
                        Some(top) if top == open_stack.len() - 1 => {
                            open_stack.pop();
                        }
                        Some(found) => {
                            misnested.push(format!("Misnested </{}> tag.", token.name));
                            open_stack.remove(found);
                        }
                        None => {}
                    }
                }
            } else {
                tallies[index].opened += 1;
                if self.balance == BalanceCheck::Nesting {
                    open_stack.push(token.name);
                }
            }
        }

        if !has_html {
            report.errors.push(MISSING_HTML.to_string());
        }
        if !has_body {
            report.errors.push(MISSING_BODY.to_string());
        }

        for tally in &tallies {
            if tally.closed < tally.opened {
                report
                    .errors
                    .push(format!("Unclosed <{}> tag(s).", tally.name));
            } else if tally.opened < tally.closed {
                report
                    .errors
                    .push(format!("Extra closing </{}> tag(s).", tally.name));
            }
        }
        report.errors.extend(misnested);

        if !DOCTYPE_REGEX.is_match(markup) {
            report.warnings.push(MISSING_DOCTYPE.to_string());
        }

        debug!(
            errors = report.errors.len(),
            warnings = report.warnings.len(),
            "validated markup"
        );
        report
    }
}

/// Validate with the default count-based balance check
pub fn validate(markup: &str) -> ValidationReport {
    StructuralValidator::default().validate(markup)
}
