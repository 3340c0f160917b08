//! Caret context classification
//!
//! Decides what kind of token the caret is inside without tokenizing the
//! whole buffer. Every check is a bounded backward scan anchored on the
//! nearest structural delimiter (`<`, `>` for markup; `;`, `{`, `}` for style
//! sheets), so a call costs time proportional to the current tag or
//! declaration, not the document.
//!
//! Classification never fails: truncated tags, stray `<` and unmatched quotes
//! all resolve to [`CaretContext::None`].

use tracing::trace;
use tryit_common::clamp_caret;

use crate::mode::EditorMode;
use crate::types::CaretContext;

/// Classify the caret position of `text` for the given editor mode
pub fn classify(text: &str, caret: usize, mode: EditorMode) -> CaretContext {
    let caret = clamp_caret(text, caret);
    let context = match mode {
        EditorMode::Markup => classify_markup(text, caret),
        EditorMode::Style => classify_style(text, caret),
    };
    trace!(%mode, caret, kind = context.kind_label(), "classified caret");
    context
}

fn classify_markup(text: &str, caret: usize) -> CaretContext {
    let before = &text[..caret];

    let Some(lt) = before.rfind('<') else {
        return CaretContext::None;
    };
    if before.rfind('>').is_some_and(|gt| gt > lt) {
        return CaretContext::None;
    }

    let is_closing = before[lt..].starts_with("</");
    let name_start = lt + if is_closing { 2 } else { 1 };
    let after = &before[name_start..];

    match after.find(|c: char| c.is_whitespace() || c == '/' || c == '>') {
        None => CaretContext::TagName {
            prefix: after.to_string(),
            replace_start: name_start,
            replace_end: caret,
            is_closing,
        },
        // `< ` or `<//` is not a tag
        Some(0) => CaretContext::None,
        Some(_) if is_closing => CaretContext::None,
        Some(name_len) => {
            let region_start = name_start + name_len;
            let region = &before[region_start..];
            if inside_quoted_value(region) {
                return CaretContext::None;
            }
            let start = region_start + attribute_prefix_start(region);
            CaretContext::AttributeName {
                prefix: before[start..].to_string(),
                replace_start: start,
                replace_end: caret,
            }
        }
    }
}

fn classify_style(text: &str, caret: usize) -> CaretContext {
    let before = &text[..caret];

    let declaration_start = before
        .rfind(|c: char| c == ';' || c == '{')
        .map_or(0, |i| i + 1);
    let declaration = &before[declaration_start..];

    if inside_block_comment(before) {
        return CaretContext::None;
    }
    if declaration.contains(':') {
        return CaretContext::None;
    }

    let in_rule_body = match (before.rfind('{'), before.rfind('}')) {
        (Some(open), Some(close)) => open > close,
        (Some(_), None) => true,
        (None, _) => false,
    };
    if !in_rule_body {
        return CaretContext::None;
    }

    let start = before
        .trim_end_matches(|c: char| c.is_ascii_alphabetic() || c == '-')
        .len();
    if start == caret {
        return CaretContext::None;
    }

    CaretContext::StyleProperty {
        prefix: before[start..].to_string(),
        replace_start: start,
        replace_end: caret,
    }
}

fn is_attribute_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | ':' | '.')
}

fn is_attribute_start_char(c: char) -> bool {
    c.is_ascii_alphabetic() || matches!(c, '_' | ':')
}

/// Byte offset within `region` where the longest trailing
/// `[A-Za-z_:][-A-Za-z0-9_:.]*` run begins; `region.len()` when there is none.
fn attribute_prefix_start(region: &str) -> usize {
    let run_start = region.len()
        - region
            .chars()
            .rev()
            .take_while(|c| is_attribute_char(*c))
            .map(char::len_utf8)
            .sum::<usize>();

    match region[run_start..].find(is_attribute_start_char) {
        Some(offset) => run_start + offset,
        None => region.len(),
    }
}

/// Whether the attribute region ends inside an unterminated quoted value
fn inside_quoted_value(region: &str) -> bool {
    let mut quote: Option<char> = None;
    for c in region.chars() {
        match quote {
            Some(q) if c == q => quote = None,
            Some(_) => {}
            None if c == '"' || c == '\'' => quote = Some(c),
            None => {}
        }
    }
    quote.is_some()
}

/// Whether a `/*` opened before the caret is still unterminated
fn inside_block_comment(before: &str) -> bool {
    match before.rfind("/*") {
        Some(open) => !before[open + 2..].contains("*/"),
        None => false,
    }
}
