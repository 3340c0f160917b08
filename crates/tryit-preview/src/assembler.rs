//! Sandbox document assembly

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref HEAD_CLOSE_REGEX: Regex = Regex::new(r"(?i)</head\s*>").unwrap();
    static ref STYLE_CLOSE_REGEX: Regex = Regex::new(r"(?i)</style").unwrap();
    static ref HTML_OPEN_REGEX: Regex = Regex::new(r"(?i)<html(\s[^>]*)?>").unwrap();
    static ref BODY_OPEN_REGEX: Regex = Regex::new(r"(?i)<body[\s>/]").unwrap();
    static ref LEADING_DOCTYPE_REGEX: Regex = Regex::new(r"(?i)^\s*<!doctype[^>]*>").unwrap();
}

/// Combine markup and a style sheet into one self-contained document.
///
/// The style sheet is wrapped in a `<style>` block placed before the first
/// `</head>`. Without a head it goes right after the `<html>` start tag, else
/// right before `<body`, else after a leading doctype, and only as a last
/// resort ahead of the markup, so a doctype always stays first. A
/// `</style` sequence inside the style sheet is escaped so it cannot end the
/// block early. A blank style sheet leaves the markup untouched.
///
/// The output depends only on the two inputs.
pub fn assemble(markup: &str, style: &str) -> String {
    if style.trim().is_empty() {
        return markup.to_string();
    }

    let style = STYLE_CLOSE_REGEX.replace_all(style, r"<\/style");
    let block = format!("<style>\n{}\n</style>\n", style);

    let at = style_insertion_point(markup);
    let mut document = String::with_capacity(markup.len() + block.len());
    document.push_str(&markup[..at]);
    document.push_str(&block);
    document.push_str(&markup[at..]);
    document
}

/// Byte offset in `markup` where the style block goes
fn style_insertion_point(markup: &str) -> usize {
    if let Some(head_close) = HEAD_CLOSE_REGEX.find(markup) {
        return head_close.start();
    }
    if let Some(html_open) = HTML_OPEN_REGEX.find(markup) {
        return html_open.end();
    }
    if let Some(body_open) = BODY_OPEN_REGEX.find(markup) {
        return body_open.start();
    }
    LEADING_DOCTYPE_REGEX
        .find(markup)
        .map_or(0, |doctype| doctype.end())
}
