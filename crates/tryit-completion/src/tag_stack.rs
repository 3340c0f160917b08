//! Open-element stack reconstruction up to the caret

use tryit_common::{clamp_caret, scan_tags};

/// Replay every tag token in `text[..caret]` and return the elements still
/// open at the caret, outermost first and innermost last.
///
/// Void and self-closing elements never affect nesting. A closing tag removes
/// the most recent open element of the same name, even when it is not the
/// innermost one; a closing tag with no matching open element is ignored.
pub fn resolve_open_stack(text: &str, caret: usize) -> Vec<String> {
    let caret = clamp_caret(text, caret);
    let mut stack: Vec<String> = Vec::new();

    for token in scan_tags(&text[..caret]) {
        if !token.affects_nesting() {
            continue;
        }
        if token.is_closing {
            if let Some(index) = stack.iter().rposition(|open| *open == token.name) {
                stack.remove(index);
            }
        } else {
            stack.push(token.name);
        }
    }

    stack
}

/// The innermost element open at the caret
pub fn innermost_open_tag(text: &str, caret: usize) -> Option<String> {
    resolve_open_stack(text, caret).pop()
}
