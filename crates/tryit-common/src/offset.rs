// Caret and span normalisation

/// Clamp a caret to `text`: out-of-range offsets move to the end of the
/// buffer and offsets inside a multi-byte character move back to its start.
pub fn clamp_caret(text: &str, caret: usize) -> usize {
    let mut caret = caret.min(text.len());
    while !text.is_char_boundary(caret) {
        caret -= 1;
    }
    caret
}

/// Clamp a `[start, end)` span to `text`, keeping `start <= end`
pub fn clamp_span(text: &str, start: usize, end: usize) -> (usize, usize) {
    let end = clamp_caret(text, end);
    let start = clamp_caret(text, start.min(end));
    (start, end)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_caret_in_range() {
        assert_eq!(clamp_caret("hello", 3), 3);
    }

    #[test]
    fn test_clamp_caret_past_end() {
        assert_eq!(clamp_caret("hello", 42), 5);
    }

    #[test]
    fn test_clamp_caret_inside_multibyte_char() {
        // 'é' occupies bytes 1..3
        assert_eq!(clamp_caret("héllo", 2), 1);
    }

    #[test]
    fn test_clamp_span_orders_bounds() {
        assert_eq!(clamp_span("hello", 4, 2), (2, 2));
        assert_eq!(clamp_span("hello", 1, 99), (1, 5));
    }
}
