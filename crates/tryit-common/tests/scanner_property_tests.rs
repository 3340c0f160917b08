/// Property-based tests for the tag scanner and caret clamping
use proptest::prelude::*;
use tryit_common::{clamp_caret, clamp_span, scan_tags};

proptest! {
    /// Property: every token points at a `<` and offsets strictly increase
    #[test]
    fn prop_token_offsets_point_at_open_bracket(text in "[<>/a-zA-Z! \"'-]{0,80}") {
        let mut previous: Option<usize> = None;
        for token in scan_tags(&text) {
            prop_assert_eq!(text.as_bytes()[token.offset], b'<');
            prop_assert!(previous.map_or(true, |p| token.offset > p));
            prop_assert_eq!(token.name.clone(), token.name.to_ascii_lowercase());
            prop_assert!(!token.name.is_empty());
            previous = Some(token.offset);
        }
    }

    /// Property: a clamped caret is always a valid slice boundary
    #[test]
    fn prop_clamped_caret_is_char_boundary(text in "\\PC{0,20}", caret in 0usize..100) {
        let clamped = clamp_caret(&text, caret);
        prop_assert!(clamped <= text.len());
        prop_assert!(text.is_char_boundary(clamped));
    }

    /// Property: clamped spans are ordered and sliceable
    #[test]
    fn prop_clamped_span_is_sliceable(text in "\\PC{0,20}", start in 0usize..100, end in 0usize..100) {
        let (start, end) = clamp_span(&text, start, end);
        prop_assert!(start <= end);
        prop_assert!(text.get(start..end).is_some());
    }
}
