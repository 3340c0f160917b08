//! Tag-level lexing of markup text
//!
//! The scanner recognises just enough of HTML to answer structural questions:
//! the name of every `<name` / `</name` token, in order, in a single forward pass.
//! It never builds a tree and never fails; anything that does not look like a
//! tag start is skipped.

/// Elements that cannot have children and never take a closing tag.
pub const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "param", "source",
    "track", "wbr",
];

/// Check whether `name` is a void element (case-insensitive)
pub fn is_void_element(name: &str) -> bool {
    VOID_ELEMENTS
        .iter()
        .any(|void| void.eq_ignore_ascii_case(name))
}

/// A single tag start found in markup text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagToken {
    /// Lowercased tag name
    pub name: String,
    /// `true` for `</name`
    pub is_closing: bool,
    /// Byte offset of the `<`
    pub offset: usize,
    /// Opening tag terminated by `/>` within the scanned text
    pub self_closing: bool,
}

impl TagToken {
    pub fn is_void(&self) -> bool {
        is_void_element(&self.name)
    }

    /// Whether this token opens or closes an element that can hold children.
    pub fn affects_nesting(&self) -> bool {
        !self.is_void() && !self.self_closing
    }
}

/// Iterator over the tag tokens of a text, in order of appearance
#[derive(Debug, Clone)]
pub struct TagScanner<'a> {
    text: &'a str,
    pos: usize,
}

impl<'a> TagScanner<'a> {
    pub fn new(text: &'a str) -> Self {
        Self { text, pos: 0 }
    }
}

impl Iterator for TagScanner<'_> {
    type Item = TagToken;

    fn next(&mut self) -> Option<TagToken> {
        let bytes = self.text.as_bytes();

        while self.pos < bytes.len() {
            let lt = self.pos + bytes[self.pos..].iter().position(|&b| b == b'<')?;

            if bytes[lt..].starts_with(b"<!--") {
                match self.text[lt + 4..].find("-->") {
                    Some(end) => {
                        self.pos = lt + 4 + end + 3;
                        continue;
                    }
                    None => {
                        self.pos = bytes.len();
                        return None;
                    }
                }
            }

            let mut cursor = lt + 1;
            let is_closing = bytes.get(cursor) == Some(&b'/');
            if is_closing {
                cursor += 1;
            }

            let name_start = cursor;
            if !bytes.get(cursor).is_some_and(u8::is_ascii_alphabetic) {
                self.pos = lt + 1;
                continue;
            }
            while bytes
                .get(cursor)
                .is_some_and(|b| b.is_ascii_alphanumeric() || *b == b'-')
            {
                cursor += 1;
            }

            let name = self.text[name_start..cursor].to_ascii_lowercase();
            let self_closing = !is_closing && ends_self_closing(bytes, cursor);
            self.pos = cursor;

            return Some(TagToken {
                name,
                is_closing,
                offset: lt,
                self_closing,
            });
        }

        None
    }
}

/// Scan all tag tokens of `text` in order of appearance
pub fn scan_tags(text: &str) -> TagScanner<'_> {
    TagScanner::new(text)
}

/// Look ahead from the end of a tag name for the terminating `>` and report
/// whether it is written as `/>`. Quoted attribute values are skipped; a new
/// `<` before any `>` means the tag is unterminated.
fn ends_self_closing(bytes: &[u8], from: usize) -> bool {
    let mut quote: Option<u8> = None;

    for i in from..bytes.len() {
        let b = bytes[i];
        match quote {
            Some(q) => {
                if b == q {
                    quote = None;
                }
            }
            None => match b {
                b'"' | b'\'' => quote = Some(b),
                b'>' => return i > from && bytes[i - 1] == b'/',
                b'<' => return false,
                _ => {}
            },
        }
    }

    false
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(text: &str) -> Vec<(String, bool)> {
        scan_tags(text).map(|t| (t.name, t.is_closing)).collect()
    }

    #[test]
    fn test_scan_open_and_close_tokens() {
        let tokens = names("<div><span>hi</span></div>");
        assert_eq!(
            tokens,
            vec![
                ("div".to_string(), false),
                ("span".to_string(), false),
                ("span".to_string(), true),
                ("div".to_string(), true),
            ]
        );
    }

    #[test]
    fn test_scan_records_offsets() {
        let offsets: Vec<usize> = scan_tags("ab<p>c</p>").map(|t| t.offset).collect();
        assert_eq!(offsets, vec![2, 6]);
    }

    #[test]
    fn test_scan_lowercases_names() {
        assert_eq!(names("<DIV></Div>")[0].0, "div");
        assert_eq!(names("<DIV></Div>")[1].0, "div");
    }

    #[test]
    fn test_scan_skips_comments_and_doctype() {
        let tokens = names("<!DOCTYPE html><!-- <p> --><b>");
        assert_eq!(tokens, vec![("b".to_string(), false)]);
    }

    #[test]
    fn test_scan_unterminated_comment_hides_rest() {
        assert!(names("<!-- <div> <span>").is_empty());
    }

    #[test]
    fn test_scan_ignores_stray_less_than() {
        assert!(names("a < b and 3<4").is_empty());
    }

    #[test]
    fn test_scan_custom_element_names() {
        assert_eq!(names("<my-widget>")[0].0, "my-widget");
    }

    #[test]
    fn test_self_closing_detection() {
        let tokens: Vec<TagToken> = scan_tags(r#"<icon name="a/b" /><div title="x>y"></div>"#).collect();
        assert!(tokens[0].self_closing);
        assert!(!tokens[1].self_closing);
    }

    #[test]
    fn test_unterminated_tag_is_not_self_closing() {
        let tokens: Vec<TagToken> = scan_tags("<div /").collect();
        assert!(!tokens[0].self_closing);
    }

    #[test]
    fn test_void_elements_do_not_affect_nesting() {
        let tokens: Vec<TagToken> = scan_tags("<br><IMG src=x><p>").collect();
        assert!(!tokens[0].affects_nesting());
        assert!(!tokens[1].affects_nesting());
        assert!(tokens[2].affects_nesting());
    }

    #[test]
    fn test_is_void_element_case_insensitive() {
        assert!(is_void_element("BR"));
        assert!(is_void_element("wbr"));
        assert!(!is_void_element("div"));
    }
}
