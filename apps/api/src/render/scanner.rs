//! Template scanner — splits a template into literal and placeholder segments.
//!
//! The substitution pipeline makes exactly one pass over the template: the
//! scanner finds every token matching `{[A-Z0-9_]+}` up front, and the
//! resolver decides what each one becomes. Nothing else in the pipeline
//! re-reads the template, so there is no replacement-order sensitivity.

/// One piece of a scanned template.
#[derive(Debug, Clone, PartialEq)]
pub enum Segment<'a> {
    /// Verbatim template text, emitted unchanged.
    Literal(&'a str),
    /// A placeholder token, without the surrounding braces.
    Token(&'a str),
}

/// Splits `template` into segments. Anything that does not match the
/// placeholder syntax exactly (unclosed brace, lowercase letters, empty
/// braces) stays literal.
pub fn scan(template: &str) -> Vec<Segment<'_>> {
    let bytes = template.as_bytes();
    let mut segments = Vec::new();
    let mut lit_start = 0;
    let mut i = 0;

    while i < bytes.len() {
        if bytes[i] == b'{' {
            if let Some(close) = token_close(bytes, i) {
                if lit_start < i {
                    segments.push(Segment::Literal(&template[lit_start..i]));
                }
                segments.push(Segment::Token(&template[i + 1..close]));
                i = close + 1;
                lit_start = i;
                continue;
            }
        }
        i += 1;
    }

    if lit_start < bytes.len() {
        segments.push(Segment::Literal(&template[lit_start..]));
    }
    segments
}

/// Returns the index of the closing `}` if the bytes at `open` start a
/// well-formed token: `{`, one or more of `[A-Z0-9_]`, `}`.
fn token_close(bytes: &[u8], open: usize) -> Option<usize> {
    let mut j = open + 1;
    while j < bytes.len() && matches!(bytes[j], b'A'..=b'Z' | b'0'..=b'9' | b'_') {
        j += 1;
    }
    (j > open + 1 && j < bytes.len() && bytes[j] == b'}').then_some(j)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text_is_one_literal() {
        let segs = scan("hello world");
        assert_eq!(segs, vec![Segment::Literal("hello world")]);
    }

    #[test]
    fn test_single_token() {
        let segs = scan("{FULL_NAME}");
        assert_eq!(segs, vec![Segment::Token("FULL_NAME")]);
    }

    #[test]
    fn test_token_between_literals() {
        let segs = scan("<h1>{FULL_NAME}</h1>");
        assert_eq!(
            segs,
            vec![
                Segment::Literal("<h1>"),
                Segment::Token("FULL_NAME"),
                Segment::Literal("</h1>"),
            ]
        );
    }

    #[test]
    fn test_adjacent_tokens() {
        let segs = scan("{EMAIL}{PHONE}");
        assert_eq!(segs, vec![Segment::Token("EMAIL"), Segment::Token("PHONE")]);
    }

    #[test]
    fn test_indexed_token_scans_whole_name() {
        let segs = scan("{JOB_TITLE_1}");
        assert_eq!(segs, vec![Segment::Token("JOB_TITLE_1")]);
    }

    #[test]
    fn test_lowercase_braces_stay_literal() {
        let segs = scan("css uses {display: flex} blocks");
        assert_eq!(segs, vec![Segment::Literal("css uses {display: flex} blocks")]);
    }

    #[test]
    fn test_empty_braces_stay_literal() {
        let segs = scan("a {} b");
        assert_eq!(segs, vec![Segment::Literal("a {} b")]);
    }

    #[test]
    fn test_unclosed_brace_stays_literal() {
        let segs = scan("broken {FULL_NAME and more");
        assert_eq!(segs, vec![Segment::Literal("broken {FULL_NAME and more")]);
    }

    #[test]
    fn test_brace_before_token_stays_literal() {
        let segs = scan("{{SUMMARY}");
        assert_eq!(
            segs,
            vec![Segment::Literal("{"), Segment::Token("SUMMARY")]
        );
    }

    #[test]
    fn test_empty_template_yields_no_segments() {
        assert!(scan("").is_empty());
    }
}
