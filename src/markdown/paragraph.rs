//! Paragraph wrapping, the last step of the pipeline.

/// Tag prefixes of lines that already hold a block element.
const BLOCK_PREFIXES: &[&str] = &["<h", "<ul", "<ol", "<block", "<pre"];

/// Check whether a line already starts with a block-level tag.
pub fn is_block_line(line: &str) -> bool {
    BLOCK_PREFIXES.iter().any(|prefix| line.starts_with(prefix))
}

/// Trim whitespace and U+FEFF from both ends, the set a browser's
/// `String.prototype.trim` removes.
pub(crate) fn trim_blank(s: &str) -> &str {
    s.trim_matches(|c: char| c.is_whitespace() || c == '\u{feff}')
}

/// Wrap every bare line in `<p>`.
///
/// Whitespace-only lines become empty lines, block lines pass through, and
/// any empty `<p></p>` left behind is removed.
pub fn wrap_paragraphs(text: &str) -> String {
    let mut result = String::with_capacity(text.len() + text.len() / 4);

    for (i, line) in text.split('\n').enumerate() {
        if i > 0 {
            result.push('\n');
        }
        if trim_blank(line).is_empty() {
            continue;
        }
        if is_block_line(line) {
            result.push_str(line);
        } else {
            result.push_str("<p>");
            result.push_str(line);
            result.push_str("</p>");
        }
    }

    result.replace("<p></p>", "")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bare_lines_wrapped() {
        assert_eq!(wrap_paragraphs("a\nb"), "<p>a</p>\n<p>b</p>");
    }

    #[test]
    fn test_block_lines_untouched() {
        assert_eq!(wrap_paragraphs("<h1>x</h1>"), "<h1>x</h1>");
        assert_eq!(wrap_paragraphs("<blockquote>q</blockquote>"), "<blockquote>q</blockquote>");
        assert_eq!(wrap_paragraphs("<pre><code>"), "<pre><code>");
        // Only the listed tags count as blocks
        assert_eq!(wrap_paragraphs("<div>x</div>"), "<p><div>x</div></p>");
    }

    #[test]
    fn test_blank_lines_kept_empty() {
        assert_eq!(wrap_paragraphs("a\n   \nb"), "<p>a</p>\n\n<p>b</p>");
    }

    #[test]
    fn test_byte_order_mark_line_is_blank() {
        assert_eq!(wrap_paragraphs("a\n\u{feff}\nb"), "<p>a</p>\n\n<p>b</p>");
        assert_eq!(trim_blank("\u{feff} x \u{feff}"), "x");
    }

    #[test]
    fn test_empty_paragraph_artifacts_removed() {
        assert_eq!(wrap_paragraphs("x<p></p>y"), "<p>xy</p>");
    }
}
