//! Pure HTML escaping utilities.
//!
//! Used to show rendered HTML as literal text in the raw view.

/// Escape characters that HTML would interpret as markup.
///
/// Escapes:
/// - Ampersand: `&amp;`
/// - Tags: `&lt;`, `&gt;`
/// - Attribute quotes: `&quot;`, `&#39;`
///
/// # Examples
///
/// ```
/// use markpad::markdown::escape_html;
///
/// assert_eq!(escape_html("<p>a & b</p>"), "&lt;p&gt;a &amp; b&lt;/p&gt;");
/// assert_eq!(escape_html("plain"), "plain");
/// ```
pub fn escape_html(text: &str) -> String {
    let mut result = String::with_capacity(text.len() + text.len() / 4);

    for c in text.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&#39;"),
            _ => result.push(c),
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_ampersand() {
        assert_eq!(escape_html("a&b"), "a&amp;b");
        // Already-escaped entities are escaped again
        assert_eq!(escape_html("&lt;"), "&amp;lt;");
    }

    #[test]
    fn test_escape_tags() {
        assert_eq!(escape_html("<h1>x</h1>"), "&lt;h1&gt;x&lt;/h1&gt;");
    }

    #[test]
    fn test_escape_quotes() {
        assert_eq!(
            escape_html(r#"<a href="x" title='y'>"#),
            "&lt;a href=&quot;x&quot; title=&#39;y&#39;&gt;"
        );
    }

    #[test]
    fn test_escape_preserves_newlines_and_unicode() {
        assert_eq!(escape_html("é\n→"), "é\n→");
    }
}
