//! Pure toolbar formatting operations.
//!
//! Each function inspects the buffer and selection and returns an [`Edit`]
//! describing the replacement; nothing here mutates the document.

use std::ops::Range;

use crate::error::{Error, Result};

use super::selection::Selection;

/// A single replacement plus the selection that follows it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edit {
    /// Byte range of the old text to replace.
    pub range: Range<usize>,
    pub replacement: String,
    /// Selection in the edited text.
    pub selection: Selection,
}

impl Edit {
    /// Replace `range` and select the inserted text.
    fn select_inserted(range: Range<usize>, replacement: String) -> Self {
        let start = range.start;
        let selection = Selection::new(start, start + replacement.len());
        Self {
            range,
            replacement,
            selection,
        }
    }
}

/// Reject selections past the end of `text` or inside a character.
fn check_selection(text: &str, selection: Selection) -> Result<()> {
    if selection.is_valid_for(text) {
        Ok(())
    } else {
        Err(Error::InvalidSelection {
            start: selection.start,
            end: selection.end,
            len: text.len(),
        })
    }
}

/// Byte range of the full line(s) touched by `selection`.
pub fn line_span(text: &str, selection: Selection) -> Result<Range<usize>> {
    check_selection(text, selection)?;
    let start = text[..selection.start].rfind('\n').map_or(0, |i| i + 1);
    let end = text[selection.end..]
        .find('\n')
        .map_or(text.len(), |i| selection.end + i);
    Ok(start..end)
}

/// Wrap the selection in `prefix`/`suffix`, or unwrap it if already wrapped.
///
/// An empty selection inserts `placeholder` between the delimiters and
/// selects just the placeholder.
pub fn wrap_inline(
    text: &str,
    selection: Selection,
    prefix: &str,
    suffix: &str,
    placeholder: &str,
) -> Result<Edit> {
    check_selection(text, selection)?;
    let selected = &text[selection.range()];

    if !selected.is_empty() {
        let before = selection
            .start
            .checked_sub(prefix.len())
            .and_then(|start| text.get(start..selection.start));
        let after = text.get(selection.end..selection.end + suffix.len());

        if before == Some(prefix) && after == Some(suffix) {
            let range = selection.start - prefix.len()..selection.end + suffix.len();
            return Ok(Edit::select_inserted(range, selected.to_string()));
        }
    }

    let inserted = if selected.is_empty() { placeholder } else { selected };
    let replacement = format!("{prefix}{inserted}{suffix}");

    if selected.is_empty() {
        let start = selection.start + prefix.len();
        Ok(Edit {
            range: selection.range(),
            replacement,
            selection: Selection::new(start, start + placeholder.len()),
        })
    } else {
        Ok(Edit::select_inserted(selection.range(), replacement))
    }
}

/// Toggle `prefix` at the start of the selected line(s).
///
/// A blank line receives `prefix + placeholder`.
pub fn toggle_line_prefix(
    text: &str,
    selection: Selection,
    prefix: &str,
    placeholder: &str,
) -> Result<Edit> {
    let span = line_span(text, selection)?;
    let line = &text[span.clone()];

    let replacement = match line.strip_prefix(prefix) {
        Some(rest) => rest.to_string(),
        None if line.trim().is_empty() => format!("{prefix}{placeholder}"),
        None => format!("{prefix}{line}"),
    };

    Ok(Edit::select_inserted(span, replacement))
}

/// Wrap the selected line(s) as a block, or strip an existing wrapping.
///
/// On a blank line inserts `prefix + (selection or placeholder) + suffix`.
/// A line already starting with the trimmed `prefix` (and ending with the
/// trimmed `suffix`, when there is one) has them removed. When the two
/// overlap on a short line, the text between them is kept, bounds swapped.
pub fn wrap_block(
    text: &str,
    selection: Selection,
    prefix: &str,
    suffix: &str,
    placeholder: &str,
) -> Result<Edit> {
    let span = line_span(text, selection)?;
    let line = &text[span.clone()];

    let replacement = if line.trim().is_empty() {
        let selected = &text[selection.range()];
        let inserted = if selected.is_empty() { placeholder } else { selected };
        format!("{prefix}{inserted}{suffix}")
    } else {
        let open = prefix.trim();
        let close = suffix.trim();
        if line.starts_with(open) && (suffix.is_empty() || line.ends_with(close)) {
            let (a, b) = (open.len(), line.len() - close.len());
            line.get(a.min(b)..a.max(b))
                .unwrap_or_default()
                .to_string()
        } else {
            format!("{prefix}{line}{suffix}")
        }
    };

    Ok(Edit::select_inserted(span, replacement))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn apply(text: &str, edit: &Edit) -> String {
        let mut out = text.to_string();
        out.replace_range(edit.range.clone(), &edit.replacement);
        out
    }

    #[test]
    fn test_line_span() {
        let text = "one\ntwo\nthree";
        assert_eq!(line_span(text, Selection::collapsed(5)).unwrap(), 4..7);
        assert_eq!(line_span(text, Selection::new(1, 9)).unwrap(), 0..13);
        assert_eq!(line_span(text, Selection::collapsed(0)).unwrap(), 0..3);
        assert_eq!(line_span(text, Selection::collapsed(13)).unwrap(), 8..13);
    }

    #[test]
    fn test_line_span_at_line_end() {
        // Cursor right before the newline stays on that line
        assert_eq!(line_span("ab\ncd", Selection::collapsed(2)).unwrap(), 0..2);
        // Cursor right after the newline is on the next line
        assert_eq!(line_span("ab\ncd", Selection::collapsed(3)).unwrap(), 3..5);
    }

    #[test]
    fn test_wrap_selection() {
        let text = "make this bold";
        let edit = wrap_inline(text, Selection::new(10, 14), "**", "**", "bold text").unwrap();
        let out = apply(text, &edit);
        assert_eq!(out, "make this **bold**");
        assert_eq!(&out[edit.selection.range()], "**bold**");
    }

    #[test]
    fn test_wrap_empty_selection_selects_placeholder() {
        let text = "ab";
        let edit = wrap_inline(text, Selection::collapsed(1), "*", "*", "italic text").unwrap();
        let out = apply(text, &edit);
        assert_eq!(out, "a*italic text*b");
        assert_eq!(&out[edit.selection.range()], "italic text");
    }

    #[test]
    fn test_unwrap_selection() {
        let text = "x **bold** y";
        let edit = wrap_inline(text, Selection::new(4, 8), "**", "**", "bold text").unwrap();
        let out = apply(text, &edit);
        assert_eq!(out, "x bold y");
        assert_eq!(&out[edit.selection.range()], "bold");
    }

    #[test]
    fn test_wrap_at_document_start_does_not_underflow() {
        let text = "bold**";
        let edit = wrap_inline(text, Selection::new(0, 4), "**", "**", "bold text").unwrap();
        assert_eq!(apply(text, &edit), "**bold****");
    }

    #[test]
    fn test_toggle_line_prefix() {
        let text = "intro\nTitle\nmore";
        let edit = toggle_line_prefix(text, Selection::collapsed(8), "# ", "Heading Text").unwrap();
        let out = apply(text, &edit);
        assert_eq!(out, "intro\n# Title\nmore");
        assert_eq!(&out[edit.selection.range()], "# Title");

        let edit = toggle_line_prefix(&out, Selection::collapsed(8), "# ", "Heading Text").unwrap();
        assert_eq!(apply(&out, &edit), text);
    }

    #[test]
    fn test_toggle_blank_line_uses_placeholder() {
        let edit = toggle_line_prefix("", Selection::collapsed(0), "> ", "Quoted text").unwrap();
        assert_eq!(edit.replacement, "> Quoted text");
    }

    #[test]
    fn test_toggle_different_heading_level_stacks() {
        let edit = toggle_line_prefix("# Title", Selection::collapsed(0), "## ", "Heading Text").unwrap();
        assert_eq!(edit.replacement, "## # Title");
    }

    #[test]
    fn test_wrap_block_on_blank_line() {
        let text = "a\n\nb";
        let edit = wrap_block(text, Selection::collapsed(2), "@[web-video](abc)", "", "").unwrap();
        assert_eq!(apply(text, &edit), "a\n@[web-video](abc)\nb");
    }

    #[test]
    fn test_wrap_block_prepends_to_line() {
        let edit = wrap_block("caption", Selection::collapsed(3), "@[web-video](abc)", "", "").unwrap();
        assert_eq!(edit.replacement, "@[web-video](abc)caption");
    }

    #[test]
    fn test_wrap_block_strips_existing() {
        let edit = wrap_block(
            "@[web-video](abc)caption",
            Selection::collapsed(0),
            "@[web-video](abc)",
            "",
            "",
        ).unwrap();
        assert_eq!(edit.replacement, "caption");
    }

    #[test]
    fn test_wrap_block_overlapping_delimiters_swap_bounds() {
        // Prefix and suffix overlap on a short line: the middle survives
        let edit = wrap_block("[x]", Selection::collapsed(0), "[x", "x]", "").unwrap();
        assert_eq!(edit.replacement, "x");
    }

    #[test]
    fn test_invalid_selection_rejected() {
        let past_end = Selection::new(0, 9);
        assert!(matches!(
            line_span("ab", past_end),
            Err(Error::InvalidSelection { start: 0, end: 9, len: 2 })
        ));
        assert!(toggle_line_prefix("ab", past_end, "# ", "x").is_err());
        assert!(wrap_block("ab", past_end, "@", "", "").is_err());

        // Inside the two-byte 'é'
        let split_char = Selection::new(0, 1);
        assert!(matches!(
            wrap_inline("é", split_char, "*", "*", "x"),
            Err(Error::InvalidSelection { start: 0, end: 1, len: 2 })
        ));
    }
}
