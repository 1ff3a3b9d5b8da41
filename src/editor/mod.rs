//! Document model for a live-preview Markdown editor.
//!
//! An [`Editor`] owns the Markdown buffer and the current selection. The
//! rendered HTML is a projection of the buffer and is recomputed
//! synchronously after every mutation, so [`Editor::html`] never lags
//! behind [`Editor::text`].
//!
//! ```
//! use markpad::{Editor, ToolbarAction};
//!
//! let mut editor = Editor::from_text("Title");
//! editor.select(0, 0).unwrap();
//! editor.apply(&ToolbarAction::Heading(1)).unwrap();
//!
//! assert_eq!(editor.text(), "# Title");
//! assert_eq!(editor.html(), "<h1>Title</h1>");
//! ```

mod action;
mod file;
mod format;
mod selection;

pub use action::ToolbarAction;
pub use file::DEFAULT_FILE_NAME;
pub use format::{Edit, line_span, toggle_line_prefix, wrap_block, wrap_inline};
pub use selection::Selection;

use crate::error::{Error, Result};
use crate::markdown::{RenderConfig, escape_html, render_with};
use crate::video::{extract_video_id, local_video_token, web_video_token};

use action::Format;

/// A Markdown buffer with its selection and rendered preview.
#[derive(Debug, Clone)]
pub struct Editor {
    text: String,
    selection: Selection,
    config: RenderConfig,
    html: String,
}

impl Default for Editor {
    fn default() -> Self {
        Self::with_config(RenderConfig::default())
    }
}

impl Editor {
    /// Create an empty editor with the default render configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty editor with a custom render configuration.
    pub fn with_config(config: RenderConfig) -> Self {
        let mut editor = Self {
            text: String::new(),
            selection: Selection::default(),
            config,
            html: String::new(),
        };
        editor.refresh();
        editor
    }

    /// Create an editor holding `text`, with the cursor at the end.
    pub fn from_text(text: impl Into<String>) -> Self {
        let mut editor = Self::new();
        editor.set_text(text);
        editor
    }

    /// The Markdown source.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Replace the whole buffer and move the cursor to the end.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.selection = Selection::collapsed(self.text.len());
        self.refresh();
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    /// Change the render configuration and re-render.
    pub fn set_config(&mut self, config: RenderConfig) {
        self.config = config;
        self.refresh();
    }

    pub fn selection(&self) -> Selection {
        self.selection
    }

    /// Select the byte range between `anchor` and `head`.
    pub fn select(&mut self, anchor: usize, head: usize) -> Result<()> {
        let selection = Selection::new(anchor, head);
        if !selection.is_valid_for(&self.text) {
            return Err(Error::InvalidSelection {
                start: selection.start,
                end: selection.end,
                len: self.text.len(),
            });
        }
        self.selection = selection;
        Ok(())
    }

    pub fn selected_text(&self) -> &str {
        &self.text[self.selection.range()]
    }

    /// Rendered HTML, ready to inject into a preview (and to copy).
    pub fn html(&self) -> &str {
        &self.html
    }

    /// Rendered HTML escaped for display as literal text.
    pub fn raw_view(&self) -> String {
        escape_html(&self.html)
    }

    /// Replace the selection with typed text, leaving the cursor after it.
    pub fn insert(&mut self, text: &str) {
        let start = self.selection.start;
        self.text.replace_range(self.selection.range(), text);
        self.selection = Selection::collapsed(start + text.len());
        self.refresh();
    }

    /// Wrap or unwrap the selection in inline delimiters.
    pub fn wrap_inline(&mut self, prefix: &str, suffix: &str, placeholder: &str) -> Result<()> {
        let edit = wrap_inline(&self.text, self.selection, prefix, suffix, placeholder)?;
        self.apply_edit(edit);
        Ok(())
    }

    /// Toggle a prefix on the selected line.
    pub fn toggle_line_prefix(&mut self, prefix: &str, placeholder: &str) -> Result<()> {
        let edit = toggle_line_prefix(&self.text, self.selection, prefix, placeholder)?;
        self.apply_edit(edit);
        Ok(())
    }

    /// Wrap or unwrap the selected line as a block.
    pub fn wrap_block(&mut self, prefix: &str, suffix: &str, placeholder: &str) -> Result<()> {
        let edit = wrap_block(&self.text, self.selection, prefix, suffix, placeholder)?;
        self.apply_edit(edit);
        Ok(())
    }

    /// Run a toolbar action against the current selection.
    ///
    /// Link and video actions with an empty URL do nothing. A web-video URL
    /// that yields no ID fails with [`Error::EmptyVideoId`] and leaves the
    /// buffer untouched.
    pub fn apply(&mut self, action: &ToolbarAction) -> Result<()> {
        tracing::debug!(action = action.name(), selection = ?self.selection, "toolbar action");

        if let Some(format) = action.format() {
            return match format {
                Format::Inline {
                    prefix,
                    suffix,
                    placeholder,
                } => self.wrap_inline(prefix, suffix, placeholder),
                Format::Line {
                    prefix,
                    placeholder,
                } => self.toggle_line_prefix(prefix, placeholder),
            };
        }

        match action {
            ToolbarAction::Link(url) if !url.is_empty() => {
                self.wrap_inline("[", &format!("]({url})"), "link text")?;
            }
            ToolbarAction::WebVideo(url) if !url.is_empty() => {
                let id = extract_video_id(url);
                if id.is_empty() {
                    return Err(Error::EmptyVideoId(url.clone()));
                }
                self.wrap_block(&web_video_token(&id), "", "")?;
            }
            ToolbarAction::LocalVideo(url) if !url.is_empty() => {
                self.wrap_block(&local_video_token(url), "", "")?;
            }
            _ => {}
        }
        Ok(())
    }

    fn apply_edit(&mut self, edit: Edit) {
        self.text.replace_range(edit.range, &edit.replacement);
        self.selection = edit.selection;
        self.refresh();
    }

    fn refresh(&mut self) {
        self.html = render_with(&self.text, &self.config);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_empty() {
        let editor = Editor::new();
        assert_eq!(editor.text(), "");
        assert_eq!(editor.html(), "");
        assert!(editor.selection().is_empty());
    }

    #[test]
    fn test_set_text_rerenders() {
        let mut editor = Editor::new();
        editor.set_text("**hi**");
        assert_eq!(editor.html(), "<p><strong>hi</strong></p>");
        assert_eq!(editor.selection(), Selection::collapsed(6));
    }

    #[test]
    fn test_raw_view_escapes() {
        let editor = Editor::from_text("# T");
        assert_eq!(editor.raw_view(), "&lt;h1&gt;T&lt;/h1&gt;");
    }

    #[test]
    fn test_select_rejects_bad_ranges() {
        let mut editor = Editor::from_text("é");
        assert!(matches!(
            editor.select(0, 1),
            Err(Error::InvalidSelection { start: 0, end: 1, len: 2 })
        ));
        assert!(editor.select(0, 9).is_err());
        assert!(editor.select(2, 0).is_ok());
        assert_eq!(editor.selected_text(), "é");
    }

    #[test]
    fn test_insert_replaces_selection() {
        let mut editor = Editor::from_text("hello world");
        editor.select(6, 11).unwrap();
        editor.insert("there");
        assert_eq!(editor.text(), "hello there");
        assert_eq!(editor.selection(), Selection::collapsed(11));
    }

    #[test]
    fn test_bold_toggle() {
        let mut editor = Editor::from_text("word");
        editor.select(0, 4).unwrap();
        editor.apply(&ToolbarAction::Bold).unwrap();
        assert_eq!(editor.text(), "**word**");
        assert_eq!(editor.html(), "<p><strong>word</strong></p>");

        editor.select(2, 6).unwrap();
        editor.apply(&ToolbarAction::Bold).unwrap();
        assert_eq!(editor.text(), "word");
    }

    #[test]
    fn test_link_action() {
        let mut editor = Editor::new();
        editor.apply(&ToolbarAction::Link("http://x.com".into())).unwrap();
        assert_eq!(editor.text(), "[link text](http://x.com)");
        assert_eq!(editor.selected_text(), "link text");
        assert_eq!(
            editor.html(),
            r#"<p><a href="http://x.com" target="_blank">link text</a></p>"#
        );
    }

    #[test]
    fn test_empty_link_is_noop() {
        let mut editor = Editor::from_text("x");
        editor.apply(&ToolbarAction::Link(String::new())).unwrap();
        assert_eq!(editor.text(), "x");
    }

    #[test]
    fn test_web_video_action() {
        let mut editor = Editor::new();
        editor
            .apply(&ToolbarAction::WebVideo("https://youtu.be/abc123".into()))
            .unwrap();
        assert_eq!(editor.text(), "@[web-video](abc123)");
        assert!(editor.html().contains("embed/abc123"));
    }

    #[test]
    fn test_web_video_without_id_fails() {
        let mut editor = Editor::from_text("keep");
        let err = editor
            .apply(&ToolbarAction::WebVideo("https://youtu.be/".into()))
            .unwrap_err();
        assert!(matches!(err, Error::EmptyVideoId(_)));
        assert_eq!(editor.text(), "keep");
    }

    #[test]
    fn test_local_video_action() {
        let mut editor = Editor::new();
        editor
            .apply(&ToolbarAction::LocalVideo("blob:abc".into()))
            .unwrap();
        assert_eq!(editor.text(), "@[local-video](blob:abc)");
        assert!(editor.html().contains(r#"<video controls src="blob:abc""#));
    }

    #[test]
    fn test_custom_config_applies_to_preview() {
        let mut editor = Editor::from_text("@[web-video](abc)");
        editor.set_config(RenderConfig {
            video_embed_url: "https://player.example/".to_string(),
        });
        assert!(editor.html().contains(r#"src="https://player.example/abc""#));
    }
}
