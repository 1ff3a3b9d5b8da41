//! Toolbar actions and their formatting parameters.

use crate::error::{Error, Result};

/// A toolbar button press.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToolbarAction {
    /// Heading level 1-4; other levels clamp into that range.
    Heading(u8),
    Bold,
    Italic,
    UnorderedList,
    OrderedList,
    Code,
    Blockquote,
    Strikethrough,
    Underline,
    /// Link to the given URL.
    Link(String),
    /// Embed a hosted video from a pasted URL.
    WebVideo(String),
    /// Embed a local video resource (e.g. a blob URL).
    LocalVideo(String),
}

/// How an action edits the buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Format {
    Inline {
        prefix: &'static str,
        suffix: &'static str,
        placeholder: &'static str,
    },
    Line {
        prefix: &'static str,
        placeholder: &'static str,
    },
}

const HEADING_PREFIXES: [&str; 4] = ["# ", "## ", "### ", "#### "];

impl ToolbarAction {
    /// Parse an action from its toolbar name.
    ///
    /// `link`, `video` and `local-video` take the URL as `arg`.
    ///
    /// # Examples
    ///
    /// ```
    /// use markpad::ToolbarAction;
    ///
    /// assert_eq!(ToolbarAction::parse("h2", None).unwrap(), ToolbarAction::Heading(2));
    /// assert_eq!(
    ///     ToolbarAction::parse("link", Some("http://x.com")).unwrap(),
    ///     ToolbarAction::Link("http://x.com".to_string())
    /// );
    /// assert!(ToolbarAction::parse("link", None).is_err());
    /// ```
    pub fn parse(name: &str, arg: Option<&str>) -> Result<Self> {
        let with_arg = |name: &'static str| {
            arg.map(str::to_string)
                .ok_or(Error::MissingArgument(name))
        };

        Ok(match name {
            "h1" => Self::Heading(1),
            "h2" => Self::Heading(2),
            "h3" => Self::Heading(3),
            "h4" => Self::Heading(4),
            "bold" => Self::Bold,
            "italic" => Self::Italic,
            "ul" => Self::UnorderedList,
            "ol" => Self::OrderedList,
            "code" => Self::Code,
            "blockquote" => Self::Blockquote,
            "strikethrough" => Self::Strikethrough,
            "underline" => Self::Underline,
            "link" => Self::Link(with_arg("link")?),
            "video" => Self::WebVideo(with_arg("video")?),
            "local-video" => Self::LocalVideo(with_arg("local-video")?),
            other => return Err(Error::UnknownAction(other.to_string())),
        })
    }

    /// The toolbar name this action parses from.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Heading(level) => match (*level).clamp(1, 4) {
                1 => "h1",
                2 => "h2",
                3 => "h3",
                _ => "h4",
            },
            Self::Bold => "bold",
            Self::Italic => "italic",
            Self::UnorderedList => "ul",
            Self::OrderedList => "ol",
            Self::Code => "code",
            Self::Blockquote => "blockquote",
            Self::Strikethrough => "strikethrough",
            Self::Underline => "underline",
            Self::Link(_) => "link",
            Self::WebVideo(_) => "video",
            Self::LocalVideo(_) => "local-video",
        }
    }

    /// Delimiters for the fixed-format actions; `None` for the ones that
    /// build their delimiters from an argument.
    pub(crate) fn format(&self) -> Option<Format> {
        let inline = |prefix, placeholder| Format::Inline {
            prefix,
            suffix: prefix,
            placeholder,
        };
        let line = |prefix, placeholder| Format::Line {
            prefix,
            placeholder,
        };

        Some(match self {
            Self::Heading(level) => {
                let idx = usize::from((*level).clamp(1, 4)) - 1;
                line(HEADING_PREFIXES[idx], "Heading Text")
            }
            Self::Bold => inline("**", "bold text"),
            Self::Italic => inline("*", "italic text"),
            Self::UnorderedList => line("* ", "List item"),
            Self::OrderedList => line("1. ", "List item"),
            Self::Code => inline("`", "code"),
            Self::Blockquote => line("> ", "Quoted text"),
            Self::Strikethrough => inline("~~", "strikethrough text"),
            Self::Underline => inline("++", "underlined text"),
            Self::Link(_) | Self::WebVideo(_) | Self::LocalVideo(_) => return None,
        })
    }
}
