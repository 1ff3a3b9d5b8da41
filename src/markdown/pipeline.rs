//! Markdown → HTML rewrite pipeline.
//!
//! Rendering is a fixed, ordered list of whole-document rewrites. Each rule
//! reads the complete output of the rule before it; there is no tokenizer
//! and no tree. The order is part of the contract: headings check `## `
//! before `# `, bold runs before italic, and links run after italic so the
//! `_blank` target survives.

use std::sync::LazyLock;

use regex_lite::Regex;

use super::paragraph::{trim_blank, wrap_paragraphs};
use crate::util::normalize_newlines;
use super::patterns::*;

/// Default base URL for `@[web-video](ID)` embeds.
pub const DEFAULT_VIDEO_EMBED_URL: &str = "https://www.youtube.com/embed/";

/// Renderer settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderConfig {
    /// Base URL the web-video ID is appended to.
    pub video_embed_url: String,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            video_embed_url: DEFAULT_VIDEO_EMBED_URL.to_string(),
        }
    }
}

/// How a rule rewrites the document.
#[derive(Debug, Clone)]
pub enum Rewrite {
    /// Replace every match of `pattern` with `replacement` (`${n}` expands captures).
    Pattern {
        pattern: &'static Regex,
        replacement: String,
    },
    /// Replace every occurrence of a literal string.
    Literal { from: &'static str, to: &'static str },
    /// Wrap remaining bare lines in `<p>`.
    Paragraphs,
}

/// A named step of the pipeline.
#[derive(Debug, Clone)]
pub struct Rule {
    pub name: &'static str,
    pub rewrite: Rewrite,
}

impl Rule {
    fn pattern(name: &'static str, pattern: &'static LazyLock<Regex>, replacement: &str) -> Self {
        Self {
            name,
            rewrite: Rewrite::Pattern {
                pattern: LazyLock::force(pattern),
                replacement: replacement.to_string(),
            },
        }
    }

    fn literal(name: &'static str, from: &'static str, to: &'static str) -> Self {
        Self {
            name,
            rewrite: Rewrite::Literal { from, to },
        }
    }

    /// Apply this rule to the whole document.
    pub fn apply(&self, text: &str) -> String {
        match &self.rewrite {
            Rewrite::Pattern {
                pattern,
                replacement,
            } => pattern
                .replace_all(text, replacement.as_str())
                .into_owned(),
            Rewrite::Literal { from, to } => text.replace(*from, to),
            Rewrite::Paragraphs => wrap_paragraphs(text),
        }
    }
}

/// The ordered rule list.
#[derive(Debug, Clone)]
pub struct Pipeline {
    rules: Vec<Rule>,
}

impl Pipeline {
    /// Build the pipeline for a configuration.
    pub fn new(config: &RenderConfig) -> Self {
        let web_video = format!(
            r#"<div class="video-container"><iframe src="{}${{1}}" frameborder="0" allowfullscreen></iframe></div>"#,
            escape_replacement(&config.video_embed_url)
        );

        let rules = vec![
            Rule::pattern("blockquote", &BLOCKQUOTE_RE, "<blockquote>${1}</blockquote>"),
            Rule::pattern("web-video", &WEB_VIDEO_RE, &web_video),
            Rule::pattern(
                "local-video",
                &LOCAL_VIDEO_RE,
                r#"<video controls src="${1}" style="width: 100%"></video>"#,
            ),
            // `## ` must run before `# `
            Rule::pattern("h2", &H2_RE, "<h2>${1}</h2>"),
            Rule::pattern("h1", &H1_RE, "<h1>${1}</h1>"),
            Rule::pattern("h3", &H3_RE, "<h3>${1}</h3>"),
            Rule::pattern("h4", &H4_RE, "<h4>${1}</h4>"),
            Rule::pattern("ul-star", &STAR_ITEM_RE, "<ul><li>${1}</li></ul>"),
            Rule::pattern("ul-dash", &DASH_ITEM_RE, "<ul><li>${1}</li></ul>"),
            Rule::literal("ul-merge", "</ul>\n<ul>", ""),
            Rule::pattern("ol", &ORDERED_ITEM_RE, "<ol><li>${1}</li></ol>"),
            Rule::literal("ol-merge", "</ol>\n<ol>", ""),
            Rule::pattern("code-block", &CODE_FENCE_RE, "<pre><code>${1}</code></pre>"),
            Rule::pattern("inline-code", &INLINE_CODE_RE, "<code>${1}</code>"),
            // Bold before italic, or `**` splits into two empty emphasis spans
            Rule::pattern("bold-star", &BOLD_STAR_RE, "<strong>${1}</strong>"),
            Rule::pattern("bold-underscore", &BOLD_UNDERSCORE_RE, "<strong>${1}</strong>"),
            Rule::pattern("italic-star", &ITALIC_STAR_RE, "<em>${1}</em>"),
            Rule::pattern("italic-underscore", &ITALIC_UNDERSCORE_RE, "<em>${1}</em>"),
            Rule::pattern("strikethrough", &STRIKE_RE, "<del>${1}</del>"),
            Rule::pattern("underline", &UNDERLINE_RE, "<u>${1}</u>"),
            Rule::pattern(
                "link",
                &LINK_RE,
                r#"<a href="${2}" target="_blank">${1}</a>"#,
            ),
            Rule {
                name: "paragraphs",
                rewrite: Rewrite::Paragraphs,
            },
        ];

        Self { rules }
    }

    /// The rules in application order.
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Run every rule over `markdown`, each on the previous rule's output.
    ///
    /// `\r\n` and lone `\r` are normalized to `\n` first.
    pub fn run(&self, markdown: &str) -> String {
        let mut html = normalize_newlines(markdown).into_owned();
        for rule in &self.rules {
            html = rule.apply(&html);
            tracing::trace!(rule = rule.name, len = html.len(), "applied rewrite rule");
        }
        trim_blank(&html).to_string()
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new(&RenderConfig::default())
    }
}

static DEFAULT_PIPELINE: LazyLock<Pipeline> = LazyLock::new(Pipeline::default);

/// Render Markdown to HTML with the default configuration.
///
/// Total over all inputs: malformed Markdown degrades to partially
/// converted or paragraph-wrapped text. Line breaks are `\n`, `\r\n` or a
/// lone `\r`; U+2028 and U+2029 are ordinary characters.
///
/// # Examples
///
/// ```
/// use markpad::render;
///
/// assert_eq!(render("## Title"), "<h2>Title</h2>");
/// assert_eq!(render("* a\n* b"), "<ul><li>a</li><li>b</li></ul>");
/// assert_eq!(render(""), "");
/// ```
pub fn render(markdown: &str) -> String {
    DEFAULT_PIPELINE.run(markdown)
}

/// Render Markdown to HTML with a custom configuration.
pub fn render_with(markdown: &str, config: &RenderConfig) -> String {
    if *config == RenderConfig::default() {
        return render(markdown);
    }
    Pipeline::new(config).run(markdown)
}

/// Escape `$` so a literal string survives replacement expansion.
fn escape_replacement(s: &str) -> String {
    s.replace('$', "$$")
}
