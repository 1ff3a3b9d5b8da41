//! Cached regex patterns for the rewrite pipeline.
//!
//! Uses LazyLock to compile patterns once on first use, so a render per
//! keystroke never pays for compilation.

use regex_lite::Regex;
use std::sync::LazyLock;

// === Block patterns (line-anchored) ===

/// Matches `> quote` lines
pub static BLOCKQUOTE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^> (.*)$").unwrap());

/// Matches `## heading` lines
pub static H2_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?m)^## (.*)$").unwrap());

/// Matches `# heading` lines
pub static H1_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?m)^# (.*)$").unwrap());

/// Matches `### heading` lines
pub static H3_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?m)^### (.*)$").unwrap());

/// Matches `#### heading` lines
pub static H4_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?m)^#### (.*)$").unwrap());

/// Matches `* item` lines
pub static STAR_ITEM_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^\* (.*)$").unwrap());

/// Matches `- item` lines, with optional leading spaces
pub static DASH_ITEM_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^ *- (.*)$").unwrap());

/// Matches `1. item` lines
pub static ORDERED_ITEM_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^\d+\. (.*)$").unwrap());

/// Matches a fenced block from a line starting with ``` to the next one
pub static CODE_FENCE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?ms)^```(.*?)^```").unwrap());

// === Embed tokens ===

/// Matches `@[web-video](ID)` tokens
pub static WEB_VIDEO_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"@\[web-video\]\(([^)]+)\)").unwrap());

/// Matches `@[local-video](URL)` tokens
pub static LOCAL_VIDEO_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"@\[local-video\]\(([^)]+)\)").unwrap());

// === Inline patterns ===

/// Matches `` `code` `` spans
pub static INLINE_CODE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"`([^`]+)`").unwrap());

/// Matches `**bold**` spans
pub static BOLD_STAR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*\*(.*?)\*\*").unwrap());

/// Matches `__bold__` spans
pub static BOLD_UNDERSCORE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"__(.*?)__").unwrap());

/// Matches `*italic*` spans
pub static ITALIC_STAR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*(.*?)\*").unwrap());

/// Matches `_italic_` spans
pub static ITALIC_UNDERSCORE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"_(.*?)_").unwrap());

/// Matches `~~strike~~` spans
pub static STRIKE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"~~(.*?)~~").unwrap());

/// Matches `++underline++` spans
pub static UNDERLINE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\+\+(.*?)\+\+").unwrap());

/// Matches `[label](url)` links
pub static LINK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[([^\]]+)\]\(([^)]+)\)").unwrap());

// === Video URL patterns ===

/// Matches the URL segments that precede a video ID
pub static VIDEO_ID_SEPARATOR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"vi/|v=|/v/|youtu\.be/|/embed/").unwrap());

/// Matches the leading run of video ID characters
pub static VIDEO_ID_CHARS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9A-Za-z_-]*").unwrap());
