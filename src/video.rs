//! Video embed helpers.
//!
//! Builds the `@[web-video](ID)` and `@[local-video](URL)` tokens the
//! renderer expands, and pulls a video ID out of a pasted URL.

use crate::markdown::patterns::{VIDEO_ID_CHARS_RE, VIDEO_ID_SEPARATOR_RE};

/// Extract a video ID from a pasted URL.
///
/// Looks for the first `vi/`, `v=`, `/v/`, `youtu.be/` or `/embed/` segment
/// and returns the leading run of `[0-9A-Za-z_-]` after it, stopping at the
/// next such segment. When no segment is present the input is returned
/// unchanged. The result can be empty (`https://youtu.be/`); callers treat
/// that as a failed extraction.
///
/// # Examples
///
/// ```
/// use markpad::extract_video_id;
///
/// assert_eq!(extract_video_id("https://youtu.be/abc123"), "abc123");
/// assert_eq!(extract_video_id("https://www.youtube.com/watch?v=abc123&t=4"), "abc123");
/// assert_eq!(extract_video_id("not a video"), "not a video");
/// ```
pub fn extract_video_id(url: &str) -> String {
    let cleaned: String = url.chars().filter(|&c| c != '<' && c != '>').collect();

    let mut separators = VIDEO_ID_SEPARATOR_RE.find_iter(&cleaned);
    let Some(first) = separators.next() else {
        return url.to_string();
    };

    let segment_end = separators.next().map_or(cleaned.len(), |m| m.start());
    let segment = &cleaned[first.end()..segment_end];

    VIDEO_ID_CHARS_RE
        .find(segment)
        .map(|m| m.as_str().to_string())
        .unwrap_or_default()
}

/// Build the token that embeds a hosted video.
pub fn web_video_token(id: &str) -> String {
    format!("@[web-video]({id})")
}

/// Build the token that embeds a local video resource.
pub fn local_video_token(url: &str) -> String {
    format!("@[local-video]({url})")
}
