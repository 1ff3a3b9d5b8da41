//! Markdown → HTML rendering.
//!
//! The renderer is a fixed sequence of textual rewrites over the whole
//! document:
//!
//! - [`patterns`]: compiled regexes shared by every render
//! - [`pipeline`]: the ordered rule list and the [`render()`] entry point
//! - [`paragraph`]: final `<p>` wrapping of bare lines
//! - [`escape`]: HTML escaping for the raw-HTML view
//!
//! ## Design Notes
//!
//! - **Line-local matching**: every rule is a regex or literal replacement;
//!   there is no block or inline tree and no recursive inline parsing
//! - **Order is the contract**: reordering rules changes output (see
//!   [`Pipeline::rules`])
//! - **Fences are not protected**: heading and list rules run before the
//!   code-fence rule, so a `# line` inside a fence still becomes `<h1>`
//! - **No sanitization**: raw HTML in the source passes straight through

mod escape;
mod paragraph;
pub(crate) mod patterns;
mod pipeline;

pub use escape::escape_html;
pub use paragraph::{is_block_line, wrap_paragraphs};
pub use pipeline::{
    DEFAULT_VIDEO_EMBED_URL, Pipeline, RenderConfig, Rewrite, Rule, render, render_with,
};
