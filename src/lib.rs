//! # markpad
//!
//! A fast, lightweight Markdown → HTML preview engine for editors and
//! browsers.
//!
//! ## Features
//!
//! - Line-oriented Markdown rendering as an explicit, ordered rewrite pipeline
//! - Headings, lists, blockquotes, fenced and inline code, bold, italic,
//!   strikethrough, underline and links
//! - `@[web-video](ID)` and `@[local-video](URL)` embed tokens
//! - An [`Editor`] document model with toolbar formatting and live preview
//! - WebAssembly bindings for in-browser use (feature `wasm`)
//!
//! ## Quick Start
//!
//! ```
//! use markpad::render;
//!
//! let html = render("# Notes\n\n* one\n* two\n\n**bold** and *italic*");
//! assert_eq!(
//!     html,
//!     "<h1>Notes</h1>\n\n<ul><li>one</li><li>two</li></ul>\n\n<p><strong>bold</strong> and <em>italic</em></p>"
//! );
//! ```
//!
//! ## Editing
//!
//! The [`Editor`] keeps the Markdown buffer, the selection and the rendered
//! preview in one value:
//!
//! ```
//! use markpad::{Editor, ToolbarAction};
//!
//! let mut editor = Editor::new();
//! editor.apply(&ToolbarAction::WebVideo("https://youtu.be/abc123".into())).unwrap();
//!
//! assert_eq!(editor.text(), "@[web-video](abc123)");
//! assert!(editor.html().contains("https://www.youtube.com/embed/abc123"));
//! ```

pub mod editor;
pub mod error;
pub mod markdown;
pub(crate) mod util;
pub mod video;

#[cfg(feature = "wasm")]
pub mod wasm;

pub use editor::{DEFAULT_FILE_NAME, Editor, Selection, ToolbarAction};
pub use error::{Error, Result};
pub use markdown::{Pipeline, RenderConfig, escape_html, render, render_with};
pub use video::{extract_video_id, local_video_token, web_video_token};
