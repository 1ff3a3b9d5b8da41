//! Error types for markpad operations.
//!
//! Rendering itself never fails; these cover the editing boundary.

use thiserror::Error;

/// Errors that can occur while editing, loading or saving a document.
#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid selection {start}..{end} for document of {len} bytes")]
    InvalidSelection { start: usize, end: usize, len: usize },

    #[error("Could not extract video ID from {0:?}. Please use a valid video URL.")]
    EmptyVideoId(String),

    #[error("Unknown toolbar action: {0}")]
    UnknownAction(String),

    #[error("Toolbar action {0} requires an argument")]
    MissingArgument(&'static str),
}

pub type Result<T> = std::result::Result<T, Error>;
