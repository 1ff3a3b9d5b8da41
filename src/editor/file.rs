//! Loading and saving Markdown files.

use std::fs::File;
use std::io::{BufWriter, Read, Write};
use std::path::Path;

use crate::error::Result;
use crate::util::{decode_text, normalize_newlines};

use super::Editor;

/// File name offered when saving a new document.
pub const DEFAULT_FILE_NAME: &str = "markdown.md";

impl Editor {
    /// Open a Markdown file from disk.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)?;
        let editor = Self::load_from_reader(file)?;
        tracing::debug!(path = %path.display(), bytes = editor.text().len(), "opened document");
        Ok(editor)
    }

    /// Read a document from any reader.
    pub fn load_from_reader<R: Read>(mut reader: R) -> Result<Self> {
        let mut bytes = Vec::new();
        reader.read_to_end(&mut bytes)?;
        Ok(Self::from_bytes(&bytes))
    }

    /// Build an editor from raw file bytes.
    ///
    /// Bytes are decoded as UTF-8 (falling back to Windows-1252) and line
    /// endings are normalized to `\n`.
    pub fn from_bytes(bytes: &[u8]) -> Self {
        let mut editor = Self::new();
        editor.load_bytes(bytes);
        editor
    }

    /// Replace the buffer with decoded file bytes, keeping the configuration.
    pub fn load_bytes(&mut self, bytes: &[u8]) {
        let decoded = decode_text(bytes);
        self.set_text(normalize_newlines(&decoded).into_owned());
    }

    /// Write the Markdown source to a file.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let mut writer = BufWriter::new(File::create(path)?);
        self.save_to_writer(&mut writer)?;
        writer.flush()?;
        tracing::debug!(path = %path.display(), bytes = self.text().len(), "saved document");
        Ok(())
    }

    /// Write the Markdown source to any writer.
    pub fn save_to_writer<W: Write>(&self, writer: &mut W) -> Result<()> {
        writer.write_all(self.text().as_bytes())?;
        Ok(())
    }
}
