//! Text decoding and offset helpers.

use std::borrow::Cow;

/// Decode bytes to a string, handling various encodings.
///
/// This function:
/// 1. First tries UTF-8 (handles BOM automatically via encoding_rs)
/// 2. Falls back to Windows-1252 (common in older text files)
///
/// Uses `Cow<str>` to avoid allocation when the input is valid UTF-8
/// without a BOM.
pub fn decode_text(bytes: &[u8]) -> Cow<'_, str> {
    let (result, _encoding, malformed) = encoding_rs::UTF_8.decode(bytes);

    if !malformed {
        return result;
    }

    let (result, _, _) = encoding_rs::WINDOWS_1252.decode(bytes);
    result
}

/// Convert `\r\n` and lone `\r` line endings to `\n`.
pub fn normalize_newlines(text: &str) -> Cow<'_, str> {
    if !text.contains('\r') {
        return Cow::Borrowed(text);
    }
    Cow::Owned(text.replace("\r\n", "\n").replace('\r', "\n"))
}

/// Convert a UTF-16 code unit offset to a byte offset.
///
/// Browser text areas report selections in UTF-16 units. Offsets past the
/// end clamp to the end; offsets inside a surrogate pair round down to the
/// start of the character.
#[cfg(feature = "wasm")]
pub fn utf16_to_byte_offset(text: &str, utf16_offset: usize) -> usize {
    let mut units = 0;
    for (byte_idx, c) in text.char_indices() {
        let next = units + c.len_utf16();
        if next > utf16_offset {
            return byte_idx;
        }
        units = next;
    }
    text.len()
}

/// Convert a byte offset to a UTF-16 code unit offset.
///
/// The offset must lie on a char boundary; offsets past the end clamp.
#[cfg(feature = "wasm")]
pub fn byte_to_utf16_offset(text: &str, byte_offset: usize) -> usize {
    let end = byte_offset.min(text.len());
    text.get(..end)
        .map(|prefix| prefix.encode_utf16().count())
        .unwrap_or_else(|| text.encode_utf16().count())
}
