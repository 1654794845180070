//! Memory Image Loader.
//!
//! This module turns external instruction/data streams into the word list the
//! memory bus is built from. It performs:
//! 1. **Hex parsing:** One 32-bit word per line, as emitted by common assembler dumps.
//! 2. **Binary parsing:** Raw little-endian bytes, four per word.
//! 3. **File loading:** Thin wrappers that read either format from disk.
//!
//! Images are not padded here; the RAM fills the remainder with zeros.

use std::fs;
use std::path::Path;

use crate::common::constants::WORD_BYTES;
use crate::common::error::ImageError;

/// Parses a hex image.
///
/// Each non-empty line holds one word. Text after `#` or `//` is ignored,
/// a leading `0x`/`0X` is optional, and `_` may separate digits.
///
/// # Arguments
///
/// * `text` - The image text.
///
/// # Returns
///
/// The words in file order, or [`ImageError::InvalidHexWord`] naming the
/// first bad line.
///
/// # Examples
///
/// ```
/// use rvsoc_core::sim::loader::parse_hex;
///
/// let words = parse_hex("0x00000033 # nop\n\n0010_0073\n").unwrap();
/// assert_eq!(words, vec![0x0000_0033, 0x0010_0073]);
/// ```
pub fn parse_hex(text: &str) -> Result<Vec<u32>, ImageError> {
    let mut words = Vec::new();
    for (idx, line) in text.lines().enumerate() {
        let body = strip_comment(line).trim();
        if body.is_empty() {
            continue;
        }
        let digits = body
            .strip_prefix("0x")
            .or_else(|| body.strip_prefix("0X"))
            .unwrap_or(body)
            .replace('_', "");
        let word = u32::from_str_radix(&digits, 16).map_err(|_| ImageError::InvalidHexWord {
            line: idx + 1,
            text: body.to_string(),
        })?;
        words.push(word);
    }
    Ok(words)
}

/// Splits raw little-endian bytes into words.
///
/// # Returns
///
/// The words, or [`ImageError::UnalignedLength`] if the length is not a
/// multiple of 4.
pub fn words_from_le_bytes(bytes: &[u8]) -> Result<Vec<u32>, ImageError> {
    if bytes.len() % WORD_BYTES as usize != 0 {
        return Err(ImageError::UnalignedLength(bytes.len()));
    }
    Ok(bytes
        .chunks_exact(WORD_BYTES as usize)
        .map(|c| u32::from_le_bytes([c[0], c[1], c[2], c[3]]))
        .collect())
}

/// Reads and parses a hex image file.
pub fn load_hex_file(path: impl AsRef<Path>) -> Result<Vec<u32>, ImageError> {
    let text = fs::read_to_string(path.as_ref())?;
    let words = parse_hex(&text)?;
    tracing::debug!(path = %path.as_ref().display(), words = words.len(), "loaded hex image");
    Ok(words)
}

/// Reads a raw little-endian binary image file.
pub fn load_binary_file(path: impl AsRef<Path>) -> Result<Vec<u32>, ImageError> {
    let bytes = fs::read(path.as_ref())?;
    let words = words_from_le_bytes(&bytes)?;
    tracing::debug!(path = %path.as_ref().display(), words = words.len(), "loaded binary image");
    Ok(words)
}

/// Drops a trailing `#` or `//` comment.
fn strip_comment(line: &str) -> &str {
    let end = [line.find('#'), line.find("//")]
        .into_iter()
        .flatten()
        .min()
        .unwrap_or(line.len());
    &line[..end]
}
