//! Byte-to-word conversion utilities.
//!
//! Seeds are handed to the generator as 32-bit words built from bytes in
//! little-endian order, with a trailing partial word completed by zero
//! bytes.

use crate::error::IsaacError;

/// Number of bytes in one generator word.
pub const WORD_BYTES: usize = 4;

/// Appends zero bytes until the length of `bytes` is a multiple of 4.
///
/// Nothing is appended when the buffer is already aligned, including when
/// it is empty.
pub fn pad_to_word(bytes: &mut Vec<u8>) {
    let rem = bytes.len() % WORD_BYTES;
    if rem != 0 {
        bytes.resize(bytes.len() + (WORD_BYTES - rem), 0);
    }
}

/// Converts a byte slice to a `Vec<u32>` using little-endian byte ordering.
///
/// Each group of 4 bytes is combined into a single word where the first
/// byte occupies the least significant position.
///
/// # Parameters
/// - `input`: Byte slice whose length must be a multiple of 4.
///
/// # Returns
/// A `Vec<u32>` containing `input.len() / 4` elements.
///
/// # Errors
/// Returns [`IsaacError::InvalidByteArrayLength`] if `input.len() % 4 != 0`.
pub fn byte_to_word(input: &[u8]) -> Result<Vec<u32>, IsaacError> {
    if !input.len().is_multiple_of(WORD_BYTES) {
        return Err(IsaacError::InvalidByteArrayLength);
    }
    Ok(input
        .chunks_exact(WORD_BYTES)
        .map(|chunk| u32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]))
        .collect())
}
