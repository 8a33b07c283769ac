//! Seed transformation: byte strings to generator seed words.
//!
//! A seed of any length is zero-padded to a multiple of 4 bytes and read as
//! little-endian 32-bit words, in the original byte order. The generator
//! uses at most [`RAND_SIZE`](super::isaac::RAND_SIZE) of those words.

use std::io::{ErrorKind, Read};

use crate::error::IsaacError;
use crate::utils::converter::{self, WORD_BYTES};

/// Transforms a seed byte string into little-endian seed words.
///
/// A final partial word is completed with zero bytes, so a 35-byte seed
/// yields 9 words whose last word holds the 3 trailing bytes in its low
/// positions. Empty input yields no words.
///
/// # Errors
/// Only the strict word conversion can fail, and it never does for a
/// padded in-memory buffer. The `Result` mirrors [`read_seed_words`].
///
/// # Examples
///
/// ```
/// use isaacrypt::random::seed::seed_words;
///
/// let words = seed_words(b"abcde").unwrap();
/// assert_eq!(words, vec![0x6463_6261, 0x0000_0065]);
/// ```
pub fn seed_words(s: &[u8]) -> Result<Vec<u32>, IsaacError> {
    let mut padded = s.to_vec();
    converter::pad_to_word(&mut padded);
    converter::byte_to_word(&padded)
}

/// Reads a seed from `reader` until end of input and transforms it.
///
/// The result is identical to [`seed_words`] applied to all bytes the
/// reader yields. Interrupted reads are retried.
///
/// # Errors
/// Returns [`IsaacError::SeedRead`] if the reader fails.
pub fn read_seed_words<R: Read>(mut reader: R) -> Result<Vec<u32>, IsaacError> {
    let mut words = Vec::new();
    loop {
        let mut word = [0u8; WORD_BYTES];
        let filled = fill_word(&mut reader, &mut word)?;
        if filled == 0 {
            break;
        }
        words.push(u32::from_le_bytes(word));
        if filled < WORD_BYTES {
            break;
        }
    }
    Ok(words)
}

/// Reads up to one word of bytes, returning how many were filled.
fn fill_word<R: Read>(
    reader: &mut R,
    word: &mut [u8; WORD_BYTES],
) -> Result<usize, IsaacError> {
    let mut filled = 0;
    while filled < WORD_BYTES {
        match reader.read(&mut word[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(IsaacError::SeedRead(e)),
        }
    }
    Ok(filled)
}
