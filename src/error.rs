//! Error types for the isaacrypt library.

use thiserror::Error;

/// Errors produced by the isaacrypt library.
///
/// The generator and the cipher themselves never fail. Errors only arise
/// when seed bytes come from a fallible source, when a byte buffer is
/// converted strictly into words, or when a saved generator state is
/// restored.
#[derive(Debug, Error)]
pub enum IsaacError {
    /// Byte array length is not a multiple of the word size.
    #[error("Byte array length is not a multiple of 4")]
    InvalidByteArrayLength,
    /// The seed source could not be read.
    #[error("Failed to read seed bytes: {0}")]
    SeedRead(#[from] std::io::Error),
    /// A restored state array does not hold exactly 256 words.
    #[error("State field `{field}` has {found} words, expected {expected}")]
    InvalidStateLength {
        /// Name of the offending array.
        field: &'static str,
        /// Required number of words.
        expected: usize,
        /// Number of words found.
        found: usize,
    },
    /// A restored cursor is outside the range a live generator can hold.
    #[error("Cursor {0} is outside the valid range [1, 256]")]
    CursorOutOfRange(usize),
}
