//! Serializable snapshot of a generator's complete state.

use serde::{Deserialize, Serialize};

/// Plain-data copy of an [`Isaac`](super::isaac::Isaac) generator.
///
/// This is the serde wire form of the generator. Converting a snapshot back
/// into a generator checks that both arrays hold exactly 256 words and that
/// the cursor is in `[1, 256]`, so a restored generator continues the exact
/// sequence of the one it was taken from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IsaacSnapshot {
    /// Internal state array.
    pub memory: Vec<u32>,
    /// Current output batch.
    pub results: Vec<u32>,
    /// Number of unconsumed words left in `results`.
    pub index: usize,
    /// Accumulator register.
    pub aa: u32,
    /// Last-result register.
    pub bb: u32,
    /// Batch counter register.
    pub cc: u32,
}
