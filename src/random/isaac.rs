//! ISAAC pseudorandom word generator.
//!
//! ISAAC ("Indirection, Shift, Accumulate, Add, Count") keeps a 256-word
//! state array and produces output in batches of 256 words. Words are
//! handed out one at a time from the end of the batch towards its start,
//! and the next batch is generated as soon as the last word is taken.
//!
//! The output is fully reproducible from the seed and matches Bob
//! Jenkins' published reference vectors. It is not a cryptographically
//! secure generator.

use std::fmt;
use std::io::Read;

use rand_core::{impls, RngCore, SeedableRng};
use serde::{Deserialize, Serialize};

use super::mix::{mix, scrambled_golden_ratio};
use super::seed::{read_seed_words, seed_words};
use super::snapshot::IsaacSnapshot;
use crate::error::IsaacError;

/// Log2 of the state and result array sizes.
const RAND_SIZE_LEN: u32 = 8;

/// Number of words in the state array and in each output batch.
pub const RAND_SIZE: usize = 1 << RAND_SIZE_LEN;

/// Distance between the two state words combined on every step.
const MIDPOINT: usize = RAND_SIZE / 2;

/// Number of registers handled by one mix.
const MIX_WIDTH: usize = 8;

/// ISAAC generator state.
///
/// Two generators built from the same seed words and construction mode
/// return identical word sequences forever. The generator is a plain value:
/// every mutating call takes `&mut self`, so sharing one instance across
/// threads requires external locking. Independent instances share nothing.
///
/// # Examples
///
/// ```
/// use isaacrypt::Isaac;
///
/// let mut a = Isaac::with_seed(&[1, 23, 456, 7890, 12345]);
/// let mut b = Isaac::with_seed(&[1, 23, 456, 7890, 12345]);
/// assert_eq!(a.next_word(), 2558573138);
/// assert_eq!(b.next_word(), 2558573138);
/// ```
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "IsaacSnapshot", into = "IsaacSnapshot")]
pub struct Isaac {
    /// Output batch, consumed from the end.
    results: [u32; RAND_SIZE],
    /// Unconsumed words left in `results`.
    index: usize,
    /// Internal state.
    memory: [u32; RAND_SIZE],
    /// Accumulator
    aa: u32,
    /// Previous result
    bb: u32,
    /// Counter, incremented once per batch
    cc: u32,
}

impl fmt::Debug for Isaac {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Isaac")
            .field("aa", &self.aa)
            .field("bb", &self.bb)
            .field("cc", &self.cc)
            .field("index", &self.index)
            .finish()
    }
}

impl Default for Isaac {
    fn default() -> Self {
        Self::new()
    }
}

impl Isaac {
    /// Creates an unseeded generator.
    ///
    /// The state is built from the golden ratio constant alone, without a
    /// seed folding pass. This differs from [`with_seed`](Self::with_seed)
    /// called with an empty seed, which runs both folding passes over zeros.
    pub fn new() -> Self {
        Self::initialize(&[], false)
    }

    /// Creates a generator seeded with `seed` words.
    ///
    /// Any length is accepted. Missing words up to 256 count as zero and
    /// words past the first 256 are ignored.
    pub fn with_seed(seed: &[u32]) -> Self {
        Self::initialize(seed, true)
    }

    /// Creates a generator seeded with a byte string.
    ///
    /// The bytes are turned into words by
    /// [`seed_words`](crate::random::seed::seed_words).
    ///
    /// # Errors
    /// Propagates errors from the seed transformation.
    ///
    /// # Examples
    ///
    /// ```
    /// use isaacrypt::Isaac;
    ///
    /// let mut rng = Isaac::from_seed_bytes(b"This is <i>not</i> the right mytext.").unwrap();
    /// assert_eq!(rng.next_word(), 0xc9d3bc51);
    /// ```
    pub fn from_seed_bytes(seed: &[u8]) -> Result<Self, IsaacError> {
        let words = seed_words(seed)?;
        Ok(Self::with_seed(&words))
    }

    /// Creates a generator seeded with every byte `reader` yields.
    ///
    /// # Errors
    /// Returns [`IsaacError::SeedRead`] if the reader fails.
    pub fn read_seeded<R: Read>(reader: R) -> Result<Self, IsaacError> {
        let words = read_seed_words(reader)?;
        Ok(Self::with_seed(&words))
    }

    /// Builds a generator from seed words.
    ///
    /// With `fold_seed` set, the seed is added into the mix registers on a
    /// first pass over the state and the state's own words are folded in on
    /// a second pass, so every seed word reaches every state word. Without
    /// it, `seed` is ignored and a single unseeded pass fills the state.
    ///
    /// Either way the first batch is generated before returning, so the
    /// cursor starts at 256.
    pub fn initialize(seed: &[u32], fold_seed: bool) -> Self {
        let mut rng = Isaac {
            results: [0; RAND_SIZE],
            index: 0,
            memory: [0; RAND_SIZE],
            aa: 0,
            bb: 0,
            cc: 0,
        };

        let mut x = scrambled_golden_ratio();

        for (i, group) in rng.memory.chunks_exact_mut(MIX_WIDTH).enumerate() {
            if fold_seed {
                for (j, reg) in x.iter_mut().enumerate() {
                    let word = seed.get(i * MIX_WIDTH + j).copied().unwrap_or(0);
                    *reg = reg.wrapping_add(word);
                }
            }
            x = mix(x);
            group.copy_from_slice(&x);
        }

        if fold_seed {
            for group in rng.memory.chunks_exact_mut(MIX_WIDTH) {
                for (reg, &word) in x.iter_mut().zip(group.iter()) {
                    *reg = reg.wrapping_add(word);
                }
                x = mix(x);
                group.copy_from_slice(&x);
            }
        }

        rng.generate();
        rng.index = RAND_SIZE;
        rng
    }

    /// Replaces the output batch with the next 256 words.
    ///
    /// Every state word is rewritten in place while later steps of the same
    /// pass read it, so the loop body must keep its exact order. The cursor
    /// is left unchanged; [`next_word`](Self::next_word) resets it itself
    /// when it refills.
    pub fn generate(&mut self) {
        self.cc = self.cc.wrapping_add(1);
        let mut a = self.aa;
        let mut b = self.bb.wrapping_add(self.cc);

        for i in 0..RAND_SIZE {
            let x = self.memory[i];
            a ^= match i % 4 {
                0 => a << 13,
                1 => a >> 6,
                2 => a << 2,
                _ => a >> 16,
            };
            a = self.memory[(i + MIDPOINT) % RAND_SIZE].wrapping_add(a);
            let y = self.memory[Self::ind(x, 2)]
                .wrapping_add(a)
                .wrapping_add(b);
            self.memory[i] = y;
            b = self.memory[Self::ind(y, 2 + RAND_SIZE_LEN)].wrapping_add(x);
            self.results[i] = b;
        }

        self.aa = a;
        self.bb = b;
    }

    /// State index taken from `v` shifted right by `shift`.
    #[inline]
    fn ind(v: u32, shift: u32) -> usize {
        (v >> shift) as usize % RAND_SIZE
    }

    /// Returns the next pseudorandom word.
    ///
    /// When this call takes the last word of the batch, the next batch is
    /// generated before returning.
    #[inline]
    pub fn next_word(&mut self) -> u32 {
        self.index -= 1;
        let word = self.results[self.index];
        if self.index == 0 {
            self.generate();
            self.index = RAND_SIZE;
        }
        word
    }

    /// Returns the current output batch.
    pub fn results(&self) -> &[u32; RAND_SIZE] {
        &self.results
    }

    /// Returns the number of words left in the current batch.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Captures the complete generator state.
    pub fn snapshot(&self) -> IsaacSnapshot {
        IsaacSnapshot {
            memory: self.memory.to_vec(),
            results: self.results.to_vec(),
            index: self.index,
            aa: self.aa,
            bb: self.bb,
            cc: self.cc,
        }
    }

    /// Rebuilds a generator from a snapshot.
    ///
    /// # Errors
    /// Returns [`IsaacError::InvalidStateLength`] if either array does not
    /// hold exactly 256 words, or [`IsaacError::CursorOutOfRange`] if the
    /// cursor is outside `[1, 256]`.
    pub fn restore(snapshot: IsaacSnapshot) -> Result<Self, IsaacError> {
        if !(1..=RAND_SIZE).contains(&snapshot.index) {
            return Err(IsaacError::CursorOutOfRange(snapshot.index));
        }
        Ok(Isaac {
            results: Self::words_array("results", snapshot.results)?,
            index: snapshot.index,
            memory: Self::words_array("memory", snapshot.memory)?,
            aa: snapshot.aa,
            bb: snapshot.bb,
            cc: snapshot.cc,
        })
    }

    fn words_array(
        field: &'static str,
        words: Vec<u32>,
    ) -> Result<[u32; RAND_SIZE], IsaacError> {
        <[u32; RAND_SIZE]>::try_from(words).map_err(|words| IsaacError::InvalidStateLength {
            field,
            expected: RAND_SIZE,
            found: words.len(),
        })
    }
}

impl From<Isaac> for IsaacSnapshot {
    fn from(rng: Isaac) -> Self {
        rng.snapshot()
    }
}

impl TryFrom<IsaacSnapshot> for Isaac {
    type Error = IsaacError;

    fn try_from(snapshot: IsaacSnapshot) -> Result<Self, Self::Error> {
        Isaac::restore(snapshot)
    }
}

impl RngCore for Isaac {
    #[inline]
    fn next_u32(&mut self) -> u32 {
        self.next_word()
    }

    fn next_u64(&mut self) -> u64 {
        impls::next_u64_via_u32(self)
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        impls::fill_bytes_via_next(self, dest)
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand_core::Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

impl SeedableRng for Isaac {
    type Seed = [u8; 32];

    /// Seeds with eight little-endian words read from `seed`.
    fn from_seed(seed: Self::Seed) -> Self {
        let mut words = [0u32; MIX_WIDTH];
        for (word, chunk) in words.iter_mut().zip(seed.chunks_exact(4)) {
            *word = u32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
        }
        Self::with_seed(&words)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &[u8] = b"This is <i>not</i> the right mytext.";

    #[test]
    fn test_deterministic_seed() {
        let mut r1 = Isaac::with_seed(&[12345]);
        let mut r2 = Isaac::with_seed(&[12345]);
        for _ in 0..1000 {
            assert_eq!(r1.next_word(), r2.next_word());
        }
    }

    #[test]
    fn test_known_words() {
        let mut rng = Isaac::with_seed(&[1, 23, 456, 7890, 12345]);
        let v: Vec<u32> = (0..10).map(|_| rng.next_word()).collect();
        assert_eq!(
            v,
            vec![
                2558573138, 873787463, 263499565, 2103644246, 3595684709, 4203127393, 264982119,
                2765226902, 2737944514, 3900253796
            ]
        );
    }

    #[test]
    fn test_known_words_after_skip() {
        let mut rng = Isaac::with_seed(&[12345, 67890, 54321, 9876]);
        for _ in 0..10000 {
            rng.next_word();
        }
        let v: Vec<u32> = (0..10).map(|_| rng.next_word()).collect();
        assert_eq!(
            v,
            vec![
                3676831399, 3183332890, 2834741178, 3854698763, 2717568474, 1576568959,
                3507990155, 179069555, 141456972, 2478885421
            ]
        );
    }

    #[test]
    fn test_unseeded_first_batch() {
        let rng = Isaac::new();
        assert_eq!(
            &rng.results()[..8],
            &[
                0x9fc0_9148,
                0xf989_e740,
                0x0898_e634,
                0x6e4d_10ef,
                0xfee2_d7e8,
                0xecd8_1b8f,
                0xcf5e_308a,
                0x1719_f4fd,
            ]
        );
    }

    #[test]
    fn test_unseeded_next_words() {
        let mut rng = Isaac::new();
        let v: Vec<u32> = (0..4).map(|_| rng.next_word()).collect();
        assert_eq!(v, vec![0x71d7_1fd2, 0xb54a_dae7, 0xd478_8559, 0xc361_29fa]);
    }

    #[test]
    fn test_unseeded_differs_from_empty_seed() {
        assert_ne!(Isaac::new().results(), Isaac::with_seed(&[]).results());
    }

    #[test]
    fn test_empty_seed_equals_zero_seed() {
        assert_eq!(Isaac::with_seed(&[]), Isaac::with_seed(&[0; RAND_SIZE]));
    }

    #[test]
    fn test_seed_words_beyond_size_ignored() {
        let long: Vec<u32> = (0..300).collect();
        assert_eq!(Isaac::with_seed(&long), Isaac::with_seed(&long[..RAND_SIZE]));
    }

    #[test]
    fn test_fresh_cursor() {
        assert_eq!(Isaac::new().index(), RAND_SIZE);
        assert_eq!(Isaac::with_seed(&[7]).index(), RAND_SIZE);
    }

    #[test]
    fn test_words_consumed_from_end() {
        let mut rng = Isaac::from_seed_bytes(SAMPLE).unwrap();
        let batch = *rng.results();
        for i in (0..RAND_SIZE).rev() {
            assert_eq!(rng.next_word(), batch[i]);
        }
    }

    #[test]
    fn test_eager_refill() {
        let mut rng = Isaac::with_seed(&[42]);
        let first = *rng.results();
        for _ in 0..RAND_SIZE - 1 {
            rng.next_word();
        }
        assert_eq!(rng.index(), 1);
        assert_eq!(rng.next_word(), first[0]);
        assert_eq!(rng.index(), RAND_SIZE);
        assert_ne!(rng.results(), &first);
    }

    #[test]
    fn test_generate_keeps_cursor() {
        let mut rng = Isaac::with_seed(&[42]);
        rng.next_word();
        rng.generate();
        assert_eq!(rng.index(), RAND_SIZE - 1);
    }

    #[test]
    fn test_counter_advances_per_batch() {
        let mut rng = Isaac::new();
        assert_eq!(rng.cc, 1);
        for _ in 0..RAND_SIZE * 3 {
            rng.next_word();
        }
        assert_eq!(rng.cc, 4);
    }

    #[test]
    fn test_clone_is_independent() {
        let mut rng = Isaac::with_seed(&[3, 1, 4, 1, 5]);
        let mut clone = rng.clone();
        for _ in 0..600 {
            assert_eq!(rng.next_word(), clone.next_word());
        }
        rng.next_word();
        assert_ne!(rng.index(), clone.index());
    }

    #[test]
    fn test_debug_omits_arrays() {
        let out = format!("{:?}", Isaac::new());
        assert!(out.starts_with("Isaac {"));
        assert!(out.contains("index: 256"));
        assert!(!out.contains("memory"));
    }

    #[test]
    fn test_snapshot_restore_continues_sequence() {
        let mut rng = Isaac::from_seed_bytes(SAMPLE).unwrap();
        for _ in 0..300 {
            rng.next_word();
        }
        let mut restored = Isaac::restore(rng.snapshot()).unwrap();
        for _ in 0..600 {
            assert_eq!(rng.next_word(), restored.next_word());
        }
    }

    #[test]
    fn test_restore_rejects_short_memory() {
        let mut snap = Isaac::new().snapshot();
        snap.memory.truncate(10);
        assert!(matches!(
            Isaac::restore(snap),
            Err(IsaacError::InvalidStateLength {
                field: "memory",
                expected: RAND_SIZE,
                found: 10
            })
        ));
    }

    #[test]
    fn test_restore_rejects_long_results() {
        let mut snap = Isaac::new().snapshot();
        snap.results.push(0);
        assert!(matches!(
            Isaac::restore(snap),
            Err(IsaacError::InvalidStateLength {
                field: "results",
                found: 257,
                ..
            })
        ));
    }

    #[test]
    fn test_restore_rejects_cursor() {
        for index in [0, RAND_SIZE + 1] {
            let mut snap = Isaac::new().snapshot();
            snap.index = index;
            assert!(matches!(
                Isaac::restore(snap),
                Err(IsaacError::CursorOutOfRange(i)) if i == index
            ));
        }
    }

    #[test]
    fn test_rng_core_matches_next_word() {
        let mut a = Isaac::with_seed(&[9, 9, 9]);
        let mut b = a.clone();
        for _ in 0..300 {
            assert_eq!(a.next_u32(), b.next_word());
        }
    }

    #[test]
    fn test_next_u64_low_word_first() {
        let mut a = Isaac::with_seed(&[5]);
        let mut b = a.clone();
        let lo = b.next_word() as u64;
        let hi = b.next_word() as u64;
        assert_eq!(a.next_u64(), (hi << 32) | lo);
    }

    #[test]
    fn test_fill_bytes_little_endian_words() {
        let mut a = Isaac::with_seed(&[5]);
        let mut b = a.clone();
        let mut buf = [0u8; 6];
        a.fill_bytes(&mut buf);
        let w0 = b.next_word().to_le_bytes();
        let w1 = b.next_word().to_le_bytes();
        assert_eq!(buf[..4], w0);
        assert_eq!(buf[4..], w1[..2]);
    }

    #[test]
    fn test_from_seed_uses_le_words() {
        let mut seed = [0u8; 32];
        seed[0] = 1;
        seed[4] = 23;
        assert_eq!(Isaac::from_seed(seed), Isaac::with_seed(&[1, 23]));
    }
}
