//! IsaacStream: XOR stream cipher keyed by an ISAAC generator.
//!
//! Every group of up to 4 input bytes consumes one generator word, written
//! out big-endian as 4 key bytes. Encryption and decryption are the same
//! operation.
//!
//! The keystream depends on the key alone. There is no nonce, so two
//! messages encrypted under the same key share a keystream, and there is no
//! integrity check. Dropping, inserting or reordering ciphertext bytes
//! desynchronizes everything that follows.

use std::io::Read;

use crate::error::IsaacError;
use crate::random::isaac::Isaac;

/// Number of key bytes produced by one generator word.
const KEY_BYTES: usize = 4;

/// Symmetric XOR stream cipher driven by an [`Isaac`] generator.
///
/// # Examples
///
/// ```
/// use isaacrypt::IsaacStream;
///
/// let key = "This is <i>not</i> the right mytext.";
/// let message = b"Hello, world";
///
/// let mut enc = IsaacStream::new(key).unwrap();
/// let mut ciphertext = [0u8; 12];
/// enc.xor_key_stream(&mut ciphertext, message);
///
/// let mut dec = IsaacStream::new(key).unwrap();
/// dec.apply_keystream(&mut ciphertext);
/// assert_eq!(&ciphertext, message);
/// ```
#[derive(Debug, Clone)]
pub struct IsaacStream {
    rng: Isaac,
}

impl IsaacStream {
    /// Creates a cipher keyed by the bytes of `key`.
    ///
    /// The key goes through
    /// [`seed_words`](crate::random::seed::seed_words) and seeds the
    /// generator in seeded mode, so an empty key is still a (weak) seeded
    /// key.
    ///
    /// # Errors
    /// Propagates errors from the seed transformation.
    pub fn new(key: &str) -> Result<Self, IsaacError> {
        Ok(Self::from_rng(Isaac::from_seed_bytes(key.as_bytes())?))
    }

    /// Creates a cipher keyed by every byte `reader` yields.
    ///
    /// # Errors
    /// Returns [`IsaacError::SeedRead`] if the reader fails.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, IsaacError> {
        Ok(Self::from_rng(Isaac::read_seeded(reader)?))
    }

    /// Wraps an existing generator. The keystream starts at the
    /// generator's next word.
    pub fn from_rng(rng: Isaac) -> Self {
        IsaacStream { rng }
    }

    /// Returns the underlying generator.
    pub fn into_inner(self) -> Isaac {
        self.rng
    }

    /// XORs `src` with the keystream into `dst`.
    ///
    /// Each group of up to 4 bytes draws one word. A trailing group shorter
    /// than 4 bytes still draws a whole word and discards the unused key
    /// bytes, so splitting a message at offsets that are not multiples of 4
    /// yields a different keystream than processing it in one call.
    ///
    /// # Panics
    /// Panics if `dst` and `src` differ in length.
    pub fn xor_key_stream(&mut self, dst: &mut [u8], src: &[u8]) {
        assert_eq!(
            dst.len(),
            src.len(),
            "destination and source buffers must have the same length"
        );
        for (out, input) in dst.chunks_mut(KEY_BYTES).zip(src.chunks(KEY_BYTES)) {
            let key = self.rng.next_word().to_be_bytes();
            for ((o, &i), &k) in out.iter_mut().zip(input).zip(key.iter()) {
                *o = i ^ k;
            }
        }
    }

    /// XORs `buf` with the keystream in place.
    ///
    /// Consumes the keystream exactly like
    /// [`xor_key_stream`](Self::xor_key_stream) with `dst` and `src` being
    /// the same buffer.
    pub fn apply_keystream(&mut self, buf: &mut [u8]) {
        for chunk in buf.chunks_mut(KEY_BYTES) {
            let key = self.rng.next_word().to_be_bytes();
            for (b, &k) in chunk.iter_mut().zip(key.iter()) {
                *b ^= k;
            }
        }
    }
}
