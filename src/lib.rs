//! ISAAC pseudorandom word generator and XOR stream cipher.
//!
//! ISAAC produces a reproducible stream of 32-bit words from a seed, in
//! batches of 256, and reproduces Bob Jenkins' published reference vectors
//! exactly. [`IsaacStream`] XORs byte buffers against that stream to
//! encrypt and decrypt them with a shared key.
//!
//! Neither is cryptographically secure. The cipher has no nonce and no
//! integrity check: reusing a key reuses the keystream.
//!
//! # Architecture
//!
//! ```text
//! seed bytes ──seed_words──▶ seed words ──Isaac::initialize──▶ Isaac
//!                                          (mix, two folding passes)
//! Isaac::next_word  (consumes a batch, refills through Isaac::generate)
//!     ▲
//! IsaacStream       (one word per 4 bytes, big-endian, XOR)
//! ```
//!
//! # Examples
//!
//! Draw words from a seeded generator:
//!
//! ```
//! use isaacrypt::Isaac;
//!
//! let mut rng = Isaac::from_seed_bytes(b"This is <i>not</i> the right mytext.").unwrap();
//! assert_eq!(rng.next_word(), 0xc9d3bc51);
//! assert_eq!(rng.next_word(), 0x5bc24339);
//! ```
//!
//! Encrypt and decrypt a message:
//!
//! ```
//! use isaacrypt::IsaacStream;
//!
//! let mut encoder = IsaacStream::new("my_secret_key").unwrap();
//! let mut decoder = IsaacStream::new("my_secret_key").unwrap();
//!
//! let original = b"attack at dawn".to_vec();
//! let mut buf = original.clone();
//!
//! encoder.apply_keystream(&mut buf);
//! assert_ne!(buf, original);
//!
//! decoder.apply_keystream(&mut buf);
//! assert_eq!(buf, original);
//! ```

#![deny(clippy::all)]

pub mod error;
pub mod random;
pub mod utils;

mod stream;

pub use error::IsaacError;
pub use random::isaac::{Isaac, RAND_SIZE};
pub use random::snapshot::IsaacSnapshot;
pub use stream::IsaacStream;
