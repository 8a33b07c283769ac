//! ISAAC random number generation.
//!
//! Leaf-first: the [`mix`] avalanche function, the [`seed`] byte-to-word
//! transform, and the [`isaac`] generator built on both. Generator state
//! can be saved and restored through [`snapshot`].

pub mod isaac;
pub mod mix;
pub mod seed;
pub mod snapshot;
