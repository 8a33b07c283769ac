//! Low-level helpers shared by the generator and the cipher.

pub mod converter;
