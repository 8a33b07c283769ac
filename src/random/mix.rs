//! Avalanche mixing function used while initializing the ISAAC state.
//!
//! Eight registers are run through a fixed chain of wrapping additions,
//! XORs and logical shifts, so that a single flipped input bit reaches most
//! output bits. The function is only used during initialization; word
//! generation has its own per-index accumulator shifts.

/// The golden ratio constant every mix register starts from.
pub const GOLDEN_RATIO: u32 = 0x9e37_79b9;

/// Number of unconditional mix rounds applied to the golden ratio registers.
const SCRAMBLE_ROUNDS: usize = 4;

/// Applies one round of the ISAAC mix to eight registers.
///
/// The shift amounts and the order of operations must stay exactly as
/// written. Any change still yields pseudorandom output, but not the
/// published ISAAC sequences.
///
/// # Examples
///
/// ```
/// use isaacrypt::random::mix::mix;
///
/// assert_eq!(mix([0; 8]), [0; 8]);
/// assert_ne!(mix([1, 0, 0, 0, 0, 0, 0, 0]), [1, 0, 0, 0, 0, 0, 0, 0]);
/// ```
#[must_use]
pub fn mix(x: [u32; 8]) -> [u32; 8] {
    let [mut a, mut b, mut c, mut d, mut e, mut f, mut g, mut h] = x;

    a ^= b << 11;
    d = d.wrapping_add(a);
    b = b.wrapping_add(c);

    b ^= c >> 2;
    e = e.wrapping_add(b);
    c = c.wrapping_add(d);

    c ^= d << 8;
    f = f.wrapping_add(c);
    d = d.wrapping_add(e);

    d ^= e >> 16;
    g = g.wrapping_add(d);
    e = e.wrapping_add(f);

    e ^= f << 10;
    h = h.wrapping_add(e);
    f = f.wrapping_add(g);

    f ^= g >> 4;
    a = a.wrapping_add(f);
    g = g.wrapping_add(h);

    g ^= h << 8;
    b = b.wrapping_add(g);
    h = h.wrapping_add(a);

    h ^= a >> 9;
    c = c.wrapping_add(h);
    a = a.wrapping_add(b);

    [a, b, c, d, e, f, g, h]
}

/// Returns the eight registers every initialization starts from.
///
/// Each register is set to [`GOLDEN_RATIO`] and the set is mixed four
/// times. The result does not depend on any seed.
#[must_use]
pub fn scrambled_golden_ratio() -> [u32; 8] {
    let mut x = [GOLDEN_RATIO; 8];
    for _ in 0..SCRAMBLE_ROUNDS {
        x = mix(x);
    }
    x
}
