//! Random number generator (xorshift32)
//!
//! Small in-crate PRNG so the engine stays deterministic under a fixed
//! seed. Quality is more than enough for picking an escape turn.

#[inline]
pub fn xorshift32(state: &mut u32) -> u32 {
    let mut x = *state;
    x ^= x << 13;
    x ^= x >> 17;
    x ^= x << 5;
    *state = x;
    x
}

/// Uniform index in `0..len`. `len` must be non-zero.
#[inline]
pub fn pick(state: &mut u32, len: usize) -> usize {
    debug_assert!(len > 0);
    (xorshift32(state) as usize) % len
}
