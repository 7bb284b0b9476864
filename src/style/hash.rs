//! Seed hashing.
//!
//! Two independent 32-bit multiplicative accumulators are fed one Unicode scalar value at a
//! time and avalanched into a 53-bit integer. Iteration is over `char`s (not UTF-16 code
//! units), so the result is defined for every string independently of the host runtime.

const H1_INIT: u32 = 0xdead_beef;
const H2_INIT: u32 = 0x41c6_ce57;
const H1_MUL: u32 = 2_654_435_761;
const H2_MUL: u32 = 1_597_334_677;
const AVALANCHE_A: u32 = 2_246_822_507;
const AVALANCHE_B: u32 = 3_266_489_909;

/// `2^53`, the exclusive upper bound of [`seed_hash`].
pub const HASH_SPAN: u64 = 1 << 53;

/// Hash a seed string into `[0, 2^53)`.
pub fn seed_hash(seed: &str) -> u64 {
    let mut h1 = H1_INIT;
    let mut h2 = H2_INIT;
    for ch in seed.chars() {
        let c = ch as u32;
        h1 = (h1 ^ c).wrapping_mul(H1_MUL);
        h2 = (h2 ^ c).wrapping_mul(H2_MUL);
    }

    h1 = (h1 ^ (h1 >> 16)).wrapping_mul(AVALANCHE_A)
        ^ (h2 ^ (h2 >> 13)).wrapping_mul(AVALANCHE_B);
    h2 = (h2 ^ (h2 >> 16)).wrapping_mul(AVALANCHE_A)
        ^ (h1 ^ (h1 >> 13)).wrapping_mul(AVALANCHE_B);

    (u64::from(h2 & 0x001f_ffff) << 32) | u64::from(h1)
}

/// [`seed_hash`] folded into a float in `[0, 1)`.
pub fn seed_unit(seed: &str) -> f64 {
    seed_hash(seed) as f64 / HASH_SPAN as f64
}

#[cfg(test)]
#[path = "../../tests/unit/style/hash.rs"]
mod tests;
