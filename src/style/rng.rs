use crate::style::hash::seed_hash;

/// LCG modulus.
pub const LCG_MOD: u32 = 233_280;
const LCG_MUL: u32 = 9_301;
const LCG_INC: u32 = 49_297;

/// Deterministic pseudo-random stream seeded from a string.
///
/// `state * 9301 + 49297` stays below `2^32` for every state in `[0, 233280)`, so the step is
/// exact in `u32` and identical on every platform.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SeededRng {
    state: u32,
    draws: u32,
}

impl SeededRng {
    /// Seed from a string via [`seed_hash`].
    pub fn from_seed(seed: &str) -> Self {
        Self::from_state((seed_hash(seed) % u64::from(LCG_MOD)) as u32)
    }

    /// Start from an explicit state (reduced modulo [`LCG_MOD`]).
    pub fn from_state(state: u32) -> Self {
        Self {
            state: state % LCG_MOD,
            draws: 0,
        }
    }

    /// Current integer state.
    pub fn state(&self) -> u32 {
        self.state
    }

    /// Number of values drawn so far.
    pub fn draws(&self) -> u32 {
        self.draws
    }

    /// Advance and return a value in `[0, 1)`.
    pub fn next_f64(&mut self) -> f64 {
        self.state = (self.state * LCG_MUL + LCG_INC) % LCG_MOD;
        self.draws += 1;
        f64::from(self.state) / f64::from(LCG_MOD)
    }

    /// Uniform value in `[min, max)`.
    pub fn range(&mut self, min: f64, max: f64) -> f64 {
        min + self.next_f64() * (max - min)
    }

    /// Index in `[0, n)`; `n` must be non-zero.
    pub fn index(&mut self, n: usize) -> usize {
        debug_assert!(n > 0);
        ((self.next_f64() * n as f64).floor() as usize).min(n.saturating_sub(1))
    }

    /// Centered jitter rounded half up: `round((r - 0.5) * span)`.
    pub fn jitter(&mut self, span: f64) -> i32 {
        crate::foundation::math::round_i32((self.next_f64() - 0.5) * span)
    }

    /// `true` when the draw exceeds `threshold`.
    pub fn above(&mut self, threshold: f64) -> bool {
        self.next_f64() > threshold
    }
}

impl Iterator for SeededRng {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        Some(self.next_f64())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/style/rng.rs"]
mod tests;
