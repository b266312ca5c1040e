//! xorshift64* random number generator
//!
//! Fast 64-bit alternative to [`Alea`](super::Alea). The seed string is
//! digested with SHA-256 and the first eight bytes (little-endian) become
//! the initial state.
//!
//! # Algorithm
//!
//! xorshift64* is a variant of xorshift that passes TestU01's BigCrush
//! statistical tests. It uses 64-bit state and produces 64-bit output.
//! The state must never be zero.

use super::{Algorithm, RandomSource};
use crate::error::RngError;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use tracing::debug;

/// Non-zero xorshift64* state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "u64", into = "u64")]
pub struct XorShiftState(u64);

impl XorShiftState {
    /// Wrap a raw state, rejecting zero (a fixed point of xorshift)
    pub fn new(raw: u64) -> Result<Self, RngError> {
        if raw == 0 {
            return Err(RngError::InvalidState(
                "xorshift state must be non-zero".to_string(),
            ));
        }
        Ok(Self(raw))
    }

    pub fn get(&self) -> u64 {
        self.0
    }
}

impl TryFrom<u64> for XorShiftState {
    type Error = RngError;

    fn try_from(raw: u64) -> Result<Self, Self::Error> {
        XorShiftState::new(raw)
    }
}

impl From<XorShiftState> for u64 {
    fn from(state: XorShiftState) -> Self {
        state.0
    }
}

/// String-seeded xorshift64* generator
///
/// # Example
/// ```
/// use scarlet_random::XorShift64Star;
///
/// let mut rng = XorShift64Star::new("dungeon");
/// let probability = rng.next_f64();
/// assert!(probability >= 0.0 && probability < 1.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct XorShift64Star {
    state: XorShiftState,
}

impl XorShift64Star {
    /// Create a new generator from a seed string
    pub fn new(seed: &str) -> Self {
        let digest = Sha256::digest(seed.as_bytes());
        let mut bytes = [0u8; 8];
        bytes.copy_from_slice(&digest[..8]);
        let raw = u64::from_le_bytes(bytes);

        debug!(seed_len = seed.len(), "seeded xorshift64* generator");

        // Ensure state is never zero (xorshift requirement)
        Self {
            state: XorShiftState(if raw == 0 { 1 } else { raw }),
        }
    }

    /// Generate next random u64 value
    pub fn next_u64(&mut self) -> u64 {
        let mut x = self.state.0;
        x ^= x >> 12;
        x ^= x << 25;
        x ^= x >> 27;
        self.state = XorShiftState(x);
        x.wrapping_mul(0x2545F4914F6CDD1D)
    }

    /// Generate random f64 in range [0.0, 1.0) from the top 53 bits
    pub fn next_f64(&mut self) -> f64 {
        let value = self.next_u64();
        (value >> 11) as f64 * (1.0 / ((1u64 << 53) as f64))
    }
}

impl RandomSource for XorShift64Star {
    type State = XorShiftState;

    fn next_f64(&mut self) -> f64 {
        XorShift64Star::next_f64(self)
    }

    fn export_state(&self) -> XorShiftState {
        self.state
    }

    fn import_state(&mut self, state: XorShiftState) -> &mut Self {
        self.state = state;
        self
    }

    fn algorithm(&self) -> Algorithm {
        Algorithm::XorShift64Star
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_state_rejected() {
        assert!(matches!(
            XorShiftState::new(0),
            Err(RngError::InvalidState(_))
        ));
        assert_eq!(XorShiftState::new(7).unwrap().get(), 7);
    }

    #[test]
    fn test_zero_state_rejected_on_deserialize() {
        assert!(serde_json::from_str::<XorShiftState>("0").is_err());
        let state: XorShiftState = serde_json::from_str("12345").unwrap();
        assert_eq!(state.get(), 12345);
    }

    #[test]
    fn test_next_f64_in_range() {
        let mut rng = XorShift64Star::new("range");

        for _ in 0..1000 {
            let val = rng.next_f64();
            assert!(
                (0.0..1.0).contains(&val),
                "next_f64() produced value {} outside [0.0, 1.0)",
                val
            );
        }
    }

    #[test]
    fn test_next_f64_deterministic() {
        let mut rng1 = XorShift64Star::new("99999");
        let mut rng2 = XorShift64Star::new("99999");

        for _ in 0..100 {
            assert_eq!(rng1.next_f64(), rng2.next_f64(), "next_f64() not deterministic");
        }
    }

    #[test]
    fn test_empty_seed_is_valid() {
        let mut rng = XorShift64Star::new("");
        assert_ne!(rng.export_state().get(), 0);
        rng.next_u64();
    }

    #[test]
    fn test_different_seeds_different_sequences() {
        let mut a = XorShift64Star::new("a");
        let mut b = XorShift64Star::new("b");
        assert_ne!(a.next_u64(), b.next_u64());
    }
}
