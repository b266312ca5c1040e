//! Alea generator (Baagoe)
//!
//! Multiply-with-carry generator over three `f64` accumulators and a
//! carry. Seeded from a string through [`Mash`], so any string,
//! including the empty one, is a valid seed.
//!
//! # Algorithm
//!
//! ```text
//! t  = 2091639 * s0 + c * 2^-32
//! s0 = s1
//! s1 = s2
//! c  = trunc(t)
//! s2 = t - c        // returned
//! ```
//!
//! Every reachable accumulator is a multiple of 2^-32 in [0, 1) and the
//! carry is an integer in [0, 2091639]. [`AleaState`] enforces this on
//! every path that does not come from the generator itself.

use super::mash::{Mash, TWO_POW_32, TWO_POW_NEG_32};
use super::{Algorithm, RandomSource};
use crate::error::RngError;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

const MULTIPLIER: f64 = 2_091_639.0;

/// 2^21, the high part of a 53-bit draw
const FRACT53_HIGH: f64 = 2_097_152.0;

/// 2^-53
const TWO_POW_NEG_53: f64 = 1.110_223_024_625_156_5e-16;

/// Snapshot of an [`Alea`] generator's internal state
///
/// A plain `Copy` value: exporting hands the caller an independent copy,
/// and later draws on the generator never touch it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawAleaState", into = "RawAleaState")]
pub struct AleaState {
    s0: f64,
    s1: f64,
    s2: f64,
    c: f64,
}

/// Wire form of [`AleaState`]
///
/// Accumulators travel as their 32-bit lattice words (`s * 2^32`), so
/// a round-trip through any text format is exact.
#[derive(Serialize, Deserialize)]
struct RawAleaState {
    s0: u32,
    s1: u32,
    s2: u32,
    c: u32,
}

impl AleaState {
    /// Build a state from `[s0, s1, s2, c]`, rejecting anything the
    /// generator could never have produced
    ///
    /// # Example
    /// ```
    /// use scarlet_random::{Alea, AleaState};
    ///
    /// let rng = Alea::new("parts");
    /// let parts = rng.export_state().to_parts();
    /// assert_eq!(AleaState::from_parts(parts).unwrap(), rng.export_state());
    ///
    /// assert!(AleaState::from_parts([1.5, 0.0, 0.0, 1.0]).is_err());
    /// ```
    pub fn from_parts(parts: [f64; 4]) -> Result<Self, RngError> {
        let [s0, s1, s2, c] = parts;
        for (name, value) in [("s0", s0), ("s1", s1), ("s2", s2)] {
            if !value.is_finite() || !(0.0..1.0).contains(&value) {
                return Err(RngError::InvalidState(format!(
                    "accumulator {} = {} outside [0, 1)",
                    name, value
                )));
            }
            if (value * TWO_POW_32).fract() != 0.0 {
                return Err(RngError::InvalidState(format!(
                    "accumulator {} = {} is not a multiple of 2^-32",
                    name, value
                )));
            }
        }
        if !c.is_finite() || c.fract() != 0.0 || !(0.0..=MULTIPLIER).contains(&c) {
            return Err(RngError::InvalidState(format!(
                "carry {} is not an integer in [0, {}]",
                c, MULTIPLIER
            )));
        }
        Ok(Self { s0, s1, s2, c })
    }

    /// `[s0, s1, s2, c]`
    pub fn to_parts(&self) -> [f64; 4] {
        [self.s0, self.s1, self.s2, self.c]
    }

    fn seeded(seed: &str) -> Self {
        let mut mash = Mash::new();
        let mut s0 = mash.hash(" ");
        let mut s1 = mash.hash(" ");
        let mut s2 = mash.hash(" ");

        s0 -= mash.hash(seed);
        if s0 < 0.0 {
            s0 += 1.0;
        }
        s1 -= mash.hash(seed);
        if s1 < 0.0 {
            s1 += 1.0;
        }
        s2 -= mash.hash(seed);
        if s2 < 0.0 {
            s2 += 1.0;
        }

        Self { s0, s1, s2, c: 1.0 }
    }

    /// One step of the generator: pure `state -> (value, state)`
    fn advance(self) -> (f64, Self) {
        let t = MULTIPLIER * self.s0 + self.c * TWO_POW_NEG_32;
        let c = t.trunc();
        let s2 = t - c;
        (
            s2,
            Self {
                s0: self.s1,
                s1: self.s2,
                s2,
                c,
            },
        )
    }
}

impl TryFrom<RawAleaState> for AleaState {
    type Error = RngError;

    fn try_from(raw: RawAleaState) -> Result<Self, Self::Error> {
        AleaState::from_parts([
            f64::from(raw.s0) * TWO_POW_NEG_32,
            f64::from(raw.s1) * TWO_POW_NEG_32,
            f64::from(raw.s2) * TWO_POW_NEG_32,
            f64::from(raw.c),
        ])
    }
}

impl From<AleaState> for RawAleaState {
    fn from(state: AleaState) -> Self {
        // Exact: accumulators are multiples of 2^-32 in [0, 1), carry <= 2091639
        RawAleaState {
            s0: (state.s0 * TWO_POW_32) as u32,
            s1: (state.s1 * TWO_POW_32) as u32,
            s2: (state.s2 * TWO_POW_32) as u32,
            c: state.c as u32,
        }
    }
}

/// String-seeded deterministic random number generator
///
/// # Example
/// ```
/// use scarlet_random::Alea;
///
/// let mut rng = Alea::new("level-7");
/// let snapshot = rng.export_state();
/// let a = rng.next();
///
/// let mut replay = Alea::new("level-7");
/// replay.import_state(snapshot);
/// assert_eq!(replay.next(), a);
/// ```
#[derive(Debug, PartialEq, Serialize, Deserialize)]
pub struct Alea {
    seed: String,
    state: AleaState,
    /// Steps taken since seeding or the last import (carried over by
    /// clone and restore)
    draws: u64,
}

impl Alea {
    /// Seed a new generator. Same seed, same sequence.
    pub fn new(seed: &str) -> Self {
        let state = AleaState::seeded(seed);
        debug!(seed_len = seed.len(), "seeded alea generator");
        Self {
            seed: seed.to_string(),
            state,
            draws: 0,
        }
    }

    /// Next value in [0, 1)
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> f64 {
        let (value, state) = self.state.advance();
        self.state = state;
        self.draws += 1;
        value
    }

    /// Next value as a 32-bit unsigned integer
    pub fn next_u32(&mut self) -> u32 {
        (self.next() * TWO_POW_32) as u32
    }

    /// Next value in [0, 1) with 53 bits of resolution (two steps)
    pub fn fract53(&mut self) -> f64 {
        let low = self.next();
        let high = (self.next() * FRACT53_HIGH).trunc();
        low + high * TWO_POW_NEG_53
    }

    /// Copy of the current state
    pub fn export_state(&self) -> AleaState {
        self.state
    }

    /// Replace the current state wholesale
    ///
    /// Later draws continue from `state`, not from the seed. The draw
    /// counter restarts at zero.
    pub fn import_state(&mut self, state: AleaState) -> &mut Self {
        trace!(draws = self.draws, "importing alea state");
        self.state = state;
        self.draws = 0;
        self
    }

    pub fn seed(&self) -> &str {
        &self.seed
    }

    pub fn draws(&self) -> u64 {
        self.draws
    }

    pub(crate) fn set_draws(&mut self, draws: u64) {
        self.draws = draws;
    }
}

impl Clone for Alea {
    /// Reseed from the original string, then import this generator's state.
    ///
    /// The clone and the original share nothing afterwards.
    fn clone(&self) -> Self {
        let mut fork = Alea::new(&self.seed);
        fork.import_state(self.export_state());
        fork.draws = self.draws;
        trace!(draws = self.draws, "cloned alea generator");
        fork
    }
}

impl RandomSource for Alea {
    type State = AleaState;

    fn next_f64(&mut self) -> f64 {
        self.next()
    }

    fn export_state(&self) -> AleaState {
        Alea::export_state(self)
    }

    fn import_state(&mut self, state: AleaState) -> &mut Self {
        Alea::import_state(self, state)
    }

    fn algorithm(&self) -> Algorithm {
        Algorithm::Alea
    }
}
