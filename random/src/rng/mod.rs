//! Deterministic random number generation
//!
//! Every consumer owns its generator (or a clone of one); there is no
//! process-wide random source. Two algorithms sit behind the shared
//! [`RandomSource`] capability set:
//!
//! - [`Alea`]: string-seeded multiply-with-carry generator with
//!   exportable, importable and cloneable state. The default.
//! - [`XorShift64Star`]: 64-bit xorshift* variant seeded from a SHA-256
//!   digest of the seed string.

mod alea;
mod mash;
mod xorshift;

pub use alea::{Alea, AleaState};
pub use xorshift::{XorShift64Star, XorShiftState};

use serde::{Deserialize, Serialize};
use std::fmt;

/// Generator algorithm tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Algorithm {
    #[default]
    Alea,
    XorShift64Star,
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Algorithm::Alea => write!(f, "alea"),
            Algorithm::XorShift64Star => write!(f, "xorshift64*"),
        }
    }
}

/// Draw/export/import capability shared by every generator
///
/// Implementations must be pure functions of their state: the same
/// state always yields the same `(value, next state)` pair.
pub trait RandomSource {
    /// Value snapshot of the generator's internal state
    type State: Copy;

    /// Next value in [0, 1)
    fn next_f64(&mut self) -> f64;

    /// Copy of the current state
    fn export_state(&self) -> Self::State;

    /// Replace the current state wholesale
    fn import_state(&mut self, state: Self::State) -> &mut Self;

    fn algorithm(&self) -> Algorithm;
}
