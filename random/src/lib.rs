//! Scarlet Random - deterministic, replayable randomness
//!
//! String-seeded pseudo-random number generators whose entire state can be
//! exported as a value, imported later, and cloned into independent streams.
//!
//! # Architecture
//!
//! - **rng**: generators ([`Alea`], [`XorShift64Star`]) behind the
//!   [`RandomSource`] capability trait
//! - **sampling**: ranges, picks and shuffles on top of any generator
//! - **checkpoint**: versioned, seed-bound snapshots for host persistence
//! - **config**: seed settings supplied by the host
//!
//! # Critical Invariants
//!
//! 1. Same seed, same sequence
//! 2. Every draw lies in [0, 1)
//! 3. A clone continues the original's sequence and shares no state with it
//! 4. No global random state: every consumer owns its generator

pub mod checkpoint;
pub mod config;
pub mod error;
pub mod rng;
pub mod sampling;

pub use checkpoint::{compute_seed_digest, Checkpoint, CHECKPOINT_VERSION};
pub use config::RngConfig;
pub use error::RngError;
pub use rng::{Alea, AleaState, Algorithm, RandomSource, XorShift64Star, XorShiftState};
pub use sampling::{MinMax, Sampling};
