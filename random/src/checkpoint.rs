//! Checkpoint - Save/Load Generator State
//!
//! Wraps an exported [`AleaState`] in a versioned envelope that a host can
//! persist in whatever format it likes (JSON helpers included).
//!
//! # Critical Invariants
//!
//! - **Determinism**: a restored generator continues exactly where the
//!   checkpointed one was
//! - **Seed Matching**: a checkpoint can only be restored into a generator
//!   seeded with the same string (compared by SHA-256 digest, the seed
//!   itself is never stored)
//! - **Shape**: the embedded state is validated on deserialize

use crate::error::RngError;
use crate::rng::{Alea, AleaState};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use tracing::{debug, instrument, warn};

/// Current checkpoint envelope version
pub const CHECKPOINT_VERSION: u32 = 1;

// ============================================================================
// Snapshot Structure
// ============================================================================

/// Persistable generator snapshot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Checkpoint {
    /// Envelope version (see [`CHECKPOINT_VERSION`])
    pub version: u32,

    /// SHA-256 of the seed string, hex encoded
    pub seed_digest: String,

    /// Draws taken when the checkpoint was captured
    pub draws: u64,

    pub state: AleaState,
}

impl Checkpoint {
    pub fn to_json(&self) -> Result<String, RngError> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self, RngError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Check that this checkpoint can be restored into a generator
    /// seeded with `seed`
    pub fn validate_for_seed(&self, seed: &str) -> Result<(), RngError> {
        if self.version != CHECKPOINT_VERSION {
            return Err(RngError::UnsupportedVersion {
                found: self.version,
                expected: CHECKPOINT_VERSION,
            });
        }

        if self.seed_digest != compute_seed_digest(seed) {
            return Err(RngError::SeedMismatch);
        }

        Ok(())
    }
}

// ============================================================================
// Seed Hashing
// ============================================================================

/// Compute the hex SHA-256 digest of a seed string
pub fn compute_seed_digest(seed: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(seed.as_bytes());
    let result = hasher.finalize();

    format!("{:x}", result)
}

// ============================================================================
// Generator Integration
// ============================================================================

impl Alea {
    /// Capture the current state in a persistable envelope
    ///
    /// # Example
    /// ```
    /// use scarlet_random::Alea;
    ///
    /// let mut rng = Alea::new("save-slot-1");
    /// rng.next();
    /// let json = rng.checkpoint().to_json().unwrap();
    ///
    /// let saved = scarlet_random::Checkpoint::from_json(&json).unwrap();
    /// let mut resumed = Alea::new("save-slot-1");
    /// resumed.restore(&saved).unwrap();
    /// assert_eq!(resumed.next(), rng.next());
    /// ```
    pub fn checkpoint(&self) -> Checkpoint {
        Checkpoint {
            version: CHECKPOINT_VERSION,
            seed_digest: compute_seed_digest(self.seed()),
            draws: self.draws(),
            state: self.export_state(),
        }
    }

    /// Restore from a checkpoint captured on a generator with the same seed
    ///
    /// On error the generator is left untouched.
    #[instrument(skip(self, checkpoint), fields(draws = checkpoint.draws))]
    pub fn restore(&mut self, checkpoint: &Checkpoint) -> Result<&mut Self, RngError> {
        if let Err(err) = checkpoint.validate_for_seed(self.seed()) {
            warn!(%err, "rejected checkpoint");
            return Err(err);
        }

        self.import_state(checkpoint.state);
        self.set_draws(checkpoint.draws);
        debug!("restored alea generator from checkpoint");
        Ok(self)
    }
}
