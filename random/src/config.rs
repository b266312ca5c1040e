//! Seed configuration
//!
//! The host's settings store supplies a seed string, or leaves it unset to
//! get a fresh one per session.

use crate::error::RngError;
use crate::rng::{Alea, XorShift64Star};
use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

/// Generator settings as read from the host configuration
///
/// # Example
/// ```
/// use scarlet_random::RngConfig;
///
/// let config = RngConfig::from_json(r#"{ "seed": "replay-42" }"#).unwrap();
/// let mut a = config.build();
/// let mut b = config.build();
/// assert_eq!(a.next(), b.next());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RngConfig {
    /// Fixed seed; `None` means a fresh seed per session
    #[serde(default)]
    pub seed: Option<String>,
}

impl RngConfig {
    pub fn with_seed(seed: impl Into<String>) -> Self {
        Self {
            seed: Some(seed.into()),
        }
    }

    pub fn from_json(json: &str) -> Result<Self, RngError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Configured seed, or a new random UUID if none is set
    pub fn resolve_seed(&self) -> String {
        match &self.seed {
            Some(seed) => seed.clone(),
            None => {
                let seed = Uuid::new_v4().to_string();
                debug!(%seed, "generated session seed");
                seed
            }
        }
    }

    /// Build an [`Alea`] generator from the resolved seed
    pub fn build(&self) -> Alea {
        Alea::new(&self.resolve_seed())
    }

    /// Build an [`XorShift64Star`] generator from the resolved seed
    pub fn build_xorshift(&self) -> XorShift64Star {
        XorShift64Star::new(&self.resolve_seed())
    }
}
