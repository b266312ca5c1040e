//! Error types for the random number core
//!
//! Drawing, exporting, importing and cloning are total. Errors only
//! arise at the edges: validating foreign state, restoring checkpoints,
//! parsing configuration, and range arguments to the sampling helpers.

use thiserror::Error;

/// Errors surfaced by state validation, checkpoints and sampling helpers
#[derive(Debug, Error, PartialEq)]
pub enum RngError {
    #[error("Invalid state: {0}")]
    InvalidState(String),

    #[error("Checkpoint was captured from a generator with a different seed")]
    SeedMismatch,

    #[error("Unsupported checkpoint version: found {found}, expected {expected}")]
    UnsupportedVersion { found: u32, expected: u32 },

    #[error("Invalid range: min ({min}) must be less than max ({max})")]
    InvalidRange { min: f64, max: f64 },

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for RngError {
    fn from(err: serde_json::Error) -> Self {
        RngError::Serialization(err.to_string())
    }
}
