//! Engine error type for unexpected collaborator failures.
//!
//! Expected business outcomes (no route between hubs, constraint
//! violations, missing coordinates) are values, not errors.

use thiserror::Error;

/// Unexpected failures surfaced to the caller unchanged.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EngineError {
    /// A hub id was referenced that the engine does not know.
    #[error("unknown hub: {0}")]
    UnknownHub(String),
}
