//! Checkpoint error types.

use crate::core::Violation;
use thiserror::Error;

/// Errors that can occur during checkpoint operations
#[derive(Debug, Error)]
pub enum CheckpointError {
    /// Serialization to JSON or binary format failed
    #[error("serialization failed: {0}")]
    SerializationFailed(String),

    /// Deserialization from JSON or binary format failed
    #[error("deserialization failed: {0}")]
    DeserializationFailed(String),

    /// Checkpoint version is not supported by this build
    #[error("unsupported checkpoint version {found}, supported: {supported}")]
    UnsupportedVersion { found: u32, supported: u32 },

    /// The checkpointed state breaks a machine invariant
    #[error("checkpoint state violates invariants: {0}")]
    InvalidState(#[from] Violation),

    /// The checkpointed log does not chain, or does not end at the
    /// checkpointed state
    #[error("checkpoint log is inconsistent: {0}")]
    InconsistentLog(String),
}
