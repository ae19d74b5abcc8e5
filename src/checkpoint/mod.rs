//! Checkpoint and resume for calculator sessions.
//!
//! A checkpoint is a serializable snapshot of a session: the current state
//! plus its submit log, stamped with a version, a unique id, and a capture
//! time. JSON suits debugging and hand inspection; binary suits compact
//! storage. Loading validates the format version, the state invariants,
//! and the log's chain of records, so a corrupted or hand-edited
//! checkpoint cannot smuggle ill-formed data into a session.

use crate::core::{verify, CalculatorState, TransitionLog};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub mod error;

pub use error::CheckpointError;

/// Version identifier for the checkpoint format
pub const CHECKPOINT_VERSION: u32 = 1;

/// Serializable snapshot of a session.
///
/// # Example
///
/// ```rust
/// use tenkey::checkpoint::Checkpoint;
/// use tenkey::core::{CalculatorState, TransitionLog};
///
/// let checkpoint = Checkpoint::capture(&CalculatorState::new(), &TransitionLog::new());
/// let json = checkpoint.to_json().unwrap();
/// let restored = Checkpoint::from_json(&json).unwrap();
/// assert_eq!(restored.state, CalculatorState::new());
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Checkpoint {
    /// Checkpoint format version
    pub version: u32,

    /// Unique checkpoint identifier
    pub id: String,

    /// When the checkpoint was captured
    pub timestamp: DateTime<Utc>,

    /// The calculator state at capture time
    pub state: CalculatorState,

    /// Complete submit log up to capture time
    pub log: TransitionLog,
}

impl Checkpoint {
    /// Capture a snapshot of a state and its log.
    pub fn capture(state: &CalculatorState, log: &TransitionLog) -> Self {
        Self {
            version: CHECKPOINT_VERSION,
            id: Uuid::new_v4().to_string(),
            timestamp: Utc::now(),
            state: state.clone(),
            log: log.clone(),
        }
    }

    /// Encode as human-readable JSON.
    pub fn to_json(&self) -> Result<String, CheckpointError> {
        serde_json::to_string_pretty(self)
            .map_err(|e| CheckpointError::SerializationFailed(e.to_string()))
    }

    /// Decode and validate from JSON.
    pub fn from_json(json: &str) -> Result<Self, CheckpointError> {
        let checkpoint: Self = serde_json::from_str(json)
            .map_err(|e| CheckpointError::DeserializationFailed(e.to_string()))?;
        checkpoint.validate()?;
        Ok(checkpoint)
    }

    /// Encode as compact binary.
    pub fn to_binary(&self) -> Result<Vec<u8>, CheckpointError> {
        bincode::serialize(self).map_err(|e| CheckpointError::SerializationFailed(e.to_string()))
    }

    /// Decode and validate from binary.
    pub fn from_binary(bytes: &[u8]) -> Result<Self, CheckpointError> {
        let checkpoint: Self = bincode::deserialize(bytes)
            .map_err(|e| CheckpointError::DeserializationFailed(e.to_string()))?;
        checkpoint.validate()?;
        Ok(checkpoint)
    }

    pub(crate) fn validate(&self) -> Result<(), CheckpointError> {
        if self.version != CHECKPOINT_VERSION {
            return Err(CheckpointError::UnsupportedVersion {
                found: self.version,
                supported: CHECKPOINT_VERSION,
            });
        }
        verify(&self.state)?;

        // The log must chain record to record and end at the state.
        let records = self.log.records();
        for pair in records.windows(2) {
            if pair[0].to != pair[1].from {
                return Err(CheckpointError::InconsistentLog(String::from(
                    "records do not chain",
                )));
            }
        }
        if let Some(last) = records.last() {
            if last.to != self.state {
                return Err(CheckpointError::InconsistentLog(String::from(
                    "state does not match the last record",
                )));
            }
        }
        Ok(())
    }
}
