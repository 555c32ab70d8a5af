//! Checkpoint - Save/Load Generator State
//!
//! Wraps the binary layouts from [`crate::serialization`] in a small JSON
//! document so a generator can be parked in a file or config store and
//! resumed later.
//!
//! ```json
//! {"kind": "ChaCha20", "state": "YXB4ZTMgZG55Yi0yayBldA..."}
//! ```
//!
//! # Critical Invariants
//!
//! - **Determinism**: a restored generator continues the exact sequence of
//!   the captured one
//! - **Kind Matching**: `state` is only ever decoded by the serializer for
//!   `kind`
//! - **Fixed Size**: the decoded `state` is exactly `kind.state_size()` bytes

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::rng::{AnyGenerator, GeneratorKind};
use crate::serialization::{AnySerializer, SerializationError};

// ============================================================================
// Errors
// ============================================================================

/// Errors raised while capturing, validating or restoring a snapshot
#[derive(Debug, Error)]
pub enum CheckpointError {
    #[error("Serialization error: {0}")]
    Serialization(#[from] SerializationError),

    #[error("JSON error: {0}")]
    Json(String),

    #[error("Invalid snapshot: {0}")]
    InvalidSnapshot(String),
}

impl From<serde_json::Error> for CheckpointError {
    fn from(err: serde_json::Error) -> Self {
        CheckpointError::Json(err.to_string())
    }
}

// ============================================================================
// Snapshot Structure
// ============================================================================

/// Serialized generator tagged with its kind
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratorSnapshot {
    /// Which generator `state` belongs to
    pub kind: GeneratorKind,

    /// Standard base64 of the big-endian state layout
    pub state: String,
}

impl GeneratorSnapshot {
    /// Capture the current state of `generator`
    ///
    /// # Example
    /// ```
    /// use seedstream_core_rs::checkpoint::GeneratorSnapshot;
    /// use seedstream_core_rs::rng::{Generator, GeneratorKind};
    ///
    /// let mut rng = GeneratorKind::SplittableRandom.seeded(1234).unwrap();
    /// let snapshot = GeneratorSnapshot::capture(&rng).unwrap();
    /// assert_eq!(snapshot.state, "AAAAAAAABNKeN3m5f0p8FQ==");
    ///
    /// let mut restored = snapshot.restore().unwrap();
    /// assert_eq!(restored.generate(), rng.generate());
    /// ```
    pub fn capture(generator: &AnyGenerator) -> Result<Self, CheckpointError> {
        let serializer = AnySerializer::for_generator(generator);
        Ok(Self {
            kind: serializer.kind(),
            state: serializer.write_to_base64_string(generator)?,
        })
    }

    /// Rebuild the generator this snapshot was captured from
    pub fn restore(&self) -> Result<AnyGenerator, CheckpointError> {
        let bytes = validate_snapshot(self)?;
        let generator = AnySerializer::new(self.kind).read_from_byte_array(&bytes)?;
        log::debug!("restored {} generator from snapshot", self.kind);
        Ok(generator)
    }

    pub fn to_json(&self) -> Result<String, CheckpointError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Parse and validate a snapshot document
    pub fn from_json(json: &str) -> Result<Self, CheckpointError> {
        let snapshot: Self = serde_json::from_str(json)?;
        validate_snapshot(&snapshot)?;
        Ok(snapshot)
    }
}

// ============================================================================
// Validation Functions
// ============================================================================

/// Validate snapshot integrity, returning the decoded state bytes
///
/// Checks:
/// - `state` is valid standard base64
/// - the decoded length is exactly the kind's fixed state size
pub fn validate_snapshot(snapshot: &GeneratorSnapshot) -> Result<Vec<u8>, CheckpointError> {
    let bytes = STANDARD.decode(&snapshot.state).map_err(|e| {
        CheckpointError::InvalidSnapshot(format!("state is not valid base64: {}", e))
    })?;

    let expected = snapshot.kind.state_size();
    if bytes.len() != expected {
        return Err(CheckpointError::InvalidSnapshot(format!(
            "{} state must be {} bytes, got {}",
            snapshot.kind,
            expected,
            bytes.len()
        )));
    }

    Ok(bytes)
}
