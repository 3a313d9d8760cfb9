//! Decoding boundary: JSON world snapshot → `(WorldState, ObjectTable)`.
//!
//! Fail-closed: a snapshot that violates the placement invariant produces
//! no state at all.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::world::object::{ObjectDef, ObjectTable, ObjectTableError};
use crate::world::state::{StateError, WorldState};

/// The serialized form of a world: object definitions plus initial state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WorldSnapshot {
    pub stacks: Vec<Vec<String>>,
    #[serde(default)]
    pub holding: Option<String>,
    #[serde(default)]
    pub arm: usize,
    pub objects: BTreeMap<String, ObjectDef>,
}

/// Typed decoding failure.
#[derive(Debug, thiserror::Error)]
pub enum SnapshotError {
    #[error("malformed world snapshot: {0}")]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Objects(#[from] ObjectTableError),
    #[error(transparent)]
    State(#[from] StateError),
}

impl WorldSnapshot {
    /// Decode a snapshot from JSON bytes (no validation yet).
    ///
    /// # Errors
    ///
    /// Returns [`SnapshotError::Json`] if the bytes are not a snapshot.
    pub fn from_json_slice(bytes: &[u8]) -> Result<Self, SnapshotError> {
        Ok(serde_json::from_slice(bytes)?)
    }

    /// Validate and split into the initial state and the object table.
    ///
    /// # Errors
    ///
    /// Returns [`SnapshotError`] if the table or the state is invalid.
    pub fn into_world(self) -> Result<(WorldState, ObjectTable), SnapshotError> {
        let objects = ObjectTable::new(self.objects)?;
        let state = WorldState::new(self.stacks, self.arm, self.holding);
        state.validate(&objects)?;
        Ok((state, objects))
    }

    /// Rebuild a snapshot from a state and its table.
    #[must_use]
    pub fn from_world(state: &WorldState, objects: &ObjectTable) -> Self {
        Self {
            stacks: state.stacks().to_vec(),
            holding: state.holding().map(ToString::to_string),
            arm: state.arm(),
            objects: objects
                .iter()
                .map(|(k, v)| (k.to_string(), v.clone()))
                .collect(),
        }
    }
}

/// Decode and validate a snapshot in one step.
///
/// # Errors
///
/// Returns [`SnapshotError`] on malformed JSON or an invalid world.
pub fn load_world(bytes: &[u8]) -> Result<(WorldState, ObjectTable), SnapshotError> {
    WorldSnapshot::from_json_slice(bytes)?.into_world()
}
