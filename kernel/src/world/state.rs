//! `WorldState`: stacks, arm position and the held object.
//!
//! A state is a plain value. Successors are built by copying; nothing in the
//! workspace mutates a state after construction. Equality and hashing are
//! structural over `(stacks, arm, holding)`.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::proof::hash::{canonical_hash, ContentHash, DOMAIN_WORLD_STATE};
use crate::world::object::ObjectTable;

/// Typed failure for state validation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StateError {
    /// A world needs at least one column.
    #[error("world has no columns")]
    NoColumns,
    /// The arm hovers outside the columns.
    #[error("arm at column {arm} but world has {columns} columns")]
    ArmOutOfRange { arm: usize, columns: usize },
    /// An object appears in more than one place.
    #[error("object {key:?} appears more than once")]
    DuplicateObject { key: String },
    /// An object key is not in the object table (or is the floor).
    #[error("object {key:?} is not a placeable object")]
    UnknownObject { key: String },
}

/// The unit the planner searches over.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WorldState {
    pub(crate) stacks: Vec<Vec<String>>,
    pub(crate) arm: usize,
    pub(crate) holding: Option<String>,
}

impl WorldState {
    /// Construct a state without validation. See [`WorldState::validate`].
    #[must_use]
    pub fn new(stacks: Vec<Vec<String>>, arm: usize, holding: Option<String>) -> Self {
        Self {
            stacks,
            arm,
            holding,
        }
    }

    /// Check the placement invariant against an object table: every key is
    /// known and located in exactly one place, and the arm is over a column.
    ///
    /// # Errors
    ///
    /// Returns the first [`StateError`] found.
    pub fn validate(&self, objects: &ObjectTable) -> Result<(), StateError> {
        if self.stacks.is_empty() {
            return Err(StateError::NoColumns);
        }
        if self.arm >= self.stacks.len() {
            return Err(StateError::ArmOutOfRange {
                arm: self.arm,
                columns: self.stacks.len(),
            });
        }
        let mut seen = BTreeSet::new();
        let placed = self.stacks.iter().flatten().chain(self.holding.iter());
        for key in placed {
            if !objects.contains(key) {
                return Err(StateError::UnknownObject { key: key.clone() });
            }
            if !seen.insert(key.as_str()) {
                return Err(StateError::DuplicateObject { key: key.clone() });
            }
        }
        Ok(())
    }

    /// Columns, each ordered bottom to top.
    #[must_use]
    pub fn stacks(&self) -> &[Vec<String>] {
        &self.stacks
    }

    /// Column the arm hovers over.
    #[must_use]
    pub fn arm(&self) -> usize {
        self.arm
    }

    /// The held object, if any.
    #[must_use]
    pub fn holding(&self) -> Option<&str> {
        self.holding.as_deref()
    }

    #[must_use]
    pub fn column_count(&self) -> usize {
        self.stacks.len()
    }

    /// `(column, height)` of a stacked object; height 0 rests on the floor.
    #[must_use]
    pub fn position_of(&self, key: &str) -> Option<(usize, usize)> {
        self.stacks.iter().enumerate().find_map(|(column, stack)| {
            stack
                .iter()
                .position(|k| k == key)
                .map(|height| (column, height))
        })
    }

    /// Column containing `key`; `None` if held or absent.
    #[must_use]
    pub fn stack_index_of(&self, key: &str) -> Option<usize> {
        self.position_of(key).map(|(column, _)| column)
    }

    /// True if `key` is held or present in any stack.
    #[must_use]
    pub fn exists(&self, key: &str) -> bool {
        self.holding() == Some(key) || self.stack_index_of(key).is_some()
    }

    /// Top object of a column.
    #[must_use]
    pub fn top_of(&self, column: usize) -> Option<&str> {
        self.stacks.get(column)?.last().map(String::as_str)
    }

    /// Number of objects stacked above `key` (0 if held or absent).
    #[must_use]
    pub fn objects_above(&self, key: &str) -> usize {
        self.position_of(key)
            .map_or(0, |(column, height)| self.stacks[column].len() - height - 1)
    }

    /// Injective byte encoding of the state, used for fingerprints.
    ///
    /// Layout: `arm` (u64 LE), held flag byte plus length-prefixed key,
    /// column count, then per column its length and length-prefixed keys.
    #[must_use]
    pub fn identity_bytes(&self) -> Vec<u8> {
        fn put_key(buf: &mut Vec<u8>, key: &str) {
            buf.extend_from_slice(&(key.len() as u64).to_le_bytes());
            buf.extend_from_slice(key.as_bytes());
        }

        let mut buf = Vec::new();
        buf.extend_from_slice(&(self.arm as u64).to_le_bytes());
        match &self.holding {
            Some(key) => {
                buf.push(1);
                put_key(&mut buf, key);
            }
            None => buf.push(0),
        }
        buf.extend_from_slice(&(self.stacks.len() as u64).to_le_bytes());
        for stack in &self.stacks {
            buf.extend_from_slice(&(stack.len() as u64).to_le_bytes());
            for key in stack {
                put_key(&mut buf, key);
            }
        }
        buf
    }

    /// Content hash of [`WorldState::identity_bytes`].
    #[must_use]
    pub fn fingerprint(&self) -> ContentHash {
        canonical_hash(DOMAIN_WORLD_STATE, &self.identity_bytes())
    }
}
