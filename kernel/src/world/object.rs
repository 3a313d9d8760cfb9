//! Object definitions and the immutable object table.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Key of the synthetic floor object. Never stored in a stack.
pub const FLOOR: &str = "floor";

/// The shape of an object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Form {
    Brick,
    Plank,
    Ball,
    Pyramid,
    Box,
    Table,
    Floor,
}

impl Form {
    /// Lowercase name, as used in commands and snapshots.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Brick => "brick",
            Self::Plank => "plank",
            Self::Ball => "ball",
            Self::Pyramid => "pyramid",
            Self::Box => "box",
            Self::Table => "table",
            Self::Floor => "floor",
        }
    }
}

impl fmt::Display for Form {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error parsing a [`Form`] or [`Size`] from its name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {kind}: {name:?}")]
pub struct UnknownName {
    pub kind: &'static str,
    pub name: String,
}

impl FromStr for Form {
    type Err = UnknownName;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "brick" => Ok(Self::Brick),
            "plank" => Ok(Self::Plank),
            "ball" => Ok(Self::Ball),
            "pyramid" => Ok(Self::Pyramid),
            "box" => Ok(Self::Box),
            "table" => Ok(Self::Table),
            "floor" => Ok(Self::Floor),
            other => Err(UnknownName {
                kind: "form",
                name: other.to_string(),
            }),
        }
    }
}

/// Object size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Size {
    Small,
    Large,
}

impl Size {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Small => "small",
            Self::Large => "large",
        }
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Size {
    type Err = UnknownName;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "small" => Ok(Self::Small),
            "large" => Ok(Self::Large),
            other => Err(UnknownName {
                kind: "size",
                name: other.to_string(),
            }),
        }
    }
}

/// An immutable object record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObjectDef {
    pub form: Form,
    pub size: Size,
    pub color: String,
}

impl ObjectDef {
    #[must_use]
    pub fn new(form: Form, size: Size, color: impl Into<String>) -> Self {
        Self {
            form,
            size,
            color: color.into(),
        }
    }

    /// Human-readable description, e.g. "the large green brick".
    #[must_use]
    pub fn describe(&self) -> String {
        if self.form == Form::Floor {
            return "the floor".to_string();
        }
        format!("the {} {} {}", self.size, self.color, self.form)
    }
}

/// Failure building an [`ObjectTable`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ObjectTableError {
    /// A stored object used the reserved floor key.
    #[error("object key {FLOOR:?} is reserved for the floor")]
    ReservedKey,
    /// A stored object declared the floor form.
    #[error("object {key:?} cannot have form floor")]
    FloorForm { key: String },
}

/// The immutable object table for a planning run.
///
/// Answers for the synthetic [`FLOOR`] object without storing it among the
/// placeable objects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObjectTable {
    objects: BTreeMap<String, ObjectDef>,
    floor: ObjectDef,
}

impl ObjectTable {
    /// Build a table from placeable objects.
    ///
    /// # Errors
    ///
    /// Returns [`ObjectTableError`] if an object uses the floor key or form.
    pub fn new(objects: BTreeMap<String, ObjectDef>) -> Result<Self, ObjectTableError> {
        if objects.contains_key(FLOOR) {
            return Err(ObjectTableError::ReservedKey);
        }
        if let Some((key, _)) = objects.iter().find(|(_, def)| def.form == Form::Floor) {
            return Err(ObjectTableError::FloorForm { key: key.clone() });
        }
        Ok(Self {
            objects,
            floor: ObjectDef::new(Form::Floor, Size::Large, ""),
        })
    }

    /// Look up an object, including the floor.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&ObjectDef> {
        if key == FLOOR {
            Some(&self.floor)
        } else {
            self.objects.get(key)
        }
    }

    /// Form of an object, including the floor.
    #[must_use]
    pub fn form_of(&self, key: &str) -> Option<Form> {
        self.get(key).map(|def| def.form)
    }

    /// Whether `key` names a placeable (non-floor) object.
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.objects.contains_key(key)
    }

    /// Placeable object keys in sorted order. The floor is excluded.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.objects.keys().map(String::as_str)
    }

    /// Placeable objects in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ObjectDef)> {
        self.objects.iter().map(|(k, v)| (k.as_str(), v))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Describe an object by key, falling back to the key itself.
    #[must_use]
    pub fn describe(&self, key: &str) -> String {
        self.get(key)
            .map_or_else(|| key.to_string(), ObjectDef::describe)
    }
}
