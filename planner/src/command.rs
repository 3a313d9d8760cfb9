//! Structured commands, as produced by a parser.
//!
//! A command is a verb, an optional direct object and an optional
//! destination. Object descriptions filter by form, size and colour, and
//! may nest a location ("the ball in the box") that the described object
//! must satisfy in the current world.

use std::fmt;
use std::str::FromStr;

use gripper_kernel::world::object::{Form, ObjectDef, Size, UnknownName};
use gripper_kernel::world::relation::Relation;
use serde::{Deserialize, Serialize};

/// Command verb.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Verb {
    Take,
    Grasp,
    #[serde(rename = "pick up")]
    PickUp,
    Move,
    Put,
    Drop,
}

impl Verb {
    /// Verbs whose goal is to hold the object.
    #[must_use]
    pub fn is_possession(self) -> bool {
        matches!(self, Self::Take | Self::Grasp | Self::PickUp)
    }

    /// Verbs whose goal is to place the object somewhere.
    #[must_use]
    pub fn is_placement(self) -> bool {
        !self.is_possession()
    }
}

/// Form filter: any form, or one concrete form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum FormPattern {
    Any,
    Exactly(Form),
}

impl FormPattern {
    #[must_use]
    pub fn matches(self, form: Form) -> bool {
        match self {
            Self::Any => true,
            Self::Exactly(wanted) => wanted == form,
        }
    }
}

impl fmt::Display for FormPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Any => f.write_str("anyform"),
            Self::Exactly(form) => write!(f, "{form}"),
        }
    }
}

impl FromStr for FormPattern {
    type Err = UnknownName;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "anyform" {
            return Ok(Self::Any);
        }
        s.parse().map(Self::Exactly)
    }
}

impl TryFrom<String> for FormPattern {
    type Error = UnknownName;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<FormPattern> for String {
    fn from(value: FormPattern) -> Self {
        value.to_string()
    }
}

/// Description of one or more objects. A missing filter matches anything.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ObjectDesc {
    #[serde(default)]
    pub form: Option<FormPattern>,
    #[serde(default)]
    pub size: Option<Size>,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub location: Option<Box<Location>>,
}

impl ObjectDesc {
    /// Description matching objects of one form.
    #[must_use]
    pub fn of_form(form: Form) -> Self {
        Self {
            form: Some(FormPattern::Exactly(form)),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_size(mut self, size: Size) -> Self {
        self.size = Some(size);
        self
    }

    #[must_use]
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// Restrict to objects standing in `relation` to `entity`.
    #[must_use]
    pub fn located(mut self, relation: Relation, entity: ObjectDesc) -> Self {
        self.location = Some(Box::new(Location { relation, entity }));
        self
    }

    /// Whether the description names the floor.
    #[must_use]
    pub fn is_floor(&self) -> bool {
        self.form == Some(FormPattern::Exactly(Form::Floor))
    }

    /// Whether `def` passes the form, size and colour filters.
    ///
    /// The nested location is not checked here; it needs a world state.
    #[must_use]
    pub fn matches(&self, def: &ObjectDef) -> bool {
        self.form.map_or(true, |p| p.matches(def.form))
            && self.size.map_or(true, |s| s == def.size)
            && self.color.as_ref().map_or(true, |c| *c == def.color)
    }
}

/// A relation to some described object: "in a box", "beside the table".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Location {
    pub relation: Relation,
    pub entity: ObjectDesc,
}

/// A structured command. A missing `entity` means "it", the held object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Command {
    pub verb: Verb,
    #[serde(default)]
    pub entity: Option<ObjectDesc>,
    #[serde(default)]
    pub location: Option<Location>,
}

impl Command {
    /// `take <entity>`.
    #[must_use]
    pub fn take(entity: ObjectDesc) -> Self {
        Self {
            verb: Verb::Take,
            entity: Some(entity),
            location: None,
        }
    }

    /// `put <entity> <relation> <destination>`.
    #[must_use]
    pub fn put(entity: ObjectDesc, relation: Relation, destination: ObjectDesc) -> Self {
        Self {
            verb: Verb::Put,
            entity: Some(entity),
            location: Some(Location {
                relation,
                entity: destination,
            }),
        }
    }

    /// `put it <relation> <destination>`, placing whatever is held.
    #[must_use]
    pub fn put_held(relation: Relation, destination: ObjectDesc) -> Self {
        Self {
            verb: Verb::Put,
            entity: None,
            location: Some(Location {
                relation,
                entity: destination,
            }),
        }
    }
}
