//! A single relation assertion, possibly negated.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::world::object::ObjectTable;
use crate::world::relation::Relation;
use crate::world::state::WorldState;

/// `relation(args...)` with a polarity.
///
/// Ordering is derived so that literals can live in ordered sets and
/// formulas enumerate deterministically.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Literal {
    pub polarity: bool,
    pub relation: Relation,
    pub args: Vec<String>,
}

impl Literal {
    #[must_use]
    pub fn new(polarity: bool, relation: Relation, args: Vec<String>) -> Self {
        Self {
            polarity,
            relation,
            args,
        }
    }

    /// A positive two-place literal `relation(x, y)`.
    #[must_use]
    pub fn binary(relation: Relation, x: impl Into<String>, y: impl Into<String>) -> Self {
        Self::new(true, relation, vec![x.into(), y.into()])
    }

    /// The positive literal `holding(x)`.
    #[must_use]
    pub fn holding(x: impl Into<String>) -> Self {
        Self::new(true, Relation::Holding, vec![x.into()])
    }

    /// Same assertion with the opposite polarity.
    #[must_use]
    pub fn negated(&self) -> Self {
        Self {
            polarity: !self.polarity,
            ..self.clone()
        }
    }

    /// Whether the literal is true in `state`.
    #[must_use]
    pub fn holds(&self, state: &WorldState, objects: &ObjectTable) -> bool {
        state.relation_holds(objects, self.relation, &self.args) == self.polarity
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.polarity {
            f.write_str("-")?;
        }
        write!(f, "{}({})", self.relation, self.args.join(","))
    }
}
