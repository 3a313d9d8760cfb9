//! Spatial and possession relations, and the pure predicates behind them.
//!
//! Literal argument convention: `rel(x, y)` reads "x rel y", so
//! `ontop(x, y)` asks whether `x` rests on `y`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::world::object::{Form, ObjectTable, UnknownName, FLOOR};
use crate::world::state::WorldState;

/// A relation name usable in goal literals and command locations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Relation {
    Ontop,
    Inside,
    Above,
    Under,
    Beside,
    Leftof,
    Rightof,
    Holding,
}

impl Relation {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Ontop => "ontop",
            Self::Inside => "inside",
            Self::Above => "above",
            Self::Under => "under",
            Self::Beside => "beside",
            Self::Leftof => "leftof",
            Self::Rightof => "rightof",
            Self::Holding => "holding",
        }
    }

    /// Number of object arguments a literal of this relation takes.
    #[must_use]
    pub fn arity(self) -> usize {
        match self {
            Self::Holding => 1,
            _ => 2,
        }
    }
}

impl fmt::Display for Relation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Relation {
    type Err = UnknownName;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ontop" => Ok(Self::Ontop),
            "inside" => Ok(Self::Inside),
            "above" => Ok(Self::Above),
            "under" => Ok(Self::Under),
            "beside" => Ok(Self::Beside),
            "leftof" => Ok(Self::Leftof),
            "rightof" => Ok(Self::Rightof),
            "holding" => Ok(Self::Holding),
            other => Err(UnknownName {
                kind: "relation",
                name: other.to_string(),
            }),
        }
    }
}

impl WorldState {
    /// `upper` sits directly on `lower` in the same column.
    fn directly_follows(&self, lower: &str, upper: &str) -> bool {
        self.position_of(lower).is_some_and(|(column, height)| {
            self.stacks[column]
                .get(height + 1)
                .is_some_and(|k| k == upper)
        })
    }

    /// `above` rests directly on `below`. Nothing rests on top of a box.
    #[must_use]
    pub fn is_on_top(&self, objects: &ObjectTable, below: &str, above: &str) -> bool {
        if above == FLOOR {
            return false;
        }
        if below == FLOOR {
            return self
                .stacks
                .iter()
                .any(|stack| stack.first().is_some_and(|k| k == above));
        }
        if objects.form_of(below) == Some(Form::Box) {
            return false;
        }
        self.directly_follows(below, above)
    }

    /// `item` sits directly in `container`. Nothing is inside a table.
    #[must_use]
    pub fn is_inside(&self, objects: &ObjectTable, container: &str, item: &str) -> bool {
        if objects.form_of(container) == Some(Form::Table) {
            return false;
        }
        self.directly_follows(container, item)
    }

    /// `upper` is anywhere higher than `lower` in the same column; everything
    /// stacked is above the floor.
    #[must_use]
    pub fn is_above(&self, lower: &str, upper: &str) -> bool {
        if upper == FLOOR {
            return false;
        }
        if lower == FLOOR {
            return self.stack_index_of(upper).is_some();
        }
        self.same_column_order(lower, upper)
    }

    /// `lower` is anywhere below `upper` in the same column.
    #[must_use]
    pub fn is_under(&self, lower: &str, upper: &str) -> bool {
        if lower == FLOOR || upper == FLOOR {
            return false;
        }
        self.same_column_order(lower, upper)
    }

    fn same_column_order(&self, lower: &str, upper: &str) -> bool {
        match (self.position_of(lower), self.position_of(upper)) {
            (Some((lc, lh)), Some((uc, uh))) => lc == uc && lh < uh,
            _ => false,
        }
    }

    fn columns(&self, a: &str, b: &str) -> Option<(usize, usize)> {
        Some((self.stack_index_of(a)?, self.stack_index_of(b)?))
    }

    /// The two objects' columns are adjacent.
    #[must_use]
    pub fn is_beside(&self, a: &str, b: &str) -> bool {
        self.columns(a, b).is_some_and(|(ca, cb)| ca.abs_diff(cb) == 1)
    }

    /// `a` is in a column strictly left of `b`'s.
    #[must_use]
    pub fn is_left_of(&self, a: &str, b: &str) -> bool {
        self.columns(a, b).is_some_and(|(ca, cb)| ca < cb)
    }

    /// `a` is in a column strictly right of `b`'s.
    #[must_use]
    pub fn is_right_of(&self, a: &str, b: &str) -> bool {
        self.columns(a, b).is_some_and(|(ca, cb)| ca > cb)
    }

    /// Evaluate `relation(args...)` under the literal argument convention.
    ///
    /// Returns `false` when `args` does not match the relation's arity.
    #[must_use]
    pub fn relation_holds(&self, objects: &ObjectTable, relation: Relation, args: &[String]) -> bool {
        match (relation, args) {
            (Relation::Holding, [x]) => self.holding() == Some(x.as_str()),
            (Relation::Ontop, [x, y]) => self.is_on_top(objects, y, x),
            (Relation::Inside, [x, y]) => self.is_inside(objects, y, x),
            (Relation::Above, [x, y]) => self.is_above(y, x),
            (Relation::Under, [x, y]) => self.is_under(x, y),
            (Relation::Beside, [x, y]) => self.is_beside(x, y),
            (Relation::Leftof, [x, y]) => self.is_left_of(x, y),
            (Relation::Rightof, [x, y]) => self.is_right_of(x, y),
            _ => false,
        }
    }
}
