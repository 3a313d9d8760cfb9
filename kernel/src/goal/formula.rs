//! Conjunctions and disjunctive-normal-form goal formulas.

use std::collections::BTreeSet;
use std::fmt;

use crate::goal::literal::Literal;
use crate::world::object::ObjectTable;
use crate::world::state::WorldState;

/// A set of literals that must all hold.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Conjunction {
    literals: BTreeSet<Literal>,
}

impl Conjunction {
    /// A conjunction of exactly one literal.
    #[must_use]
    pub fn single(literal: Literal) -> Self {
        Self {
            literals: BTreeSet::from([literal]),
        }
    }

    pub fn insert(&mut self, literal: Literal) -> bool {
        self.literals.insert(literal)
    }

    pub fn literals(&self) -> impl Iterator<Item = &Literal> {
        self.literals.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.literals.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.literals.is_empty()
    }

    /// Every literal holds in `state`.
    #[must_use]
    pub fn holds(&self, state: &WorldState, objects: &ObjectTable) -> bool {
        self.literals.iter().all(|lit| lit.holds(state, objects))
    }
}

impl FromIterator<Literal> for Conjunction {
    fn from_iter<I: IntoIterator<Item = Literal>>(iter: I) -> Self {
        Self {
            literals: iter.into_iter().collect(),
        }
    }
}

impl fmt::Display for Conjunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, lit) in self.literals.iter().enumerate() {
            if i > 0 {
                f.write_str(" & ")?;
            }
            write!(f, "{lit}")?;
        }
        Ok(())
    }
}

/// A disjunction of conjunctions. Satisfied when any conjunction holds.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DnfFormula {
    conjunctions: BTreeSet<Conjunction>,
}

impl DnfFormula {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, conjunction: Conjunction) -> bool {
        self.conjunctions.insert(conjunction)
    }

    pub fn conjunctions(&self) -> impl Iterator<Item = &Conjunction> {
        self.conjunctions.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.conjunctions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.conjunctions.is_empty()
    }

    /// Some conjunction has all its literals true in `state`.
    #[must_use]
    pub fn is_satisfied(&self, state: &WorldState, objects: &ObjectTable) -> bool {
        self.conjunctions.iter().any(|c| c.holds(state, objects))
    }

    /// The first conjunction (in formula order) satisfied by `state`.
    #[must_use]
    pub fn satisfied_by(&self, state: &WorldState, objects: &ObjectTable) -> Option<&Conjunction> {
        self.conjunctions.iter().find(|c| c.holds(state, objects))
    }
}

impl FromIterator<Conjunction> for DnfFormula {
    fn from_iter<I: IntoIterator<Item = Conjunction>>(iter: I) -> Self {
        Self {
            conjunctions: iter.into_iter().collect(),
        }
    }
}

impl fmt::Display for DnfFormula {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, conj) in self.conjunctions.iter().enumerate() {
            if i > 0 {
                f.write_str(" | ")?;
            }
            write!(f, "{conj}")?;
        }
        Ok(())
    }
}
