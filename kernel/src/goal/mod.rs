//! Goal formulas: literals, conjunctions and their disjunction (DNF).

pub mod formula;
pub mod literal;

pub use formula::{Conjunction, DnfFormula};
pub use literal::Literal;
