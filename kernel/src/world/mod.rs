//! World model: objects, states, spatial predicates and physics.
//!
//! Everything in here is a pure function of its inputs. States are values;
//! deriving a successor always produces a fresh copy.

pub mod object;
pub mod physics;
pub mod relation;
pub mod snapshot;
pub mod state;
