//! Gripper Kernel: the world model of the blocks-world planner.
//!
//! # API Surface
//!
//! - [`world`] -- objects, world states, spatial predicates and the physical
//!   rule table
//! - [`goal`] -- literals, conjunctions and DNF goal formulas evaluated
//!   against a world state
//! - [`operators::apply::apply`] -- apply a primitive arm action to a state,
//!   producing a new state
//! - [`proof`] -- canonical JSON bytes and content hashing for state
//!   fingerprints
//!
//! # Module Dependency Direction
//!
//! `proof` ← `world` ← `goal`, `operators`
//!
//! One-way only. Nothing in the kernel searches; search lives in
//! `gripper_search`, and command interpretation in `gripper_planner`.

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod goal;
pub mod operators;
pub mod proof;
pub mod world;
