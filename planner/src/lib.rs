//! Gripper Planner: from a parsed command to an arm action sequence.
//!
//! The planner resolves a structured [`command::Command`] into a DNF goal
//! formula, binds the blocks world to the generic search engine and turns
//! the winning path back into primitive actions.
//!
//! The planner does NOT parse text and does NOT execute actions. Parsers
//! produce [`command::Command`] values; callers consume [`plan::Plan`]s.
//!
//! # Pipeline
//!
//! ```text
//! Command ──resolve_goal()──▶ DnfFormula ──plan()──▶ Plan
//!                                  │
//!                          BlocksWorld + search()
//! ```
//!
//! [`driver::interpret_and_plan`] runs the pipeline once per parse.

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod blocks;
pub mod command;
pub mod config;
pub mod driver;
pub mod error;
pub mod heuristic;
pub mod plan;
pub mod resolver;

pub use config::PlannerConfig;
pub use driver::{interpret_and_plan, shortest, PlanOutcome};
pub use error::{AttemptError, ConfigError, DriverError, PlanError, ResolveError};
pub use plan::{plan, Plan, PlanStep};
pub use resolver::resolve_goal;

#[cfg(test)]
mod test_world;
