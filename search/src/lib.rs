//! Gripper Search: generic best-first (A*) search with a content-hashed
//! visited set and a hard expansion budget.
//!
//! This crate knows nothing about blocks, arms or goals. Worlds plug in
//! through [`contract::SearchWorld`]; the only kernel dependency is the
//! `proof` module for fingerprints and canonical JSON.
//!
//! # Crate dependency graph
//!
//! ```text
//! gripper_kernel  ←  gripper_search  ←  gripper_planner
//! (world model)      (frontier, nodes)   (resolver, planner, driver)
//! ```
//!
//! # Key types
//!
//! - [`SearchNode`] -- immutable state node with deterministic ordering
//! - [`BestFirstFrontier`] -- min-heap frontier plus visited set
//! - [`SearchPolicy`] -- expansion budget, depth cap, frontier bound
//! - [`SearchStats`] -- counters and termination reason of one run
//! - [`SearchWorld`] -- trait for worlds that support search

#![forbid(unsafe_code)]

pub mod contract;
pub mod error;
pub mod frontier;
pub mod node;
pub mod policy;
pub mod search;
pub mod stats;

pub use contract::SearchWorld;
pub use error::SearchError;
pub use frontier::BestFirstFrontier;
pub use node::SearchNode;
pub use policy::SearchPolicy;
pub use search::{reconstruct_path, search, SearchResult};
pub use stats::{SearchStats, TerminationReason};
