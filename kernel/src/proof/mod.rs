//! Proof module: canonical JSON encoding and content hashing.
//!
//! Depends on nothing internal. `world` uses it for state fingerprints.

pub mod canon;
pub mod hash;
