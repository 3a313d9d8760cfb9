//! Operators module: the primitive arm actions and their application.
//!
//! Depends on `world`.

pub mod apply;
