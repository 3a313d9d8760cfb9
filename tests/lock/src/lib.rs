//! Shared fixtures for the lock tests and the `plan_fixture` binary.

#![forbid(unsafe_code)]

pub mod fixtures;
