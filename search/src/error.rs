//! Typed search errors.
//!
//! `SearchError` represents pre-flight failures only. Runtime terminations
//! (goal reached, budget exhausted, frontier exhausted) are reported through
//! [`crate::stats::TerminationReason`] inside a normal `SearchResult`.

/// Typed failure for pre-flight search validation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SearchError {
    /// The policy cannot bound a search.
    #[error("invalid search policy: {detail}")]
    InvalidPolicy { detail: String },
}
