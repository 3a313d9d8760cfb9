//! Search policy: budgets that bound a single run.

use crate::error::SearchError;

/// Default hard cap on node expansions.
pub const DEFAULT_MAX_EXPANSIONS: u64 = 500;

/// Search budget configuration.
///
/// There is no wall-clock timeout; the expansion ceiling is the only
/// cancellation mechanism.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchPolicy {
    /// Hard cap on node expansions.
    pub max_expansions: u64,
    /// Frontier prune threshold.
    pub max_frontier_size: u64,
    /// Depth cutoff; children deeper than this are not generated.
    pub max_depth: u32,
}

impl SearchPolicy {
    /// Reject policies that cannot run a search.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::InvalidPolicy`] if `max_expansions` or
    /// `max_frontier_size` is zero.
    pub fn validate(&self) -> Result<(), SearchError> {
        if self.max_expansions == 0 {
            return Err(SearchError::InvalidPolicy {
                detail: "max_expansions must be at least 1".into(),
            });
        }
        if self.max_frontier_size == 0 {
            return Err(SearchError::InvalidPolicy {
                detail: "max_frontier_size must be at least 1".into(),
            });
        }
        Ok(())
    }
}

impl Default for SearchPolicy {
    fn default() -> Self {
        Self {
            max_expansions: DEFAULT_MAX_EXPANSIONS,
            max_frontier_size: 10_000,
            max_depth: 100,
        }
    }
}
