//! `SearchStats`: counters and termination reason of one search run.

use gripper_kernel::proof::canon::{canonical_json_bytes, CanonError};
use gripper_kernel::proof::hash::{canonical_hash, ContentHash, DOMAIN_SEARCH_STATS};

/// Why the search terminated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminationReason {
    /// A node satisfying the goal was popped.
    GoalReached { node_id: u64 },
    /// Every reachable state was expanded without meeting the goal.
    FrontierExhausted,
    /// `max_expansions` was hit before a goal was found.
    ExpansionBudgetExceeded,
}

impl TerminationReason {
    /// Stable snake-case tag.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::GoalReached { .. } => "goal_reached",
            Self::FrontierExhausted => "frontier_exhausted",
            Self::ExpansionBudgetExceeded => "expansion_budget_exceeded",
        }
    }
}

impl std::fmt::Display for TerminationReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Aggregate counters for a search run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchStats {
    pub world_id: String,
    pub root_state_fingerprint: String,
    pub total_expansions: u64,
    pub total_candidates_generated: u64,
    pub total_duplicates_suppressed: u64,
    pub total_depth_skipped: u64,
    pub total_dead_ends: u64,
    pub total_pruned: u64,
    pub frontier_high_water: u64,
    pub termination_reason: TerminationReason,
}

impl SearchStats {
    /// Serialize to canonical JSON bytes (sorted keys, compact).
    ///
    /// # Errors
    ///
    /// Returns [`CanonError`] if serialization fails.
    pub fn to_canonical_json_bytes(&self) -> Result<Vec<u8>, CanonError> {
        canonical_json_bytes(&self.to_json_value())
    }

    /// Content hash of the canonical JSON form.
    ///
    /// # Errors
    ///
    /// Returns [`CanonError`] if serialization fails.
    pub fn digest(&self) -> Result<ContentHash, CanonError> {
        let bytes = self.to_canonical_json_bytes()?;
        Ok(canonical_hash(DOMAIN_SEARCH_STATS, &bytes))
    }

    fn to_json_value(&self) -> serde_json::Value {
        let termination = match self.termination_reason {
            TerminationReason::GoalReached { node_id } => {
                serde_json::json!({"node_id": node_id, "type": "goal_reached"})
            }
            other => serde_json::json!({"type": other.as_str()}),
        };
        serde_json::json!({
            "frontier_high_water": self.frontier_high_water,
            "root_state_fingerprint": self.root_state_fingerprint,
            "termination_reason": termination,
            "total_candidates_generated": self.total_candidates_generated,
            "total_dead_ends": self.total_dead_ends,
            "total_depth_skipped": self.total_depth_skipped,
            "total_duplicates_suppressed": self.total_duplicates_suppressed,
            "total_expansions": self.total_expansions,
            "total_pruned": self.total_pruned,
            "world_id": self.world_id,
        })
    }
}
