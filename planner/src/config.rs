//! Planner configuration.

use gripper_search::policy::DEFAULT_MAX_EXPANSIONS;
use gripper_search::SearchPolicy;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Budgets and presentation options for one planning run.
///
/// Every field has a default, so `{}` is a valid config.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PlannerConfig {
    /// Hard cap on search expansions per parse.
    pub max_expansions: u64,
    /// Longest action sequence considered.
    pub max_depth: u32,
    /// Frontier size above which the worst nodes are pruned.
    pub max_frontier_size: u64,
    /// Interleave narration strings with the actions.
    pub narrate: bool,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            max_expansions: DEFAULT_MAX_EXPANSIONS,
            max_depth: 100,
            max_frontier_size: 10_000,
            narrate: true,
        }
    }
}

impl PlannerConfig {
    /// Decode and validate a config from JSON.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Json`] for malformed input or unknown fields,
    /// and [`ConfigError::Policy`] for budgets that cannot bound a search.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.search_policy().validate()?;
        Ok(config)
    }

    /// The search budgets this config implies.
    #[must_use]
    pub fn search_policy(&self) -> SearchPolicy {
        SearchPolicy {
            max_expansions: self.max_expansions,
            max_frontier_size: self.max_frontier_size,
            max_depth: self.max_depth,
        }
    }
}
