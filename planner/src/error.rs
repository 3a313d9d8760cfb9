//! Typed planner errors.
//!
//! Resolution and planning failures are per parse; the driver collects them
//! and surfaces the first only when every parse failed.

use gripper_search::{SearchError, TerminationReason};

/// Failure turning a command into a goal formula.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ResolveError {
    /// No object in the world matches the direct-object description.
    #[error("no possible objects found")]
    ObjectNotFound,
    /// Candidates exist, but no destination passes the physical rules.
    #[error("no possible objects to move")]
    NoValidMove,
}

/// Failure finding an action sequence for a goal formula.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PlanError {
    /// The search ended without reaching a goal state.
    #[error("{}", not_found_message(.termination, .expansions))]
    PlanNotFound {
        termination: TerminationReason,
        expansions: u64,
    },
    /// Two consecutive states on the goal path are not one action apart.
    #[error("no action leads from path step {index} to the next")]
    BrokenPath { index: usize },
    #[error(transparent)]
    Search(#[from] SearchError),
}

#[allow(clippy::trivially_copy_pass_by_ref)]
fn not_found_message(termination: &TerminationReason, expansions: &u64) -> String {
    match termination {
        TerminationReason::FrontierExhausted => {
            format!("no plan exists: search frontier exhausted after {expansions} expansions")
        }
        _ => format!("no plan found within budget of {expansions} expansions"),
    }
}

/// Failure of one parse: either its resolution or its planning.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AttemptError {
    #[error(transparent)]
    Resolve(#[from] ResolveError),
    #[error(transparent)]
    Plan(#[from] PlanError),
}

/// Failure of a whole interpretation run.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DriverError {
    /// The caller supplied no parses at all.
    #[error("nothing to interpret")]
    NoParses,
    /// Every parse failed; `first` is the first failure encountered.
    #[error("{first}")]
    AmbiguousNoResolution { attempted: usize, first: AttemptError },
}

/// Failure loading a [`crate::PlannerConfig`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("malformed planner config: {0}")]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Policy(#[from] SearchError),
}
