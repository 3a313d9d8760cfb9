//! Driver: plan every parse of a command independently.
//!
//! A parse that fails to resolve or plan is logged and skipped. Only when
//! every parse fails is an error returned, and then it is the first one;
//! later failures are dropped.

use gripper_kernel::goal::DnfFormula;
use gripper_kernel::world::object::ObjectTable;
use gripper_kernel::world::state::WorldState;
use tracing::{debug, warn};

use crate::command::Command;
use crate::config::PlannerConfig;
use crate::error::{AttemptError, DriverError};
use crate::plan::{plan, Plan};
use crate::resolver::resolve_goal;

/// A successful parse: its goal and the plan that reaches it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlanOutcome {
    /// Position of the parse in the caller's list.
    pub parse_index: usize,
    pub formula: DnfFormula,
    pub plan: Plan,
}

/// Resolve and plan each parse against the same start state.
///
/// # Errors
///
/// - [`DriverError::NoParses`] if `parses` is empty.
/// - [`DriverError::AmbiguousNoResolution`] carrying the first failure if
///   no parse produced a plan.
pub fn interpret_and_plan(
    parses: &[Command],
    state: &WorldState,
    objects: &ObjectTable,
    config: &PlannerConfig,
) -> Result<Vec<PlanOutcome>, DriverError> {
    if parses.is_empty() {
        return Err(DriverError::NoParses);
    }

    let mut outcomes = Vec::new();
    let mut first_error = None;
    for (parse_index, command) in parses.iter().enumerate() {
        match attempt(command, state, objects, config) {
            Ok((formula, plan)) => {
                debug!(parse_index, actions = %plan.tokens(), "parse planned");
                outcomes.push(PlanOutcome {
                    parse_index,
                    formula,
                    plan,
                });
            }
            Err(error) => {
                warn!(parse_index, %error, "parse skipped");
                first_error.get_or_insert(error);
            }
        }
    }

    match first_error {
        Some(first) if outcomes.is_empty() => Err(DriverError::AmbiguousNoResolution {
            attempted: parses.len(),
            first,
        }),
        _ => Ok(outcomes),
    }
}

fn attempt(
    command: &Command,
    state: &WorldState,
    objects: &ObjectTable,
    config: &PlannerConfig,
) -> Result<(DnfFormula, Plan), AttemptError> {
    let formula = resolve_goal(command, state, objects)?;
    let plan = plan(&formula, state, objects, config)?;
    Ok((formula, plan))
}

/// The outcome with the fewest actions; earlier parses win ties.
#[must_use]
pub fn shortest(outcomes: &[PlanOutcome]) -> Option<&PlanOutcome> {
    outcomes
        .iter()
        .min_by_key(|o| (o.plan.len(), o.parse_index))
}
