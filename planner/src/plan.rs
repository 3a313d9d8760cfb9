//! Planning: search for a goal state and read the actions off the path.

use gripper_kernel::goal::DnfFormula;
use gripper_kernel::operators::apply::{apply, apply_all, Action, ApplyFailure};
use gripper_kernel::world::object::ObjectTable;
use gripper_kernel::world::state::WorldState;
use gripper_search::{search, SearchStats};
use tracing::{debug, info};

use crate::blocks::BlocksWorld;
use crate::config::PlannerConfig;
use crate::error::PlanError;

/// Narration for a plan whose goal already holds.
pub const ALREADY_TRUE: &str = "That is already true!";

/// One plan element: an arm action or a line of narration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlanStep {
    Act(Action),
    Say(String),
}

/// An action sequence that reaches the goal, with the search's statistics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Plan {
    steps: Vec<PlanStep>,
    stats: SearchStats,
}

impl Plan {
    /// Actions and narration in execution order.
    #[must_use]
    pub fn steps(&self) -> &[PlanStep] {
        &self.steps
    }

    /// The actions alone.
    #[must_use]
    pub fn actions(&self) -> Vec<Action> {
        self.steps
            .iter()
            .filter_map(|step| match step {
                PlanStep::Act(action) => Some(*action),
                PlanStep::Say(_) => None,
            })
            .collect()
    }

    /// The actions as the token string, e.g. `"rrpld"`.
    #[must_use]
    pub fn tokens(&self) -> String {
        self.actions().into_iter().map(Action::token).collect()
    }

    /// Number of actions; narration does not count.
    #[must_use]
    pub fn len(&self) -> usize {
        self.steps
            .iter()
            .filter(|step| matches!(step, PlanStep::Act(_)))
            .count()
    }

    /// True when the goal held in the start state.
    #[must_use]
    pub fn is_already_true(&self) -> bool {
        self.len() == 0
    }

    #[must_use]
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    /// Re-apply the actions to `start`.
    ///
    /// # Errors
    ///
    /// Returns the index and failure of the first action that is not
    /// enabled.
    pub fn replay(
        &self,
        start: &WorldState,
        objects: &ObjectTable,
    ) -> Result<WorldState, (usize, ApplyFailure)> {
        apply_all(start, &self.actions(), objects)
    }
}

/// Find a cheapest action sequence from `state` to any disjunct of `goal`.
///
/// # Errors
///
/// - [`PlanError::Search`] if the config's budgets are invalid.
/// - [`PlanError::PlanNotFound`] if the budget or the reachable states ran
///   out first.
pub fn plan(
    goal: &DnfFormula,
    state: &WorldState,
    objects: &ObjectTable,
    config: &PlannerConfig,
) -> Result<Plan, PlanError> {
    let world = BlocksWorld::new(objects, goal);
    let result = search(state.clone(), &world, &config.search_policy())?;

    let not_found = || PlanError::PlanNotFound {
        termination: result.stats.termination_reason,
        expansions: result.stats.total_expansions,
    };
    if !result.is_goal_reached() {
        debug!(%goal, reason = %result.stats.termination_reason, "no plan");
        return Err(not_found());
    }
    let path = result.goal_path().ok_or_else(not_found)?;
    if let Some(reached) = path
        .last()
        .and_then(|end| world.goal().satisfied_by(end, world.objects()))
    {
        debug!(%reached, "goal conjunction reached");
    }

    let mut steps = Vec::new();
    if path.len() == 1 && config.narrate {
        steps.push(PlanStep::Say(ALREADY_TRUE.to_string()));
    }
    for (index, pair) in path.windows(2).enumerate() {
        let (from, to) = (&pair[0], &pair[1]);
        let action = action_between(from, to, objects).ok_or(PlanError::BrokenPath { index })?;
        if config.narrate {
            if let Some(line) = narration(action, from, objects) {
                steps.push(PlanStep::Say(line));
            }
        }
        steps.push(PlanStep::Act(action));
    }

    let plan = Plan {
        steps,
        stats: result.stats,
    };
    info!(
        %goal,
        actions = %plan.tokens(),
        expansions = plan.stats.total_expansions,
        "plan found"
    );
    Ok(plan)
}

/// The action leading from `from` to `to`, if any single one does.
fn action_between(from: &WorldState, to: &WorldState, objects: &ObjectTable) -> Option<Action> {
    Action::ALL
        .into_iter()
        .find(|&action| apply(from, action, objects).is_ok_and(|next| next == *to))
}

fn narration(action: Action, before: &WorldState, objects: &ObjectTable) -> Option<String> {
    match action {
        Action::Pick => {
            let top = before.top_of(before.arm())?;
            Some(format!("Picking up {}", objects.describe(top)))
        }
        Action::Drop => {
            let held = objects.describe(before.holding()?);
            Some(match before.top_of(before.arm()) {
                Some(top) => format!("Dropping {held} on {}", objects.describe(top)),
                None => format!("Dropping {held} on the floor"),
            })
        }
        Action::Left | Action::Right => None,
    }
}
