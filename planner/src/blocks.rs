//! `BlocksWorld`: binds the blocks world to the generic search engine.
//!
//! States are [`WorldState`] values, edges are the four arm actions with
//! unit cost, and the goal test is the DNF formula.

use gripper_kernel::goal::DnfFormula;
use gripper_kernel::operators::apply::successors;
use gripper_kernel::world::object::ObjectTable;
use gripper_kernel::world::state::WorldState;
use gripper_search::SearchWorld;

use crate::heuristic::estimate;

/// A goal formula over a fixed object table.
pub struct BlocksWorld<'a> {
    objects: &'a ObjectTable,
    goal: &'a DnfFormula,
}

impl<'a> BlocksWorld<'a> {
    #[must_use]
    pub fn new(objects: &'a ObjectTable, goal: &'a DnfFormula) -> Self {
        Self { objects, goal }
    }

    #[must_use]
    pub fn objects(&self) -> &ObjectTable {
        self.objects
    }

    #[must_use]
    pub fn goal(&self) -> &DnfFormula {
        self.goal
    }
}

impl SearchWorld for BlocksWorld<'_> {
    type State = WorldState;

    #[allow(clippy::unnecessary_literal_bound)]
    fn world_id(&self) -> &str {
        "blocks_world"
    }

    fn identity_bytes(&self, state: &WorldState) -> Vec<u8> {
        state.identity_bytes()
    }

    fn successors(&self, state: &WorldState) -> Vec<WorldState> {
        successors(state, self.objects)
            .into_iter()
            .map(|(_, next)| next)
            .collect()
    }

    fn is_goal(&self, state: &WorldState) -> bool {
        self.goal.is_satisfied(state, self.objects)
    }

    fn heuristic(&self, state: &WorldState) -> i64 {
        estimate(self.goal, state, self.objects)
    }
}
