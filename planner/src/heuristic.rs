//! Cost-to-goal estimate for blocks-world states.
//!
//! The estimate guides the search but is not a strict lower bound. A
//! formula scores the minimum over its conjunctions, and a satisfied
//! literal scores zero. An unsatisfied literal scores at least one.
//!
//! A conjunction scores its dominant literal, the *maximum* over its
//! literals, not the minimum: every literal must hold, so the conjunction
//! is no closer than its farthest literal.

use gripper_kernel::goal::{Conjunction, DnfFormula, Literal};
use gripper_kernel::world::object::{ObjectTable, FLOOR};
use gripper_kernel::world::relation::Relation;
use gripper_kernel::world::state::WorldState;

/// Removing one object from the top of a target costs about a pick, a
/// move and a drop.
pub const CLEARANCE_COST: usize = 3;

/// Heuristic value of `state` for `goal`.
#[must_use]
pub fn estimate(goal: &DnfFormula, state: &WorldState, objects: &ObjectTable) -> i64 {
    goal.conjunctions()
        .map(|c| conjunction_cost(c, state, objects))
        .min()
        .unwrap_or(0)
}

/// Cost of the dominant literal of `conjunction`.
#[must_use]
pub fn conjunction_cost(conjunction: &Conjunction, state: &WorldState, objects: &ObjectTable) -> i64 {
    conjunction
        .literals()
        .map(|l| literal_cost(l, state, objects))
        .max()
        .unwrap_or(0)
}

/// Estimated actions until `literal` holds.
#[must_use]
pub fn literal_cost(literal: &Literal, state: &WorldState, objects: &ObjectTable) -> i64 {
    if literal.holds(state, objects) {
        return 0;
    }
    if !literal.polarity {
        return 1;
    }

    let arm = state.arm();
    // Held objects are in the arm's column; absent ones give no signal.
    let column = |key: &str| state.stack_index_of(key).unwrap_or(arm);

    let cost = match (literal.relation, literal.args.as_slice()) {
        (Relation::Holding, [x]) => arm.abs_diff(column(x)),
        (_, [x, y]) if y == FLOOR => {
            if state.holding() == Some(x.as_str()) {
                1
            } else {
                arm.abs_diff(column(x))
            }
        }
        (Relation::Ontop | Relation::Inside | Relation::Above | Relation::Under, [x, y]) => {
            let (cx, cy) = (column(x), column(y));
            let moving = if literal.relation == Relation::Under { y } else { x };
            arm.abs_diff(cx).min(arm.abs_diff(cy))
                + cx.abs_diff(cy)
                + CLEARANCE_COST * state.objects_above(moving)
        }
        (Relation::Beside, [x, y]) => column(x).abs_diff(column(y)).saturating_sub(1),
        (Relation::Leftof, [x, y]) => (column(x) + 1).saturating_sub(column(y)),
        (Relation::Rightof, [x, y]) => (column(y) + 1).saturating_sub(column(x)),
        _ => 0,
    };
    i64::try_from(cost).unwrap_or(i64::MAX).max(1)
}
