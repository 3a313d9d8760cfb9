//! Goal resolution: structured command + world → DNF goal formula.
//!
//! Every candidate object is paired with every candidate destination, and
//! each pairing that passes the physical rules becomes its own disjunct.
//! Ambiguity is kept, not resolved; the planner picks the cheapest goal.

use gripper_kernel::goal::{Conjunction, DnfFormula, Literal};
use gripper_kernel::world::object::{ObjectTable, FLOOR};
use gripper_kernel::world::physics::is_move_valid;
use gripper_kernel::world::state::WorldState;
use tracing::debug;

use crate::command::{Command, ObjectDesc};
use crate::error::ResolveError;

/// Keys of the objects in `state` matching `desc`, in key order.
///
/// A floor description yields the floor alone. A nested location keeps
/// only objects that stand in that relation to some object matching the
/// nested description, resolved recursively.
#[must_use]
pub fn find_objects(desc: &ObjectDesc, state: &WorldState, objects: &ObjectTable) -> Vec<String> {
    if desc.is_floor() {
        return vec![FLOOR.to_string()];
    }

    let candidates = objects
        .iter()
        .filter(|(key, def)| state.exists(key) && desc.matches(def))
        .map(|(key, _)| key.to_string());

    let Some(location) = &desc.location else {
        return candidates.collect();
    };

    let anchors = find_objects(&location.entity, state, objects);
    candidates
        .filter(|candidate| {
            anchors.iter().any(|anchor| {
                state.relation_holds(
                    objects,
                    location.relation,
                    &[candidate.clone(), anchor.clone()],
                )
            })
        })
        .collect()
}

/// Resolve `command` against `state` into a goal formula.
///
/// Possession verbs yield `holding(x)` for each candidate `x`. Placement
/// verbs yield `rel(x, y)` for each candidate `x` and destination `y` where
/// the move is physically valid. Without a direct object the command refers
/// to the held object, and yields nothing when the hand is empty.
///
/// # Errors
///
/// - [`ResolveError::ObjectNotFound`] if the direct object matches nothing.
/// - [`ResolveError::NoValidMove`] if no literal survives.
pub fn resolve_goal(
    command: &Command,
    state: &WorldState,
    objects: &ObjectTable,
) -> Result<DnfFormula, ResolveError> {
    let targets = match &command.entity {
        Some(desc) => {
            let found = find_objects(desc, state, objects);
            if found.is_empty() {
                return Err(ResolveError::ObjectNotFound);
            }
            found
        }
        None => state.holding().map(|h| vec![h.to_string()]).unwrap_or_default(),
    };

    let mut formula = DnfFormula::new();
    for target in targets.iter().filter(|t| t.as_str() != FLOOR) {
        if command.verb.is_possession() {
            formula.insert(Conjunction::single(Literal::holding(target.as_str())));
            continue;
        }

        let Some(location) = &command.location else {
            continue;
        };
        if location.relation.arity() != 2 {
            continue;
        }
        for destination in find_objects(&location.entity, state, objects) {
            if is_move_valid(objects, target, location.relation, &destination) {
                formula.insert(Conjunction::single(Literal::binary(
                    location.relation,
                    target.as_str(),
                    destination,
                )));
            }
        }
    }

    if formula.is_empty() {
        return Err(ResolveError::NoValidMove);
    }
    debug!(verb = ?command.verb, goals = formula.len(), %formula, "resolved goal");
    Ok(formula)
}
