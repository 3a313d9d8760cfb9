//! `apply()`: apply a primitive arm action to a `WorldState`, producing a
//! new state.
//!
//! The input state is never modified. Every action costs one step.

use std::fmt;

use crate::world::object::ObjectTable;
use crate::world::physics::is_move_valid;
use crate::world::relation::Relation;
use crate::world::state::WorldState;

/// A primitive arm action. Tokens: `l`, `r`, `p`, `d`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Action {
    Left,
    Right,
    Pick,
    Drop,
}

impl Action {
    /// Every action, in enumeration order.
    pub const ALL: [Action; 4] = [Action::Left, Action::Right, Action::Pick, Action::Drop];

    /// Single-character token.
    #[must_use]
    pub fn token(self) -> char {
        match self {
            Self::Left => 'l',
            Self::Right => 'r',
            Self::Pick => 'p',
            Self::Drop => 'd',
        }
    }

    /// Parse a token.
    #[must_use]
    pub fn from_token(token: char) -> Option<Self> {
        match token {
            'l' => Some(Self::Left),
            'r' => Some(Self::Right),
            'p' => Some(Self::Pick),
            'd' => Some(Self::Drop),
            _ => None,
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.token())
    }
}

/// Typed failure for a disabled action. Fail-closed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApplyFailure {
    #[error("arm is already at the leftmost column")]
    AtLeftEdge,
    #[error("arm is already at the rightmost column")]
    AtRightEdge,
    #[error("arm is already holding {held:?}")]
    HandFull { held: String },
    #[error("column {column} is empty")]
    EmptyColumn { column: usize },
    #[error("arm is not holding anything")]
    HandEmpty,
    #[error("{held:?} cannot be dropped onto {top:?}")]
    UnstableDrop { held: String, top: String },
}

/// Whether `held` may be released onto `top`: on top of it or into it.
#[must_use]
pub fn can_drop_on(objects: &ObjectTable, held: &str, top: &str) -> bool {
    is_move_valid(objects, held, Relation::Ontop, top)
        || is_move_valid(objects, held, Relation::Inside, top)
}

/// Apply `action` to `state`.
///
/// # Errors
///
/// Returns [`ApplyFailure`] when the action is not enabled in `state`.
pub fn apply(
    state: &WorldState,
    action: Action,
    objects: &ObjectTable,
) -> Result<WorldState, ApplyFailure> {
    match action {
        Action::Left => {
            if state.arm == 0 {
                return Err(ApplyFailure::AtLeftEdge);
            }
            Ok(WorldState {
                arm: state.arm - 1,
                ..state.clone()
            })
        }
        Action::Right => {
            if state.arm + 1 >= state.stacks.len() {
                return Err(ApplyFailure::AtRightEdge);
            }
            Ok(WorldState {
                arm: state.arm + 1,
                ..state.clone()
            })
        }
        Action::Pick => {
            if let Some(held) = &state.holding {
                return Err(ApplyFailure::HandFull { held: held.clone() });
            }
            let mut stacks = state.stacks.clone();
            let top = stacks
                .get_mut(state.arm)
                .and_then(Vec::pop)
                .ok_or(ApplyFailure::EmptyColumn { column: state.arm })?;
            Ok(WorldState {
                stacks,
                arm: state.arm,
                holding: Some(top),
            })
        }
        Action::Drop => {
            let held = state.holding.as_ref().ok_or(ApplyFailure::HandEmpty)?;
            if let Some(top) = state.top_of(state.arm) {
                if !can_drop_on(objects, held, top) {
                    return Err(ApplyFailure::UnstableDrop {
                        held: held.clone(),
                        top: top.to_string(),
                    });
                }
            }
            let mut stacks = state.stacks.clone();
            if let Some(column) = stacks.get_mut(state.arm) {
                column.push(held.clone());
            }
            Ok(WorldState {
                stacks,
                arm: state.arm,
                holding: None,
            })
        }
    }
}

/// Actions enabled in `state`, paired with their successor states, in
/// [`Action::ALL`] order.
#[must_use]
pub fn successors(state: &WorldState, objects: &ObjectTable) -> Vec<(Action, WorldState)> {
    Action::ALL
        .iter()
        .filter_map(|&action| apply(state, action, objects).ok().map(|next| (action, next)))
        .collect()
}

/// Apply a sequence of actions, stopping at the first disabled one.
///
/// # Errors
///
/// Returns the index of the failing action and its [`ApplyFailure`].
pub fn apply_all(
    state: &WorldState,
    actions: &[Action],
    objects: &ObjectTable,
) -> Result<WorldState, (usize, ApplyFailure)> {
    actions
        .iter()
        .enumerate()
        .try_fold(state.clone(), |current, (i, &action)| {
            apply(&current, action, objects).map_err(|e| (i, e))
        })
}
