//! Shared world fixture for unit tests.

use std::collections::BTreeMap;

use gripper_kernel::world::object::{Form, ObjectDef, ObjectTable, Size};
use gripper_kernel::world::state::WorldState;

/// Objects:
/// `a` large green brick, `b` small white ball, `c` large red box,
/// `d` small blue box, `e` large yellow table, `f` small black ball.
///
/// Stacks (bottom to top): `[e a] [c b] [d] [f]`, arm over column 0.
pub(crate) fn small_world() -> (WorldState, ObjectTable) {
    let objects = ObjectTable::new(BTreeMap::from([
        ("a".to_string(), ObjectDef::new(Form::Brick, Size::Large, "green")),
        ("b".to_string(), ObjectDef::new(Form::Ball, Size::Small, "white")),
        ("c".to_string(), ObjectDef::new(Form::Box, Size::Large, "red")),
        ("d".to_string(), ObjectDef::new(Form::Box, Size::Small, "blue")),
        ("e".to_string(), ObjectDef::new(Form::Table, Size::Large, "yellow")),
        ("f".to_string(), ObjectDef::new(Form::Ball, Size::Small, "black")),
    ]))
    .unwrap();
    let state = WorldState::new(
        vec![
            vec!["e".into(), "a".into()],
            vec!["c".into(), "b".into()],
            vec!["d".into()],
            vec!["f".into()],
        ],
        0,
        None,
    );
    state.validate(&objects).unwrap();
    (state, objects)
}
