//! Shared worlds for the gripper benchmark suites.

use std::collections::BTreeMap;

use gripper_kernel::world::object::{Form, ObjectDef, ObjectTable, Size};
use gripper_kernel::world::snapshot::WorldSnapshot;
use gripper_kernel::world::state::WorldState;

const FORMS: [Form; 4] = [Form::Brick, Form::Plank, Form::Table, Form::Box];
const COLORS: [&str; 4] = ["red", "green", "blue", "yellow"];

/// A world of `columns` columns, each holding `height` objects.
///
/// Objects are named `o0`, `o1`, ... bottom to top, column by column, and
/// cycle through forms and colours. Only large objects are used, so every
/// drop onto a non-box is physically valid.
///
/// # Panics
///
/// Panics if `columns` is zero.
#[must_use]
pub fn tower_world(columns: usize, height: usize) -> (WorldState, ObjectTable) {
    assert!(columns > 0, "a world needs at least one column");
    let mut objects = BTreeMap::new();
    let mut stacks = Vec::with_capacity(columns);
    let mut n = 0usize;
    for _ in 0..columns {
        let mut stack = Vec::with_capacity(height);
        for _ in 0..height {
            let key = format!("o{n}");
            let def = ObjectDef::new(FORMS[n % FORMS.len()], Size::Large, COLORS[n % COLORS.len()]);
            objects.insert(key.clone(), def);
            stack.push(key);
            n += 1;
        }
        stacks.push(stack);
    }
    let snapshot = WorldSnapshot {
        stacks,
        holding: None,
        arm: 0,
        objects,
    };
    snapshot
        .into_world()
        .expect("generated tower world is valid")
}

/// The same world as snapshot JSON bytes, for decode benchmarks.
///
/// # Panics
///
/// Panics if serialization fails.
#[must_use]
pub fn tower_world_json(columns: usize, height: usize) -> Vec<u8> {
    let (state, objects) = tower_world(columns, height);
    serde_json::to_vec(&WorldSnapshot::from_world(&state, &objects))
        .expect("snapshot serializes")
}
