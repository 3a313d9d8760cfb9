//! The small reference world, as a JSON snapshot.
//!
//! Thirteen objects are defined but only seven are placed; the rest must
//! never resolve. The arm starts over column 0 holding the large green
//! brick `a`.
//!
//! ```text
//!                    f
//!          l         m
//!  e       g         k
//! ---     ---  ---  ---  ---
//!  0       1    2    3    4
//! ```

use gripper_kernel::world::object::ObjectTable;
use gripper_kernel::world::snapshot::load_world;
use gripper_kernel::world::state::WorldState;

pub const SMALL_WORLD_JSON: &str = r#"{
  "stacks": [["e"], ["g", "l"], [], ["k", "m", "f"], []],
  "holding": "a",
  "arm": 0,
  "objects": {
    "a": {"form": "brick",   "size": "large", "color": "green"},
    "b": {"form": "brick",   "size": "small", "color": "white"},
    "c": {"form": "plank",   "size": "large", "color": "red"},
    "d": {"form": "plank",   "size": "small", "color": "green"},
    "e": {"form": "ball",    "size": "large", "color": "white"},
    "f": {"form": "ball",    "size": "small", "color": "black"},
    "g": {"form": "table",   "size": "large", "color": "blue"},
    "h": {"form": "table",   "size": "small", "color": "red"},
    "i": {"form": "pyramid", "size": "large", "color": "yellow"},
    "j": {"form": "pyramid", "size": "small", "color": "red"},
    "k": {"form": "box",     "size": "large", "color": "yellow"},
    "l": {"form": "box",     "size": "large", "color": "red"},
    "m": {"form": "box",     "size": "small", "color": "blue"}
  }
}"#;

/// Fingerprint of the small world's initial state.
pub const SMALL_WORLD_FINGERPRINT: &str =
    "sha256:f3836fd0f48c4d7fce1a95464075ea362bfd84b3dd513f509fe062a39c87eb46";

/// Decode [`SMALL_WORLD_JSON`].
///
/// # Panics
///
/// Panics if the embedded snapshot stops decoding. Test-only invariant.
#[must_use]
pub fn small_world() -> (WorldState, ObjectTable) {
    load_world(SMALL_WORLD_JSON.as_bytes()).expect("small world snapshot is valid")
}
