//! The physical rule table: may `moving` stand in `relation` to `target`?
//!
//! Rules are checked in a fixed precedence order and the first match
//! decides. The order is part of the contract; overlapping rules (e.g. a
//! large box onto a small box) are reported by whichever fires first.

use crate::world::object::{Form, ObjectDef, ObjectTable, Size};
use crate::world::relation::Relation;

/// Why a move was rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidMove {
    #[error("a large object cannot go inside a small box")]
    LargeIntoSmallBox,
    #[error("a {moving} does not fit in that box")]
    DoesNotFitBox { moving: Form },
    #[error("a box cannot be supported by a {target}")]
    BoxOnUnstableSupport { target: Form },
    #[error("balls can only rest on the floor")]
    BallOffFloor,
    #[error("an object cannot relate to itself")]
    SelfRelation,
    #[error("unknown object {key:?}")]
    UnknownObject { key: String },
}

/// Check a move, reporting the first rule that rejects it.
///
/// # Errors
///
/// Returns the [`InvalidMove`] rule that fired, or `UnknownObject` when a
/// key is not in the table.
pub fn check_move(
    objects: &ObjectTable,
    moving: &str,
    relation: Relation,
    target: &str,
) -> Result<(), InvalidMove> {
    let lookup = |key: &str| {
        objects.get(key).ok_or_else(|| InvalidMove::UnknownObject {
            key: key.to_string(),
        })
    };
    let m = lookup(moving)?;
    let t = lookup(target)?;
    check_defs(m, relation, t)?;
    if moving == target {
        return Err(InvalidMove::SelfRelation);
    }
    Ok(())
}

/// Rules 1-4 of the table, which only look at object attributes.
fn check_defs(m: &ObjectDef, relation: Relation, t: &ObjectDef) -> Result<(), InvalidMove> {
    let supports = matches!(relation, Relation::Inside | Relation::Ontop);

    if relation == Relation::Inside
        && m.size == Size::Large
        && t.size == Size::Small
        && t.form == Form::Box
    {
        return Err(InvalidMove::LargeIntoSmallBox);
    }
    if supports
        && matches!(m.form, Form::Box | Form::Plank | Form::Pyramid)
        && t.form == Form::Box
        && (m.size == Size::Large || t.size == Size::Small)
    {
        return Err(InvalidMove::DoesNotFitBox { moving: m.form });
    }
    if supports && m.form == Form::Box && matches!(t.form, Form::Brick | Form::Pyramid) {
        return Err(InvalidMove::BoxOnUnstableSupport { target: t.form });
    }
    if relation == Relation::Ontop && m.form == Form::Ball && t.form != Form::Floor {
        return Err(InvalidMove::BallOffFloor);
    }
    Ok(())
}

/// `true` iff [`check_move`] accepts the move.
#[must_use]
pub fn is_move_valid(objects: &ObjectTable, moving: &str, relation: Relation, target: &str) -> bool {
    check_move(objects, moving, relation, target).is_ok()
}
