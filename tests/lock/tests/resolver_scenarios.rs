//! Goal resolution against the small reference world.

use gripper_kernel::world::object::{Form, Size};
use gripper_kernel::world::relation::Relation;
use gripper_planner::command::{Command, ObjectDesc, Verb};
use gripper_planner::{resolve_goal, ResolveError};
use lock_tests::fixtures::small_world;

fn resolved(command: &Command) -> Result<String, ResolveError> {
    let (state, objects) = small_world();
    resolve_goal(command, &state, &objects).map(|f| f.to_string())
}

fn of(form: Form) -> ObjectDesc {
    ObjectDesc::of_form(form)
}

#[test]
fn white_ball_fits_only_the_large_boxes() {
    let cmd = Command::put(of(Form::Ball).with_color("white"), Relation::Inside, of(Form::Box));
    assert_eq!(resolved(&cmd).unwrap(), "inside(e,k) | inside(e,l)");
}

#[test]
fn ambiguous_object_yields_one_disjunct_each() {
    let cmd = Command::take(of(Form::Ball));
    assert_eq!(resolved(&cmd).unwrap(), "holding(e) | holding(f)");
}

#[test]
fn bare_placement_uses_the_held_brick() {
    let cmd = Command::put_held(Relation::Ontop, of(Form::Floor));
    assert_eq!(resolved(&cmd).unwrap(), "ontop(a,floor)");
}

#[test]
fn nested_location_filters_candidates() {
    let cmd = Command {
        verb: Verb::Grasp,
        entity: Some(of(Form::Ball).located(Relation::Inside, of(Form::Box))),
        location: None,
    };
    assert_eq!(resolved(&cmd).unwrap(), "holding(f)");
}

#[test]
fn nested_destination_is_resolved_recursively() {
    // "put the ball beside the box that is on the table"
    let destination = of(Form::Box).located(Relation::Ontop, of(Form::Table));
    let cmd = Command::put(of(Form::Ball).with_size(Size::Small), Relation::Beside, destination);
    assert_eq!(resolved(&cmd).unwrap(), "beside(f,l)");
}

#[test]
fn every_box_may_stand_on_the_table() {
    let cmd = Command::put(of(Form::Box), Relation::Ontop, of(Form::Table));
    assert_eq!(resolved(&cmd).unwrap(), "ontop(k,g) | ontop(l,g) | ontop(m,g)");
}

#[test]
fn defined_but_absent_objects_are_not_found() {
    let cmd = Command::take(of(Form::Pyramid));
    assert_eq!(resolved(&cmd), Err(ResolveError::ObjectNotFound));
    let cmd = Command::take(of(Form::Brick).with_color("white"));
    assert_eq!(resolved(&cmd), Err(ResolveError::ObjectNotFound));
}

#[test]
fn missing_destination_means_no_valid_move() {
    let cmd = Command::put(of(Form::Ball), Relation::Ontop, of(Form::Pyramid));
    assert_eq!(resolved(&cmd), Err(ResolveError::NoValidMove));
}

#[test]
fn balls_never_rest_on_objects() {
    let cmd = Command::put(of(Form::Ball), Relation::Ontop, of(Form::Table));
    assert_eq!(resolved(&cmd), Err(ResolveError::NoValidMove));
}

#[test]
fn commands_decode_from_parser_json() {
    let json = r#"{
        "verb": "put",
        "entity": {"form": "anyform", "color": "white"},
        "location": {"relation": "inside", "entity": {"form": "box", "size": "large"}}
    }"#;
    let cmd: Command = serde_json::from_str(json).unwrap();
    assert_eq!(resolved(&cmd).unwrap(), "inside(e,k) | inside(e,l)");
}
