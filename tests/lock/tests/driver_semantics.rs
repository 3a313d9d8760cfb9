//! Per-parse isolation in the driver: failures are skipped, and only the
//! first one surfaces when nothing succeeds.

use gripper_kernel::world::object::Form;
use gripper_kernel::world::relation::Relation;
use gripper_planner::command::{Command, ObjectDesc};
use gripper_planner::{
    interpret_and_plan, shortest, AttemptError, DriverError, PlanError, PlannerConfig, ResolveError,
};
use lock_tests::fixtures::small_world;

fn of(form: Form) -> ObjectDesc {
    ObjectDesc::of_form(form)
}

#[test]
fn successful_parses_survive_failed_ones() {
    let (state, objects) = small_world();
    let parses = [
        Command::take(of(Form::Pyramid)),
        Command::put_held(Relation::Ontop, of(Form::Floor)),
        Command::put(of(Form::Ball), Relation::Ontop, of(Form::Table)),
    ];
    let outcomes = interpret_and_plan(&parses, &state, &objects, &PlannerConfig::default()).unwrap();
    assert_eq!(outcomes.len(), 1);
    assert_eq!(outcomes[0].parse_index, 1);
    assert_eq!(outcomes[0].formula.to_string(), "ontop(a,floor)");
}

#[test]
fn first_error_wins_when_all_fail() {
    let (state, objects) = small_world();
    let parses = [
        Command::take(of(Form::Pyramid)),
        Command::put(of(Form::Ball), Relation::Ontop, of(Form::Table)),
    ];
    let err = interpret_and_plan(&parses, &state, &objects, &PlannerConfig::default()).unwrap_err();
    assert_eq!(
        err,
        DriverError::AmbiguousNoResolution {
            attempted: 2,
            first: AttemptError::Resolve(ResolveError::ObjectNotFound),
        }
    );
    assert_eq!(err.to_string(), "no possible objects found");
}

#[test]
fn planning_failures_are_per_parse_too() {
    let (state, objects) = small_world();
    let parses = [Command::take(of(Form::Ball).with_color("white"))];
    let config = PlannerConfig {
        max_expansions: 1,
        ..PlannerConfig::default()
    };
    let err = interpret_and_plan(&parses, &state, &objects, &config).unwrap_err();
    assert!(matches!(
        err,
        DriverError::AmbiguousNoResolution {
            attempted: 1,
            first: AttemptError::Plan(PlanError::PlanNotFound { .. }),
        }
    ));
}

#[test]
fn shortest_picks_the_cheapest_parse() {
    let (state, objects) = small_world();
    let parses = [
        Command::take(of(Form::Ball).with_color("black")),
        Command::put_held(Relation::Ontop, of(Form::Floor)),
    ];
    let outcomes = interpret_and_plan(&parses, &state, &objects, &PlannerConfig::default()).unwrap();
    assert_eq!(outcomes.len(), 2);
    let best = shortest(&outcomes).unwrap();
    assert_eq!(best.parse_index, 1);
    assert_eq!(best.plan.tokens(), "rrd");
}
