//! Plans replay to goal states; empty plans only for goals already true;
//! impossible goals terminate.

use gripper_kernel::goal::{Conjunction, DnfFormula, Literal};
use gripper_kernel::world::object::{Form, FLOOR};
use gripper_kernel::world::relation::Relation;
use gripper_kernel::world::snapshot::load_world;
use gripper_planner::command::{Command, ObjectDesc};
use gripper_planner::plan::ALREADY_TRUE;
use gripper_planner::{plan, resolve_goal, PlanError, PlanStep, PlannerConfig};
use gripper_search::TerminationReason;
use lock_tests::fixtures::small_world;

fn of(form: Form) -> ObjectDesc {
    ObjectDesc::of_form(form)
}

/// Resolve, plan, replay, and check the end state satisfies the goal.
fn plan_and_replay(command: &Command, config: &PlannerConfig) -> String {
    let (state, objects) = small_world();
    let goal = resolve_goal(command, &state, &objects).unwrap();
    let plan = plan(&goal, &state, &objects, config).unwrap();
    let end = plan.replay(&state, &objects).unwrap();
    assert!(
        goal.is_satisfied(&end, &objects),
        "plan {} does not reach {goal}",
        plan.tokens()
    );
    end.validate(&objects).unwrap();
    plan.tokens()
}

#[test]
fn drop_on_the_nearest_empty_column() {
    let cmd = Command::put_held(Relation::Ontop, of(Form::Floor));
    assert_eq!(plan_and_replay(&cmd, &PlannerConfig::default()), "rrd");
}

#[test]
fn free_the_hand_before_picking() {
    let cmd = Command::take(of(Form::Ball).located(Relation::Inside, of(Form::Box)));
    let tokens = plan_and_replay(&cmd, &PlannerConfig::default());
    assert_eq!(tokens.len(), 5);
    assert!(tokens.starts_with('d') || tokens.starts_with('r'));
    assert!(tokens.ends_with('p'));
}

#[test]
fn ambiguous_goal_reaches_one_disjunct() {
    let cmd = Command::put(of(Form::Ball).with_color("white"), Relation::Inside, of(Form::Box));
    let config = PlannerConfig {
        max_expansions: 5_000,
        ..PlannerConfig::default()
    };
    let tokens = plan_and_replay(&cmd, &config);
    assert!(tokens.ends_with('d'));
}

#[test]
fn already_true_goal_needs_no_expansion() {
    let (state, objects) = small_world();
    // The small black ball already sits in the small blue box.
    let cmd = Command::put(of(Form::Ball), Relation::Inside, of(Form::Box));
    let goal = resolve_goal(&cmd, &state, &objects).unwrap();
    let plan = plan(&goal, &state, &objects, &PlannerConfig::default()).unwrap();
    assert!(plan.is_already_true());
    assert_eq!(plan.stats().total_expansions, 0);
    assert_eq!(plan.steps(), [PlanStep::Say(ALREADY_TRUE.to_string())]);
    assert_eq!(plan.replay(&state, &objects).unwrap(), state);
}

#[test]
fn held_and_on_floor_is_cut_off_by_budget() {
    let (state, objects) = small_world();
    let impossible: Conjunction = [
        Literal::holding("a"),
        Literal::binary(Relation::Ontop, "a", FLOOR),
    ]
    .into_iter()
    .collect();
    let goal: DnfFormula = [impossible].into_iter().collect();
    let config = PlannerConfig {
        max_expansions: 5,
        ..PlannerConfig::default()
    };
    assert_eq!(
        plan(&goal, &state, &objects, &config),
        Err(PlanError::PlanNotFound {
            termination: TerminationReason::ExpansionBudgetExceeded,
            expansions: 5,
        })
    );
}

#[test]
fn unreachable_goal_in_finite_world_exhausts_frontier() {
    let (state, objects) = load_world(
        br#"{
            "stacks": [["a", "b"]],
            "objects": {
                "a": {"form": "brick", "size": "large", "color": "red"},
                "b": {"form": "brick", "size": "small", "color": "blue"}
            }
        }"#,
    )
    .unwrap();
    let goal: DnfFormula = [Conjunction::single(Literal::binary(Relation::Leftof, "a", "b"))]
        .into_iter()
        .collect();
    let err = plan(&goal, &state, &objects, &PlannerConfig::default()).unwrap_err();
    assert!(matches!(
        err,
        PlanError::PlanNotFound {
            termination: TerminationReason::FrontierExhausted,
            ..
        }
    ));
}

#[test]
fn narration_precedes_picks_and_drops() {
    let (state, objects) = small_world();
    let cmd = Command::put_held(Relation::Ontop, of(Form::Floor));
    let goal = resolve_goal(&cmd, &state, &objects).unwrap();
    let plan = plan(&goal, &state, &objects, &PlannerConfig::default()).unwrap();
    let last_two = &plan.steps()[plan.steps().len() - 2..];
    assert_eq!(
        last_two,
        [
            PlanStep::Say("Dropping the large green brick on the floor".to_string()),
            PlanStep::Act(gripper_kernel::operators::apply::Action::Drop),
        ]
    );
}
