use super::common::*;
use crate::content::{AssessmentType, PracticeRole};
use crate::playground::{PlaygroundStepper, StepperStep};

#[test]
fn walks_role_then_type_then_review() {
    let scenarios = stepper_scenarios();
    let mut stepper = PlaygroundStepper::new(&scenarios);

    assert_eq!(stepper.step(), StepperStep::ChooseRole);
    assert!(stepper.current_scenario().is_none());

    stepper.select_role(PracticeRole::Candidate);
    assert_eq!(stepper.step(), StepperStep::ChooseType);
    assert!(stepper.current_scenario().is_none());

    assert!(stepper.select_type(AssessmentType::Coding));
    assert_eq!(stepper.step(), StepperStep::Review);
    let ids: Vec<&str> = stepper.scenarios().iter().map(|s| s.id.as_str()).collect();
    assert_eq!(ids, vec!["cand-coding-a", "cand-coding-b", "cand-coding-c"]);
    assert_eq!(stepper.scenario_index(), 0);
}

#[test]
fn type_requires_a_role() {
    let scenarios = stepper_scenarios();
    let mut stepper = PlaygroundStepper::new(&scenarios);

    assert!(!stepper.select_type(AssessmentType::Coding));
    assert_eq!(stepper.step(), StepperStep::ChooseRole);
}

#[test]
fn carousel_wraps_in_both_directions() {
    let scenarios = stepper_scenarios();
    let mut stepper = PlaygroundStepper::new(&scenarios);
    stepper.select_role(PracticeRole::Candidate);
    stepper.select_type(AssessmentType::Coding);

    stepper.previous_scenario();
    assert_eq!(
        stepper.current_scenario().map(|s| s.id.as_str()),
        Some("cand-coding-c")
    );
    stepper.next_scenario();
    assert_eq!(
        stepper.current_scenario().map(|s| s.id.as_str()),
        Some("cand-coding-a")
    );
}

#[test]
fn reselecting_a_type_restarts_the_carousel() {
    let scenarios = stepper_scenarios();
    let mut stepper = PlaygroundStepper::new(&scenarios);
    stepper.select_role(PracticeRole::Candidate);
    stepper.select_type(AssessmentType::Coding);
    stepper.next_scenario();

    assert_eq!(stepper.scenario_index(), 1);

    assert!(stepper.select_type(AssessmentType::Debugging));
    assert_eq!(stepper.step(), StepperStep::Review);
    assert_eq!(stepper.scenario_index(), 0);
    assert_eq!(
        stepper.current_scenario().map(|s| s.id.as_str()),
        Some("cand-debug")
    );
}

#[test]
fn unmatched_combination_has_no_current_scenario() {
    let scenarios = stepper_scenarios();
    let mut stepper = PlaygroundStepper::new(&scenarios);
    stepper.select_role(PracticeRole::Interviewer);
    stepper.select_type(AssessmentType::Ml);

    assert_eq!(stepper.step(), StepperStep::Review);
    assert!(stepper.current_scenario().is_none());
    stepper.next_scenario();
    assert_eq!(stepper.scenario_index(), 0);
}

#[test]
fn reset_returns_to_the_first_step() {
    let scenarios = stepper_scenarios();
    let mut stepper = PlaygroundStepper::new(&scenarios);
    stepper.select_role(PracticeRole::Interviewer);
    stepper.select_type(AssessmentType::Coding);
    assert!((stepper.progress_percent() - 100.0).abs() < 1e-9);

    stepper.reset();
    assert_eq!(stepper.step(), StepperStep::ChooseRole);
    assert_eq!(stepper.role(), None);
    assert_eq!(stepper.kind(), None);
    assert!((stepper.progress_percent() - 100.0 / 3.0).abs() < 1e-9);
}
