use proptest::prelude::*;
use sandbox_catalog::{ScenarioCatalog, StepKind};
use sandbox_player::state_machine::{allowed_actions, allowed_transitions, validate_transition};
use sandbox_player::{
    Action, AnalyticsKind, Decision, Effect, Phase, PhaseKind, ScenarioPlayer,
};
use sandbox_test_utils::setup_builtin_player;

fn player() -> ScenarioPlayer {
    setup_builtin_player()
}

fn phase_kind() -> impl Strategy<Value = PhaseKind> {
    prop_oneof![
        Just(PhaseKind::Gate),
        Just(PhaseKind::Catalog),
        Just(PhaseKind::Playing),
        Just(PhaseKind::AwaitingConsequenceDecision),
        Just(PhaseKind::AwaitingReflection),
    ]
}

fn decision() -> impl Strategy<Value = Decision> {
    prop_oneof![
        Just(Decision::Proceed),
        Just(Decision::Modify),
        Just(Decision::Abandon),
    ]
}

fn action() -> impl Strategy<Value = Action> {
    prop_oneof![
        any::<bool>().prop_map(|agreed| Action::Agree { agreed }),
        prop_oneof![
            Just("phishing".to_string()),
            Just("bias".to_string()),
            Just("privacy".to_string()),
            Just("nonexistent".to_string()),
        ]
        .prop_map(|id| Action::SelectScenario { id }),
        Just(Action::Advance),
        Just(Action::Advance),
        Just(Action::GoBack),
        decision().prop_map(|choice| Action::Decide { choice }),
        ".{0,12}".prop_map(|text| Action::SubmitReflection { text }),
    ]
}

fn step_kind(phase: &Phase) -> Option<StepKind> {
    let (scenario, step) = phase.position()?;
    let scenario = ScenarioCatalog::builtin().get(scenario.as_str()).ok()?;
    scenario.step(step).map(|s| s.kind.clone())
}

fn completed(effects: &[Effect]) -> usize {
    effects
        .iter()
        .filter_map(Effect::as_analytics)
        .filter(|e| e.event_name == AnalyticsKind::ScenarioCompleted)
        .count()
}

#[test]
fn test_gate_transitions() {
    assert!(validate_transition(PhaseKind::Gate, PhaseKind::Catalog).is_ok());

    // Invalid
    assert!(validate_transition(PhaseKind::Gate, PhaseKind::Playing).is_err());
    assert!(validate_transition(PhaseKind::Catalog, PhaseKind::Gate).is_err());
}

#[test]
fn test_modal_transitions() {
    assert!(validate_transition(
        PhaseKind::AwaitingConsequenceDecision,
        PhaseKind::AwaitingReflection
    )
    .is_ok());
    assert!(validate_transition(PhaseKind::AwaitingReflection, PhaseKind::Playing).is_ok());

    assert!(validate_transition(
        PhaseKind::AwaitingReflection,
        PhaseKind::AwaitingConsequenceDecision
    )
    .is_err());
}

#[test]
fn test_each_phase_accepts_some_input() {
    for phase in PhaseKind::ALL {
        assert!(!allowed_actions(phase).is_empty(), "{phase}");
    }
}

proptest! {
    #[test]
    fn prop_all_transitions_are_subset_of_allowed(from in phase_kind(), to in phase_kind()) {
        let res = validate_transition(from, to);
        let allowed = allowed_transitions(from);

        if res.is_ok() {
            prop_assert!(allowed.contains(&to));
        } else {
            prop_assert!(!allowed.contains(&to));
        }
    }

    #[test]
    fn prop_select_shows_first_step(pick in 0usize..3) {
        let catalog = ScenarioCatalog::builtin();
        let id = catalog.ids().nth(pick).unwrap().clone();

        let mut p = player();
        p.agree(true).unwrap();
        p.select_scenario(id.as_str()).unwrap();

        let view = p.current_step_view().unwrap();
        let count = catalog.get(id.as_str()).unwrap().step_count();
        prop_assert_eq!(view.scenario_id, &id);
        prop_assert_eq!(view.progress.step_index, 0);
        let expected = 1.0 / count as f64;
        prop_assert!((p.progress_fraction().unwrap() - expected).abs() < f64::EPSILON);
    }

    /// Drive random input sequences and check every step against the
    /// navigation rules
    #[test]
    fn prop_random_walk_obeys_rules(actions in prop::collection::vec(action(), 1..64)) {
        let mut p = player();

        for action in actions {
            let before = p.phase().clone();
            let kind = action.kind();
            let result = p.dispatch(action.clone());
            let after = p.phase().clone();

            let effects = match result {
                Err(err) => {
                    // refused inputs never move the machine
                    prop_assert_eq!(&before, &after);
                    prop_assert!(err.is_recoverable());
                    continue;
                }
                Ok(effects) => effects,
            };

            prop_assert!(allowed_actions(before.kind()).contains(&kind));
            prop_assert!(allowed_transitions(before.kind()).contains(&after.kind()));

            let finished = completed(&effects);
            prop_assert!(finished <= 1);
            if finished == 1 {
                prop_assert_eq!(&after, &Phase::Catalog);
            }

            match (&before, &action) {
                (Phase::Playing { step, .. }, Action::Advance) => match step_kind(&before) {
                    Some(StepKind::ConsequenceGate { .. }) => {
                        prop_assert_eq!(after.kind(), PhaseKind::AwaitingConsequenceDecision);
                        prop_assert_eq!(after.position().map(|(_, i)| i), Some(*step));
                    }
                    Some(StepKind::ReflectionGate) => {
                        prop_assert_eq!(after.kind(), PhaseKind::AwaitingReflection);
                        prop_assert_eq!(after.position().map(|(_, i)| i), Some(*step));
                    }
                    _ => {
                        if let Some((_, i)) = after.position() {
                            prop_assert_eq!(i, step + 1);
                        } else {
                            prop_assert_eq!(finished, 1);
                        }
                    }
                },
                (Phase::Playing { step, .. }, Action::GoBack) => {
                    prop_assert!(effects.is_empty());
                    if *step == 0 {
                        prop_assert_eq!(&after, &Phase::Catalog);
                    } else {
                        prop_assert_eq!(after.position().map(|(_, i)| i), Some(step - 1));
                    }
                }
                (Phase::AwaitingConsequenceDecision { step, .. }, Action::Decide { choice }) => {
                    if matches!(choice, Decision::Modify | Decision::Abandon) {
                        prop_assert_eq!(after.kind(), PhaseKind::AwaitingReflection);
                        prop_assert_eq!(after.position().map(|(_, i)| i), Some(*step));
                    } else if let Some((_, i)) = after.position() {
                        prop_assert_eq!(after.kind(), PhaseKind::Playing);
                        prop_assert_eq!(i, step + 1);
                    } else {
                        prop_assert_eq!(finished, 1);
                    }
                }
                (Phase::AwaitingReflection { step, .. }, Action::SubmitReflection { text }) => {
                    let reflections: Vec<_> =
                        effects.iter().filter_map(Effect::as_reflection).collect();
                    prop_assert_eq!(reflections.len(), 1);
                    prop_assert_eq!(&reflections[0].text, text);
                    if let Some((_, i)) = after.position() {
                        prop_assert_eq!(i, step + 1);
                    } else {
                        prop_assert_eq!(finished, 1);
                    }
                }
                _ => {}
            }
        }
    }
}
