//! Phase transition table

use crate::action::ActionKind;
use crate::error::PlayerError;
use crate::state::PhaseKind;

/// Validates a phase transition.
///
/// The player checks every transition it computes against this table.
/// With the `strict-debug` feature an illegal transition panics instead.
pub fn validate_transition(from: PhaseKind, to: PhaseKind) -> Result<(), PlayerError> {
    if allowed(from, to) {
        Ok(())
    } else {
        #[cfg(feature = "strict-debug")]
        panic!("Illegal phase transition attempted: {from:?} -> {to:?}");

        #[cfg(not(feature = "strict-debug"))]
        Err(PlayerError::IllegalTransition { from, to })
    }
}

/// Phases reachable from `from` in one accepted input
pub fn allowed_transitions(from: PhaseKind) -> Vec<PhaseKind> {
    use PhaseKind::*;
    match from {
        Gate => vec![Catalog],
        Catalog => vec![Playing],
        Playing => vec![Playing, AwaitingConsequenceDecision, AwaitingReflection, Catalog],
        AwaitingConsequenceDecision => vec![AwaitingReflection, Playing, Catalog],
        AwaitingReflection => vec![Playing, Catalog],
    }
}

/// Inputs each phase accepts. Anything else is refused as not allowed.
pub fn allowed_actions(from: PhaseKind) -> Vec<ActionKind> {
    use ActionKind::*;
    match from {
        PhaseKind::Gate => vec![Agree],
        PhaseKind::Catalog => vec![SelectScenario],
        PhaseKind::Playing => vec![Advance, GoBack],
        PhaseKind::AwaitingConsequenceDecision => vec![Decide],
        PhaseKind::AwaitingReflection => vec![SubmitReflection],
    }
}

fn allowed(from: PhaseKind, to: PhaseKind) -> bool {
    allowed_transitions(from).into_iter().any(|s| s == to)
}
