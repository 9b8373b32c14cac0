//! Testing utilities for the ethical sandbox workspace
//!
//! Shared fixtures, deterministic players and walk helpers.

#![allow(missing_docs)]

use chrono::{DateTime, TimeZone, Utc};
use sandbox_catalog::{AffectedPerson, Scenario, ScenarioCatalog, ScenarioId, Step, StepKind};
use sandbox_player::{
    Decision, Effect, FixedClock, FixedPrompt, PhaseKind, PlayerError, Reflection, ScenarioPlayer,
};
use std::sync::Arc;

pub fn fixed_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 3, 1, 12, 0, 0).unwrap()
}

pub fn reflection(scenario: &str, step: usize, text: &str) -> Reflection {
    Reflection {
        scenario: ScenarioId::new(scenario),
        step,
        prompt: "What ethical principle guided your decision?".to_string(),
        text: text.to_string(),
        date: fixed_time(),
    }
}

/// Two-scenario catalog: `gated` (plain, consequence, reflection) and
/// `single` (one plain step)
pub fn create_tiny_catalog() -> Arc<ScenarioCatalog> {
    Arc::new(
        ScenarioCatalog::new()
            .with_scenario(
                "gated",
                Scenario::new("Gated")
                    .with_step(Step::plain("Intro", "Read this", "Pick one").with_options(["a", "b"]))
                    .with_step(Step::plain("Decide", "", "").with_kind(StepKind::ConsequenceGate {
                        affected: vec![AffectedPerson::new("🙂", "Ana, 30", "Nurse", "Loses trust")],
                    }))
                    .with_step(Step::plain("Reflect", "", "").with_kind(StepKind::ReflectionGate)),
            )
            .with_scenario("single", Scenario::new("Single").with_step(Step::plain("Only", "", ""))),
    )
}

/// Player with a fixed clock and always the first default prompt
pub fn setup_test_player(catalog: Arc<ScenarioCatalog>) -> ScenarioPlayer {
    ScenarioPlayer::new(catalog)
        .with_prompt_picker(FixedPrompt(0))
        .with_clock(FixedClock(fixed_time()))
}

pub fn setup_builtin_player() -> ScenarioPlayer {
    setup_test_player(ScenarioCatalog::builtin_shared())
}

/// Play the active scenario to the end, answering every gate with
/// `choice` and every reflection with `text`; returns all effects
pub fn play_to_completion(
    player: &mut ScenarioPlayer,
    choice: Decision,
    text: &str,
) -> Result<Vec<Effect>, PlayerError> {
    let mut effects = Vec::new();
    loop {
        let step = match player.phase().kind() {
            PhaseKind::Playing => player.advance()?,
            PhaseKind::AwaitingConsequenceDecision => player.decide(choice)?,
            PhaseKind::AwaitingReflection => player.submit_reflection(text)?,
            PhaseKind::Catalog | PhaseKind::Gate => return Ok(effects),
        };
        effects.extend(step);
    }
}
