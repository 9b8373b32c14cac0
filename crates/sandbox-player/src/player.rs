//! Scenario player
//!
//! Owns the navigation state machine: which scenario is active, which step
//! within it, and which modal (if any) must be answered before navigation
//! may proceed.
//!
//! # Phases
//! ```text
//! Gate --agree(true)--> Catalog --select--> Playing(s, 0)
//! Playing(s, i) --advance--> Playing(s, i+1)                  plain / email step
//!                          | AwaitingConsequenceDecision(s, i)  consequence gate
//!                          | AwaitingReflection(s, i, prompt)   reflection gate
//!                          | Catalog                            last step
//! AwaitingConsequenceDecision --decide(modify|abandon)--> AwaitingReflection
//!                             --decide(other)-----------> Playing(s, i+1) | Catalog
//! AwaitingReflection --submit--> Playing(s, i+1) | Catalog
//! Playing(s, i) --back--> Playing(s, i-1) | Catalog (i == 0)
//! ```
//!
//! The current phase is replaced wholesale by each accepted input. A
//! refused input returns an error and leaves the phase untouched.

use crate::action::Action;
use crate::clock::{Clock, SystemClock};
use crate::config::{PlayerConfig, DEFAULT_REFLECTION_PROMPTS};
use crate::decision::Decision;
use crate::effect::Effect;
use crate::error::PlayerError;
use crate::prompt::{PromptPicker, RandomPrompt};
use crate::records::{AgreementRecord, AnalyticsEvent, AnalyticsKind, Reflection};
use crate::state::{Phase, SessionState};
use crate::state_machine::validate_transition;
use crate::view::{AdvanceLabel, ModalView, Progress, StepView};
use sandbox_catalog::{Scenario, ScenarioCatalog, ScenarioId, Step, StepKind};
use serde_json::json;
use std::sync::Arc;

/// Result of an accepted input: the next phase and the writes it requires
type Transition = (Phase, Vec<Effect>);

/// The navigation state machine
#[derive(Debug)]
pub struct ScenarioPlayer {
    /// Scenario content
    catalog: Arc<ScenarioCatalog>,
    /// Configuration
    config: PlayerConfig,
    /// Current phase
    phase: Phase,
    /// Default reflection prompt selection
    prompts: Box<dyn PromptPicker>,
    /// Record timestamps
    clock: Box<dyn Clock>,
}

impl ScenarioPlayer {
    /// Create new player at the agreement gate
    #[must_use]
    pub fn new(catalog: Arc<ScenarioCatalog>) -> Self {
        Self {
            catalog,
            config: PlayerConfig::default(),
            phase: Phase::Gate,
            prompts: Box::new(RandomPrompt::from_entropy()),
            clock: Box::new(SystemClock),
        }
    }

    /// Player over the built-in catalog
    #[must_use]
    pub fn builtin() -> Self {
        Self::new(ScenarioCatalog::builtin_shared())
    }

    /// With configuration
    #[inline]
    #[must_use]
    pub fn with_config(mut self, config: PlayerConfig) -> Self {
        self.config = config;
        self
    }

    /// With prompt picker
    #[inline]
    #[must_use]
    pub fn with_prompt_picker(mut self, picker: impl PromptPicker + 'static) -> Self {
        self.prompts = Box::new(picker);
        self
    }

    /// With clock
    #[inline]
    #[must_use]
    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    /// Skip the gate when an earlier agreement is on record
    #[must_use]
    pub fn resume_from(mut self, agreement: Option<&AgreementRecord>) -> Self {
        if matches!(self.phase, Phase::Gate) && agreement.is_some_and(|a| a.agreed) {
            tracing::debug!("Agreement on record, starting at catalog");
            self.phase = Phase::Catalog;
        }
        self
    }

    // ---------------------------------------------------------------------
    // Queries
    // ---------------------------------------------------------------------

    /// Current phase
    #[inline]
    #[must_use]
    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    /// Flat session projection
    #[inline]
    #[must_use]
    pub fn session_state(&self) -> SessionState {
        self.phase.session_state()
    }

    /// Scenario content
    #[inline]
    #[must_use]
    pub fn catalog(&self) -> &ScenarioCatalog {
        &self.catalog
    }

    /// Configuration
    #[inline]
    #[must_use]
    pub fn config(&self) -> &PlayerConfig {
        &self.config
    }

    /// Step currently on screen
    ///
    /// # Errors
    /// `PlayerError::NoActiveScenario` at the gate or catalog
    pub fn current_step_view(&self) -> Result<StepView<'_>, PlayerError> {
        let (scenario, step) = self.phase.position().ok_or(PlayerError::NoActiveScenario)?;
        self.step_view(scenario.as_str(), step)
    }

    /// View of any step in the catalog
    ///
    /// # Errors
    /// - `PlayerError::ScenarioNotFound` for unknown ids
    /// - `PlayerError::StepOutOfRange` for indexes past the end
    pub fn step_view(&self, scenario_id: &str, index: usize) -> Result<StepView<'_>, PlayerError> {
        let (id, scenario) = self
            .catalog
            .resolve(scenario_id)
            .map_err(|_| PlayerError::ScenarioNotFound(scenario_id.to_string()))?;
        let step = step_at(id, scenario, index)?;
        let progress = Progress {
            step_index: index,
            step_count: scenario.step_count(),
        };

        Ok(StepView {
            scenario_id: id,
            scenario_title: &scenario.title,
            step,
            progress,
            advance_label: if progress.is_last() {
                AdvanceLabel::Complete
            } else {
                AdvanceLabel::Next
            },
        })
    }

    /// Modal currently demanding input
    #[must_use]
    pub fn active_modal(&self) -> Option<ModalView<'_>> {
        match &self.phase {
            Phase::AwaitingConsequenceDecision { scenario, step } => {
                let affected = self
                    .catalog
                    .get(scenario.as_str())
                    .ok()
                    .and_then(|s| s.step(*step))
                    .map_or(&[][..], |s| match &s.kind {
                        StepKind::ConsequenceGate { affected } => affected.as_slice(),
                        _ => &[][..],
                    });
                Some(ModalView::Consequence { affected })
            }
            Phase::AwaitingReflection { prompt, .. } => Some(ModalView::Reflection { prompt }),
            _ => None,
        }
    }

    /// Position in the active scenario
    #[must_use]
    pub fn progress(&self) -> Option<Progress> {
        let (scenario, step) = self.phase.position()?;
        let scenario = self.catalog.get(scenario.as_str()).ok()?;
        Some(Progress {
            step_index: step,
            step_count: scenario.step_count(),
        })
    }

    /// `(step + 1) / step_count` while a scenario is active
    #[must_use]
    pub fn progress_fraction(&self) -> Option<f64> {
        self.progress().map(|p| p.fraction())
    }

    // ---------------------------------------------------------------------
    // Inputs
    // ---------------------------------------------------------------------

    /// Ethics agreement
    ///
    /// # Errors
    /// See [`ScenarioPlayer::dispatch`]
    pub fn agree(&mut self, agreed: bool) -> Result<Vec<Effect>, PlayerError> {
        self.dispatch(Action::Agree { agreed })
    }

    /// Choose a scenario from the catalog
    ///
    /// # Errors
    /// See [`ScenarioPlayer::dispatch`]; a scenario without steps is
    /// refused with `PlayerError::StepOutOfRange`
    pub fn select_scenario(&mut self, id: &str) -> Result<Vec<Effect>, PlayerError> {
        self.dispatch(Action::SelectScenario { id: id.to_string() })
    }

    /// Next / Complete
    ///
    /// # Errors
    /// See [`ScenarioPlayer::dispatch`]
    pub fn advance(&mut self) -> Result<Vec<Effect>, PlayerError> {
        self.dispatch(Action::Advance)
    }

    /// Back
    ///
    /// # Errors
    /// See [`ScenarioPlayer::dispatch`]
    pub fn go_back(&mut self) -> Result<Vec<Effect>, PlayerError> {
        self.dispatch(Action::GoBack)
    }

    /// Answer the consequence modal
    ///
    /// # Errors
    /// See [`ScenarioPlayer::dispatch`]
    pub fn decide(&mut self, choice: Decision) -> Result<Vec<Effect>, PlayerError> {
        self.dispatch(Action::Decide { choice })
    }

    /// Answer the reflection modal
    ///
    /// # Errors
    /// See [`ScenarioPlayer::dispatch`]
    pub fn submit_reflection(&mut self, text: impl Into<String>) -> Result<Vec<Effect>, PlayerError> {
        self.dispatch(Action::SubmitReflection { text: text.into() })
    }

    /// Apply one input
    ///
    /// On success the phase is replaced and the required writes are returned
    /// in the order they must be persisted.
    ///
    /// # Errors
    /// - invalid-reference: unknown scenario id, out-of-range step
    /// - precondition-not-met: agreement missing, or the input is not
    ///   accepted in the current phase
    pub fn dispatch(&mut self, action: Action) -> Result<Vec<Effect>, PlayerError> {
        let from = self.phase.kind();
        let action_kind = action.kind();

        let (next, effects) = match self.transition(action) {
            Ok(transition) => transition,
            Err(e) => {
                tracing::warn!(action = %action_kind, phase = %from, error = %e, "Input refused");
                return Err(e);
            }
        };
        validate_transition(from, next.kind())?;

        tracing::debug!(
            action = %action_kind,
            from = %from,
            to = %next.kind(),
            effects = effects.len(),
            "Transition"
        );
        self.phase = next;
        Ok(effects)
    }

    fn transition(&mut self, action: Action) -> Result<Transition, PlayerError> {
        let phase = self.phase.clone();
        match (phase, action) {
            (Phase::Gate, Action::Agree { agreed: true }) => {
                let now = self.clock.now();
                tracing::info!("Ethics agreement recorded");
                Ok((
                    Phase::Catalog,
                    vec![
                        Effect::RecordAgreement(AgreementRecord::agreed(now)),
                        self.analytics(AnalyticsKind::EthicsAgreed, json!({})),
                    ],
                ))
            }
            (Phase::Gate, Action::Agree { agreed: false } | Action::SelectScenario { .. }) => {
                Err(PlayerError::AgreementRequired)
            }

            (Phase::Catalog, Action::SelectScenario { id }) => {
                let (scenario_id, scenario) = self
                    .catalog
                    .resolve(&id)
                    .map_err(|_| PlayerError::ScenarioNotFound(id.clone()))?;
                if scenario.step_count() == 0 {
                    return Err(PlayerError::StepOutOfRange {
                        scenario: scenario_id.to_string(),
                        index: 0,
                        len: 0,
                    });
                }
                tracing::info!(scenario = %scenario_id, steps = scenario.step_count(), "Scenario started");
                let event = self.analytics(
                    AnalyticsKind::ScenarioStarted,
                    json!({ "scenario": scenario_id, "title": scenario.title }),
                );
                Ok((
                    Phase::Playing {
                        scenario: scenario_id.clone(),
                        step: 0,
                    },
                    vec![event],
                ))
            }

            (Phase::Playing { scenario, step }, Action::Advance) => {
                let kind = self.step(&scenario, step)?.kind.clone();
                match kind {
                    StepKind::ConsequenceGate { .. } => Ok((
                        Phase::AwaitingConsequenceDecision { scenario, step },
                        Vec::new(),
                    )),
                    StepKind::ReflectionGate => {
                        let prompt = self.default_prompt();
                        Ok((
                            Phase::AwaitingReflection {
                                scenario,
                                step,
                                prompt,
                            },
                            Vec::new(),
                        ))
                    }
                    StepKind::Plain { .. } | StepKind::EmailPreview { .. } => {
                        let mut effects = Vec::new();
                        let next = self.leave_step(scenario, step, &mut effects)?;
                        Ok((next, effects))
                    }
                }
            }

            (Phase::Playing { scenario, step }, Action::GoBack) => {
                if step == 0 {
                    Ok((Phase::Catalog, Vec::new()))
                } else {
                    Ok((
                        Phase::Playing {
                            scenario,
                            step: step - 1,
                        },
                        Vec::new(),
                    ))
                }
            }

            (Phase::AwaitingConsequenceDecision { scenario, step }, Action::Decide { choice }) => {
                let mut effects = vec![self.analytics(
                    AnalyticsKind::DecisionMade,
                    json!({ "scenario": scenario, "step": step, "choice": choice }),
                )];
                if choice.requires_justification() {
                    let prompt = self.config.justification_prompt(choice);
                    return Ok((
                        Phase::AwaitingReflection {
                            scenario,
                            step,
                            prompt,
                        },
                        effects,
                    ));
                }
                let next = self.leave_step(scenario, step, &mut effects)?;
                Ok((next, effects))
            }

            (
                Phase::AwaitingReflection {
                    scenario,
                    step,
                    prompt,
                },
                Action::SubmitReflection { text },
            ) => {
                let characters = text.chars().count();
                let reflection = Reflection {
                    scenario: scenario.clone(),
                    step,
                    prompt,
                    text,
                    date: self.clock.now(),
                };
                let mut effects = vec![
                    Effect::AppendReflection(reflection),
                    self.analytics(
                        AnalyticsKind::ReflectionSaved,
                        json!({ "scenario": scenario, "step": step, "characters": characters }),
                    ),
                ];
                let next = self.leave_step(scenario, step, &mut effects)?;
                Ok((next, effects))
            }

            (phase, action) => Err(PlayerError::NotAllowed {
                action: action.kind(),
                phase: phase.kind(),
            }),
        }
    }

    /// Move past `step`: to the next step, or back to the catalog when the
    /// scenario is finished
    fn leave_step(
        &self,
        scenario: ScenarioId,
        step: usize,
        effects: &mut Vec<Effect>,
    ) -> Result<Phase, PlayerError> {
        let content = self.scenario(&scenario)?;
        if step + 1 < content.step_count() {
            return Ok(Phase::Playing {
                scenario,
                step: step + 1,
            });
        }

        tracing::info!(scenario = %scenario, "Scenario completed");
        effects.push(self.analytics(
            AnalyticsKind::ScenarioCompleted,
            json!({ "scenario": scenario, "steps": content.step_count() }),
        ));
        Ok(Phase::Catalog)
    }

    fn scenario(&self, id: &ScenarioId) -> Result<&Scenario, PlayerError> {
        self.catalog
            .get(id.as_str())
            .map_err(|_| PlayerError::ScenarioNotFound(id.to_string()))
    }

    fn step(&self, id: &ScenarioId, index: usize) -> Result<&Step, PlayerError> {
        step_at(id, self.scenario(id)?, index)
    }

    fn default_prompt(&mut self) -> String {
        self.prompts
            .pick(&self.config.reflection_prompts)
            .unwrap_or(DEFAULT_REFLECTION_PROMPTS[0])
            .to_string()
    }

    fn analytics(&self, kind: AnalyticsKind, payload: serde_json::Value) -> Effect {
        Effect::AppendAnalytics(AnalyticsEvent::new(kind, payload, self.clock.now()))
    }
}

fn step_at<'a>(id: &ScenarioId, scenario: &'a Scenario, index: usize) -> Result<&'a Step, PlayerError> {
    scenario.step(index).ok_or_else(|| PlayerError::StepOutOfRange {
        scenario: id.to_string(),
        index,
        len: scenario.step_count(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use crate::prompt::FixedPrompt;
    use crate::state::{ModalKind, PhaseKind};
    use chrono::{TimeZone, Utc};
    use pretty_assertions::assert_eq;

    fn catalog() -> Arc<ScenarioCatalog> {
        Arc::new(
            ScenarioCatalog::new()
                .with_scenario(
                    "gated",
                    Scenario::new("Gated")
                        .with_step(Step::plain("Intro", "", "").with_options(["a", "b"]))
                        .with_step(
                            Step::plain("Decide", "", "")
                                .with_kind(StepKind::ConsequenceGate { affected: vec![] }),
                        )
                        .with_step(Step::plain("Reflect", "", "").with_kind(StepKind::ReflectionGate)),
                )
                .with_scenario(
                    "single",
                    Scenario::new("Single").with_step(Step::plain("Only", "", "")),
                ),
        )
    }

    fn player() -> ScenarioPlayer {
        ScenarioPlayer::new(catalog())
            .with_prompt_picker(FixedPrompt(0))
            .with_clock(FixedClock(Utc.with_ymd_and_hms(2025, 3, 1, 12, 0, 0).unwrap()))
    }

    fn agreed_player() -> ScenarioPlayer {
        let mut p = player();
        p.agree(true).unwrap();
        p
    }

    fn event_names(effects: &[Effect]) -> Vec<AnalyticsKind> {
        effects
            .iter()
            .filter_map(Effect::as_analytics)
            .map(|e| e.event_name)
            .collect()
    }

    #[test]
    fn starts_at_gate() {
        let p = player();
        assert_eq!(p.phase(), &Phase::Gate);
        assert!(p.progress().is_none());
        assert_eq!(p.current_step_view().unwrap_err(), PlayerError::NoActiveScenario);
    }

    #[test]
    fn agree_false_is_refused() {
        let mut p = player();
        assert_eq!(p.agree(false).unwrap_err(), PlayerError::AgreementRequired);
        assert_eq!(p.phase(), &Phase::Gate);
    }

    #[test]
    fn select_before_agreement_is_refused() {
        let mut p = player();
        assert_eq!(
            p.select_scenario("gated").unwrap_err(),
            PlayerError::AgreementRequired
        );
    }

    #[test]
    fn agree_records_agreement_and_event() {
        let mut p = player();
        let effects = p.agree(true).unwrap();
        assert_eq!(p.phase(), &Phase::Catalog);
        assert!(matches!(&effects[0], Effect::RecordAgreement(r) if r.agreed));
        assert_eq!(event_names(&effects), vec![AnalyticsKind::EthicsAgreed]);
    }

    #[test]
    fn agree_twice_is_not_allowed() {
        let mut p = agreed_player();
        let err = p.agree(true).unwrap_err();
        assert!(err.is_precondition());
    }

    #[test]
    fn resume_skips_gate() {
        let at = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();
        let p = player().resume_from(Some(&AgreementRecord::agreed(at)));
        assert_eq!(p.phase(), &Phase::Catalog);

        let declined = AgreementRecord {
            agreed: false,
            agreed_at: at,
        };
        assert_eq!(player().resume_from(Some(&declined)).phase(), &Phase::Gate);
        assert_eq!(player().resume_from(None).phase(), &Phase::Gate);
    }

    #[test]
    fn select_unknown_leaves_state() {
        let mut p = agreed_player();
        let err = p.select_scenario("nonexistent").unwrap_err();
        assert_eq!(err, PlayerError::ScenarioNotFound("nonexistent".to_string()));
        assert!(err.is_invalid_reference());
        assert_eq!(p.phase(), &Phase::Catalog);
    }

    #[test]
    fn select_starts_at_step_zero() {
        let mut p = agreed_player();
        let effects = p.select_scenario("gated").unwrap();
        assert_eq!(event_names(&effects), vec![AnalyticsKind::ScenarioStarted]);

        let view = p.current_step_view().unwrap();
        assert_eq!(view.title(), "Intro");
        assert_eq!(view.options(), ["a".to_string(), "b".to_string()]);
        assert_eq!(view.advance_label, AdvanceLabel::Next);
        assert_eq!(p.progress_fraction(), Some(1.0 / 3.0));
    }

    #[test]
    fn consequence_gate_holds_index() {
        let mut p = agreed_player();
        p.select_scenario("gated").unwrap();
        p.advance().unwrap();
        let effects = p.advance().unwrap();
        assert!(effects.is_empty());
        assert_eq!(
            p.phase(),
            &Phase::AwaitingConsequenceDecision {
                scenario: ScenarioId::new("gated"),
                step: 1
            }
        );
        assert_eq!(p.session_state().active_modal, ModalKind::Consequence);
        assert!(matches!(p.active_modal(), Some(ModalView::Consequence { .. })));
    }

    #[test]
    fn modal_blocks_navigation() {
        let mut p = agreed_player();
        p.select_scenario("gated").unwrap();
        p.advance().unwrap();
        p.advance().unwrap();

        for err in [p.advance().unwrap_err(), p.go_back().unwrap_err()] {
            assert!(matches!(
                err,
                PlayerError::NotAllowed {
                    phase: PhaseKind::AwaitingConsequenceDecision,
                    ..
                }
            ));
        }
        assert_eq!(p.phase().kind(), PhaseKind::AwaitingConsequenceDecision);
    }

    #[test]
    fn proceed_moves_on() {
        let mut p = agreed_player();
        p.select_scenario("gated").unwrap();
        p.advance().unwrap();
        p.advance().unwrap();
        let effects = p.decide(Decision::Proceed).unwrap();
        assert_eq!(event_names(&effects), vec![AnalyticsKind::DecisionMade]);
        assert_eq!(
            p.phase(),
            &Phase::Playing {
                scenario: ScenarioId::new("gated"),
                step: 2
            }
        );
    }

    #[test]
    fn abandon_asks_for_justification() {
        let mut p = agreed_player();
        p.select_scenario("gated").unwrap();
        p.advance().unwrap();
        p.advance().unwrap();
        p.decide(Decision::Abandon).unwrap();
        assert_eq!(
            p.active_modal(),
            Some(ModalView::Reflection {
                prompt: "Why did you choose to abandon?"
            })
        );
    }

    #[test]
    fn reflection_gate_uses_configured_prompt() {
        let mut p = agreed_player().with_config(
            PlayerConfig::new().with_reflection_prompts(["first", "second"]),
        );
        p.select_scenario("gated").unwrap();
        p.advance().unwrap();
        p.advance().unwrap();
        p.decide(Decision::Proceed).unwrap();
        p.advance().unwrap();
        assert_eq!(
            p.active_modal(),
            Some(ModalView::Reflection { prompt: "first" })
        );
    }

    #[test]
    fn empty_prompt_list_falls_back() {
        let mut p = agreed_player()
            .with_config(PlayerConfig::new().with_reflection_prompts(Vec::<String>::new()));
        p.select_scenario("gated").unwrap();
        p.advance().unwrap();
        p.advance().unwrap();
        p.decide(Decision::Proceed).unwrap();
        p.advance().unwrap();
        assert_eq!(
            p.active_modal(),
            Some(ModalView::Reflection {
                prompt: DEFAULT_REFLECTION_PROMPTS[0]
            })
        );
    }

    #[test]
    fn final_reflection_completes_scenario() {
        let mut p = agreed_player();
        p.select_scenario("gated").unwrap();
        p.advance().unwrap();
        p.advance().unwrap();
        p.decide(Decision::Proceed).unwrap();
        p.advance().unwrap();
        let effects = p.submit_reflection("").unwrap();

        assert_eq!(p.phase(), &Phase::Catalog);
        let reflection = effects.iter().find_map(Effect::as_reflection).unwrap();
        assert_eq!(reflection.step, 2);
        assert_eq!(reflection.text, "");
        assert_eq!(
            event_names(&effects),
            vec![AnalyticsKind::ReflectionSaved, AnalyticsKind::ScenarioCompleted]
        );
    }

    #[test]
    fn single_step_completes_on_advance() {
        let mut p = agreed_player();
        p.select_scenario("single").unwrap();
        assert_eq!(
            p.current_step_view().unwrap().advance_label,
            AdvanceLabel::Complete
        );
        let effects = p.advance().unwrap();
        assert_eq!(event_names(&effects), vec![AnalyticsKind::ScenarioCompleted]);
        assert_eq!(p.phase(), &Phase::Catalog);
    }

    #[test]
    fn back_at_zero_returns_to_catalog() {
        let mut p = agreed_player();
        p.select_scenario("gated").unwrap();
        assert!(p.go_back().unwrap().is_empty());
        assert_eq!(p.phase(), &Phase::Catalog);
    }

    #[test]
    fn back_then_forward_reprompts_gate() {
        let mut p = agreed_player();
        p.select_scenario("gated").unwrap();
        p.advance().unwrap();
        p.advance().unwrap();
        p.decide(Decision::Proceed).unwrap();
        p.go_back().unwrap();
        assert_eq!(p.session_state().current_step_index, Some(1));

        p.advance().unwrap();
        assert_eq!(p.phase().kind(), PhaseKind::AwaitingConsequenceDecision);
    }

    #[test]
    fn step_view_out_of_range() {
        let p = player();
        assert_eq!(
            p.step_view("gated", 3).unwrap_err(),
            PlayerError::StepOutOfRange {
                scenario: "gated".to_string(),
                index: 3,
                len: 3
            }
        );
        assert!(p.step_view("gated", 2).is_ok());
    }

    #[test]
    fn decide_outside_modal_is_not_allowed() {
        let mut p = agreed_player();
        let err = p.decide(Decision::Modify).unwrap_err();
        assert_eq!(
            err,
            PlayerError::NotAllowed {
                action: crate::action::ActionKind::Decide,
                phase: PhaseKind::Catalog
            }
        );
    }

    #[test]
    fn stepless_scenario_is_refused() {
        let catalog = Arc::new(ScenarioCatalog::new().with_scenario("empty", Scenario::new("Empty")));
        let mut p = ScenarioPlayer::new(catalog).with_prompt_picker(FixedPrompt(0));
        p.agree(true).unwrap();

        let err = p.select_scenario("empty").unwrap_err();
        assert_eq!(
            err,
            PlayerError::StepOutOfRange {
                scenario: "empty".to_string(),
                index: 0,
                len: 0
            }
        );
        assert!(err.is_invalid_reference());
        assert_eq!(p.phase(), &Phase::Catalog);
        assert!(p.progress().is_none());
    }
}
