//! Player phases and the session-state projection

use sandbox_catalog::ScenarioId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Where the learner is
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "phase", rename_all = "snake_case")]
pub enum Phase {
    /// Ethics agreement not yet given
    Gate,
    /// Scenario selection
    Catalog,
    /// Viewing a step
    Playing {
        /// Active scenario
        scenario: ScenarioId,
        /// Current step index
        step: usize,
    },
    /// Consequence modal open on a gate step
    AwaitingConsequenceDecision {
        /// Active scenario
        scenario: ScenarioId,
        /// Gate step index
        step: usize,
    },
    /// Reflection modal open
    AwaitingReflection {
        /// Active scenario
        scenario: ScenarioId,
        /// Step the reflection belongs to
        step: usize,
        /// Prompt shown to the learner
        prompt: String,
    },
}

impl Phase {
    /// Discriminant without payload
    #[must_use]
    pub fn kind(&self) -> PhaseKind {
        match self {
            Self::Gate => PhaseKind::Gate,
            Self::Catalog => PhaseKind::Catalog,
            Self::Playing { .. } => PhaseKind::Playing,
            Self::AwaitingConsequenceDecision { .. } => PhaseKind::AwaitingConsequenceDecision,
            Self::AwaitingReflection { .. } => PhaseKind::AwaitingReflection,
        }
    }

    /// Active scenario and step, if any
    #[must_use]
    pub fn position(&self) -> Option<(&ScenarioId, usize)> {
        match self {
            Self::Gate | Self::Catalog => None,
            Self::Playing { scenario, step }
            | Self::AwaitingConsequenceDecision { scenario, step }
            | Self::AwaitingReflection { scenario, step, .. } => Some((scenario, *step)),
        }
    }

    /// Which modal is demanding input
    #[must_use]
    pub fn modal(&self) -> ModalKind {
        match self {
            Self::AwaitingConsequenceDecision { .. } => ModalKind::Consequence,
            Self::AwaitingReflection { .. } => ModalKind::Reflection,
            _ => ModalKind::None,
        }
    }

    /// Flat projection used by presentation code
    #[must_use]
    pub fn session_state(&self) -> SessionState {
        let position = self.position();
        SessionState {
            current_scenario_id: position.map(|(s, _)| s.clone()),
            current_step_index: position.map(|(_, i)| i),
            active_modal: self.modal(),
        }
    }
}

/// Phase discriminant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PhaseKind {
    /// [`Phase::Gate`]
    Gate,
    /// [`Phase::Catalog`]
    Catalog,
    /// [`Phase::Playing`]
    Playing,
    /// [`Phase::AwaitingConsequenceDecision`]
    AwaitingConsequenceDecision,
    /// [`Phase::AwaitingReflection`]
    AwaitingReflection,
}

impl PhaseKind {
    /// Every phase kind
    pub const ALL: [PhaseKind; 5] = [
        PhaseKind::Gate,
        PhaseKind::Catalog,
        PhaseKind::Playing,
        PhaseKind::AwaitingConsequenceDecision,
        PhaseKind::AwaitingReflection,
    ];

    /// Snake-case name
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Gate => "gate",
            Self::Catalog => "catalog",
            Self::Playing => "playing",
            Self::AwaitingConsequenceDecision => "awaiting_consequence_decision",
            Self::AwaitingReflection => "awaiting_reflection",
        }
    }
}

impl fmt::Display for PhaseKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Modal currently blocking navigation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModalKind {
    /// No modal
    None,
    /// Consequence decision
    Consequence,
    /// Free-text reflection
    Reflection,
}

/// Transient, in-memory session view
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionState {
    /// Active scenario
    pub current_scenario_id: Option<ScenarioId>,
    /// Current step, present whenever a scenario is active
    pub current_step_index: Option<usize>,
    /// Open modal
    pub active_modal: ModalKind,
}
