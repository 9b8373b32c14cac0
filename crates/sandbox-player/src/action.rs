//! Input actions (presentation -> player)

use crate::decision::Decision;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One discrete learner input
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum Action {
    /// Ethics agreement checkbox submitted
    Agree {
        /// Checkbox state
        agreed: bool,
    },
    /// Scenario card chosen
    SelectScenario {
        /// Scenario id
        id: String,
    },
    /// Next / Complete
    Advance,
    /// Back
    GoBack,
    /// Consequence modal choice
    Decide {
        /// Chosen token
        choice: Decision,
    },
    /// Reflection modal submitted
    SubmitReflection {
        /// Learner text
        text: String,
    },
}

impl Action {
    /// Discriminant without payload
    #[must_use]
    pub fn kind(&self) -> ActionKind {
        match self {
            Self::Agree { .. } => ActionKind::Agree,
            Self::SelectScenario { .. } => ActionKind::SelectScenario,
            Self::Advance => ActionKind::Advance,
            Self::GoBack => ActionKind::GoBack,
            Self::Decide { .. } => ActionKind::Decide,
            Self::SubmitReflection { .. } => ActionKind::SubmitReflection,
        }
    }
}

/// Action discriminant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionKind {
    /// [`Action::Agree`]
    Agree,
    /// [`Action::SelectScenario`]
    SelectScenario,
    /// [`Action::Advance`]
    Advance,
    /// [`Action::GoBack`]
    GoBack,
    /// [`Action::Decide`]
    Decide,
    /// [`Action::SubmitReflection`]
    SubmitReflection,
}

impl ActionKind {
    /// Snake-case name
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Agree => "agree",
            Self::SelectScenario => "select_scenario",
            Self::Advance => "advance",
            Self::GoBack => "go_back",
            Self::Decide => "decide",
            Self::SubmitReflection => "submit_reflection",
        }
    }
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
