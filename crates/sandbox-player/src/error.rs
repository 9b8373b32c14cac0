//! Error types for the scenario player
//!
//! Two families matter to callers:
//! - invalid-reference: an id or index that does not exist
//! - precondition-not-met: an input the current phase does not accept
//!
//! Neither changes player state. Persistence failures are reported
//! separately through [`SinkError`] and never reach the state machine.

use crate::action::ActionKind;
use crate::state::PhaseKind;
use std::path::PathBuf;

/// Errors raised by the player
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PlayerError {
    /// Scenario id is not in the catalog
    #[error("scenario not found: '{0}'")]
    ScenarioNotFound(String),

    /// Step index outside the scenario
    #[error("step {index} out of range for scenario '{scenario}' ({len} steps)")]
    StepOutOfRange {
        /// Scenario id
        scenario: String,
        /// Requested index
        index: usize,
        /// Number of steps
        len: usize,
    },

    /// Decision token outside the closed set
    #[error("unknown decision: '{0}'")]
    UnknownDecision(String),

    /// Agreement has not been given
    #[error("ethics agreement required")]
    AgreementRequired,

    /// Action refused in the current phase
    #[error("{action} not allowed while {phase}")]
    NotAllowed {
        /// Refused action
        action: ActionKind,
        /// Phase at the time
        phase: PhaseKind,
    },

    /// Step query with no scenario active
    #[error("no active scenario")]
    NoActiveScenario,

    /// Computed transition is missing from the transition table
    #[error("illegal transition: {from} -> {to}")]
    IllegalTransition {
        /// Source phase
        from: PhaseKind,
        /// Target phase
        to: PhaseKind,
    },
}

impl PlayerError {
    /// Reference to something that does not exist
    #[inline]
    #[must_use]
    pub fn is_invalid_reference(&self) -> bool {
        matches!(
            self,
            Self::ScenarioNotFound(_) | Self::StepOutOfRange { .. } | Self::UnknownDecision(_)
        )
    }

    /// Input not accepted in the current phase
    #[inline]
    #[must_use]
    pub fn is_precondition(&self) -> bool {
        matches!(
            self,
            Self::AgreementRequired | Self::NotAllowed { .. } | Self::NoActiveScenario
        )
    }

    /// Whether re-issuing a valid input recovers
    #[inline]
    #[must_use]
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, Self::IllegalTransition { .. })
    }
}

/// Errors raised by persistence collaborators
#[derive(Debug, thiserror::Error)]
pub enum SinkError {
    /// IO error on a record file
    #[error("io error on {path}: {source}")]
    Io {
        /// File path
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// Record could not be (de)serialized
    #[error("serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Stored log does not match its hash chain
    #[error("integrity violation in {log} at entry {index}")]
    Integrity {
        /// Log name
        log: String,
        /// First bad entry
        index: usize,
    },

    /// Store cannot accept writes
    #[error("store unavailable: {0}")]
    Unavailable(String),
}

impl SinkError {
    /// Create IO error for path
    pub fn io_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
