//! Persisted record types
//!
//! Field names follow the portfolio document: reflections are
//! `{scenario, step, prompt, text, date}`, analytics events are
//! `{eventName, payload, timestamp}`.

use chrono::{DateTime, Utc};
use sandbox_catalog::ScenarioId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Ethics agreement, written once
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgreementRecord {
    /// Whether the learner agreed
    pub agreed: bool,
    /// When the agreement was given
    pub agreed_at: DateTime<Utc>,
}

impl AgreementRecord {
    /// Agreement given at `at`
    #[inline]
    #[must_use]
    pub fn agreed(at: DateTime<Utc>) -> Self {
        Self {
            agreed: true,
            agreed_at: at,
        }
    }
}

/// Free text captured at a reflection prompt
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reflection {
    /// Scenario the reflection belongs to
    pub scenario: ScenarioId,
    /// Step index the prompt was shown on
    pub step: usize,
    /// Prompt the learner answered
    pub prompt: String,
    /// Learner text, possibly empty
    pub text: String,
    /// Submission time
    pub date: DateTime<Utc>,
}

/// Analytics event names
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnalyticsKind {
    /// Agreement recorded
    EthicsAgreed,
    /// Scenario selected
    ScenarioStarted,
    /// Final step left
    ScenarioCompleted,
    /// Consequence decision taken
    DecisionMade,
    /// Reflection stored
    ReflectionSaved,
}

impl AnalyticsKind {
    /// Event name as stored
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::EthicsAgreed => "ethics_agreed",
            Self::ScenarioStarted => "scenario_started",
            Self::ScenarioCompleted => "scenario_completed",
            Self::DecisionMade => "decision_made",
            Self::ReflectionSaved => "reflection_saved",
        }
    }
}

impl fmt::Display for AnalyticsKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Append-only audit trail entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsEvent {
    /// Event name
    pub event_name: AnalyticsKind,
    /// Event-specific data
    pub payload: serde_json::Value,
    /// When the event happened
    pub timestamp: DateTime<Utc>,
}

impl AnalyticsEvent {
    /// Create new event
    #[inline]
    #[must_use]
    pub fn new(event_name: AnalyticsKind, payload: serde_json::Value, timestamp: DateTime<Utc>) -> Self {
        Self {
            event_name,
            payload,
            timestamp,
        }
    }
}
