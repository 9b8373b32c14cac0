//! Scenario and step types
//!
//! A scenario is an ordered list of steps. Every step shares a common base
//! (title, descriptive content, task prompt) and carries one of four kinds.
//! Gate kinds block the player until a decision or reflection is captured.

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

/// Scenario identifier (catalog key)
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ScenarioId(String);

impl ScenarioId {
    /// Create new scenario id
    #[inline]
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Borrow as string slice
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for ScenarioId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ScenarioId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for ScenarioId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl fmt::Display for ScenarioId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One training module
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scenario {
    /// Display title
    pub title: String,
    /// Ordered steps
    pub steps: Vec<Step>,
}

impl Scenario {
    /// Create new scenario
    #[inline]
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            steps: Vec::new(),
        }
    }

    /// With an appended step
    #[inline]
    #[must_use]
    pub fn with_step(mut self, step: Step) -> Self {
        self.steps.push(step);
        self
    }

    /// Step at index, if in range
    #[inline]
    #[must_use]
    pub fn step(&self, index: usize) -> Option<&Step> {
        self.steps.get(index)
    }

    /// Number of steps
    #[inline]
    #[must_use]
    pub fn step_count(&self) -> usize {
        self.steps.len()
    }

    /// Whether `index` is the final step
    #[inline]
    #[must_use]
    pub fn is_last(&self, index: usize) -> bool {
        index + 1 == self.steps.len()
    }
}

/// One unit of content within a scenario
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Step {
    /// Step heading
    pub title: String,
    /// Descriptive content
    pub content: String,
    /// Task prompt
    pub task: String,
    /// Kind-specific payload
    #[serde(flatten)]
    pub kind: StepKind,
}

impl Step {
    /// Plain step without options
    #[must_use]
    pub fn plain(
        title: impl Into<String>,
        content: impl Into<String>,
        task: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            task: task.into(),
            kind: StepKind::Plain {
                options: Vec::new(),
            },
        }
    }

    /// Replace the step kind
    #[inline]
    #[must_use]
    pub fn with_kind(mut self, kind: StepKind) -> Self {
        self.kind = kind;
        self
    }

    /// Plain step with multiple-choice options
    #[must_use]
    pub fn with_options<I, S>(self, options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.with_kind(StepKind::Plain {
            options: options.into_iter().map(Into::into).collect(),
        })
    }

    /// Whether advancing from this step opens a modal
    #[inline]
    #[must_use]
    pub fn is_gate(&self) -> bool {
        self.kind.is_gate()
    }
}

/// Step variants
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum StepKind {
    /// Content with optional, non-binding options
    Plain {
        /// Multiple-choice options (never validated or stored)
        #[serde(default, skip_serializing_if = "Vec::is_empty")]
        options: Vec<String>,
    },
    /// Literal email body shown to the learner
    EmailPreview {
        /// Email text
        email: String,
    },
    /// Decision modal listing who would be affected
    ConsequenceGate {
        /// People shown in the consequence modal
        #[serde(default, skip_serializing_if = "Vec::is_empty")]
        affected: Vec<AffectedPerson>,
    },
    /// Free-text reflection modal
    ReflectionGate,
}

impl StepKind {
    /// Gate kinds block advancement
    #[inline]
    #[must_use]
    pub fn is_gate(&self) -> bool {
        matches!(self, Self::ConsequenceGate { .. } | Self::ReflectionGate)
    }

    /// Short name used in logs
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Plain { .. } => "plain",
            Self::EmailPreview { .. } => "email_preview",
            Self::ConsequenceGate { .. } => "consequence_gate",
            Self::ReflectionGate => "reflection_gate",
        }
    }
}

/// Person shown in a consequence modal
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AffectedPerson {
    /// Avatar glyph
    pub emoji: String,
    /// Name and age
    pub name: String,
    /// Short background
    pub story: String,
    /// What the harm would be
    pub impact: String,
}

impl AffectedPerson {
    /// Create new affected person
    #[must_use]
    pub fn new(
        emoji: impl Into<String>,
        name: impl Into<String>,
        story: impl Into<String>,
        impact: impl Into<String>,
    ) -> Self {
        Self {
            emoji: emoji.into(),
            name: name.into(),
            story: story.into(),
            impact: impact.into(),
        }
    }
}
