//! Read-only views for presentation code

use sandbox_catalog::{AffectedPerson, ScenarioId, Step, StepKind};
use serde::Serialize;

/// Position within a scenario
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Progress {
    /// Current step index
    pub step_index: usize,
    /// Number of steps
    pub step_count: usize,
}

impl Progress {
    /// `(step_index + 1) / step_count`
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn fraction(&self) -> f64 {
        if self.step_count == 0 {
            return 0.0;
        }
        (self.step_index + 1) as f64 / self.step_count as f64
    }

    /// Fraction as a percentage
    #[inline]
    #[must_use]
    pub fn percent(&self) -> f64 {
        self.fraction() * 100.0
    }

    /// Whether the current step is the final one
    #[inline]
    #[must_use]
    pub fn is_last(&self) -> bool {
        self.step_index + 1 == self.step_count
    }
}

/// Label of the advance control
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AdvanceLabel {
    /// More steps follow
    Next,
    /// Final step
    Complete,
}

impl AdvanceLabel {
    /// Button text
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Next => "Next",
            Self::Complete => "Complete",
        }
    }
}

/// Everything needed to render the current step
#[derive(Debug, Clone, Serialize)]
pub struct StepView<'a> {
    /// Scenario id
    pub scenario_id: &'a ScenarioId,
    /// Scenario title
    pub scenario_title: &'a str,
    /// Step being shown
    pub step: &'a Step,
    /// Position
    pub progress: Progress,
    /// Advance control label
    pub advance_label: AdvanceLabel,
}

impl<'a> StepView<'a> {
    /// Step heading
    #[inline]
    #[must_use]
    pub fn title(&self) -> &'a str {
        &self.step.title
    }

    /// Multiple-choice options (empty unless a plain step lists some)
    #[must_use]
    pub fn options(&self) -> &'a [String] {
        match &self.step.kind {
            StepKind::Plain { options } => options,
            _ => &[],
        }
    }

    /// Email body, for email preview steps
    #[must_use]
    pub fn email(&self) -> Option<&'a str> {
        match &self.step.kind {
            StepKind::EmailPreview { email } => Some(email),
            _ => None,
        }
    }
}

/// Modal demanding input before navigation resumes
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "modal", rename_all = "snake_case")]
pub enum ModalView<'a> {
    /// Consequence decision
    Consequence {
        /// People who would be affected
        affected: &'a [AffectedPerson],
    },
    /// Free-text reflection
    Reflection {
        /// Prompt to answer
        prompt: &'a str,
    },
}
