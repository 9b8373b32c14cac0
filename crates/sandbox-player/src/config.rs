//! Player configuration

use crate::decision::Decision;
use serde::{Deserialize, Serialize};

/// Prompts shown when a reflection gate opens without an override
pub const DEFAULT_REFLECTION_PROMPTS: [&str; 3] = [
    "What surprised you about who was affected?",
    "How would you explain your choice to someone harmed?",
    "What ethical principle guided your decision?",
];

/// Placeholder replaced by the decision token
pub const CHOICE_PLACEHOLDER: &str = "{choice}";

/// Player configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerConfig {
    /// Default reflection prompts
    pub reflection_prompts: Vec<String>,
    /// Prompt used after `modify` / `abandon`; `{choice}` is substituted
    pub justification_template: String,
}

impl PlayerConfig {
    /// Create default configuration
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// With reflection prompts
    #[must_use]
    pub fn with_reflection_prompts<I, S>(mut self, prompts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.reflection_prompts = prompts.into_iter().map(Into::into).collect();
        self
    }

    /// With justification template
    #[inline]
    #[must_use]
    pub fn with_justification_template(mut self, template: impl Into<String>) -> Self {
        self.justification_template = template.into();
        self
    }

    /// Prompt asking the learner to justify `decision`
    #[must_use]
    pub fn justification_prompt(&self, decision: Decision) -> String {
        self.justification_template
            .replace(CHOICE_PLACEHOLDER, decision.as_str())
    }
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            reflection_prompts: DEFAULT_REFLECTION_PROMPTS
                .iter()
                .map(|p| (*p).to_string())
                .collect(),
            justification_template: "Why did you choose to {choice}?".to_string(),
        }
    }
}
