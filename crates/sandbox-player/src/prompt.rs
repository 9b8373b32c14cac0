//! Reflection prompt selection
//!
//! The default prompt is cosmetic and need not be reproducible, so the
//! production picker draws from entropy. Tests use [`FixedPrompt`].

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use std::fmt;

/// Chooses one of the configured reflection prompts
pub trait PromptPicker: fmt::Debug {
    /// Pick a prompt; `None` only when `prompts` is empty
    fn pick<'a>(&mut self, prompts: &'a [String]) -> Option<&'a str>;
}

/// Uniform random choice
#[derive(Debug)]
pub struct RandomPrompt {
    rng: StdRng,
}

impl RandomPrompt {
    /// Seeded from OS entropy
    #[must_use]
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Seeded for a repeatable sequence
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomPrompt {
    fn default() -> Self {
        Self::from_entropy()
    }
}

impl PromptPicker for RandomPrompt {
    fn pick<'a>(&mut self, prompts: &'a [String]) -> Option<&'a str> {
        prompts.choose(&mut self.rng).map(String::as_str)
    }
}

/// Always the prompt at one index (wrapping)
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedPrompt(pub usize);

impl PromptPicker for FixedPrompt {
    fn pick<'a>(&mut self, prompts: &'a [String]) -> Option<&'a str> {
        if prompts.is_empty() {
            return None;
        }
        Some(prompts[self.0 % prompts.len()].as_str())
    }
}
