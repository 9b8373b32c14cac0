//! Decision tokens captured at a consequence gate

use crate::error::PlayerError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Choice made in the consequence modal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Decision {
    /// Go ahead as planned
    Proceed,
    /// Change the plan
    Modify,
    /// Drop the plan
    Abandon,
}

impl Decision {
    /// Every token, in menu order
    pub const ALL: [Decision; 3] = [Decision::Proceed, Decision::Modify, Decision::Abandon];

    /// Wire token
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Proceed => "proceed",
            Self::Modify => "modify",
            Self::Abandon => "abandon",
        }
    }

    /// Ethically motivated choices must be justified in a reflection
    #[inline]
    #[must_use]
    pub fn requires_justification(self) -> bool {
        matches!(self, Self::Modify | Self::Abandon)
    }
}

impl fmt::Display for Decision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Decision {
    type Err = PlayerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "proceed" => Ok(Self::Proceed),
            "modify" => Ok(Self::Modify),
            "abandon" => Ok(Self::Abandon),
            _ => Err(PlayerError::UnknownDecision(s.to_string())),
        }
    }
}
