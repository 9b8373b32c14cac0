//! Sandbox Player - navigation state machine for the ethics walkthrough
//!
//! The player accepts learner inputs ([`Action`]s), moves through an
//! explicit set of [`Phase`]s, and describes every required persistence
//! write as an [`Effect`]. It never performs I/O itself; a [`Session`]
//! binds it to a [`PersistenceSink`].
//!
//! # Quick Start
//!
//! ```rust
//! use sandbox_player::prelude::*;
//!
//! let mut player = ScenarioPlayer::builtin();
//! let effects = player.agree(true).unwrap();
//! assert_eq!(effects.len(), 2);
//!
//! player.select_scenario("phishing").unwrap();
//! let view = player.current_step_view().unwrap();
//! assert_eq!(view.progress.step_index, 0);
//! ```

#![warn(unreachable_pub)]

pub mod action;
pub mod clock;
pub mod config;
pub mod decision;
pub mod effect;
pub mod error;
pub mod player;
pub mod prompt;
pub mod records;
pub mod session;
pub mod sink;
pub mod state;
pub mod state_machine;
pub mod view;

pub use action::{Action, ActionKind};
pub use clock::{Clock, FixedClock, SystemClock};
pub use config::PlayerConfig;
pub use decision::Decision;
pub use effect::Effect;
pub use error::{PlayerError, SinkError};
pub use player::ScenarioPlayer;
pub use prompt::{FixedPrompt, PromptPicker, RandomPrompt};
pub use records::{AgreementRecord, AnalyticsEvent, AnalyticsKind, Reflection};
pub use session::{FailedWrite, Outcome, Session};
pub use sink::{PersistenceSink, RecordReader};
pub use state::{ModalKind, Phase, PhaseKind, SessionState};
pub use view::{AdvanceLabel, ModalView, Progress, StepView};

/// Common imports for driving a player
pub mod prelude {
    pub use crate::{
        Action, Decision, Effect, ModalView, Phase, PlayerError, ScenarioPlayer, Session,
    };
    pub use crate::{PersistenceSink, RecordReader};
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
