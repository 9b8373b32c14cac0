//! Player bound to a persistence sink
//!
//! A write failure never rolls the phase back: the learner keeps moving and
//! the failed write is reported in the [`Outcome`].

use crate::action::Action;
use crate::effect::Effect;
use crate::error::{PlayerError, SinkError};
use crate::player::ScenarioPlayer;
use crate::sink::PersistenceSink;

/// Write that the sink rejected
#[derive(Debug)]
pub struct FailedWrite {
    /// The write that was attempted
    pub effect: Effect,
    /// Why it failed
    pub error: SinkError,
}

/// What happened to the writes of one accepted input
#[derive(Debug, Default)]
pub struct Outcome {
    /// Writes the sink accepted, in order
    pub persisted: Vec<Effect>,
    /// Writes the sink rejected, in order
    pub failed: Vec<FailedWrite>,
}

impl Outcome {
    /// Every write succeeded
    #[inline]
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Drives a [`ScenarioPlayer`] and applies its effects to a sink
#[derive(Debug)]
pub struct Session<S> {
    player: ScenarioPlayer,
    sink: S,
}

impl<S: PersistenceSink> Session<S> {
    /// Create new session
    pub fn new(player: ScenarioPlayer, sink: S) -> Self {
        Self { player, sink }
    }

    /// Player state
    #[inline]
    pub fn player(&self) -> &ScenarioPlayer {
        &self.player
    }

    /// Sink
    #[inline]
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Dispatch `action` and persist its effects
    ///
    /// # Errors
    /// Only when the player refuses the input. Sink failures are reported
    /// in [`Outcome::failed`].
    pub fn handle(&mut self, action: Action) -> Result<Outcome, PlayerError> {
        let effects = self.player.dispatch(action)?;
        let mut outcome = Outcome::default();

        for effect in effects {
            match effect.apply_to(&self.sink) {
                Ok(()) => outcome.persisted.push(effect),
                Err(error) => {
                    tracing::warn!(record = effect.key(), error = %error, "Persistence write failed");
                    outcome.failed.push(FailedWrite { effect, error });
                }
            }
        }

        Ok(outcome)
    }

    /// Split into player and sink
    pub fn into_parts(self) -> (ScenarioPlayer, S) {
        (self.player, self.sink)
    }
}
