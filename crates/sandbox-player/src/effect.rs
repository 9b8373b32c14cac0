//! Side-effect descriptions emitted by accepted transitions
//!
//! The player never performs I/O. Each accepted input yields the writes the
//! persistence collaborator must carry out, in order.

use crate::error::SinkError;
use crate::records::{AgreementRecord, AnalyticsEvent, Reflection};
use crate::sink::PersistenceSink;
use serde::{Deserialize, Serialize};

/// Required persistence write
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "effect", content = "record", rename_all = "snake_case")]
pub enum Effect {
    /// Write the agreement record
    RecordAgreement(AgreementRecord),
    /// Append to the reflection log
    AppendReflection(Reflection),
    /// Append to the analytics log
    AppendAnalytics(AnalyticsEvent),
}

impl Effect {
    /// Logical record type the write targets
    #[must_use]
    pub fn key(&self) -> &'static str {
        match self {
            Self::RecordAgreement(_) => "agreement",
            Self::AppendReflection(_) => "reflections",
            Self::AppendAnalytics(_) => "analytics",
        }
    }

    /// Carry out the write on `sink`
    ///
    /// # Errors
    /// Whatever the sink reports; the caller decides what to do with it
    pub fn apply_to<S: PersistenceSink + ?Sized>(&self, sink: &S) -> Result<(), SinkError> {
        match self {
            Self::RecordAgreement(record) => sink.record_agreement(record),
            Self::AppendReflection(reflection) => sink.append_reflection(reflection),
            Self::AppendAnalytics(event) => sink.append_analytics(event),
        }
    }

    /// Analytics event, if this is an analytics write
    #[must_use]
    pub fn as_analytics(&self) -> Option<&AnalyticsEvent> {
        match self {
            Self::AppendAnalytics(event) => Some(event),
            _ => None,
        }
    }

    /// Reflection, if this is a reflection write
    #[must_use]
    pub fn as_reflection(&self) -> Option<&Reflection> {
        match self {
            Self::AppendReflection(reflection) => Some(reflection),
            _ => None,
        }
    }
}
