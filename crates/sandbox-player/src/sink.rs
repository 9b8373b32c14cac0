//! Persistence collaborator contracts
//!
//! Writes are append-only and keyed by logical record type
//! (`agreement`, `reflections`, `analytics`). Implementations use
//! interior mutability so one store can back a session and an exporter.

use crate::effect::Effect;
use crate::error::SinkError;
use crate::records::{AgreementRecord, AnalyticsEvent, Reflection};
use std::sync::Arc;

/// Receives the writes described by player effects
#[cfg_attr(test, mockall::automock)]
pub trait PersistenceSink {
    /// Store the agreement record
    fn record_agreement(&self, record: &AgreementRecord) -> Result<(), SinkError>;

    /// Append one reflection
    fn append_reflection(&self, reflection: &Reflection) -> Result<(), SinkError>;

    /// Append one analytics event
    fn append_analytics(&self, event: &AnalyticsEvent) -> Result<(), SinkError>;

    /// Carry out one player effect
    fn apply(&self, effect: &Effect) -> Result<(), SinkError> {
        effect.apply_to(self)
    }
}

/// Read side used by export and session resume
pub trait RecordReader {
    /// Stored agreement, if any
    fn agreement(&self) -> Result<Option<AgreementRecord>, SinkError>;

    /// Reflections in append order
    fn reflections(&self) -> Result<Vec<Reflection>, SinkError>;

    /// Analytics events in append order
    fn analytics(&self) -> Result<Vec<AnalyticsEvent>, SinkError>;
}

impl<T: PersistenceSink + ?Sized> PersistenceSink for Arc<T> {
    fn record_agreement(&self, record: &AgreementRecord) -> Result<(), SinkError> {
        (**self).record_agreement(record)
    }

    fn append_reflection(&self, reflection: &Reflection) -> Result<(), SinkError> {
        (**self).append_reflection(reflection)
    }

    fn append_analytics(&self, event: &AnalyticsEvent) -> Result<(), SinkError> {
        (**self).append_analytics(event)
    }
}

impl<T: PersistenceSink + ?Sized> PersistenceSink for &T {
    fn record_agreement(&self, record: &AgreementRecord) -> Result<(), SinkError> {
        (**self).record_agreement(record)
    }

    fn append_reflection(&self, reflection: &Reflection) -> Result<(), SinkError> {
        (**self).append_reflection(reflection)
    }

    fn append_analytics(&self, event: &AnalyticsEvent) -> Result<(), SinkError> {
        (**self).append_analytics(event)
    }
}

impl<T: RecordReader + ?Sized> RecordReader for Arc<T> {
    fn agreement(&self) -> Result<Option<AgreementRecord>, SinkError> {
        (**self).agreement()
    }

    fn reflections(&self) -> Result<Vec<Reflection>, SinkError> {
        (**self).reflections()
    }

    fn analytics(&self) -> Result<Vec<AnalyticsEvent>, SinkError> {
        (**self).analytics()
    }
}
