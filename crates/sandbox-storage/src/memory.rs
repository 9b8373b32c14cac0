//! In-memory store

use crate::ledger::Ledger;
use parking_lot::Mutex;
use sandbox_player::{
    AgreementRecord, AnalyticsEvent, PersistenceSink, RecordReader, Reflection, SinkError,
};

/// Store that keeps every record in process memory
#[derive(Debug)]
pub struct MemoryStore {
    agreement: Mutex<Option<AgreementRecord>>,
    reflections: Ledger<Reflection>,
    analytics: Ledger<AnalyticsEvent>,
}

impl MemoryStore {
    /// Create new empty store
    #[must_use]
    pub fn new() -> Self {
        Self {
            agreement: Mutex::new(None),
            reflections: Ledger::new(crate::REFLECTIONS_KEY),
            analytics: Ledger::new(crate::ANALYTICS_KEY),
        }
    }

    /// Reflection ledger
    #[inline]
    pub fn reflection_ledger(&self) -> &Ledger<Reflection> {
        &self.reflections
    }

    /// Analytics ledger
    #[inline]
    pub fn analytics_ledger(&self) -> &Ledger<AnalyticsEvent> {
        &self.analytics
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl PersistenceSink for MemoryStore {
    fn record_agreement(&self, record: &AgreementRecord) -> Result<(), SinkError> {
        *self.agreement.lock() = Some(record.clone());
        Ok(())
    }

    fn append_reflection(&self, reflection: &Reflection) -> Result<(), SinkError> {
        self.reflections.append(reflection.clone())?;
        Ok(())
    }

    fn append_analytics(&self, event: &AnalyticsEvent) -> Result<(), SinkError> {
        self.analytics.append(event.clone())?;
        Ok(())
    }
}

impl RecordReader for MemoryStore {
    fn agreement(&self) -> Result<Option<AgreementRecord>, SinkError> {
        Ok(self.agreement.lock().clone())
    }

    fn reflections(&self) -> Result<Vec<Reflection>, SinkError> {
        Ok(self.reflections.records())
    }

    fn analytics(&self) -> Result<Vec<AnalyticsEvent>, SinkError> {
        Ok(self.analytics.records())
    }
}
