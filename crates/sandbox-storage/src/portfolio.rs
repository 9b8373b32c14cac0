//! Portfolio export
//!
//! A portfolio is a read-only snapshot of everything a learner recorded.
//! Assembling one never touches session state.

use crate::error::StoreError;
use chrono::{DateTime, Utc};
use sandbox_player::{AnalyticsEvent, RecordReader, Reflection, SinkError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// User recorded when none is configured
pub const DEFAULT_USER: &str = "demo@rrc.ca";

/// Export file name prefix
pub const FILE_PREFIX: &str = "ethical-sandbox-portfolio-";

/// Exported learner record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Portfolio {
    /// Learner identifier
    pub user: String,
    /// When the ethics agreement was given, if ever
    pub ethics_agreement_date: Option<DateTime<Utc>>,
    /// Reflections in append order
    pub reflections: Vec<Reflection>,
    /// Analytics events in append order
    pub analytics: Vec<AnalyticsEvent>,
    /// Export time
    pub generated_at: DateTime<Utc>,
}

impl Portfolio {
    /// Collect everything `reader` holds
    ///
    /// # Errors
    /// Whatever the reader reports
    pub fn assemble<R>(reader: &R, user: impl Into<String>, now: DateTime<Utc>) -> Result<Self, SinkError>
    where
        R: RecordReader + ?Sized,
    {
        let agreement = reader.agreement()?;
        Ok(Self {
            user: user.into(),
            ethics_agreement_date: agreement.filter(|a| a.agreed).map(|a| a.agreed_at),
            reflections: reader.reflections()?,
            analytics: reader.analytics()?,
            generated_at: now,
        })
    }

    /// Pretty-printed JSON document
    ///
    /// # Errors
    /// `StoreError::Serialize` if serialization fails
    pub fn to_json_pretty(&self) -> Result<String, StoreError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// `ethical-sandbox-portfolio-<unixMillis>.json`
    #[must_use]
    pub fn file_name(&self) -> String {
        format!("{FILE_PREFIX}{}.json", self.generated_at.timestamp_millis())
    }

    /// Write the document into `dir` and return its path
    ///
    /// # Errors
    /// `StoreError::Io` if the directory or file cannot be written
    pub fn export_to_dir(&self, dir: impl AsRef<Path>) -> Result<PathBuf, StoreError> {
        let dir = dir.as_ref();
        fs::create_dir_all(dir).map_err(|e| StoreError::io_error(dir, e))?;

        let path = dir.join(self.file_name());
        fs::write(&path, self.to_json_pretty()?).map_err(|e| StoreError::io_error(&path, e))?;
        tracing::info!(
            path = %path.display(),
            reflections = self.reflections.len(),
            analytics = self.analytics.len(),
            "Portfolio exported"
        );
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MemoryStore;
    use pretty_assertions::assert_eq;
    use sandbox_player::{AgreementRecord, PersistenceSink};
    use sandbox_test_utils::{fixed_time, reflection};

    #[test]
    fn never_agreed_has_no_date() {
        let store = MemoryStore::new();
        let portfolio = Portfolio::assemble(&store, DEFAULT_USER, fixed_time()).unwrap();
        assert_eq!(portfolio.ethics_agreement_date, None);

        let json: serde_json::Value = serde_json::from_str(&portfolio.to_json_pretty().unwrap()).unwrap();
        assert!(json["ethicsAgreementDate"].is_null());
        assert_eq!(json["user"], "demo@rrc.ca");
        assert!(json["reflections"].as_array().unwrap().is_empty());
    }

    #[test]
    fn document_field_names() {
        let store = MemoryStore::new();
        store.record_agreement(&AgreementRecord::agreed(fixed_time())).unwrap();
        store.append_reflection(&reflection("bias", 2, "test")).unwrap();

        let portfolio = Portfolio::assemble(&store, "learner@example.org", fixed_time()).unwrap();
        let json = serde_json::to_value(&portfolio).unwrap();
        let keys: Vec<_> = json.as_object().unwrap().keys().cloned().collect();
        assert_eq!(
            keys,
            vec!["analytics", "ethicsAgreementDate", "generatedAt", "reflections", "user"]
        );
        assert_eq!(json["reflections"][0]["scenario"], "bias");
        assert_eq!(json["reflections"][0]["step"], 2);
    }

    #[test]
    fn file_name_carries_millis() {
        let portfolio = Portfolio::assemble(&MemoryStore::new(), DEFAULT_USER, fixed_time()).unwrap();
        assert_eq!(
            portfolio.file_name(),
            format!("ethical-sandbox-portfolio-{}.json", fixed_time().timestamp_millis())
        );
    }
}
