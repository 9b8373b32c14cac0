//! Directory-of-JSON-files store
//!
//! Layout:
//! ```text
//! <dir>/agreement.json     AgreementRecord
//! <dir>/reflections.json   [Entry<Reflection>]
//! <dir>/analytics.json     [Entry<AnalyticsEvent>]
//! ```
//!
//! Each write replaces the whole file through a temporary sibling and a
//! rename, so a crash leaves either the old or the new file.

use crate::error::StoreError;
use crate::ledger::{Entry, Ledger};
use crate::{AGREEMENT_KEY, ANALYTICS_KEY, REFLECTIONS_KEY};
use parking_lot::Mutex;
use sandbox_player::{
    AgreementRecord, AnalyticsEvent, PersistenceSink, RecordReader, Reflection, SinkError,
};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Store backed by a directory of JSON files
#[derive(Debug)]
pub struct FileStore {
    dir: PathBuf,
    agreement: Mutex<Option<AgreementRecord>>,
    reflections: Ledger<Reflection>,
    analytics: Ledger<AnalyticsEvent>,
}

impl FileStore {
    /// Open (or create) a store in `dir`
    ///
    /// # Errors
    /// - `StoreError::Io` if the directory cannot be created or read
    /// - `StoreError::Corrupt` if a file is not valid JSON of the right shape
    /// - `StoreError::IntegrityViolation` if a ledger was edited out of band
    pub fn open(dir: impl AsRef<Path>) -> Result<Self, StoreError> {
        let dir = dir.as_ref().to_path_buf();
        fs::create_dir_all(&dir).map_err(|e| StoreError::io_error(&dir, e))?;

        let agreement = read_json::<AgreementRecord>(&dir.join(file_name(AGREEMENT_KEY)))?;
        let reflections = Ledger::from_entries(
            REFLECTIONS_KEY,
            read_json::<Vec<Entry<Reflection>>>(&dir.join(file_name(REFLECTIONS_KEY)))?
                .unwrap_or_default(),
        )?;
        let analytics = Ledger::from_entries(
            ANALYTICS_KEY,
            read_json::<Vec<Entry<AnalyticsEvent>>>(&dir.join(file_name(ANALYTICS_KEY)))?
                .unwrap_or_default(),
        )?;

        tracing::debug!(
            dir = %dir.display(),
            agreed = agreement.as_ref().is_some_and(|a| a.agreed),
            reflections = reflections.len(),
            analytics = analytics.len(),
            "Opened file store"
        );

        Ok(Self {
            dir,
            agreement: Mutex::new(agreement),
            reflections,
            analytics,
        })
    }

    /// Store directory
    #[inline]
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of the file holding `key`
    #[must_use]
    pub fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(file_name(key))
    }

    /// Re-check both ledgers
    ///
    /// # Errors
    /// `StoreError::IntegrityViolation` naming the first bad entry
    pub fn verify_integrity(&self) -> Result<(), StoreError> {
        self.reflections.verify_integrity()?;
        self.analytics.verify_integrity()
    }
}

impl PersistenceSink for FileStore {
    fn record_agreement(&self, record: &AgreementRecord) -> Result<(), SinkError> {
        let mut guard = self.agreement.lock();
        write_json_atomic(&self.path_for(AGREEMENT_KEY), record)?;
        *guard = Some(record.clone());
        Ok(())
    }

    fn append_reflection(&self, reflection: &Reflection) -> Result<(), SinkError> {
        let path = self.path_for(REFLECTIONS_KEY);
        self.reflections
            .append_then(reflection.clone(), |entries| write_json_atomic(&path, &entries))?;
        Ok(())
    }

    fn append_analytics(&self, event: &AnalyticsEvent) -> Result<(), SinkError> {
        let path = self.path_for(ANALYTICS_KEY);
        self.analytics
            .append_then(event.clone(), |entries| write_json_atomic(&path, &entries))?;
        Ok(())
    }
}

impl RecordReader for FileStore {
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

fn file_name(key: &str) -> String {
    format!("{key}.json")
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<Option<T>, StoreError> {
    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(StoreError::io_error(path, e)),
    };
    serde_json::from_str(&text)
        .map(Some)
        .map_err(|e| StoreError::Corrupt {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
}

fn write_json_atomic<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<(), StoreError> {
    let json = serde_json::to_vec_pretty(value)?;
    let tmp = path.with_extension("json.tmp");
    fs::write(&tmp, json).map_err(|e| StoreError::io_error(&tmp, e))?;
    fs::rename(&tmp, path).map_err(|e| StoreError::io_error(path, e))
}
