//! Storage errors

use sandbox_player::SinkError;
use std::path::PathBuf;

/// Errors raised by stores and the portfolio exporter
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// IO error on a store file
    #[error("io error on {path}: {source}")]
    Io {
        /// File path
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// Record or document could not be (de)serialized
    #[error("serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Store file holds something other than the expected records
    #[error("corrupt store file {path}: {message}")]
    Corrupt {
        /// File path
        path: PathBuf,
        /// Parser message
        message: String,
    },

    /// Ledger entry does not match its hash chain
    #[error("integrity violation in {log} at entry {index}")]
    IntegrityViolation {
        /// Ledger name
        log: String,
        /// First bad entry
        index: usize,
    },
}

impl StoreError {
    /// Create IO error for path
    pub fn io_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Check if error means stored history was altered
    #[must_use]
    pub fn is_integrity_violation(&self) -> bool {
        matches!(self, Self::IntegrityViolation { .. })
    }
}

impl From<StoreError> for SinkError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Io { path, source } => SinkError::Io { path, source },
            StoreError::Serialize(e) => SinkError::Serialize(e),
            StoreError::IntegrityViolation { log, index } => SinkError::Integrity { log, index },
            other @ StoreError::Corrupt { .. } => SinkError::Unavailable(other.to_string()),
        }
    }
}
