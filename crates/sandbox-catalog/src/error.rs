//! Error types for catalog lookup and loading

use std::path::PathBuf;

/// Catalog errors
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// Scenario id is not in the catalog
    #[error("scenario not found: '{0}'")]
    NotFound(String),

    /// Scenario id is empty
    #[error("scenario id must not be empty")]
    EmptyId,

    /// Scenario has no title
    #[error("scenario '{0}' has an empty title")]
    EmptyTitle(String),

    /// Scenario has no steps
    #[error("scenario '{0}' has no steps")]
    EmptyScenario(String),

    /// Catalog holds no scenarios at all
    #[error("catalog contains no scenarios")]
    EmptyCatalog,

    /// File extension is not a known catalog format
    #[error("unsupported catalog format: '{0}'")]
    UnsupportedFormat(String),

    /// Catalog document failed to parse
    #[error("invalid {format} catalog: {message}")]
    Parse {
        /// Format that was being parsed
        format: &'static str,
        /// Parser message
        message: String,
    },

    /// IO error reading a catalog file
    #[error("io error reading {path}: {source}")]
    Io {
        /// File path
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },
}

impl CatalogError {
    /// Create parse error for a format
    pub fn parse(format: &'static str, message: impl ToString) -> Self {
        Self::Parse {
            format,
            message: message.to_string(),
        }
    }

    /// Create IO error for path
    pub fn io_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Whether the error is a lookup of an id that does not exist
    #[inline]
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_display() {
        let err = CatalogError::NotFound("nonexistent".to_string());
        assert_eq!(err.to_string(), "scenario not found: 'nonexistent'");
        assert!(err.is_not_found());
    }

    #[test]
    fn parse_error_carries_format() {
        let err = CatalogError::parse("yaml", "bad indent");
        assert!(err.to_string().contains("invalid yaml catalog"));
        assert!(!err.is_not_found());
    }
}
