//! Scenario catalog
//!
//! Read-only mapping from scenario id to scenario. Insertion order is kept
//! so the selection screen lists scenarios in the order they were authored.

use crate::error::CatalogError;
use crate::scenario::{Scenario, ScenarioId};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::Arc;

/// Catalog document formats, selected by file extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogFormat {
    /// `.json`
    Json,
    /// `.yaml` / `.yml`
    Yaml,
    /// `.toml`
    Toml,
}

impl CatalogFormat {
    /// Detect format from a path's extension
    ///
    /// # Errors
    /// `CatalogError::UnsupportedFormat` for any other extension
    pub fn from_path(path: &Path) -> Result<Self, CatalogError> {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_ascii_lowercase();

        match extension.as_str() {
            "json" => Ok(Self::Json),
            "yaml" | "yml" => Ok(Self::Yaml),
            "toml" => Ok(Self::Toml),
            _ => Err(CatalogError::UnsupportedFormat(extension)),
        }
    }

    /// Format name used in error messages
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Yaml => "yaml",
            Self::Toml => "toml",
        }
    }
}

/// Mapping from scenario id to scenario
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ScenarioCatalog {
    scenarios: IndexMap<ScenarioId, Scenario>,
}

impl ScenarioCatalog {
    /// Create empty catalog
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The canonical built-in catalog, initialised once per process
    #[must_use]
    pub fn builtin() -> &'static ScenarioCatalog {
        &crate::builtin::BUILTIN_CATALOG
    }

    /// Shared handle to the built-in catalog
    #[must_use]
    pub fn builtin_shared() -> Arc<ScenarioCatalog> {
        Arc::clone(&*crate::builtin::BUILTIN_CATALOG)
    }

    /// With a scenario registered under `id`
    #[must_use]
    pub fn with_scenario(mut self, id: impl Into<ScenarioId>, scenario: Scenario) -> Self {
        self.scenarios.insert(id.into(), scenario);
        self
    }

    /// Look up a scenario
    ///
    /// # Errors
    /// `CatalogError::NotFound` when `id` is not registered
    pub fn get(&self, id: &str) -> Result<&Scenario, CatalogError> {
        self.scenarios
            .get(id)
            .ok_or_else(|| CatalogError::NotFound(id.to_string()))
    }

    /// Canonical id for a lookup string
    ///
    /// # Errors
    /// `CatalogError::NotFound` when `id` is not registered
    pub fn resolve(&self, id: &str) -> Result<(&ScenarioId, &Scenario), CatalogError> {
        self.scenarios
            .get_key_value(id)
            .ok_or_else(|| CatalogError::NotFound(id.to_string()))
    }

    /// Whether `id` is registered
    #[inline]
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.scenarios.contains_key(id)
    }

    /// Scenario ids in catalog order
    pub fn ids(&self) -> impl Iterator<Item = &ScenarioId> {
        self.scenarios.keys()
    }

    /// Scenarios in catalog order
    pub fn iter(&self) -> impl Iterator<Item = (&ScenarioId, &Scenario)> {
        self.scenarios.iter()
    }

    /// Number of scenarios
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.scenarios.len()
    }

    /// Whether the catalog is empty
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.scenarios.is_empty()
    }

    /// Check structural rules every playable catalog must satisfy
    ///
    /// # Errors
    /// First violation found: empty catalog, empty id, empty title, or a
    /// scenario without steps
    pub fn validate(&self) -> Result<(), CatalogError> {
        if self.scenarios.is_empty() {
            return Err(CatalogError::EmptyCatalog);
        }
        for (id, scenario) in &self.scenarios {
            if id.as_str().trim().is_empty() {
                return Err(CatalogError::EmptyId);
            }
            if scenario.title.trim().is_empty() {
                return Err(CatalogError::EmptyTitle(id.to_string()));
            }
            if scenario.steps.is_empty() {
                return Err(CatalogError::EmptyScenario(id.to_string()));
            }
        }
        Ok(())
    }

    /// Parse and validate a catalog document
    ///
    /// # Errors
    /// Parse failure or validation failure
    pub fn parse(source: &str, format: CatalogFormat) -> Result<Self, CatalogError> {
        let catalog: Self = match format {
            CatalogFormat::Json => {
                serde_json::from_str(source).map_err(|e| CatalogError::parse("json", e))?
            }
            CatalogFormat::Yaml => {
                serde_yaml::from_str(source).map_err(|e| CatalogError::parse("yaml", e))?
            }
            CatalogFormat::Toml => {
                toml::from_str(source).map_err(|e| CatalogError::parse("toml", e))?
            }
        };
        catalog.validate()?;
        Ok(catalog)
    }

    /// Load a catalog file, format chosen by extension
    ///
    /// # Errors
    /// - `CatalogError::UnsupportedFormat` for unknown extensions
    /// - `CatalogError::Io` if the file cannot be read
    /// - parse / validation errors from [`ScenarioCatalog::parse`]
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let format = CatalogFormat::from_path(path)?;
        let source =
            std::fs::read_to_string(path).map_err(|e| CatalogError::io_error(path, e))?;

        let catalog = Self::parse(&source, format)?;
        tracing::info!(
            path = %path.display(),
            format = format.name(),
            scenarios = catalog.len(),
            "Loaded scenario catalog"
        );
        Ok(catalog)
    }
}
