//! Sandbox configuration
//!
//! Loaded from a TOML file:
//!
//! ```toml
//! user = "learner@example.org"
//! data_dir = ".ethical-sandbox"
//! export_dir = "exports"
//! catalog = "scenarios.yaml"
//!
//! [player]
//! reflection_prompts = ["What would you do differently?"]
//! justification_template = "Why {choice}?"
//! ```
//!
//! Every key is optional. A missing file means defaults.

use anyhow::{Context, Result};
use sandbox_catalog::ScenarioCatalog;
use sandbox_player::PlayerConfig;
use sandbox_storage::DEFAULT_USER;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Default config file name, looked up in the working directory
pub const DEFAULT_CONFIG_FILE: &str = "ethical-sandbox.toml";

/// Default record directory
pub const DEFAULT_DATA_DIR: &str = ".ethical-sandbox";

/// Top-level configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SandboxConfig {
    /// Learner recorded in exported portfolios
    pub user: String,
    /// Directory holding the record files
    pub data_dir: PathBuf,
    /// Directory portfolios are written to
    pub export_dir: PathBuf,
    /// Catalog file replacing the built-in scenarios
    pub catalog: Option<PathBuf>,
    /// Player settings
    pub player: PlayerConfig,
}

impl Default for SandboxConfig {
    fn default() -> Self {
        Self {
            user: DEFAULT_USER.to_string(),
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            export_dir: PathBuf::from("."),
            catalog: None,
            player: PlayerConfig::default(),
        }
    }
}

impl SandboxConfig {
    /// The file named by `--config`, or the default file when none was given
    ///
    /// # Errors
    /// Explicit path that does not exist, unreadable file or invalid TOML
    pub fn resolve(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => Self::load_required(path),
            None => Self::load(Path::new(DEFAULT_CONFIG_FILE)),
        }
    }

    /// Load from `path`; defaults when the file does not exist
    ///
    /// # Errors
    /// Unreadable file or invalid TOML
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!("Config file not found at {:?}, using defaults", path);
            return Ok(Self::default());
        }
        Self::load_required(path)
    }

    /// Load from `path`, which must exist
    ///
    /// # Errors
    /// Missing or unreadable file, or invalid TOML
    pub fn load_required(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config = Self::parse(&contents)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;

        tracing::info!("Loaded config from {:?}", path);
        Ok(config)
    }

    /// Parse TOML text
    ///
    /// # Errors
    /// Invalid TOML or mistyped keys
    pub fn parse(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// With data directory
    #[inline]
    #[must_use]
    pub fn with_data_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.data_dir = dir.into();
        self
    }

    /// Scenario catalog: the configured file, or the built-in one
    ///
    /// # Errors
    /// Catalog file that cannot be loaded or fails validation
    pub fn load_catalog(&self) -> Result<Arc<ScenarioCatalog>> {
        match &self.catalog {
            Some(path) => {
                let catalog = ScenarioCatalog::load(path)
                    .with_context(|| format!("Failed to load catalog {}", path.display()))?;
                Ok(Arc::new(catalog))
            }
            None => Ok(ScenarioCatalog::builtin_shared()),
        }
    }
}
