//! Sandbox Catalog - scenario content for the ethics walkthrough
//!
//! Provides:
//! - The scenario / step data model
//! - The canonical built-in catalog (`phishing`, `bias`, `privacy`)
//! - Loading and validation of catalog files (JSON, YAML, TOML)
//!
//! # Example
//!
//! ```rust
//! use sandbox_catalog::ScenarioCatalog;
//!
//! let catalog = ScenarioCatalog::builtin();
//! let phishing = catalog.get("phishing").unwrap();
//! assert_eq!(phishing.step_count(), 4);
//! ```

#![warn(unreachable_pub)]

pub mod builtin;
pub mod catalog;
pub mod error;
pub mod scenario;

pub use catalog::{CatalogFormat, ScenarioCatalog};
pub use error::CatalogError;
pub use scenario::{AffectedPerson, Scenario, ScenarioId, Step, StepKind};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
