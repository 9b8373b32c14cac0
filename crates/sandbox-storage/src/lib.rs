//! Sandbox Storage - persistence for the ethics walkthrough
//!
//! Provides:
//! - [`MemoryStore`]: records kept in process memory
//! - [`FileStore`]: records kept as JSON files in a directory
//! - [`Ledger`]: SHA-256 hash-chained append-only log backing both stores
//! - [`Portfolio`]: read-only export of everything a learner recorded
//!
//! Both stores implement [`sandbox_player::PersistenceSink`] and
//! [`sandbox_player::RecordReader`].

#![warn(unreachable_pub)]

pub mod error;
pub mod file;
pub mod ledger;
pub mod memory;
pub mod portfolio;

pub use error::StoreError;
pub use file::FileStore;
pub use ledger::{Entry, Ledger};
pub use memory::MemoryStore;
pub use portfolio::{Portfolio, DEFAULT_USER};

/// Storage key of the agreement record
pub const AGREEMENT_KEY: &str = "agreement";
/// Storage key of the reflection log
pub const REFLECTIONS_KEY: &str = "reflections";
/// Storage key of the analytics log
pub const ANALYTICS_KEY: &str = "analytics";
