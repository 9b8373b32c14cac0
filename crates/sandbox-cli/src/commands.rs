//! Subcommand implementations

use crate::config::SandboxConfig;
use crate::terminal::{PlayReport, Terminal};
use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use sandbox_catalog::ScenarioCatalog;
use sandbox_player::{RecordReader, ScenarioPlayer, Session};
use sandbox_storage::{FileStore, Portfolio};
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

/// `scenarios`: one line per catalog entry
///
/// # Errors
/// Output errors
pub fn list_scenarios(catalog: &ScenarioCatalog, out: &mut impl Write) -> Result<()> {
    for (id, scenario) in catalog.iter() {
        writeln!(out, "{id:<12} {:<40} {} steps", scenario.title, scenario.step_count())?;
    }
    Ok(())
}

/// `play`: terminal walkthrough writing through a [`FileStore`]
///
/// # Errors
/// Unusable store or catalog, or terminal I/O errors
pub fn play<R: BufRead, W: Write>(config: &SandboxConfig, input: R, output: W) -> Result<PlayReport> {
    let store = open_store(&config.data_dir)?;
    let catalog = config.load_catalog()?;
    let player = ScenarioPlayer::new(catalog)
        .with_config(config.player.clone())
        .resume_from(store.agreement()?.as_ref());

    let mut session = Session::new(player, &store);
    let report = Terminal::new(input, output).run(&mut session)?;
    tracing::info!(
        accepted = report.accepted,
        completed = report.completed,
        failed_writes = report.failed_writes,
        "Walkthrough finished"
    );
    Ok(report)
}

/// `export`: write the portfolio and print its path
///
/// # Errors
/// Unusable store or unwritable export directory
pub fn export(
    config: &SandboxConfig,
    out_dir: Option<&Path>,
    now: DateTime<Utc>,
    out: &mut impl Write,
) -> Result<PathBuf> {
    let store = open_store(&config.data_dir)?;
    let portfolio = Portfolio::assemble(&store, config.user.as_str(), now)?;
    let dir = out_dir.unwrap_or(config.export_dir.as_path());
    let path = portfolio
        .export_to_dir(dir)
        .with_context(|| format!("Failed to export portfolio to {}", dir.display()))?;
    writeln!(out, "{}", path.display())?;
    Ok(path)
}

/// `validate-catalog`: load a catalog file and summarise it
///
/// # Errors
/// Unreadable, unparsable or invalid catalog
pub fn validate_catalog(path: &Path, out: &mut impl Write) -> Result<()> {
    let catalog = ScenarioCatalog::load(path)
        .with_context(|| format!("Invalid catalog {}", path.display()))?;
    writeln!(out, "{}: {} scenarios", path.display(), catalog.len())?;
    list_scenarios(&catalog, out)
}

fn open_store(dir: &Path) -> Result<FileStore> {
    FileStore::open(dir).with_context(|| format!("Failed to open record store {}", dir.display()))
}
