use anyhow::Result;
use chrono::Utc;
use sandbox_cli::{build_cli, commands, init_logging, SandboxConfig};
use std::path::PathBuf;

fn main() -> Result<()> {
    let matches = build_cli().get_matches();
    init_logging(matches.get_flag("verbose"));

    let mut config =
        SandboxConfig::resolve(matches.get_one::<PathBuf>("config").map(PathBuf::as_path))?;
    if let Some(dir) = matches.get_one::<PathBuf>("data-dir") {
        config = config.with_data_dir(dir);
    }

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match matches.subcommand() {
        Some(("scenarios", _)) => {
            let catalog = config.load_catalog()?;
            commands::list_scenarios(&catalog, &mut out)?;
        }
        Some(("play", _)) => {
            let stdin = std::io::stdin();
            let report = commands::play(&config, stdin.lock(), &mut out)?;
            if report.failed_writes > 0 {
                eprintln!("warning: {} records could not be saved", report.failed_writes);
            }
        }
        Some(("export", args)) => {
            let out_dir = args.get_one::<PathBuf>("out").map(PathBuf::as_path);
            commands::export(&config, out_dir, Utc::now(), &mut out)?;
        }
        Some(("validate-catalog", args)) => {
            if let Some(path) = args.get_one::<PathBuf>("path") {
                commands::validate_catalog(path, &mut out)?;
            }
        }
        _ => {}
    }

    Ok(())
}
