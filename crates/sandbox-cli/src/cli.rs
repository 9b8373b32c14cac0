//! Command-line definition

use clap::{value_parser, Arg, ArgAction, Command};
use std::path::PathBuf;

/// Build the `ethical-sandbox` command
#[must_use]
pub fn build_cli() -> Command {
    Command::new("ethical-sandbox")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Guided ethics walkthroughs with reflection capture and portfolio export")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("config")
                .long("config")
                .global(true)
                .value_parser(value_parser!(PathBuf))
                .help("Configuration file (default: ./ethical-sandbox.toml)"),
        )
        .arg(
            Arg::new("data-dir")
                .long("data-dir")
                .global(true)
                .value_parser(value_parser!(PathBuf))
                .help("Directory holding agreement, reflection and analytics records"),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .global(true)
                .action(ArgAction::SetTrue)
                .help("Debug logging on stderr"),
        )
        .subcommand(Command::new("scenarios").about("List available scenarios"))
        .subcommand(Command::new("play").about("Play scenarios in the terminal"))
        .subcommand(
            Command::new("export")
                .about("Export the learner portfolio as JSON")
                .arg(
                    Arg::new("out")
                        .long("out")
                        .value_parser(value_parser!(PathBuf))
                        .help("Directory to write the portfolio to"),
                ),
        )
        .subcommand(
            Command::new("validate-catalog")
                .about("Load and validate a scenario catalog file")
                .arg(
                    Arg::new("path")
                        .long("path")
                        .required(true)
                        .value_parser(value_parser!(PathBuf))
                        .help("Catalog file (.json, .yaml, .yml or .toml)"),
                ),
        )
}
