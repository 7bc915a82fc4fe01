//! CLI definitions and entry point

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use super::commands;
use crate::output::OutputMode;
use crate::roster;

/// tombola - Secret Santa draws with per-person exclusion lists
#[derive(Parser, Debug)]
#[command(
    name = "tombola",
    version,
    about = "Secret Santa draws with per-person exclusion lists",
    long_about = "Draw gift assignments from a TOML roster.\n\n\
                  Everyone gives to exactly one other participant, nobody draws\n\
                  themselves, and nobody draws a person on their exclusion list.\n\
                  If no such assignment exists, the draw fails and says so."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long, global = true)]
    pub json: bool,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Top-level subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Write a sample roster file to get started
    Init {
        /// Where to write the roster
        #[arg(default_value = roster::DEFAULT_FILE)]
        path: PathBuf,

        /// Overwrite an existing file
        #[arg(short, long)]
        force: bool,
    },

    /// Validate a roster and report whether it can be drawn
    Check {
        /// Roster file to check
        #[arg(default_value = roster::DEFAULT_FILE)]
        roster: PathBuf,
    },

    /// Draw assignments for a roster
    Draw {
        /// Roster file to draw from
        #[arg(default_value = roster::DEFAULT_FILE)]
        roster: PathBuf,
    },

    /// Show version
    Version,
}

/// Run the CLI
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    let output_mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    match cli.command {
        Some(Command::Init { path, force }) => commands::init(&path, force, output_mode),
        Some(Command::Check { roster }) => commands::check(&roster, output_mode),
        Some(Command::Draw { roster }) => commands::draw(&roster, output_mode),
        Some(Command::Version) => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": env!("CARGO_PKG_VERSION")
                    })
                );
            } else {
                println!("tombola v{}", env!("CARGO_PKG_VERSION"));
            }
            Ok(())
        },
        None => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": env!("CARGO_PKG_VERSION"),
                        "hint": "Use --help for usage"
                    })
                );
            } else {
                println!("tombola v{}", env!("CARGO_PKG_VERSION"));
                println!("\nRun 'tombola --help' for usage");
                println!("Run 'tombola init' to create a roster");
            }
            Ok(())
        },
    }
}
