//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::GeneratorSettings;

/// Top-level CLI parser for `calnorm`.
#[derive(Debug, Parser)]
#[command(name = "calnorm", version, about = "Normalize iCalendar files")]
pub struct Cli {
    /// The command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported top-level subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Add a UID to every event, to-do, journal and free/busy entry that lacks one.
    Ensure {
        /// Calendar files, or directories of `.ics` files.
        #[arg(required = true)]
        paths: Vec<PathBuf>,
        /// How new UIDs are produced.
        #[command(flatten)]
        generator: GeneratorSettings,
        /// Report what would change without rewriting any file.
        #[arg(long)]
        dry_run: bool,
    },
    /// List components that are missing a UID.
    Check {
        /// Calendar files, or directories of `.ics` files.
        #[arg(required = true)]
        paths: Vec<PathBuf>,
        /// Print the report as JSON.
        #[arg(long)]
        json: bool,
    },
}
