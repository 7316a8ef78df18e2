//! Core library entry for the `calnorm` CLI.
//!
//! The heart of the crate is [`transform::UidUpdate`], which gives a
//! calendar component a `UID` only when it lacks one, using an injected
//! [`ports::UidGenerator`]. The remaining modules move components in and
//! out of iCalendar text and wire the transform up to a command line.

pub mod adapters;
pub mod cassette;
pub mod cli;
pub mod codec;
pub mod commands;
pub mod config;
pub mod context;
pub mod model;
pub mod ports;
pub mod transform;

use clap::Parser;

/// Run the CLI with the provided arguments.
///
/// # Errors
///
/// Returns an error string when argument parsing fails or command execution fails.
pub fn run<I, T>(args: I) -> Result<(), String>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    let cli = cli::Cli::try_parse_from(args).map_err(|err| err.to_string())?;
    commands::dispatch(&cli.command)
}
