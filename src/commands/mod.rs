//! Command dispatch and handlers.

pub mod check;
pub mod ensure;
mod files;

use std::env;

use tracing::{info, warn};

use crate::cassette::session::RecordingSession;
use crate::cli::Command;
use crate::config::{GeneratorSettings, RECORD_ENV};
use crate::context::ServiceContext;

/// Dispatch a parsed command to its handler.
///
/// When `CALNORM_RECORD` is set to a directory path, all port interactions
/// are recorded to per-port cassette files beneath it.
///
/// # Errors
///
/// Returns an error string if the context cannot be built or the selected
/// command handler fails.
pub fn dispatch(command: &Command) -> Result<(), String> {
    let settings = match command {
        Command::Ensure { generator, .. } => generator.clone(),
        Command::Check { .. } => GeneratorSettings::default(),
    };

    if let Ok(root) = env::var(RECORD_ENV) {
        let (ctx, session) = ServiceContext::recording_at(root, &settings)?;
        dispatch_recorded(command, &ctx, session)
    } else {
        dispatch_with_context(command, &ServiceContext::live(&settings)?)
    }
}

/// Runs the command, then saves the session's cassettes whatever the
/// command returned. A failure to save is logged and never replaces the
/// command's own result.
fn dispatch_recorded(
    command: &Command,
    ctx: &ServiceContext,
    session: RecordingSession,
) -> Result<(), String> {
    let result = dispatch_with_context(command, ctx);
    match session.finish() {
        Ok(dir) => info!(dir = %dir.display(), "recording saved"),
        Err(e) => warn!(error = %e, "recording could not be saved"),
    }
    result
}

/// Dispatch a command with the given service context.
///
/// # Errors
///
/// Returns an error string if the selected command handler fails.
pub fn dispatch_with_context(command: &Command, ctx: &ServiceContext) -> Result<(), String> {
    match command {
        Command::Ensure { paths, dry_run, .. } => ensure::run(ctx, paths, *dry_run),
        Command::Check { paths, json } => check::run(ctx, paths, *json),
    }
}
