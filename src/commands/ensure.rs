//! `calnorm ensure` command.

use std::path::{Path, PathBuf};

use tracing::{info, warn};

use super::files::expand_paths;
use crate::codec;
use crate::context::ServiceContext;
use crate::transform::{missing_uids, Pipeline, UidUpdate};

/// Execute the `ensure` command over every given file or directory.
///
/// # Errors
///
/// Returns an error string on the first file that cannot be read, parsed,
/// completed or written. Files processed before it keep their changes.
pub fn run(ctx: &ServiceContext, paths: &[PathBuf], dry_run: bool) -> Result<(), String> {
    let files = expand_paths(ctx, paths)?;
    let pipeline = Pipeline::new().with(UidUpdate::new(ctx.uid_gen.as_ref()));

    for file in &files {
        let added = ensure_file(ctx, &pipeline, file, dry_run)?;
        if dry_run {
            println!("{}: would add {added} UID(s)", file.display());
        } else {
            println!("{}: added {added} UID(s)", file.display());
        }
    }
    Ok(())
}

/// Fills in missing UIDs in one file and returns how many were added.
///
/// The file is only rewritten when something changed, and only after every
/// component received its UID.
///
/// # Errors
///
/// Returns an error string if the file cannot be read, parsed or written,
/// or if the generator fails.
pub fn ensure_file(
    ctx: &ServiceContext,
    pipeline: &Pipeline<'_>,
    path: &Path,
    dry_run: bool,
) -> Result<usize, String> {
    let text = ctx
        .fs
        .read_to_string(path)
        .map_err(|e| format!("Failed to read {}: {e}", path.display()))?;
    let mut roots =
        codec::parse(&text).map_err(|e| format!("Failed to parse {}: {e}", path.display()))?;

    let missing: usize = roots.iter().map(|root| missing_uids(root).len()).sum();
    if missing == 0 || dry_run {
        return Ok(missing);
    }

    for root in &mut roots {
        pipeline.apply_to_calendar(root).map_err(|e| {
            warn!(path = %path.display(), error = %e, "UID generation failed");
            format!("Failed to assign UIDs in {}: {e}", path.display())
        })?;
    }
    ctx.fs
        .write(path, &codec::write(&roots))
        .map_err(|e| format!("Failed to write {}: {e}", path.display()))?;
    info!(path = %path.display(), added = missing, "assigned missing UIDs");
    Ok(missing)
}
