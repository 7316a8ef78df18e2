//! Resolves command-line paths to calendar files.

use std::path::{Path, PathBuf};

use crate::context::ServiceContext;

/// Expands directories to the `.ics` files directly inside them; other
/// paths are passed through unchanged.
pub(crate) fn expand_paths(ctx: &ServiceContext, paths: &[PathBuf]) -> Result<Vec<PathBuf>, String> {
    let mut files = Vec::new();
    for path in paths {
        if ctx.fs.is_dir(path) {
            let entries = ctx
                .fs
                .list_dir(path)
                .map_err(|e| format!("Failed to list {}: {e}", path.display()))?;
            files.extend(entries.iter().filter(|name| is_calendar_file(name)).map(|name| path.join(name)));
        } else {
            files.push(path.clone());
        }
    }
    Ok(files)
}

fn is_calendar_file(name: &str) -> bool {
    Path::new(name).extension().is_some_and(|ext| ext.eq_ignore_ascii_case("ics"))
}
