//! `calnorm check` command.

use std::fmt::Write as _;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::files::expand_paths;
use crate::codec;
use crate::context::ServiceContext;
use crate::transform::{missing_uids, MissingUid};

/// Findings for one file.
#[derive(Debug, Serialize)]
pub struct FileReport {
    /// File that was checked.
    pub path: String,
    /// Components without a UID.
    pub missing: Vec<MissingUid>,
    /// Read or parse failure, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl FileReport {
    fn is_clean(&self) -> bool {
        self.missing.is_empty() && self.error.is_none()
    }
}

/// Findings for a whole `check` run.
#[derive(Debug, Serialize)]
pub struct CheckReport {
    /// When the check ran.
    pub checked_at: DateTime<Utc>,
    /// Per-file findings in argument order.
    pub files: Vec<FileReport>,
}

/// Execute the `check` command.
///
/// # Errors
///
/// Returns an error string if any file has components without a UID or
/// cannot be read or parsed.
pub fn run(ctx: &ServiceContext, paths: &[PathBuf], json: bool) -> Result<(), String> {
    let report = check(ctx, paths)?;

    if json {
        let out = serde_json::to_string_pretty(&report)
            .map_err(|e| format!("Failed to serialize report: {e}"))?;
        println!("{out}");
    } else {
        print!("{}", render(&report));
    }

    let failing = report.files.iter().filter(|f| !f.is_clean()).count();
    if failing == 0 {
        Ok(())
    } else {
        Err(format!("{failing} file(s) have components without a UID or could not be read"))
    }
}

/// Checks every given file or directory without modifying anything.
///
/// # Errors
///
/// Returns an error string if a directory cannot be listed.
pub fn check(ctx: &ServiceContext, paths: &[PathBuf]) -> Result<CheckReport, String> {
    let files = expand_paths(ctx, paths)?.iter().map(|path| check_file(ctx, path)).collect();
    Ok(CheckReport { checked_at: ctx.clock.now(), files })
}

fn check_file(ctx: &ServiceContext, path: &Path) -> FileReport {
    let parsed = ctx
        .fs
        .read_to_string(path)
        .map_err(|e| e.to_string())
        .and_then(|text| codec::parse(&text).map_err(|e| e.to_string()));

    let (missing, error) = match parsed {
        Ok(roots) => (roots.iter().flat_map(missing_uids).collect(), None),
        Err(e) => (Vec::new(), Some(e)),
    };
    FileReport { path: path.display().to_string(), missing, error }
}

fn render(report: &CheckReport) -> String {
    let mut out = String::new();
    for file in &report.files {
        if let Some(error) = &file.error {
            let _ = writeln!(out, "{}: error: {error}", file.path);
        } else if file.missing.is_empty() {
            let _ = writeln!(out, "{}: ok", file.path);
        }
        for missing in &file.missing {
            let _ = write!(out, "{}: {} #{} has no UID", file.path, missing.kind, missing.index);
            match &missing.summary {
                Some(summary) => {
                    let _ = writeln!(out, " ({summary})");
                }
                None => out.push('\n'),
            }
        }
    }
    out
}
