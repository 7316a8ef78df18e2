//! Integration tests for top-level CLI behavior.

use std::path::{Path, PathBuf};
use std::process::Command;

fn run_calnorm(args: &[&str]) -> std::process::Output {
    let bin = env!("CARGO_BIN_EXE_calnorm");
    Command::new(bin)
        .args(args)
        .env_remove("CALNORM_RECORD")
        .env_remove("CALNORM_UID_GENERATOR")
        .env_remove("CALNORM_UID_DOMAIN")
        .env_remove("CALNORM_UID_PREFIX")
        .output()
        .expect("failed to run calnorm binary")
}

fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(name);
    let _ = std::fs::remove_dir_all(&dir);
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

fn arg(path: &Path) -> &str {
    path.to_str().expect("temp paths are UTF-8")
}

const MEETINGS: &str = "BEGIN:VCALENDAR\r\n\
VERSION:2.0\r\n\
PRODID:-//Example//EN\r\n\
BEGIN:VEVENT\r\n\
SUMMARY:Meeting\r\n\
END:VEVENT\r\n\
BEGIN:VEVENT\r\n\
UID:existing-1\r\n\
SUMMARY:Review\r\n\
END:VEVENT\r\n\
END:VCALENDAR\r\n";

#[test]
fn ensure_adds_sequential_uids_in_place() {
    let dir = scratch_dir("calnorm_cli_ensure");
    let file = dir.join("meetings.ics");
    std::fs::write(&file, MEETINGS).unwrap();

    let output = run_calnorm(&["ensure", arg(&file), "--generator", "sequential", "--prefix", "mtg"]);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    assert!(stdout.contains("added 1 UID(s)"));

    let rewritten = std::fs::read_to_string(&file).unwrap();
    assert!(rewritten.contains("SUMMARY:Meeting\r\nUID:mtg-1\r\n"));
    assert!(rewritten.contains("UID:existing-1\r\n"));
    assert_eq!(rewritten.matches("UID:").count(), 2);

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn ensure_is_idempotent() {
    let dir = scratch_dir("calnorm_cli_idempotent");
    let file = dir.join("meetings.ics");
    std::fs::write(&file, MEETINGS).unwrap();

    assert!(run_calnorm(&["ensure", arg(&file)]).status.success());
    let first = std::fs::read_to_string(&file).unwrap();

    let output = run_calnorm(&["ensure", arg(&file)]);
    assert!(String::from_utf8_lossy(&output.stdout).contains("added 0 UID(s)"));
    assert_eq!(std::fs::read_to_string(&file).unwrap(), first);

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn ensure_dry_run_does_not_write() {
    let dir = scratch_dir("calnorm_cli_dry_run");
    let file = dir.join("meetings.ics");
    std::fs::write(&file, MEETINGS).unwrap();

    let output = run_calnorm(&["ensure", "--dry-run", arg(&file)]);

    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("would add 1 UID(s)"));
    assert_eq!(std::fs::read_to_string(&file).unwrap(), MEETINGS);

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn ensure_walks_directories() {
    let dir = scratch_dir("calnorm_cli_dir");
    std::fs::write(dir.join("a.ics"), "BEGIN:VTODO\nSUMMARY:x\nEND:VTODO\n").unwrap();
    std::fs::write(dir.join("notes.txt"), "not a calendar").unwrap();

    let output = run_calnorm(&["ensure", arg(&dir), "--generator", "host", "--domain", "example.org"]);

    assert!(output.status.success());
    let todo = std::fs::read_to_string(dir.join("a.ics")).unwrap();
    assert!(todo.contains("@example.org\r\n"));
    assert_eq!(std::fs::read_to_string(dir.join("notes.txt")).unwrap(), "not a calendar");

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn check_fails_until_uids_are_present() {
    let dir = scratch_dir("calnorm_cli_check");
    let file = dir.join("meetings.ics");
    std::fs::write(&file, MEETINGS).unwrap();

    let output = run_calnorm(&["check", arg(&file)]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("VEVENT #0 has no UID (Meeting)"));

    assert!(run_calnorm(&["ensure", arg(&file)]).status.success());

    let output = run_calnorm(&["check", "--json", arg(&file)]);
    assert!(output.status.success());
    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["files"][0]["missing"], serde_json::json!([]));

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn malformed_input_reports_line() {
    let dir = scratch_dir("calnorm_cli_malformed");
    let file = dir.join("broken.ics");
    std::fs::write(&file, "BEGIN:VEVENT\nSUMMARY Meeting\nEND:VEVENT\n").unwrap();

    let output = run_calnorm(&["ensure", arg(&file)]);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(!output.status.success());
    assert!(stderr.contains("Failed to parse"));
    assert!(stderr.contains("line 2"));

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn invalid_domain_is_rejected() {
    let output = run_calnorm(&["ensure", "x.ics", "--generator", "host", "--domain", "bad domain"]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("invalid UID domain"));
}

#[test]
fn invalid_subcommand_exits_with_error() {
    let output = run_calnorm(&["nonsense"]);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(!output.status.success());
    assert!(stderr.contains("unrecognized subcommand"));
}
