//! Recording adapter for the `FileSystem` port.

use std::path::Path;
use std::sync::Arc;

use serde::Serialize;

use crate::cassette::session::Tracks;
use crate::cassette::{Outcome, Port};
use crate::ports::{FileSystem, PortError};

/// Logs every filesystem call made through the wrapped filesystem.
///
/// Written calendars are logged in full so a replay can be compared with
/// what was actually written.
pub struct RecordingFileSystem {
    inner: Box<dyn FileSystem>,
    tracks: Arc<Tracks>,
}

impl RecordingFileSystem {
    /// Wraps `inner`, logging to the fs track.
    #[must_use]
    pub fn new(inner: Box<dyn FileSystem>, tracks: Arc<Tracks>) -> Self {
        Self { inner, tracks }
    }

    fn log<T: Serialize>(&self, method: &str, input: &FsCall<'_>, result: &Result<T, PortError>) {
        self.tracks.record(Port::Fs, method, input, &Outcome::from(result));
    }
}

#[derive(Serialize)]
struct FsCall<'a> {
    path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    contents: Option<&'a str>,
}

impl FsCall<'_> {
    fn at(path: &Path) -> Self {
        Self { path: path.display().to_string(), contents: None }
    }
}

impl FileSystem for RecordingFileSystem {
    fn read_to_string(&self, path: &Path) -> Result<String, PortError> {
        let result = self.inner.read_to_string(path);
        self.log("read_to_string", &FsCall::at(path), &result);
        result
    }

    fn write(&self, path: &Path, contents: &str) -> Result<(), PortError> {
        let result = self.inner.write(path, contents);
        self.log("write", &FsCall { contents: Some(contents), ..FsCall::at(path) }, &result);
        result
    }

    fn is_dir(&self, path: &Path) -> bool {
        let is_dir = self.inner.is_dir(path);
        self.tracks.record(Port::Fs, "is_dir", &FsCall::at(path), &is_dir);
        is_dir
    }

    fn list_dir(&self, path: &Path) -> Result<Vec<String>, PortError> {
        let result = self.inner.list_dir(path);
        self.log("list_dir", &FsCall::at(path), &result);
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::live::LiveFileSystem;
    use serde_json::json;

    #[test]
    fn logs_calls_including_failures() {
        let dir = std::env::temp_dir().join("calnorm_rec_fs_test");
        let _ = std::fs::remove_dir_all(&dir);
        std::fs::create_dir_all(&dir).unwrap();
        let written = dir.join("cal.ics");
        let missing = dir.join("does-not-exist.ics");

        let tracks = Arc::new(Tracks::default());
        let fs = RecordingFileSystem::new(Box::new(LiveFileSystem), Arc::clone(&tracks));
        assert!(fs.is_dir(&dir));
        fs.write(&written, "BEGIN:VEVENT\r\nEND:VEVENT\r\n").unwrap();
        assert!(fs.read_to_string(&missing).is_err());

        let calls = tracks.snapshot(Port::Fs);
        let methods: Vec<&str> = calls.iter().map(|c| c.method.as_str()).collect();
        assert_eq!(methods, vec!["is_dir", "write", "read_to_string"]);
        assert_eq!(calls[0].output, json!(true));
        assert_eq!(calls[1].input["contents"], json!("BEGIN:VEVENT\r\nEND:VEVENT\r\n"));
        assert_eq!(calls[1].output, json!({"ok": null}));
        assert!(calls[2].input.get("contents").is_none());
        assert!(calls[2].output["err"].is_string());

        let _ = std::fs::remove_dir_all(&dir);
    }
}
