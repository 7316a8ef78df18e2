//! Replaying adapter for the `FileSystem` port.

use std::path::Path;
use std::sync::Mutex;

use super::{next_output, next_result};
use crate::cassette::replayer::CassetteReplayer;
use crate::cassette::Port;
use crate::ports::{FileSystem, PortError};

/// Serves recorded filesystem results. Writes are not performed.
pub struct ReplayingFileSystem {
    replayer: Mutex<CassetteReplayer>,
}

impl ReplayingFileSystem {
    /// Creates a replaying filesystem from a cassette replayer.
    #[must_use]
    pub fn new(replayer: CassetteReplayer) -> Self {
        Self { replayer: Mutex::new(replayer) }
    }
}

impl FileSystem for ReplayingFileSystem {
    fn read_to_string(&self, _path: &Path) -> Result<String, PortError> {
        next_result(&self.replayer, Port::Fs, "read_to_string")
    }

    fn write(&self, _path: &Path, _contents: &str) -> Result<(), PortError> {
        next_result(&self.replayer, Port::Fs, "write")
    }

    fn is_dir(&self, _path: &Path) -> bool {
        next_output(&self.replayer, Port::Fs, "is_dir")
    }

    fn list_dir(&self, _path: &Path) -> Result<Vec<String>, PortError> {
        next_result(&self.replayer, Port::Fs, "list_dir")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cassette::testing::replayer_for;
    use serde_json::json;

    #[test]
    fn serves_reads_and_errors() {
        let fs = ReplayingFileSystem::new(replayer_for(&[
            (Port::Fs, "read_to_string", json!({"ok": "BEGIN:VCALENDAR"})),
            (Port::Fs, "read_to_string", json!({"err": "file not found"})),
        ]));
        assert_eq!(fs.read_to_string(Path::new("/a.ics")).unwrap(), "BEGIN:VCALENDAR");
        let err = fs.read_to_string(Path::new("/missing.ics")).unwrap_err();
        assert!(err.to_string().contains("file not found"));
    }

    #[test]
    fn serves_directory_queries() {
        let fs = ReplayingFileSystem::new(replayer_for(&[
            (Port::Fs, "is_dir", json!(true)),
            (Port::Fs, "list_dir", json!({"ok": ["a.ics", "b.ics"]})),
            (Port::Fs, "write", json!({"ok": null})),
            (Port::Fs, "write", json!({"err": "read-only filesystem"})),
        ]));
        assert!(fs.is_dir(Path::new("/cal")));
        assert_eq!(fs.list_dir(Path::new("/cal")).unwrap(), vec!["a.ics", "b.ics"]);
        assert!(fs.write(Path::new("/cal/a.ics"), "").is_ok());
        let err = fs.write(Path::new("/cal/a.ics"), "").unwrap_err();
        assert_eq!(err.to_string(), "read-only filesystem");
    }
}
