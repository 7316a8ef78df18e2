//! Recording session: captures port calls and writes one cassette per port.

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::format::{Cassette, Interaction, Port};

/// Calls captured so far, one buffer per port.
///
/// Sequence numbers are shared across ports so the original interleaving
/// can be read back from the per-port files.
#[derive(Debug, Default)]
pub struct Tracks {
    next_seq: AtomicU64,
    clock: Mutex<Vec<Interaction>>,
    fs: Mutex<Vec<Interaction>>,
    uid_gen: Mutex<Vec<Interaction>>,
}

impl Tracks {
    fn track(&self, port: Port) -> &Mutex<Vec<Interaction>> {
        match port {
            Port::Clock => &self.clock,
            Port::Fs => &self.fs,
            Port::UidGen => &self.uid_gen,
        }
    }

    /// Appends a call to `port`'s track.
    ///
    /// # Panics
    ///
    /// Panics if `input` or `output` cannot be represented as JSON.
    pub fn record(&self, port: Port, method: &str, input: &impl Serialize, output: &impl Serialize) {
        let input = serde_json::to_value(input).expect("failed to serialize recorded input");
        let output = serde_json::to_value(output).expect("failed to serialize recorded output");
        let seq = self.next_seq.fetch_add(1, Ordering::Relaxed);

        let mut track = self.track(port).lock().expect("track lock poisoned");
        track.push(Interaction { seq, port, method: method.to_string(), input, output });
    }

    /// Copy of what has been recorded for `port`.
    #[must_use]
    pub fn snapshot(&self, port: Port) -> Vec<Interaction> {
        self.track(port).lock().map(|track| track.clone()).unwrap_or_default()
    }
}

/// A recording run writing into `<root>/<timestamp>/`.
pub struct RecordingSession {
    tracks: Arc<Tracks>,
    started_at: DateTime<Utc>,
    output_dir: PathBuf,
}

impl RecordingSession {
    /// Creates the session directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory already exists or cannot be created.
    pub fn new(root: impl Into<PathBuf>) -> Result<Self, String> {
        let started_at = Utc::now();
        let output_dir =
            root.into().join(started_at.format("%Y-%m-%dT%H-%M-%S%.3f").to_string());

        if output_dir.exists() {
            return Err(format!("Cassette directory already exists: {}", output_dir.display()));
        }
        std::fs::create_dir_all(&output_dir)
            .map_err(|e| format!("Failed to create cassette directory: {e}"))?;

        Ok(Self { tracks: Arc::default(), started_at, output_dir })
    }

    /// Shared handle the recording adapters write through.
    #[must_use]
    pub fn tracks(&self) -> Arc<Tracks> {
        Arc::clone(&self.tracks)
    }

    /// Directory the cassettes are written to.
    #[must_use]
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Writes `<port>.cassette.yaml` for every port and returns the directory.
    ///
    /// Calls recorded after this point are not saved.
    ///
    /// # Errors
    ///
    /// Returns an error if a cassette cannot be written.
    pub fn finish(self) -> Result<PathBuf, String> {
        for port in Port::ALL {
            let cassette = Cassette {
                recorded_at: self.started_at,
                calnorm_version: env!("CARGO_PKG_VERSION").to_string(),
                interactions: self.tracks.snapshot(port),
            };
            cassette.save(&self.output_dir.join(port.file_name()))?;
        }
        Ok(self.output_dir)
    }
}
