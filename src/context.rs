//! Service context bundling the port trait objects a command needs.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::adapters::live::{LiveClock, LiveFileSystem};
use crate::adapters::recording::{RecordingClock, RecordingFileSystem, RecordingUidGenerator};
use crate::adapters::replaying::{ReplayingClock, ReplayingFileSystem, ReplayingUidGenerator};
use crate::cassette::config::CassetteConfig;
use crate::cassette::Cassette;
use crate::cassette::replayer::CassetteReplayer;
use crate::cassette::session::RecordingSession;
use crate::config::GeneratorSettings;
use crate::model::Uid;
use crate::ports::{Clock, FileSystem, PortError, UidGenerator};

/// Bundles the ports used by the commands.
///
/// Constructors wire up live, recording or replaying adapters; command
/// code only sees the traits.
pub struct ServiceContext {
    /// Clock for timestamps.
    pub clock: Arc<dyn Clock>,
    /// Filesystem for reading and rewriting calendars.
    pub fs: Box<dyn FileSystem>,
    /// Source of UIDs for components that lack one.
    pub uid_gen: Box<dyn UidGenerator>,
}

impl ServiceContext {
    /// Creates a context backed by the system clock, the real filesystem and
    /// the configured generator.
    ///
    /// # Errors
    ///
    /// Returns an error if the generator settings are invalid.
    pub fn live(settings: &GeneratorSettings) -> Result<Self, String> {
        let clock: Arc<dyn Clock> = Arc::new(LiveClock);
        let uid_gen = settings
            .build(Arc::clone(&clock))
            .map_err(|e| format!("Invalid generator settings: {e}"))?;
        Ok(Self { clock, fs: Box::new(LiveFileSystem), uid_gen })
    }

    /// Creates a live context whose port traffic is recorded into a new
    /// session directory under `root`.
    ///
    /// Calls made after [`RecordingSession::finish`] are not saved.
    ///
    /// # Errors
    ///
    /// Returns an error if the session directory cannot be created or the
    /// generator settings are invalid.
    pub fn recording_at(
        root: impl Into<PathBuf>,
        settings: &GeneratorSettings,
    ) -> Result<(Self, RecordingSession), String> {
        let session = RecordingSession::new(root)?;
        let tracks = session.tracks();

        let clock: Arc<dyn Clock> =
            Arc::new(RecordingClock::new(Box::new(LiveClock), Arc::clone(&tracks)));
        let inner_gen = settings
            .build(Arc::clone(&clock))
            .map_err(|e| format!("Invalid generator settings: {e}"))?;

        let ctx = Self {
            clock,
            fs: Box::new(RecordingFileSystem::new(Box::new(LiveFileSystem), Arc::clone(&tracks))),
            uid_gen: Box::new(RecordingUidGenerator::new(inner_gen, tracks)),
        };
        Ok((ctx, session))
    }

    /// Creates a context that replays every port from one cassette file.
    ///
    /// # Errors
    ///
    /// Returns an error if the cassette cannot be read or parsed.
    pub fn replaying(path: &Path) -> Result<Self, String> {
        let cassette = Cassette::load(path)?;
        // Separate replayers keep each port's cursor independent.
        Ok(Self {
            clock: Arc::new(ReplayingClock::new(CassetteReplayer::new(&cassette))),
            fs: Box::new(ReplayingFileSystem::new(CassetteReplayer::new(&cassette))),
            uid_gen: Box::new(ReplayingUidGenerator::new(CassetteReplayer::new(&cassette))),
        })
    }

    /// Creates a context from per-port cassettes. Ports without a cassette
    /// panic with a clear message when called.
    ///
    /// # Errors
    ///
    /// Returns an error if any configured cassette cannot be read or parsed.
    pub fn replaying_from(config: &CassetteConfig) -> Result<Self, String> {
        let replayers = config.load_all()?;

        Ok(Self {
            clock: match replayers.clock {
                Some(r) => Arc::new(ReplayingClock::new(r)),
                None => Arc::new(PanickingClock),
            },
            fs: match replayers.fs {
                Some(r) => Box::new(ReplayingFileSystem::new(r)),
                None => Box::new(PanickingFileSystem),
            },
            uid_gen: match replayers.uid_gen {
                Some(r) => Box::new(ReplayingUidGenerator::new(r)),
                None => Box::new(PanickingUidGenerator),
            },
        })
    }
}

// --- Panicking adapters for ports without a cassette ---

struct PanickingClock;
impl Clock for PanickingClock {
    fn now(&self) -> chrono::DateTime<chrono::Utc> {
        panic!("Clock port not configured in CassetteConfig: no cassette loaded for clock");
    }
}

struct PanickingFileSystem;
impl PanickingFileSystem {
    fn fail() -> ! {
        panic!("FileSystem port not configured in CassetteConfig: no cassette loaded for fs");
    }
}
impl FileSystem for PanickingFileSystem {
    fn read_to_string(&self, _path: &Path) -> Result<String, PortError> {
        Self::fail()
    }
    fn write(&self, _path: &Path, _contents: &str) -> Result<(), PortError> {
        Self::fail()
    }
    fn is_dir(&self, _path: &Path) -> bool {
        Self::fail()
    }
    fn list_dir(&self, _path: &Path) -> Result<Vec<String>, PortError> {
        Self::fail()
    }
}

struct PanickingUidGenerator;
impl UidGenerator for PanickingUidGenerator {
    fn generate_uid(&self) -> Result<Uid, PortError> {
        panic!("UidGenerator port not configured in CassetteConfig: no cassette loaded for uid_gen");
    }
}
