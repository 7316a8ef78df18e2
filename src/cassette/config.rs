//! Per-port cassette selection for replay.

use std::path::{Path, PathBuf};

use super::format::{Cassette, Port};
use super::replayer::CassetteReplayer;

/// Cassette file for each port. Ports left as `None` panic if called
/// during replay.
#[derive(Debug, Clone, Default)]
pub struct CassetteConfig {
    /// Cassette for the clock port.
    pub clock: Option<PathBuf>,
    /// Cassette for the filesystem port.
    pub fs: Option<PathBuf>,
    /// Cassette for the UID generator port.
    pub uid_gen: Option<PathBuf>,
}

/// Loaded replayers, one per configured port.
pub struct PortReplayers {
    /// Replayer for the clock port.
    pub clock: Option<CassetteReplayer>,
    /// Replayer for the filesystem port.
    pub fs: Option<CassetteReplayer>,
    /// Replayer for the UID generator port.
    pub uid_gen: Option<CassetteReplayer>,
}

impl CassetteConfig {
    /// A config with no cassettes: every port panics when used.
    #[must_use]
    pub fn panic_on_unspecified() -> Self {
        Self::default()
    }

    /// Picks up the per-port cassettes of a recording directory, skipping
    /// any that are absent.
    #[must_use]
    pub fn from_dir(dir: &Path) -> Self {
        let pick = |port: Port| {
            let path = dir.join(port.file_name());
            path.is_file().then_some(path)
        };
        Self { clock: pick(Port::Clock), fs: pick(Port::Fs), uid_gen: pick(Port::UidGen) }
    }

    fn load_replayer(path: &Path) -> Result<CassetteReplayer, String> {
        Cassette::load(path).map(|cassette| CassetteReplayer::new(&cassette))
    }

    /// Loads every configured cassette.
    ///
    /// # Errors
    ///
    /// Returns an error if any configured cassette cannot be read or parsed.
    pub fn load_all(&self) -> Result<PortReplayers, String> {
        Ok(PortReplayers {
            clock: self.clock.as_deref().map(Self::load_replayer).transpose()?,
            fs: self.fs.as_deref().map(Self::load_replayer).transpose()?,
            uid_gen: self.uid_gen.as_deref().map(Self::load_replayer).transpose()?,
        })
    }
}
