//! Replaying adapter for the `UidGenerator` port.

use std::sync::Mutex;

use super::next_result;
use crate::cassette::replayer::CassetteReplayer;
use crate::cassette::Port;
use crate::model::Uid;
use crate::ports::{PortError, UidGenerator};

/// Serves recorded UIDs, including recorded generator failures.
pub struct ReplayingUidGenerator {
    replayer: Mutex<CassetteReplayer>,
}

impl ReplayingUidGenerator {
    /// Creates a replaying generator from a cassette replayer.
    #[must_use]
    pub fn new(replayer: CassetteReplayer) -> Self {
        Self { replayer: Mutex::new(replayer) }
    }
}

impl UidGenerator for ReplayingUidGenerator {
    fn generate_uid(&self) -> Result<Uid, PortError> {
        next_result(&self.replayer, Port::UidGen, "generate_uid")
    }
}
