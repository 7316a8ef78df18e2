//! Recording adapter for the `UidGenerator` port.

use std::sync::Arc;

use crate::cassette::session::Tracks;
use crate::cassette::{Outcome, Port};
use crate::model::Uid;
use crate::ports::{PortError, UidGenerator};

/// Logs every UID (or failure) produced by the wrapped generator.
pub struct RecordingUidGenerator {
    inner: Box<dyn UidGenerator>,
    tracks: Arc<Tracks>,
}

impl RecordingUidGenerator {
    /// Wraps `inner`, logging to the uid_gen track.
    #[must_use]
    pub fn new(inner: Box<dyn UidGenerator>, tracks: Arc<Tracks>) -> Self {
        Self { inner, tracks }
    }
}

impl UidGenerator for RecordingUidGenerator {
    fn generate_uid(&self) -> Result<Uid, PortError> {
        let result = self.inner.generate_uid();
        self.tracks.record(Port::UidGen, "generate_uid", &(), &Outcome::from(&result));
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::live::SequentialUidGenerator;

    struct Unavailable;

    impl UidGenerator for Unavailable {
        fn generate_uid(&self) -> Result<Uid, PortError> {
            Err("host name unavailable".into())
        }
    }

    fn replayed(tracks: &Tracks) -> Vec<Outcome<Uid>> {
        tracks
            .snapshot(Port::UidGen)
            .into_iter()
            .map(|i| serde_json::from_value(i.output).unwrap())
            .collect()
    }

    #[test]
    fn logs_generated_uids_as_typed_outcomes() {
        let tracks = Arc::new(Tracks::default());
        let gen = RecordingUidGenerator::new(
            Box::new(SequentialUidGenerator::new("rec").unwrap()),
            Arc::clone(&tracks),
        );

        assert_eq!(gen.generate_uid().unwrap().as_str(), "rec-1");
        assert_eq!(gen.generate_uid().unwrap().as_str(), "rec-2");

        assert_eq!(
            replayed(&tracks),
            vec![
                Outcome::Ok(Uid::new("rec-1").unwrap()),
                Outcome::Ok(Uid::new("rec-2").unwrap()),
            ]
        );
    }

    #[test]
    fn logs_generator_failures() {
        let tracks = Arc::new(Tracks::default());
        let gen = RecordingUidGenerator::new(Box::new(Unavailable), Arc::clone(&tracks));

        let err = gen.generate_uid().unwrap_err();

        assert_eq!(err.to_string(), "host name unavailable");
        assert_eq!(replayed(&tracks), vec![Outcome::Err("host name unavailable".into())]);
    }
}
