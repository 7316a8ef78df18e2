//! Recording adapter for the `Clock` port.

use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::cassette::session::Tracks;
use crate::cassette::Port;
use crate::ports::Clock;

/// Logs every reading of the wrapped clock.
pub struct RecordingClock {
    inner: Box<dyn Clock>,
    tracks: Arc<Tracks>,
}

impl RecordingClock {
    /// Wraps `inner`, logging to the clock track.
    #[must_use]
    pub fn new(inner: Box<dyn Clock>, tracks: Arc<Tracks>) -> Self {
        Self { inner, tracks }
    }
}

impl Clock for RecordingClock {
    fn now(&self) -> DateTime<Utc> {
        let now = self.inner.now();
        self.tracks.record(Port::Clock, "now", &(), &now);
        now
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    struct Frozen(DateTime<Utc>);

    impl Clock for Frozen {
        fn now(&self) -> DateTime<Utc> {
            self.0
        }
    }

    #[test]
    fn logs_readings_that_replay_as_the_same_instant() {
        let instant = Utc.with_ymd_and_hms(2024, 6, 15, 10, 30, 0).unwrap();
        let tracks = Arc::new(Tracks::default());
        let clock = RecordingClock::new(Box::new(Frozen(instant)), Arc::clone(&tracks));

        assert_eq!(clock.now(), instant);

        let recorded = tracks.snapshot(Port::Clock);
        assert_eq!(recorded.len(), 1);
        assert_eq!(recorded[0].method, "now");
        let replayed: DateTime<Utc> = serde_json::from_value(recorded[0].output.clone()).unwrap();
        assert_eq!(replayed, instant);
    }
}
