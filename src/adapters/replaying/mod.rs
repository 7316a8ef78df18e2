//! Replaying adapters that serve recorded interactions.

pub mod clock;
pub mod filesystem;
pub mod uid_gen;

pub use clock::ReplayingClock;
pub use filesystem::ReplayingFileSystem;
pub use uid_gen::ReplayingUidGenerator;

use std::sync::Mutex;

use serde::de::DeserializeOwned;

use crate::cassette::replayer::CassetteReplayer;
use crate::cassette::{Outcome, Port};
use crate::ports::PortError;

/// Decodes the next recorded output for `port::method`.
///
/// # Panics
///
/// Panics if the cassette has nothing left for the call or the recorded
/// output does not have the expected shape.
pub(crate) fn next_output<T: DeserializeOwned>(
    replayer: &Mutex<CassetteReplayer>,
    port: Port,
    method: &str,
) -> T {
    let interaction = replayer.lock().expect("replayer lock poisoned").next_interaction(port, method);
    serde_json::from_value(interaction.output).unwrap_or_else(|e| {
        panic!("{port}::{method}: recorded output seq={} is malformed: {e}", interaction.seq)
    })
}

/// Replays a fallible call recorded as an [`Outcome`].
pub(crate) fn next_result<T: DeserializeOwned>(
    replayer: &Mutex<CassetteReplayer>,
    port: Port,
    method: &str,
) -> Result<T, PortError> {
    next_output::<Outcome<T>>(replayer, port, method).into_result()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cassette::testing::replayer_for;
    use serde_json::json;

    #[test]
    fn next_result_reads_ok_and_err() {
        let replayer = Mutex::new(replayer_for(&[
            (Port::Fs, "list_dir", json!({"ok": ["a.ics"]})),
            (Port::Fs, "list_dir", json!({"err": "permission denied"})),
        ]));

        let ok: Vec<String> = next_result(&replayer, Port::Fs, "list_dir").unwrap();
        assert_eq!(ok, vec!["a.ics"]);
        let err = next_result::<Vec<String>>(&replayer, Port::Fs, "list_dir").unwrap_err();
        assert_eq!(err.to_string(), "permission denied");
    }

    #[test]
    #[should_panic(expected = "fs::is_dir: recorded output seq=0 is malformed")]
    fn malformed_output_names_the_call() {
        let replayer = Mutex::new(replayer_for(&[(Port::Fs, "is_dir", json!("yes"))]));
        let _: bool = next_output(&replayer, Port::Fs, "is_dir");
    }
}
