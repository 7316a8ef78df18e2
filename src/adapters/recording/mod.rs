//! Recording adapters: delegate to a live port and log each call to the
//! session's [`Tracks`](crate::cassette::session::Tracks).
//!
//! Fallible calls are logged as an [`Outcome`](crate::cassette::Outcome).

pub mod clock;
pub mod filesystem;
pub mod uid_gen;

pub use clock::RecordingClock;
pub use filesystem::RecordingFileSystem;
pub use uid_gen::RecordingUidGenerator;
