//! Cassettes: recorded port interactions used to replay a run deterministically.

pub mod config;
pub mod format;
pub mod replayer;
pub mod session;

pub use format::{Cassette, Outcome, Port};
