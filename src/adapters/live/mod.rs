//! Live adapters for real external interactions.

pub mod clock;
pub mod filesystem;
pub mod uid_gen;

pub use clock::LiveClock;
pub use filesystem::LiveFileSystem;
pub use uid_gen::{GeneratorError, HostUidGenerator, RandomUidGenerator, SequentialUidGenerator};
