//! Port traits defining external boundaries.
//!
//! Each trait is a seam between the normalization core and something it
//! does not control: wall-clock time, the filesystem, and the source of
//! fresh UIDs. Implementations live in `src/adapters/`.

pub mod clock;
pub mod filesystem;
pub mod uid_gen;

pub use clock::Clock;
pub use filesystem::FileSystem;
pub use uid_gen::UidGenerator;

/// Error type returned across port boundaries.
pub type PortError = Box<dyn std::error::Error + Send + Sync>;
