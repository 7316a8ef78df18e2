//! UID generator port.

use super::PortError;
use crate::model::Uid;

/// Produces fresh identifiers for components that lack one.
///
/// Implementations choose the algorithm (random, sequential, host-derived);
/// callers only rely on each call returning a new value or an error.
pub trait UidGenerator: Send + Sync {
    /// Generates a new UID.
    ///
    /// # Errors
    ///
    /// Returns an error if the generator cannot produce a value.
    fn generate_uid(&self) -> Result<Uid, PortError>;
}

impl<G: UidGenerator + ?Sized> UidGenerator for &G {
    fn generate_uid(&self) -> Result<Uid, PortError> {
        (**self).generate_uid()
    }
}

impl<G: UidGenerator + ?Sized> UidGenerator for Box<G> {
    fn generate_uid(&self) -> Result<Uid, PortError> {
        (**self).generate_uid()
    }
}
