//! Component transforms.
//!
//! A transform mutates one component in place. A [`Pipeline`] runs several
//! in order over the components of a calendar, as a normalization pass
//! before writing it back out.

mod pipeline;
mod uid_update;

pub use pipeline::{missing_uids, MissingUid, Pipeline};
pub use uid_update::UidUpdate;

use crate::model::Component;

/// Error surfaced by a transform. Collaborator failures pass through as-is.
pub type TransformError = Box<dyn std::error::Error + Send + Sync>;

/// An in-place edit of a single component.
pub trait ComponentTransform {
    /// Applies the transform to `component`.
    ///
    /// # Errors
    ///
    /// Returns whatever error the transform or one of its collaborators
    /// produced. Implementations leave the component untouched on failure.
    fn apply(&self, component: &mut Component) -> Result<(), TransformError>;
}
