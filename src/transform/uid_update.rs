use tracing::debug;

use super::{ComponentTransform, TransformError};
use crate::model::{Component, Property};
use crate::ports::UidGenerator;

/// Gives a component a `UID` if it does not already have one.
///
/// An existing `UID` is never replaced and the generator is only consulted
/// when the property is missing, so applying the transform twice has the
/// same effect as applying it once.
pub struct UidUpdate<G> {
    generator: G,
}

impl<G: UidGenerator> UidUpdate<G> {
    /// Creates the transform around the generator used for missing UIDs.
    pub fn new(generator: G) -> Self {
        Self { generator }
    }
}

impl<G: UidGenerator> ComponentTransform for UidUpdate<G> {
    fn apply(&self, component: &mut Component) -> Result<(), TransformError> {
        if component.has_uid() {
            return Ok(());
        }
        let uid = self.generator.generate_uid()?;
        debug!(component = component.name(), %uid, "assigned UID");
        component.add_property(Property::uid(&uid));
        Ok(())
    }
}
