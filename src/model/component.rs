//! Calendar components.

use serde::{Deserialize, Serialize};

use super::property::Property;
use super::UID;

/// A calendar component: a named bag of properties with nested children.
///
/// `VCALENDAR`, `VEVENT`, `VTODO` and `VALARM` are all components; the
/// model does not distinguish them beyond their name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Component {
    name: String,
    #[serde(default)]
    properties: Vec<Property>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    components: Vec<Component>,
}

impl Component {
    /// Creates an empty component. The name is upper-cased.
    pub fn new(name: impl AsRef<str>) -> Self {
        Self {
            name: name.as_ref().to_ascii_uppercase(),
            properties: Vec::new(),
            components: Vec::new(),
        }
    }

    /// Builder-style property insertion.
    #[must_use]
    pub fn with_property(mut self, property: Property) -> Self {
        self.properties.push(property);
        self
    }

    /// Builder-style child insertion.
    #[must_use]
    pub fn with_component(mut self, component: Component) -> Self {
        self.components.push(component);
        self
    }

    /// Component kind, e.g. `VEVENT`.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns `true` if the component has the given kind, ignoring case.
    #[must_use]
    pub fn is(&self, name: &str) -> bool {
        self.name.eq_ignore_ascii_case(name)
    }

    /// All properties in source order.
    #[must_use]
    pub fn properties(&self) -> &[Property] {
        &self.properties
    }

    /// First property with the given name.
    #[must_use]
    pub fn property(&self, name: &str) -> Option<&Property> {
        self.properties.iter().find(|p| p.is(name))
    }

    /// Every property with the given name.
    pub fn properties_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Property> {
        self.properties.iter().filter(move |p| p.is(name))
    }

    /// Appends a property.
    pub fn add_property(&mut self, property: Property) {
        self.properties.push(property);
    }

    /// Removes every property with the given name and returns how many were dropped.
    pub fn remove_properties(&mut self, name: &str) -> usize {
        let before = self.properties.len();
        self.properties.retain(|p| !p.is(name));
        before - self.properties.len()
    }

    /// Nested components.
    #[must_use]
    pub fn components(&self) -> &[Component] {
        &self.components
    }

    /// Mutable access to nested components.
    pub fn components_mut(&mut self) -> &mut [Component] {
        &mut self.components
    }

    /// Appends a nested component.
    pub fn add_component(&mut self, component: Component) {
        self.components.push(component);
    }

    /// Value of the `UID` property, if present.
    #[must_use]
    pub fn uid(&self) -> Option<&str> {
        self.property(UID).map(|p| p.value.as_str())
    }

    /// Returns `true` if a `UID` property is present.
    #[must_use]
    pub fn has_uid(&self) -> bool {
        self.property(UID).is_some()
    }
}
