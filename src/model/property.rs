//! Properties and property parameters.

use serde::{Deserialize, Serialize};

use super::uid::Uid;
use super::UID;

/// A property parameter such as `TZID=Europe/Berlin` or `MEMBER="a","b"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Parameter {
    /// Upper-cased parameter name.
    pub name: String,
    /// Parameter values, unquoted.
    pub values: Vec<String>,
}

impl Parameter {
    /// Creates a parameter with a single value.
    pub fn new(name: impl AsRef<str>, value: impl Into<String>) -> Self {
        Self { name: name.as_ref().to_ascii_uppercase(), values: vec![value.into()] }
    }

    /// Creates a parameter with several values.
    pub fn with_values(name: impl AsRef<str>, values: Vec<String>) -> Self {
        Self { name: name.as_ref().to_ascii_uppercase(), values }
    }
}

/// A single content line of a component.
///
/// The value is stored exactly as it appears on the wire; escaping is left
/// to callers that interpret specific value types.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Property {
    /// Upper-cased property name.
    pub name: String,
    /// Parameters in source order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub params: Vec<Parameter>,
    /// Raw property value.
    pub value: String,
}

impl Property {
    /// Creates a property without parameters.
    pub fn new(name: impl AsRef<str>, value: impl Into<String>) -> Self {
        Self { name: name.as_ref().to_ascii_uppercase(), params: Vec::new(), value: value.into() }
    }

    /// Creates a `UID` property.
    #[must_use]
    pub fn uid(uid: &Uid) -> Self {
        Self::new(UID, uid.as_str())
    }

    /// Appends a parameter, returning the property for chaining.
    #[must_use]
    pub fn with_param(mut self, param: Parameter) -> Self {
        self.params.push(param);
        self
    }

    /// Returns `true` if the property has the given name, ignoring case.
    #[must_use]
    pub fn is(&self, name: &str) -> bool {
        self.name.eq_ignore_ascii_case(name)
    }

    /// Returns the first parameter with the given name.
    #[must_use]
    pub fn param(&self, name: &str) -> Option<&Parameter> {
        self.params.iter().find(|p| p.name.eq_ignore_ascii_case(name))
    }
}
