//! The `UID` property value.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Reasons a string cannot be used as a UID.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UidError {
    /// The value was empty or only whitespace.
    #[error("UID must not be empty")]
    Empty,
    /// The value contained a control character and would break the content line.
    #[error("UID contains control character {0:?}")]
    ControlCharacter(char),
}

/// A unique identifier for a calendar component.
///
/// The value is opaque. It is only required to fit on a single content line.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Uid(String);

impl Uid {
    /// Validates and wraps a UID value.
    ///
    /// # Errors
    ///
    /// Returns [`UidError`] if the value is blank or contains control characters.
    pub fn new(value: impl Into<String>) -> Result<Self, UidError> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(UidError::Empty);
        }
        if let Some(c) = value.chars().find(|c| c.is_control()) {
            return Err(UidError::ControlCharacter(c));
        }
        Ok(Self(value))
    }

    /// Returns the identifier text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Uid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for Uid {
    type Error = UidError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Uid> for String {
    fn from(uid: Uid) -> Self {
        uid.0
    }
}
