//! On-disk shape of a cassette.
//!
//! A cassette is a YAML list of port calls. Every call records the port, the
//! method, its arguments and what it returned; fallible returns are stored
//! as an [`Outcome`] so a recorded failure replays as the same error.

use std::fmt;
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::ports::PortError;

/// The ports that can be recorded and replayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Port {
    /// [`crate::ports::Clock`]
    Clock,
    /// [`crate::ports::FileSystem`]
    Fs,
    /// [`crate::ports::UidGenerator`]
    UidGen,
}

impl Port {
    /// Every port, in the order their cassettes are written.
    pub const ALL: [Port; 3] = [Port::Clock, Port::Fs, Port::UidGen];

    /// Name used in cassettes and file names.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Port::Clock => "clock",
            Port::Fs => "fs",
            Port::UidGen => "uid_gen",
        }
    }

    /// File holding this port's cassette inside a recording directory.
    #[must_use]
    pub fn file_name(self) -> String {
        format!("{}.cassette.yaml", self.name())
    }
}

impl fmt::Display for Port {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Recorded result of a fallible port call: `{ok: value}` or `{err: message}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome<T> {
    /// The call succeeded.
    Ok(T),
    /// The call failed; only the message survives.
    Err(String),
}

impl<T> Outcome<T> {
    /// Turns a replayed outcome back into the port's return value.
    ///
    /// # Errors
    ///
    /// Returns the recorded message when the call had failed.
    pub fn into_result(self) -> Result<T, PortError> {
        match self {
            Outcome::Ok(value) => Ok(value),
            Outcome::Err(message) => Err(message.into()),
        }
    }
}

impl<'a, T, E: fmt::Display> From<&'a Result<T, E>> for Outcome<&'a T> {
    fn from(result: &'a Result<T, E>) -> Self {
        match result {
            Ok(value) => Outcome::Ok(value),
            Err(e) => Outcome::Err(e.to_string()),
        }
    }
}

/// One call made through a port.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Interaction {
    /// Position within the whole recording run, shared by all ports.
    pub seq: u64,
    /// Port the call went through.
    pub port: Port,
    /// Method invoked on the port.
    pub method: String,
    /// Arguments, `null` for methods without any.
    #[serde(default)]
    pub input: serde_json::Value,
    /// Returned value or [`Outcome`].
    pub output: serde_json::Value,
}

/// A recorded run, or one port's share of it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Cassette {
    /// When recording started.
    pub recorded_at: DateTime<Utc>,
    /// `calnorm` version that produced the recording.
    pub calnorm_version: String,
    /// Calls in the order they were made.
    pub interactions: Vec<Interaction>,
}

impl Cassette {
    /// An empty cassette stamped with the current time and crate version.
    #[must_use]
    pub fn new() -> Self {
        Self {
            recorded_at: Utc::now(),
            calnorm_version: env!("CARGO_PKG_VERSION").to_string(),
            interactions: Vec::new(),
        }
    }

    /// Appends a call, numbering it after the last one.
    #[must_use]
    pub fn with(
        mut self,
        port: Port,
        method: &str,
        input: serde_json::Value,
        output: serde_json::Value,
    ) -> Self {
        let seq = self.interactions.last().map_or(0, |last| last.seq + 1);
        self.interactions.push(Interaction { seq, port, method: method.to_string(), input, output });
        self
    }

    /// Reads a cassette file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, String> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read cassette file {}: {e}", path.display()))?;
        serde_yaml::from_str(&content)
            .map_err(|e| format!("Failed to parse cassette file {}: {e}", path.display()))
    }

    /// Writes the cassette as YAML.
    ///
    /// # Errors
    ///
    /// Returns an error if the cassette cannot be serialized or written.
    pub fn save(&self, path: &Path) -> Result<(), String> {
        let yaml = serde_yaml::to_string(self)
            .map_err(|e| format!("Failed to serialize cassette: {e}"))?;
        std::fs::write(path, yaml)
            .map_err(|e| format!("Failed to write cassette file {}: {e}", path.display()))
    }
}

impl Default for Cassette {
    fn default() -> Self {
        Self::new()
    }
}
