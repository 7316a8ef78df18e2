//! Live UID generation strategies.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use thiserror::Error;
use tracing::debug;
use uuid::Uuid;

use crate::model::Uid;
use crate::ports::{Clock, PortError, UidGenerator};

/// Configuration problems detected when building a generator.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GeneratorError {
    /// The host domain is empty or contains characters not allowed in a host name.
    #[error("invalid UID domain {0:?}")]
    InvalidDomain(String),
    /// The sequence prefix is empty or would break the content line.
    #[error("invalid UID prefix {0:?}")]
    InvalidPrefix(String),
}

/// Produces random version 4 UUIDs.
pub struct RandomUidGenerator;

impl RandomUidGenerator {
    /// Creates a new random generator.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Default for RandomUidGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl UidGenerator for RandomUidGenerator {
    fn generate_uid(&self) -> Result<Uid, PortError> {
        Ok(Uid::new(Uuid::new_v4().to_string())?)
    }
}

/// Produces `<prefix>-1`, `<prefix>-2`, ... in call order.
pub struct SequentialUidGenerator {
    prefix: String,
    next: AtomicU64,
}

impl SequentialUidGenerator {
    /// Creates a generator whose first UID is `<prefix>-1`.
    ///
    /// # Errors
    ///
    /// Returns [`GeneratorError::InvalidPrefix`] if the prefix is blank or
    /// contains whitespace or control characters.
    pub fn new(prefix: impl Into<String>) -> Result<Self, GeneratorError> {
        let prefix = prefix.into();
        if prefix.is_empty() || prefix.chars().any(|c| c.is_whitespace() || c.is_control()) {
            return Err(GeneratorError::InvalidPrefix(prefix));
        }
        Ok(Self { prefix, next: AtomicU64::new(1) })
    }
}

impl UidGenerator for SequentialUidGenerator {
    fn generate_uid(&self) -> Result<Uid, PortError> {
        let n = self.next.fetch_add(1, Ordering::Relaxed);
        Ok(Uid::new(format!("{}-{n}", self.prefix))?)
    }
}

/// Produces host-derived UIDs of the form `<utc-stamp>-<pid>-<n>@<domain>`.
///
/// The stamp comes from the injected clock. The per-generator counter keeps
/// UIDs distinct when several are produced within the same second.
pub struct HostUidGenerator {
    clock: Arc<dyn Clock>,
    domain: String,
    pid: u32,
    next: AtomicU64,
}

impl HostUidGenerator {
    /// Creates a generator for the given host domain.
    ///
    /// # Errors
    ///
    /// Returns [`GeneratorError::InvalidDomain`] if the domain is empty or
    /// contains anything other than ASCII letters, digits, `-` and `.`.
    pub fn new(clock: Arc<dyn Clock>, domain: impl Into<String>) -> Result<Self, GeneratorError> {
        let domain = domain.into();
        let valid = !domain.is_empty()
            && domain.chars().all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '.');
        if !valid {
            return Err(GeneratorError::InvalidDomain(domain));
        }
        Ok(Self { clock, domain, pid: std::process::id(), next: AtomicU64::new(1) })
    }
}

impl UidGenerator for HostUidGenerator {
    fn generate_uid(&self) -> Result<Uid, PortError> {
        let stamp = self.clock.now().format("%Y%m%dT%H%M%SZ");
        let n = self.next.fetch_add(1, Ordering::Relaxed);
        let uid = Uid::new(format!("{stamp}-{}-{n}@{}", self.pid, self.domain))?;
        debug!(%uid, "generated host-derived UID");
        Ok(uid)
    }
}
