//! Runtime configuration.
//!
//! Settings come from command-line flags with environment fallbacks
//! (a `.env` file is loaded at startup).

use std::sync::Arc;

use clap::{Args, ValueEnum};

use crate::adapters::live::{
    GeneratorError, HostUidGenerator, RandomUidGenerator, SequentialUidGenerator,
};
use crate::ports::{Clock, UidGenerator};

/// When set to a directory, every port interaction is recorded to
/// per-port cassettes beneath it.
pub const RECORD_ENV: &str = "CALNORM_RECORD";

/// `tracing` filter directive for diagnostics on stderr.
pub const LOG_ENV: &str = "CALNORM_LOG";

/// Strategy for producing missing UIDs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum GeneratorKind {
    /// Random UUIDs.
    #[default]
    Random,
    /// `<prefix>-1`, `<prefix>-2`, ...
    Sequential,
    /// `<utc-stamp>-<pid>-<n>@<domain>`.
    Host,
}

/// How missing UIDs are generated.
#[derive(Debug, Clone, PartialEq, Eq, Args)]
pub struct GeneratorSettings {
    /// Strategy used to create missing UIDs.
    #[arg(long, value_enum, env = "CALNORM_UID_GENERATOR", default_value_t = GeneratorKind::Random)]
    pub generator: GeneratorKind,
    /// Host domain appended to host-derived UIDs.
    #[arg(long, env = "CALNORM_UID_DOMAIN", default_value = "localhost")]
    pub domain: String,
    /// Prefix for sequential UIDs.
    #[arg(long, env = "CALNORM_UID_PREFIX", default_value = "calnorm")]
    pub prefix: String,
}

impl Default for GeneratorSettings {
    fn default() -> Self {
        Self {
            generator: GeneratorKind::Random,
            domain: "localhost".to_string(),
            prefix: "calnorm".to_string(),
        }
    }
}

impl GeneratorSettings {
    /// Builds the configured generator. Host-derived UIDs read `clock`.
    ///
    /// # Errors
    ///
    /// Returns [`GeneratorError`] if the domain or prefix is unusable.
    pub fn build(&self, clock: Arc<dyn Clock>) -> Result<Box<dyn UidGenerator>, GeneratorError> {
        let generator: Box<dyn UidGenerator> = match self.generator {
            GeneratorKind::Random => Box::new(RandomUidGenerator::new()),
            GeneratorKind::Sequential => Box::new(SequentialUidGenerator::new(self.prefix.as_str())?),
            GeneratorKind::Host => Box::new(HostUidGenerator::new(clock, self.domain.as_str())?),
        };
        Ok(generator)
    }
}
