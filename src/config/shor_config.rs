// src/config/shor_config.rs

use serde::{Deserialize, Serialize};
use config::{Config, ConfigBuilder, ConfigError, Environment, File};
use config::builder::DefaultState;
use std::path::Path;
use crate::algorithms::order_test::FactorTestFormula;

/// Factor finder configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShorConfig {
    /// Maximum number of bases to try per target (0 = unbounded)
    pub max_attempts: usize,

    /// RNG seed for base selection; None draws a fresh seed per run
    #[serde(default)]
    pub seed: Option<u64>,

    /// Candidate formula used by the order test
    pub formula: FactorTestFormula,

    /// Fail fast with PrimeInput instead of searching a prime target
    pub reject_primes: bool,

    /// Give up on a base's order after this many multiplications
    #[serde(default)]
    pub order_search_limit: Option<u64>,

    /// Number of threads for batch factoring
    #[serde(default)]
    pub threads: Option<usize>,

    /// Logging level (error, warn, info, debug, trace)
    pub log_level: String,
}

impl Default for ShorConfig {
    fn default() -> Self {
        ShorConfig {
            max_attempts: 1000,
            seed: None,
            formula: FactorTestFormula::Textbook,
            reject_primes: true,
            order_search_limit: None,
            threads: None, // Use Rayon's default
            log_level: "info".to_string(),
        }
    }
}

impl ShorConfig {
    /// Load configuration with precedence: config file → env vars → defaults
    pub fn load() -> Result<Self, ConfigError> {
        let mut builder = Self::defaults()?;

        // TOML preferred, YAML fallback
        if Path::new("shor.toml").exists() {
            builder = builder.add_source(File::with_name("shor.toml"));
        } else if Path::new("shor.yaml").exists() {
            builder = builder.add_source(File::with_name("shor.yaml"));
        }

        Self::finish(builder)
    }

    /// Load configuration with custom file path
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let mut builder = Self::defaults()?;

        if path.as_ref().exists() {
            builder = builder.add_source(File::from(path.as_ref()));
        }

        Self::finish(builder)
    }

    /// Attempt ceiling, or None when unbounded
    pub fn attempt_budget(&self) -> Option<usize> {
        if self.max_attempts == 0 {
            None
        } else {
            Some(self.max_attempts)
        }
    }

    fn defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        Config::builder()
            .set_default("max_attempts", 1000)?
            .set_default("formula", "textbook")?
            .set_default("reject_primes", true)?
            .set_default("log_level", "info")
    }

    fn finish(builder: ConfigBuilder<DefaultState>) -> Result<Self, ConfigError> {
        // Override with environment variables (SHOR_MAX_ATTEMPTS, SHOR_SEED, ...)
        let config = builder
            .add_source(
                Environment::with_prefix("SHOR")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;
        config.try_deserialize()
    }
}
