//! Helper configuration with documented defaults
//!
//! Values can be overridden from a TOML file; any key left out keeps its
//! default. The CLI loads one file at startup and installs it globally.

use std::fs;
use std::path::Path;
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

use crate::core::error::{HelperError, Result};

/// Configuration for simulation and narration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HelperConfig {
    /// Seed for the dice generator
    ///
    /// `None` draws a fresh seed per run. Set it to replay a battle exactly.
    pub seed: Option<u64>,

    /// Number of simulated battles behind a Monte-Carlo estimate
    ///
    /// At 10_000 trials the standard error of a win rate is below half a
    /// percentage point.
    pub estimate_trials: u32,

    /// Win probability above which the attack is recommended
    pub favorable_threshold: f64,

    /// Win probability below which the attack is discouraged
    ///
    /// Anything between the two thresholds is reported as a toss-up.
    pub unfavorable_threshold: f64,
}

impl Default for HelperConfig {
    fn default() -> Self {
        Self {
            seed: None,
            estimate_trials: 10_000,
            favorable_threshold: 0.6,
            unfavorable_threshold: 0.4,
        }
    }
}

impl HelperConfig {
    /// Create a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a config from TOML text and validate it
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: HelperConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a config file from disk
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config = Self::from_toml_str(&content)?;
        tracing::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Validate configuration for internal consistency
    pub fn validate(&self) -> Result<()> {
        if self.estimate_trials == 0 {
            return Err(HelperError::InvalidConfig(
                "estimate_trials must be at least 1".into(),
            ));
        }

        for (name, value) in [
            ("favorable_threshold", self.favorable_threshold),
            ("unfavorable_threshold", self.unfavorable_threshold),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(HelperError::InvalidConfig(format!(
                    "{} ({}) must be within [0, 1]",
                    name, value
                )));
            }
        }

        if self.unfavorable_threshold > self.favorable_threshold {
            return Err(HelperError::InvalidConfig(format!(
                "unfavorable_threshold ({}) should be <= favorable_threshold ({})",
                self.unfavorable_threshold, self.favorable_threshold
            )));
        }

        Ok(())
    }
}

// === GLOBAL CONFIG ACCESS ===

static CONFIG: OnceLock<HelperConfig> = OnceLock::new();

/// Get the global config (initializes with defaults if not set)
pub fn config() -> &'static HelperConfig {
    CONFIG.get_or_init(HelperConfig::default)
}

/// Set the global config (can only be called once)
///
/// Returns Err if config was already set.
pub fn set_config(config: HelperConfig) -> std::result::Result<(), HelperConfig> {
    CONFIG.set(config)
}
