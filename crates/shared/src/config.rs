//! Ledger configuration management.

use serde::Deserialize;

use crate::types::policy::{DecimalPolicy, RoundingMode};

/// Numeric configuration for the ledger engine.
///
/// Loaded once at startup. The [`DecimalPolicy`] built from it is an
/// immutable value handed explicitly to every computation, so alternate
/// scales are trivial to test against.
#[derive(Debug, Clone, Deserialize)]
pub struct LedgerConfig {
    /// Fractional-digit count for final monetary results.
    #[serde(default = "default_decimals")]
    pub decimals: u32,
    /// Rounding rule applied to monetary results.
    #[serde(default = "default_rounding")]
    pub rounding: RoundingMode,
}

fn default_decimals() -> u32 {
    2
}

fn default_rounding() -> RoundingMode {
    RoundingMode::HalfUp
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self {
            decimals: default_decimals(),
            rounding: default_rounding(),
        }
    }
}

impl LedgerConfig {
    /// Loads configuration from environment and config files.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(config::Environment::with_prefix("TESSERA").separator("__"))
            .build()?;

        config.try_deserialize()
    }

    /// Builds the decimal policy described by this configuration.
    #[must_use]
    pub const fn decimal_policy(&self) -> DecimalPolicy {
        DecimalPolicy::new(self.decimals, self.rounding)
    }
}
