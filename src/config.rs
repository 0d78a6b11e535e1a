// ⚙️ Model Configuration
// Knobs for the two documented silent behaviors, loaded from JSON
//
// {
//   "rate_policy": "zero-rate" | "strict",
//   "household_hours": 2000.0
// }
//
// Every field is optional; the defaults reproduce the literal model behavior.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::entities::{RatePolicy, HOUSEHOLD_HOURS};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelConfig {
    /// Zero-rate fallback or strict rejection for unsupported currencies
    #[serde(default)]
    pub rate_policy: RatePolicy,

    /// Hours per year used when totalling household income
    #[serde(default = "default_household_hours")]
    pub household_hours: f64,
}

fn default_household_hours() -> f64 {
    HOUSEHOLD_HOURS
}

impl Default for ModelConfig {
    fn default() -> Self {
        ModelConfig {
            rate_policy: RatePolicy::default(),
            household_hours: default_household_hours(),
        }
    }
}

impl ModelConfig {
    /// Load configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config file: {:?}", path.as_ref()))?;

        ModelConfig::from_json(&content)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let config: ModelConfig =
            serde_json::from_str(json).context("Failed to parse config JSON")?;

        if !config.household_hours.is_finite() || config.household_hours < 0.0 {
            anyhow::bail!(
                "household_hours must be a non-negative number, got {}",
                config.household_hours
            );
        }

        Ok(config)
    }
}

// ============================================================================
// TESTS
// ============================================================================
