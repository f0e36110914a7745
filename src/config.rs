//! Engine configuration.

use serde::{Deserialize, Serialize};

use crate::resonance::DEFAULT_STEPS;
use crate::{Error, Result};

/// Runtime knobs for `ResonanceEngine`.
///
/// Every field has a default matching the engine's canonical behavior;
/// a JSON file only needs to name the fields it overrides.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Rounds run by `resonate_default()`.
    /// Default: 5.
    pub default_steps: usize,

    /// Rounds run by `refract()`.
    /// Default: 10.
    pub refraction_steps: usize,

    /// Characters of a prompt that become input values.
    /// Default: 100.
    pub prompt_limit: usize,

    /// Divisor applied to each character code.
    /// Default: 255.0.
    pub char_scale: f64,

    /// Nodes listed in a refraction report.
    /// Default: 10.
    pub sample_size: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            default_steps: DEFAULT_STEPS,
            refraction_steps: 10,
            prompt_limit: 100,
            char_scale: 255.0,
            sample_size: 10,
        }
    }
}

impl EngineConfig {
    /// Validate configuration parameters.
    pub fn validate(&self) -> Result<()> {
        if !(self.char_scale.is_finite() && self.char_scale > 0.0) {
            return Err(Error::Config(format!(
                "char_scale must be finite and > 0, got {}",
                self.char_scale
            )));
        }
        Ok(())
    }

    /// Load from a JSON string and validate.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)
            .map_err(|e| Error::Config(format!("JSON parse error: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| Error::Serialization(e.to_string()))
    }
}
