//! Timing configuration
//!
//! Settings a sequence is created from. Missing fields take their defaults,
//! so `{}` is a valid configuration.

use serde::{Deserialize, Serialize};

use crate::defaults::DEFAULT_BPM;
use crate::errors::ConfigError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimingConfig {
    /// Tempo in beats per minute
    pub bpm: u32,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self { bpm: DEFAULT_BPM }
    }
}

impl TimingConfig {
    /// Read and validate a configuration from JSON
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: TimingConfig =
            serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.bpm == 0 {
            return Err(ConfigError::InvalidBpm(self.bpm));
        }
        Ok(())
    }
}
