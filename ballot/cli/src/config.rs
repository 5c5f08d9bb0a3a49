use {
    ballot_client::{RateLimitConfig, ValidationConfig},
    ballot_types::Config as EngineConfig,
    serde::{Deserialize, Serialize},
};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    pub log_level: String,
    pub engine: EngineConfig,
    pub validation: ValidationConfig,
    pub rate_limits: RateLimitConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            engine: EngineConfig::default(),
            validation: ValidationConfig::default(),
            rate_limits: RateLimitConfig::default(),
        }
    }
}
