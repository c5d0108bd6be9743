use crate::domain::Currency;
use std::collections::HashMap;
use thiserror::Error;

/// Service configuration, read from the environment. Every knob has a
/// default so the binary runs with no environment at all.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    /// Calendar year that offset 0 of the projection tables maps to.
    pub anchor_year: i32,
    /// Reporting currency for formatted output and exports.
    pub currency: Currency,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}: {1}")]
    InvalidValue(String, String),
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_env_map(std::env::vars().collect())
    }

    pub fn from_env_map(env_map: HashMap<String, String>) -> Result<Self, ConfigError> {
        let port = env_map
            .get("PORT")
            .map(|s| s.as_str())
            .unwrap_or("8080")
            .parse::<u16>()
            .map_err(|_| {
                ConfigError::InvalidValue("PORT".to_string(), "must be a valid u16".to_string())
            })?;

        let anchor_year = env_map
            .get("ANCHOR_YEAR")
            .map(|s| s.as_str())
            .unwrap_or("2023")
            .parse::<i32>()
            .map_err(|_| {
                ConfigError::InvalidValue(
                    "ANCHOR_YEAR".to_string(),
                    "must be a valid calendar year".to_string(),
                )
            })?;

        let currency = env_map
            .get("CURRENCY")
            .map(|s| s.as_str())
            .unwrap_or("USD")
            .parse::<Currency>()
            .map_err(|e| ConfigError::InvalidValue("CURRENCY".to_string(), e.to_string()))?;

        Ok(Config {
            port,
            anchor_year,
            currency,
        })
    }
}
