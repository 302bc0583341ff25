use std::env;

use thiserror::Error;
use tracing::warn;

pub const DEFAULT_USD_RATE: f64 = 83.0;
pub const DEFAULT_EXTENDED_TRIP_THRESHOLD: f64 = 25_000.0;
pub const BASE_ATTRACTION_COUNT: usize = 3;
pub const MAX_EXTRA_ATTRACTION_SLOTS: usize = 2;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("{name} must be a number, got {value:?}")]
    NotANumber { name: &'static str, value: String },
    #[error("{name} must be positive, got {value}")]
    NotPositive { name: &'static str, value: f64 },
    #[error("{name} must be between 0 and {max}, got {value}")]
    OutOfRange {
        name: &'static str,
        value: usize,
        max: usize,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlannerConfig {
    /// Multiplier from USD to base currency units.
    pub usd_rate: f64,
    /// Base-currency budget above which a third day is added.
    pub extended_trip_threshold: f64,
    /// Sample size is `3 + floor(u * extra_attraction_slots)`.
    pub extra_attraction_slots: usize,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            usd_rate: DEFAULT_USD_RATE,
            extended_trip_threshold: DEFAULT_EXTENDED_TRIP_THRESHOLD,
            extra_attraction_slots: 1,
        }
    }
}

impl PlannerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    pub fn from_env_or_default() -> Self {
        Self::from_env().unwrap_or_else(|error| {
            warn!(%error, "invalid planner configuration, using defaults");
            Self::default()
        })
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&'static str) -> Option<String>,
    {
        let defaults = Self::default();

        let usd_rate = match lookup("ITINERA_USD_RATE") {
            Some(raw) => positive_number("ITINERA_USD_RATE", &raw)?,
            None => defaults.usd_rate,
        };
        let extended_trip_threshold = match lookup("ITINERA_EXTENDED_TRIP_THRESHOLD") {
            Some(raw) => positive_number("ITINERA_EXTENDED_TRIP_THRESHOLD", &raw)?,
            None => defaults.extended_trip_threshold,
        };
        let extra_attraction_slots = match lookup("ITINERA_EXTRA_ATTRACTION_SLOTS") {
            Some(raw) => {
                let name = "ITINERA_EXTRA_ATTRACTION_SLOTS";
                let value =
                    raw.trim()
                        .parse::<usize>()
                        .map_err(|_| ConfigError::NotANumber {
                            name,
                            value: raw.clone(),
                        })?;
                if value > MAX_EXTRA_ATTRACTION_SLOTS {
                    return Err(ConfigError::OutOfRange {
                        name,
                        value,
                        max: MAX_EXTRA_ATTRACTION_SLOTS,
                    });
                }
                value
            }
            None => defaults.extra_attraction_slots,
        };

        Ok(Self {
            usd_rate,
            extended_trip_threshold,
            extra_attraction_slots,
        })
    }
}

fn positive_number(name: &'static str, raw: &str) -> Result<f64, ConfigError> {
    let value = raw
        .trim()
        .parse::<f64>()
        .map_err(|_| ConfigError::NotANumber {
            name,
            value: raw.to_string(),
        })?;
    if !value.is_finite() || value <= 0.0 {
        return Err(ConfigError::NotPositive { name, value });
    }
    Ok(value)
}
