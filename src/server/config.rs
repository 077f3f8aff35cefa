use std::str::FromStr;

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8000";
const DEFAULT_CORS_ORIGIN: &str = "http://localhost:3000";
const DEFAULT_SHORT_SWEEP_CRON: &str = "0 0 * * * *";
const DEFAULT_SHORT_SWEEP_MINUTES: i64 = 120;
const DEFAULT_LONG_SWEEP_MINUTES: i64 = 24 * 60;
const MAX_SWEEP_MINUTES: i64 = 365 * 24 * 60;

pub struct Config {
    pub database_url: String,
    pub bind_address: String,
    pub cors_origin: String,

    /// Cron expression for the sweep cancelling stale pending bookings.
    pub short_sweep_cron: String,
    pub short_sweep_minutes: i64,

    /// Cron expression for the sweep releasing expired bookings, unscheduled when unset.
    pub long_sweep_cron: Option<String>,
    pub long_sweep_minutes: i64,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            database_url: std::env::var("DATABASE_URL")
                .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?,
            bind_address: env_or("BIND_ADDRESS", DEFAULT_BIND_ADDRESS),
            cors_origin: env_or("CORS_ORIGIN", DEFAULT_CORS_ORIGIN),
            short_sweep_cron: env_or("SHORT_SWEEP_CRON", DEFAULT_SHORT_SWEEP_CRON),
            short_sweep_minutes: parse_minutes("SHORT_SWEEP_MINUTES", DEFAULT_SHORT_SWEEP_MINUTES)?,
            long_sweep_cron: std::env::var("LONG_SWEEP_CRON").ok(),
            long_sweep_minutes: parse_minutes("LONG_SWEEP_MINUTES", DEFAULT_LONG_SWEEP_MINUTES)?,
        })
    }
}

fn env_or(name: &str, default: &str) -> String {
    std::env::var(name).unwrap_or_else(|_| default.to_string())
}

/// Reads a minute count, falling back to `default` when unset.
fn parse_minutes(name: &str, default: i64) -> Result<i64, ConfigError> {
    match std::env::var(name) {
        Ok(value) => minutes_from_str(name, &value),
        Err(_) => Ok(default),
    }
}

/// Accepts minute counts from 1 up to one year.
fn minutes_from_str(name: &str, value: &str) -> Result<i64, ConfigError> {
    let invalid = |reason: String| ConfigError::InvalidEnvVar {
        name: name.to_string(),
        value: value.to_string(),
        reason,
    };

    let minutes = i64::from_str(value).map_err(|e| invalid(e.to_string()))?;
    if minutes <= 0 {
        return Err(invalid("must be greater than zero".to_string()));
    }
    if minutes > MAX_SWEEP_MINUTES {
        return Err(invalid(format!("must be at most {}", MAX_SWEEP_MINUTES)));
    }

    Ok(minutes)
}
