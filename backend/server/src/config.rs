use std::{env, fmt::Display, str::FromStr};

use anyhow::{Context, Result, anyhow};
use tracing::{info, warn};

pub struct Config {
    pub port: u16,
    pub database_url: String,
    pub max_connections: u32,
    pub acquire_timeout_ms: u64,
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::from_lookup(var)
    }

    /// Builds the config from any key lookup, missing keys fall back to their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(Self {
            port: try_load(&lookup, "RUST_PORT", "3001")?,
            database_url: try_load(&lookup, "DATABASE_URL", "sqlite://birthday_app.db")?,
            max_connections: try_load(&lookup, "DB_MAX_CONNECTIONS", "10")?,
            acquire_timeout_ms: try_load(&lookup, "DB_ACQUIRE_TIMEOUT_MS", "5000")?,
        })
    }
}

fn var(key: &str) -> Option<String> {
    env::var(key)
        .map_err(|_| {
            warn!("Environment variable {key} not found, using default");
        })
        .ok()
}

fn try_load<T, F>(lookup: &F, key: &str, default: &str) -> Result<T>
where
    T: FromStr,
    T::Err: Display,
    F: Fn(&str) -> Option<String>,
{
    lookup(key)
        .unwrap_or_else(|| {
            info!("{key} not set, using default: {default}");
            default.to_string()
        })
        .parse()
        .map_err(|e| anyhow!("Invalid {key} value: {e}"))
        .context("Environment misconfigured!")
}
