//! Runtime settings read from the environment (`.env` is loaded by `main`).
use std::time::Duration;

use crate::constants::{
    DEFAULT_BIND_ADDR, DEFAULT_HTTP_TIMEOUT_SECS, DEFAULT_PANEL_COMMAND, SNAPSHOT_CACHE_TTL_SECS,
};
use crate::error::ConfigError;

#[derive(Debug, Clone)]
pub struct Settings {
    pub application_id: u64,
    pub bot_token: String,
    /// Hex-encoded Ed25519 keys, tried in order.
    pub public_keys: Vec<String>,
    pub gas_url: String,
    pub log_sink_url: String,
    pub bind_addr: String,
    pub panel_command: String,
    pub snapshot_ttl: Duration,
    pub http_timeout: Duration,
}

impl Settings {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds settings from any key lookup; blank values count as missing.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let require = |key: &'static str| get(key).ok_or(ConfigError::Missing(key));

        let application_id = require("DISCORD_APPLICATION_ID")?
            .trim()
            .parse::<u64>()
            .map_err(|e| ConfigError::Invalid {
                key: "DISCORD_APPLICATION_ID",
                reason: e.to_string(),
            })?;

        let public_keys: Vec<String> = require("DISCORD_PUBLIC_KEY")?
            .split(',')
            .map(|k| k.trim().to_string())
            .filter(|k| !k.is_empty())
            .collect();
        if public_keys.is_empty() {
            return Err(ConfigError::Missing("DISCORD_PUBLIC_KEY"));
        }

        let gas_url = require("GAS_WEBHOOK_URL")?;
        let log_sink_url = get("LOG_SINK_URL").unwrap_or_else(|| gas_url.clone());

        Ok(Self {
            application_id,
            bot_token: require("DISCORD_BOT_TOKEN")?,
            public_keys,
            gas_url,
            log_sink_url,
            bind_addr: get("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string()),
            panel_command: get("PANEL_COMMAND")
                .unwrap_or_else(|| DEFAULT_PANEL_COMMAND.to_string()),
            snapshot_ttl: secs(get("SNAPSHOT_TTL_SECS"), "SNAPSHOT_TTL_SECS", SNAPSHOT_CACHE_TTL_SECS)?,
            http_timeout: secs(get("HTTP_TIMEOUT_SECS"), "HTTP_TIMEOUT_SECS", DEFAULT_HTTP_TIMEOUT_SECS)?,
        })
    }
}

fn secs(raw: Option<String>, key: &'static str, default: u64) -> Result<Duration, ConfigError> {
    match raw {
        None => Ok(Duration::from_secs(default)),
        Some(v) => v
            .trim()
            .parse::<u64>()
            .map(Duration::from_secs)
            .map_err(|e| ConfigError::Invalid {
                key,
                reason: e.to_string(),
            }),
    }
}
