//! Configuration for the contract harness

use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Env var naming a TOML config file
pub const CONFIG_PATH_ENV: &str = "LISTING_CONTRACT_CONFIG";
/// Env var overriding the live service base URL
pub const BASE_URL_ENV: &str = "LISTING_API_BASE_URL";
/// Env var overriding the fixed settle delay, in milliseconds
pub const SETTLE_MS_ENV: &str = "LISTING_SETTLE_MS";

/// How to wait between a write and the read that should observe it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "lowercase")]
pub enum ConsistencyWait {
    /// Sleep once, then read once
    Fixed { delay_ms: u64 },
    /// Re-read until the response is acceptable or the timeout passes
    Poll { timeout_ms: u64, interval_ms: u64 },
}

impl Default for ConsistencyWait {
    fn default() -> Self {
        Self::Fixed { delay_ms: 500 }
    }
}

impl ConsistencyWait {
    /// No wait at all, for services that are immediately consistent
    pub const IMMEDIATE: Self = Self::Fixed { delay_ms: 0 };
}

/// Harness configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HarnessConfig {
    /// Live service URL; `None` runs against nothing but the stub
    pub base_url: Option<String>,
    pub timeout_secs: u64,
    pub connect_timeout_secs: u64,
    pub consistency: ConsistencyWait,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            base_url: None,
            timeout_secs: listing_client::DEFAULT_TIMEOUT.as_secs(),
            connect_timeout_secs: listing_client::DEFAULT_CONNECT_TIMEOUT.as_secs(),
            consistency: ConsistencyWait::default(),
        }
    }
}

impl HarnessConfig {
    /// Load configuration: defaults, then the file named by
    /// `LISTING_CONTRACT_CONFIG`, then env overrides
    pub fn load() -> Result<Self> {
        let mut config = match std::env::var_os(CONFIG_PATH_ENV) {
            Some(path) => Self::load_from(Path::new(&path))?,
            None => Self::default(),
        };
        config.apply_overrides(|key| std::env::var(key).ok())?;
        Ok(config)
    }

    /// Load configuration from a specific path
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Apply env-style overrides from `lookup`
    ///
    /// An empty base URL clears it. A settle delay switches to fixed mode.
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(base_url) = lookup(BASE_URL_ENV) {
            let base_url = base_url.trim();
            self.base_url = (!base_url.is_empty()).then(|| base_url.to_string());
        }

        if let Some(delay) = lookup(SETTLE_MS_ENV) {
            let delay_ms = delay.trim().parse::<u64>().with_context(|| {
                format!("{} must be milliseconds, got {:?}", SETTLE_MS_ENV, delay)
            })?;
            self.consistency = ConsistencyWait::Fixed { delay_ms };
        }

        Ok(())
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }
}
