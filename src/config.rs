//! Runtime configuration
//!
//! Loaded from a TOML file; a missing file means defaults. Command-line
//! flags override individual values after loading.

use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use tracing::info;

use crate::error::{DewhitepaperError, Result};
use crate::resolver::{GatewayResolver, DEFAULT_GATEWAYS};
use crate::store::StoreLatency;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub gateway: GatewayConfig,
    #[serde(default)]
    pub store: StoreConfig,
    #[serde(default)]
    pub wallet: WalletConfig,
}

/// Content gateway chain
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GatewayConfig {
    /// URL prefixes, tried in order
    #[serde(default = "default_gateway_urls")]
    pub urls: Vec<String>,

    /// Timeout per gateway request
    #[serde(default = "default_gateway_timeout_ms")]
    pub timeout_ms: u64,

    /// Skip gateways entirely and read content from the store
    #[serde(default)]
    pub offline: bool,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            urls: default_gateway_urls(),
            timeout_ms: default_gateway_timeout_ms(),
            offline: false,
        }
    }
}

impl GatewayConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    pub fn build_resolver(&self) -> Result<GatewayResolver> {
        GatewayResolver::new(self.urls.clone(), self.timeout())
    }
}

/// Mock store behaviour
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Simulate request latency
    #[serde(default = "default_true")]
    pub simulate_latency: bool,

    #[serde(default = "default_list_ms")]
    pub list_ms: u64,

    #[serde(default = "default_get_ms")]
    pub get_ms: u64,

    #[serde(default = "default_content_ms")]
    pub content_ms: u64,

    #[serde(default = "default_vote_ms")]
    pub vote_ms: u64,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            simulate_latency: true,
            list_ms: default_list_ms(),
            get_ms: default_get_ms(),
            content_ms: default_content_ms(),
            vote_ms: default_vote_ms(),
        }
    }
}

impl StoreConfig {
    pub fn latency(&self) -> StoreLatency {
        if !self.simulate_latency {
            return StoreLatency::none();
        }
        StoreLatency {
            list: Duration::from_millis(self.list_ms),
            get: Duration::from_millis(self.get_ms),
            content: Duration::from_millis(self.content_ms),
            vote: Duration::from_millis(self.vote_ms),
        }
    }
}

/// Wallet session
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WalletConfig {
    /// Account to connect with; absent means disconnected
    #[serde(default)]
    pub account: Option<String>,
}

// Defaults
fn default_gateway_urls() -> Vec<String> {
    DEFAULT_GATEWAYS.iter().map(|g| g.to_string()).collect()
}
fn default_gateway_timeout_ms() -> u64 { 10_000 }
fn default_true() -> bool { true }
fn default_list_ms() -> u64 { 500 }
fn default_get_ms() -> u64 { 300 }
fn default_content_ms() -> u64 { 400 }
fn default_vote_ms() -> u64 { 1000 }

impl Config {
    /// Parse a TOML document.
    pub fn from_toml(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from `path`, or defaults when the file does not exist.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            info!(path = %path.display(), "Config file not found, using defaults");
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    pub fn validate(&self) -> Result<()> {
        if self.gateway.urls.is_empty() {
            return Err(DewhitepaperError::Config("gateway.urls must not be empty".into()));
        }
        if self.gateway.timeout_ms == 0 {
            return Err(DewhitepaperError::Config("gateway.timeout_ms must be positive".into()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.gateway.urls.len(), 4);
        assert_eq!(config.gateway.timeout(), Duration::from_secs(10));
        assert!(!config.gateway.offline);
        assert_eq!(config.store.latency(), StoreLatency::default());
        assert!(config.wallet.account.is_none());
    }

    #[test]
    fn test_empty_document_uses_defaults() {
        assert_eq!(Config::from_toml("").unwrap(), Config::default());
    }

    #[test]
    fn test_latency_can_be_disabled() {
        let config = Config::from_toml("[store]\nsimulate_latency = false\n").unwrap();
        assert_eq!(config.store.latency(), StoreLatency::none());
    }

    #[test]
    fn test_rejects_empty_gateway_list() {
        assert!(Config::from_toml("[gateway]\nurls = []\n").is_err());
        assert!(Config::from_toml("[gateway]\ntimeout_ms = 0\n").is_err());
    }
}
