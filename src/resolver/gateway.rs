//! Sequential gateway fallback chain.

use async_trait::async_trait;
use reqwest::{header, Client};
use std::time::Duration;
use tracing::{debug, warn};

use super::ContentResolver;
use crate::error::{DewhitepaperError, Result};
use crate::types::{content_hash, MilestoneContent};

/// Public gateways tried in order.
pub const DEFAULT_GATEWAYS: [&str; 4] = [
    "https://ipfs.io/ipfs/",
    "https://gateway.pinata.cloud/ipfs/",
    "https://cloudflare-ipfs.com/ipfs/",
    "https://dweb.link/ipfs/",
];

/// Per-gateway request timeout.
pub const DEFAULT_GATEWAY_TIMEOUT: Duration = Duration::from_secs(10);

/// Resolves milestone content through an ordered list of HTTP gateways.
///
/// Each gateway gets exactly one attempt; the first 2xx response with a
/// parseable body wins and the rest are never contacted.
pub struct GatewayResolver {
    client: Client,
    gateways: Vec<String>,
    timeout: Duration,
}

impl GatewayResolver {
    /// Create a resolver over `gateways`, each a URL prefix the hash is appended to.
    pub fn new(gateways: Vec<String>, timeout: Duration) -> Result<Self> {
        if gateways.is_empty() {
            return Err(DewhitepaperError::Config(
                "at least one content gateway is required".into(),
            ));
        }

        let mut headers = header::HeaderMap::new();
        headers.insert(
            header::ACCEPT,
            header::HeaderValue::from_static("application/json"),
        );

        let client = Client::builder().default_headers(headers).build()?;

        Ok(Self {
            client,
            gateways,
            timeout,
        })
    }

    /// Resolver over the public gateways with the standard timeout.
    pub fn public() -> Result<Self> {
        Self::new(
            DEFAULT_GATEWAYS.iter().map(|g| g.to_string()).collect(),
            DEFAULT_GATEWAY_TIMEOUT,
        )
    }

    pub fn gateways(&self) -> &[String] {
        &self.gateways
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// URL of `uri` on the first gateway.
    pub fn gateway_url(&self, uri: &str) -> String {
        format!("{}{}", self.gateways[0], content_hash(uri))
    }

    async fn fetch_from(&self, gateway: &str, hash: &str) -> Result<MilestoneContent> {
        let url = format!("{}{}", gateway, hash);

        let response = self
            .client
            .get(&url)
            .timeout(self.timeout)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(DewhitepaperError::Network(format!(
                "HTTP {} from {}",
                response.status().as_u16(),
                url
            )));
        }

        let content: MilestoneContent = response.json().await?;
        Ok(content)
    }
}

#[async_trait]
impl ContentResolver for GatewayResolver {
    async fn resolve(&self, uri: &str) -> Option<MilestoneContent> {
        let hash = content_hash(uri);

        for gateway in &self.gateways {
            match self.fetch_from(gateway, &hash).await {
                Ok(content) => {
                    debug!(gateway = %gateway, hash = %hash, "Milestone content resolved");
                    return Some(content);
                }
                Err(e) => {
                    warn!(gateway = %gateway, hash = %hash, error = %e, "Gateway fetch failed");
                }
            }
        }

        None
    }
}
