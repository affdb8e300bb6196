//! Milestone content resolution from content-addressed gateways.
//!
//! A resolver either produces the content for a URI or nothing at all;
//! failures are logged and left for the caller to fall back on.

mod gateway;

use async_trait::async_trait;

use crate::types::MilestoneContent;

pub use gateway::{GatewayResolver, DEFAULT_GATEWAYS, DEFAULT_GATEWAY_TIMEOUT};

/// Anything that can look up milestone content by URI.
#[async_trait]
pub trait ContentResolver: Send + Sync {
    /// Resolve the content for `uri`, or `None` when every source failed.
    async fn resolve(&self, uri: &str) -> Option<MilestoneContent>;
}

/// Resolver that never reaches the network.
///
/// Used when running offline so the detail view goes straight to the
/// store fallback.
#[derive(Debug, Clone, Copy, Default)]
pub struct OfflineResolver;

#[async_trait]
impl ContentResolver for OfflineResolver {
    async fn resolve(&self, uri: &str) -> Option<MilestoneContent> {
        tracing::debug!(uri, "Offline, skipping gateways");
        None
    }
}
