//! Core trait for expectation stores.

use async_trait::async_trait;

use crate::error::Result;
use crate::types::{Expectation, MilestoneContent, VoteChoice};

/// Source of expectation records, milestone content and vote tallies.
#[async_trait]
pub trait ExpectationStore: Send + Sync {
    /// All expectations, in store order.
    async fn list_expectations(&self) -> Result<Vec<Expectation>>;

    /// A single expectation by id.
    async fn get_expectation(&self, id: &str) -> Result<Option<Expectation>>;

    /// Milestone content for a URI (with or without the `ipfs://` marker).
    async fn get_content(&self, uri: &str) -> Result<Option<MilestoneContent>>;

    /// Record a vote. `Ok(false)` means the store declined it.
    async fn submit_vote(
        &self,
        id: &str,
        choice: VoteChoice,
        comment: Option<&str>,
    ) -> Result<bool>;
}
