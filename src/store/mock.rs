//! In-memory expectation store with simulated latency.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicU32, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;
use tracing::{debug, warn};

use super::fixtures;
use super::traits::ExpectationStore;
use crate::error::Result;
use crate::types::{content_hash, now_millis, Expectation, MilestoneContent, VoteChoice};

/// Artificial delay applied to each store call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StoreLatency {
    pub list: Duration,
    pub get: Duration,
    pub content: Duration,
    pub vote: Duration,
}

impl Default for StoreLatency {
    fn default() -> Self {
        Self {
            list: Duration::from_millis(500),
            get: Duration::from_millis(300),
            content: Duration::from_millis(400),
            vote: Duration::from_millis(1000),
        }
    }
}

impl StoreLatency {
    /// No delay at all.
    pub fn none() -> Self {
        Self {
            list: Duration::ZERO,
            get: Duration::ZERO,
            content: Duration::ZERO,
            vote: Duration::ZERO,
        }
    }
}

async fn simulate(delay: Duration) {
    if !delay.is_zero() {
        tokio::time::sleep(delay).await;
    }
}

/// Mock store backed by the fixture records.
///
/// Cloning shares the same records, so a vote made through one handle is
/// visible through every other.
#[derive(Clone)]
pub struct MockExpectationStore {
    expectations: Arc<RwLock<Vec<Expectation>>>,
    content: Arc<HashMap<String, MilestoneContent>>,
    latency: StoreLatency,
    fail_votes: Arc<AtomicBool>,
    vote_calls: Arc<AtomicU32>,
}

impl MockExpectationStore {
    /// Store seeded with the fixtures, deadlines relative to now.
    pub fn new() -> Self {
        Self::with_records(fixtures::expectations(now_millis()), fixtures::milestone_content())
    }

    /// Store over arbitrary records.
    pub fn with_records(
        expectations: Vec<Expectation>,
        content: HashMap<String, MilestoneContent>,
    ) -> Self {
        Self {
            expectations: Arc::new(RwLock::new(expectations)),
            content: Arc::new(content),
            latency: StoreLatency::default(),
            fail_votes: Arc::new(AtomicBool::new(false)),
            vote_calls: Arc::new(AtomicU32::new(0)),
        }
    }

    /// Set the simulated latency.
    pub fn with_latency(mut self, latency: StoreLatency) -> Self {
        self.latency = latency;
        self
    }

    /// Make `submit_vote` report failure without touching the tallies.
    pub fn with_failing_votes(self, fail: bool) -> Self {
        self.set_failing_votes(fail);
        self
    }

    pub fn set_failing_votes(&self, fail: bool) {
        self.fail_votes.store(fail, Ordering::SeqCst);
    }

    /// Number of times `submit_vote` was called.
    pub fn vote_calls(&self) -> u32 {
        self.vote_calls.load(Ordering::SeqCst)
    }
}

impl Default for MockExpectationStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ExpectationStore for MockExpectationStore {
    async fn list_expectations(&self) -> Result<Vec<Expectation>> {
        simulate(self.latency.list).await;
        Ok(self.expectations.read().await.clone())
    }

    async fn get_expectation(&self, id: &str) -> Result<Option<Expectation>> {
        simulate(self.latency.get).await;
        let expectations = self.expectations.read().await;
        Ok(expectations.iter().find(|e| e.id == id).cloned())
    }

    async fn get_content(&self, uri: &str) -> Result<Option<MilestoneContent>> {
        simulate(self.latency.content).await;
        Ok(self.content.get(&content_hash(uri)).cloned())
    }

    async fn submit_vote(
        &self,
        id: &str,
        choice: VoteChoice,
        comment: Option<&str>,
    ) -> Result<bool> {
        self.vote_calls.fetch_add(1, Ordering::SeqCst);
        simulate(self.latency.vote).await;

        if self.fail_votes.load(Ordering::SeqCst) {
            warn!(expectation_id = %id, "Mock store rejecting vote");
            return Ok(false);
        }

        let mut expectations = self.expectations.write().await;
        match expectations.iter_mut().find(|e| e.id == id) {
            Some(expectation) => {
                expectation.vote_counts.record(choice);
                debug!(
                    expectation_id = %id,
                    vote = %choice,
                    has_comment = comment.is_some(),
                    approve = expectation.vote_counts.approve,
                    disapprove = expectation.vote_counts.disapprove,
                    "Vote recorded"
                );
            }
            None => {
                // The mock still reports success for unknown ids
                warn!(expectation_id = %id, "Vote for unknown expectation ignored");
            }
        }

        Ok(true)
    }
}
