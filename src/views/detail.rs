//! Expectation detail page: content lookup plus the voting panel.

use tracing::{debug, error, info, warn};

use crate::error::{DewhitepaperError, Result};
use crate::resolver::ContentResolver;
use crate::store::ExpectationStore;
use crate::types::{Expectation, MilestoneContent, VoteChoice};
use crate::voting::{VoteOutcome, VotingPanel};
use crate::wallet::WalletSession;

pub const NOT_FOUND_MESSAGE: &str = "Expectation not found";
pub const CONTENT_FAILED_MESSAGE: &str = "Failed to load milestone content";
pub const LOAD_FAILED_MESSAGE: &str = "Failed to load expectation data";

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DetailState {
    #[default]
    Loading,
    Ready {
        expectation: Expectation,
        content: MilestoneContent,
    },
    /// Terminal; the only way out is back to the list
    Failed(String),
}

/// The page for one expectation, addressed by milestone URI.
#[derive(Debug, Clone)]
pub struct ExpectationDetailView {
    uri: String,
    state: DetailState,
    panel: VotingPanel,
}

impl ExpectationDetailView {
    pub fn new(uri: impl Into<String>) -> Self {
        Self {
            uri: uri.into(),
            state: DetailState::Loading,
            panel: VotingPanel::new(),
        }
    }

    pub fn uri(&self) -> &str {
        &self.uri
    }

    pub fn state(&self) -> &DetailState {
        &self.state
    }

    pub fn expectation(&self) -> Option<&Expectation> {
        match &self.state {
            DetailState::Ready { expectation, .. } => Some(expectation),
            _ => None,
        }
    }

    pub fn content(&self) -> Option<&MilestoneContent> {
        match &self.state {
            DetailState::Ready { content, .. } => Some(content),
            _ => None,
        }
    }

    pub fn panel(&self) -> &VotingPanel {
        &self.panel
    }

    pub fn panel_mut(&mut self) -> &mut VotingPanel {
        &mut self.panel
    }

    /// Find the expectation and its milestone content.
    ///
    /// Content comes from the resolver first and the store second. Any
    /// failure leaves the view in `Failed` and is also returned.
    pub async fn load<S, R>(&mut self, store: &S, resolver: &R) -> Result<()>
    where
        S: ExpectationStore + ?Sized,
        R: ContentResolver + ?Sized,
    {
        self.state = DetailState::Loading;

        match self.fetch(store, resolver).await {
            Ok((expectation, content)) => {
                debug!(uri = %self.uri, id = %expectation.id, "Expectation loaded");
                self.state = DetailState::Ready {
                    expectation,
                    content,
                };
                Ok(())
            }
            Err(e) => {
                let message = match &e {
                    DewhitepaperError::NotFound(_) => NOT_FOUND_MESSAGE,
                    DewhitepaperError::ContentUnavailable(_) => CONTENT_FAILED_MESSAGE,
                    _ => {
                        error!(uri = %self.uri, error = %e, "Error fetching expectation data");
                        LOAD_FAILED_MESSAGE
                    }
                };
                self.state = DetailState::Failed(message.to_string());
                Err(e)
            }
        }
    }

    async fn fetch<S, R>(&self, store: &S, resolver: &R) -> Result<(Expectation, MilestoneContent)>
    where
        S: ExpectationStore + ?Sized,
        R: ContentResolver + ?Sized,
    {
        let expectation = store
            .list_expectations()
            .await?
            .into_iter()
            .find(|e| e.milestone_uri == self.uri)
            .ok_or_else(|| DewhitepaperError::NotFound(self.uri.clone()))?;

        let content = match resolver.resolve(&self.uri).await {
            Some(content) => content,
            None => {
                info!(uri = %self.uri, "Gateways exhausted, using store content");
                store
                    .get_content(&self.uri)
                    .await?
                    .ok_or_else(|| DewhitepaperError::ContentUnavailable(self.uri.clone()))?
            }
        };

        Ok((expectation, content))
    }

    /// Re-fetch the held expectation so tallies reflect new votes.
    pub async fn refresh<S>(&mut self, store: &S) -> Result<()>
    where
        S: ExpectationStore + ?Sized,
    {
        let Some(id) = self.expectation().map(|e| e.id.clone()) else {
            return Ok(());
        };
        refresh_expectation(&mut self.state, store, &id).await
    }

    /// Vote through the panel, refreshing tallies on success.
    pub async fn vote<S>(
        &mut self,
        store: &S,
        wallet: &WalletSession,
        choice: VoteChoice,
        now: i64,
    ) -> Result<VoteOutcome>
    where
        S: ExpectationStore + ?Sized,
    {
        let expectation = self
            .expectation()
            .cloned()
            .ok_or_else(|| DewhitepaperError::NotFound(self.uri.clone()))?;
        let id = expectation.id.as_str();

        let Self { state, panel, .. } = self;
        let outcome = panel
            .vote(store, wallet, &expectation, choice, now, move || {
                let state = state;
                refresh_expectation(state, store, id)
            })
            .await;

        Ok(outcome)
    }
}

async fn refresh_expectation<S>(state: &mut DetailState, store: &S, id: &str) -> Result<()>
where
    S: ExpectationStore + ?Sized,
{
    let updated = store
        .list_expectations()
        .await?
        .into_iter()
        .find(|e| e.id == id);

    match (state, updated) {
        (DetailState::Ready { expectation, .. }, Some(updated)) => {
            *expectation = updated;
            Ok(())
        }
        (_, None) => {
            warn!(id, "Expectation vanished during refresh");
            Ok(())
        }
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolver::OfflineResolver;
    use crate::store::{MockExpectationStore, StoreLatency};
    use crate::types::{now_millis, ExpectationStatus};
    use async_trait::async_trait;

    struct FixedResolver(MilestoneContent);

    #[async_trait]
    impl ContentResolver for FixedResolver {
        async fn resolve(&self, _uri: &str) -> Option<MilestoneContent> {
            Some(self.0.clone())
        }
    }

    fn store() -> MockExpectationStore {
        MockExpectationStore::new().with_latency(StoreLatency::none())
    }

    #[tokio::test]
    async fn test_lookup_by_milestone_uri() {
        let store = store();
        let mut view = ExpectationDetailView::new("ipfs://QmMock2");
        view.load(&store, &OfflineResolver).await.unwrap();

        let expectation = view.expectation().unwrap();
        assert_eq!(expectation.title, "Implement Cross-Chain Revenue Distribution");
        assert_eq!(expectation.status, ExpectationStatus::Fulfilled);
        assert_eq!(view.content().unwrap().title, expectation.title);
    }

    #[tokio::test]
    async fn test_resolver_content_preferred_over_store() {
        let store = store();
        let remote = MilestoneContent {
            title: "From gateway".into(),
            bip_link: "https://example.com/bip.md".into(),
            content: "remote".into(),
            created_at: "2025-02-01T00:00:00Z".into(),
        };
        let mut view = ExpectationDetailView::new("ipfs://QmMock1");
        view.load(&store, &FixedResolver(remote.clone())).await.unwrap();
        assert_eq!(view.content(), Some(&remote));
    }

    #[tokio::test]
    async fn test_unknown_uri_is_not_found() {
        let store = store();
        let mut view = ExpectationDetailView::new("ipfs://QmNope");
        let err = view.load(&store, &OfflineResolver).await.unwrap_err();
        assert!(matches!(err, DewhitepaperError::NotFound(_)));
        assert_eq!(view.state(), &DetailState::Failed(NOT_FOUND_MESSAGE.into()));
    }

    #[tokio::test]
    async fn test_missing_content_everywhere_fails() {
        let now = now_millis();
        let mut records = crate::store::fixtures::expectations(now);
        records[0].milestone_uri = "ipfs://QmOrphan".into();
        let store = MockExpectationStore::with_records(records, Default::default())
            .with_latency(StoreLatency::none());

        let mut view = ExpectationDetailView::new("ipfs://QmOrphan");
        let err = view.load(&store, &OfflineResolver).await.unwrap_err();
        assert!(matches!(err, DewhitepaperError::ContentUnavailable(_)));
        assert_eq!(view.state(), &DetailState::Failed(CONTENT_FAILED_MESSAGE.into()));
    }

    #[tokio::test]
    async fn test_vote_refreshes_tallies() {
        let store = store();
        let wallet = WalletSession::connected("0x34Da66269431a3DaDE50DA17F88F4b8F1F2Ed771").unwrap();
        let mut view = ExpectationDetailView::new("ipfs://QmMock1");
        view.load(&store, &OfflineResolver).await.unwrap();

        let outcome = view
            .vote(&store, &wallet, VoteChoice::Approve, now_millis())
            .await
            .unwrap();

        assert!(outcome.is_recorded());
        assert_eq!(view.expectation().unwrap().vote_counts.approve, 46);
        assert_eq!(view.expectation().unwrap().vote_counts.disapprove, 12);
    }

    #[tokio::test]
    async fn test_refresh_picks_up_votes_from_another_view() {
        let store = store();
        let wallet = WalletSession::connected("0x34Da66269431a3DaDE50DA17F88F4b8F1F2Ed771").unwrap();

        let mut watcher = ExpectationDetailView::new("ipfs://QmMock4");
        watcher.load(&store, &OfflineResolver).await.unwrap();
        let content_before = watcher.content().cloned();

        let mut voter = ExpectationDetailView::new("ipfs://QmMock4");
        voter.load(&store, &OfflineResolver).await.unwrap();
        voter
            .vote(&store, &wallet, VoteChoice::Disapprove, now_millis())
            .await
            .unwrap();

        // Stale until refreshed
        assert_eq!(watcher.expectation().unwrap().vote_counts.disapprove, 8);

        watcher.refresh(&store).await.unwrap();
        assert_eq!(watcher.expectation().unwrap().vote_counts.disapprove, 9);
        assert_eq!(watcher.content().cloned(), content_before);
    }

    #[tokio::test]
    async fn test_refresh_before_load_is_noop() {
        let mut view = ExpectationDetailView::new("ipfs://QmMock1");
        view.refresh(&store()).await.unwrap();
        assert_eq!(view.state(), &DetailState::Loading);
    }

    #[tokio::test]
    async fn test_vote_before_load_is_error() {
        let store = store();
        let mut view = ExpectationDetailView::new("ipfs://QmMock1");
        let result = view
            .vote(&store, &WalletSession::disconnected(), VoteChoice::Approve, now_millis())
            .await;
        assert!(result.is_err());
    }
}
