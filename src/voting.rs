//! Voting panel: guard checks, submission, and session state.
//!
//! The panel walks `Idle → Submitting → Voted`, or back to `Idle` when the
//! store declines. Nothing ties a vote to a wallet address; the only thing
//! stopping a second vote is the session's `has_voted` flag, which a fresh
//! panel does not carry.

use std::future::Future;
use tracing::{info, warn};

use crate::error::{Result, VoteGuardViolation};
use crate::notify::Notification;
use crate::store::ExpectationStore;
use crate::types::{Expectation, ExpectationStatus, UserVote, VoteChoice, VotingState};
use crate::wallet::WalletSession;

/// Precondition check for a vote.
///
/// Pure function of connection state, expectation status, deadline and
/// the current time (unix ms).
pub fn check_vote_guard(
    wallet_connected: bool,
    expectation: &Expectation,
    now: i64,
) -> std::result::Result<(), VoteGuardViolation> {
    if !wallet_connected {
        return Err(VoteGuardViolation::WalletNotConnected);
    }
    if !expectation.is_voting_active(now) {
        return Err(VoteGuardViolation::VotingClosed);
    }
    Ok(())
}

/// Notification shown when a guard refuses a vote.
pub fn guard_notification(violation: VoteGuardViolation) -> Notification {
    match violation {
        VoteGuardViolation::WalletNotConnected => Notification::destructive(
            "Wallet not connected",
            "Please connect your wallet to vote",
        ),
        VoteGuardViolation::VotingClosed => Notification::destructive(
            "Voting closed",
            "This expectation is no longer accepting votes",
        ),
        VoteGuardViolation::AlreadyVoted => Notification::destructive(
            "Already voted",
            "Your vote for this expectation has already been submitted",
        ),
    }
}

/// Headline shown above the tallies.
pub fn status_message(expectation: &Expectation, now: i64) -> &'static str {
    if expectation.is_voting_active(now) {
        "Voting is currently active"
    } else if expectation.status == ExpectationStatus::Fulfilled {
        "This expectation was approved by the community"
    } else {
        "This expectation was not approved by the community"
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PanelPhase {
    #[default]
    Idle,
    Submitting,
    Voted,
}

/// How a vote attempt ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VoteStatus {
    Recorded(UserVote),
    Refused(VoteGuardViolation),
    Failed,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VoteOutcome {
    pub status: VoteStatus,
    pub notification: Notification,
}

impl VoteOutcome {
    pub fn is_recorded(&self) -> bool {
        matches!(self.status, VoteStatus::Recorded(_))
    }
}

/// Session-scoped voting panel for one expectation view.
#[derive(Debug, Clone, Default)]
pub struct VotingPanel {
    state: VotingState,
    phase: PanelPhase,
    last_vote: Option<UserVote>,
}

impl VotingPanel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &VotingState {
        &self.state
    }

    pub fn phase(&self) -> PanelPhase {
        self.phase
    }

    pub fn last_vote(&self) -> Option<&UserVote> {
        self.last_vote.as_ref()
    }

    /// Free-text comment sent along with the next vote.
    pub fn set_comment(&mut self, comment: impl Into<String>) {
        self.state.comment = comment.into();
    }

    /// Whether the vote buttons would be enabled.
    pub fn can_vote(&self) -> bool {
        self.phase == PanelPhase::Idle && !self.state.has_voted
    }

    /// Attempt a vote.
    ///
    /// Guards run first and never touch the store. On success the
    /// `on_vote_submitted` hook runs so the owning view can re-fetch; a
    /// failing hook is logged and does not undo the vote.
    pub async fn vote<S, F, Fut>(
        &mut self,
        store: &S,
        wallet: &WalletSession,
        expectation: &Expectation,
        choice: VoteChoice,
        now: i64,
        on_vote_submitted: F,
    ) -> VoteOutcome
    where
        S: ExpectationStore + ?Sized,
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<()>>,
    {
        if let Err(violation) = check_vote_guard(wallet.is_connected(), expectation, now) {
            return self.refuse(violation);
        }
        if !self.can_vote() {
            return self.refuse(VoteGuardViolation::AlreadyVoted);
        }

        self.phase = PanelPhase::Submitting;
        self.state.current_vote = Some(choice);

        let comment = Some(self.state.comment.trim()).filter(|c| !c.is_empty());
        let submitted = store
            .submit_vote(&expectation.id, choice, comment)
            .await;

        match submitted {
            Ok(true) => {
                let vote = UserVote {
                    expectation_id: expectation.id.clone(),
                    vote: choice,
                    timestamp: now,
                    comment: comment.map(str::to_string),
                };
                self.state.has_voted = true;
                self.phase = PanelPhase::Voted;
                self.last_vote = Some(vote.clone());
                info!(expectation_id = %expectation.id, vote = %choice, "Vote submitted");

                if let Err(e) = on_vote_submitted().await {
                    warn!(expectation_id = %expectation.id, error = %e, "Refresh after vote failed");
                }

                VoteOutcome {
                    status: VoteStatus::Recorded(vote),
                    notification: Notification::info(
                        "Vote submitted successfully!",
                        format!("Your {} vote has been recorded.", choice),
                    ),
                }
            }
            other => {
                if let Err(e) = other {
                    warn!(expectation_id = %expectation.id, error = %e, "Vote submission errored");
                } else {
                    warn!(expectation_id = %expectation.id, "Store declined vote");
                }
                self.state.current_vote = None;
                self.phase = PanelPhase::Idle;

                VoteOutcome {
                    status: VoteStatus::Failed,
                    notification: Notification::destructive(
                        "Vote submission failed",
                        "Please try again or check your wallet connection.",
                    ),
                }
            }
        }
    }

    fn refuse(&self, violation: VoteGuardViolation) -> VoteOutcome {
        info!(reason = %violation, "Vote refused");
        VoteOutcome {
            status: VoteStatus::Refused(violation),
            notification: guard_notification(violation),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{MockExpectationStore, StoreLatency};
    use crate::types::{now_millis, VoteCounts};
    use std::sync::atomic::{AtomicU32, Ordering};

    const ACCOUNT: &str = "0xdB7295B36236D766200D5382F26170b8DB7bf9Df";

    fn store() -> MockExpectationStore {
        MockExpectationStore::new().with_latency(StoreLatency::none())
    }

    async fn fixture(store: &MockExpectationStore, id: &str) -> Expectation {
        store.get_expectation(id).await.unwrap().unwrap()
    }

    async fn no_refresh() -> Result<()> {
        Ok(())
    }

    #[tokio::test]
    async fn test_guard_order() {
        let store = store();
        let closed = fixture(&store, "2").await;
        let now = now_millis();

        // Disconnected wins even when voting is closed
        assert_eq!(
            check_vote_guard(false, &closed, now),
            Err(VoteGuardViolation::WalletNotConnected)
        );
        assert_eq!(
            check_vote_guard(true, &closed, now),
            Err(VoteGuardViolation::VotingClosed)
        );
        assert!(check_vote_guard(true, &fixture(&store, "1").await, now).is_ok());
    }

    #[tokio::test]
    async fn test_disconnected_vote_leaves_counts_untouched() {
        let store = store();
        let expectation = fixture(&store, "1").await;
        let mut panel = VotingPanel::new();

        let outcome = panel
            .vote(
                &store,
                &WalletSession::disconnected(),
                &expectation,
                VoteChoice::Approve,
                now_millis(),
                no_refresh,
            )
            .await;

        assert_eq!(outcome.status, VoteStatus::Refused(VoteGuardViolation::WalletNotConnected));
        assert_eq!(outcome.notification.title, "Wallet not connected");
        assert!(outcome.notification.is_destructive());
        assert_eq!(store.vote_calls(), 0);
        assert_eq!(fixture(&store, "1").await.vote_counts, VoteCounts::new(45, 12));
        assert_eq!(panel.phase(), PanelPhase::Idle);
    }

    #[tokio::test]
    async fn test_closed_expectation_refused() {
        let store = store();
        let expectation = fixture(&store, "3").await;
        let wallet = WalletSession::connected(ACCOUNT).unwrap();
        let mut panel = VotingPanel::new();

        let outcome = panel
            .vote(&store, &wallet, &expectation, VoteChoice::Approve, now_millis(), no_refresh)
            .await;

        assert_eq!(outcome.notification.title, "Voting closed");
        assert_eq!(store.vote_calls(), 0);
    }

    #[tokio::test]
    async fn test_successful_vote_runs_refresh_and_locks_panel() {
        let store = store();
        let expectation = fixture(&store, "4").await;
        let wallet = WalletSession::connected(ACCOUNT).unwrap();
        let mut panel = VotingPanel::new();
        panel.set_comment("  ship it  ");
        let refresh_count = AtomicU32::new(0);
        let refreshes = &refresh_count;

        let outcome = panel
            .vote(&store, &wallet, &expectation, VoteChoice::Disapprove, now_millis(), move || async move {
                refreshes.fetch_add(1, Ordering::SeqCst);
                Ok::<(), crate::error::DewhitepaperError>(())
            })
            .await;

        assert!(outcome.is_recorded());
        assert_eq!(outcome.notification.title, "Vote submitted successfully!");
        assert_eq!(outcome.notification.description, "Your disapprove vote has been recorded.");
        assert_eq!(refresh_count.load(Ordering::SeqCst), 1);
        assert_eq!(panel.phase(), PanelPhase::Voted);
        assert!(panel.state().has_voted);
        assert_eq!(panel.last_vote().unwrap().comment.as_deref(), Some("ship it"));
        assert_eq!(fixture(&store, "4").await.vote_counts, VoteCounts::new(34, 9));

        // Second attempt in the same session is refused
        let again = panel
            .vote(&store, &wallet, &expectation, VoteChoice::Approve, now_millis(), no_refresh)
            .await;
        assert_eq!(again.status, VoteStatus::Refused(VoteGuardViolation::AlreadyVoted));
        assert_eq!(store.vote_calls(), 1);
    }

    #[tokio::test]
    async fn test_new_panel_can_vote_again() {
        // No wallet binding: a fresh session votes a second time
        let store = store();
        let expectation = fixture(&store, "1").await;
        let wallet = WalletSession::connected(ACCOUNT).unwrap();

        for _ in 0..2 {
            let mut panel = VotingPanel::new();
            let outcome = panel
                .vote(&store, &wallet, &expectation, VoteChoice::Approve, now_millis(), no_refresh)
                .await;
            assert!(outcome.is_recorded());
        }
        assert_eq!(fixture(&store, "1").await.vote_counts.approve, 47);
    }

    #[tokio::test]
    async fn test_wallet_guard_wins_after_a_recorded_vote() {
        let store = store();
        let expectation = fixture(&store, "1").await;
        let mut wallet = WalletSession::connected(ACCOUNT).unwrap();
        let mut panel = VotingPanel::new();

        let first = panel
            .vote(&store, &wallet, &expectation, VoteChoice::Approve, now_millis(), no_refresh)
            .await;
        assert!(first.is_recorded());

        wallet.disconnect();
        let outcome = panel
            .vote(&store, &wallet, &expectation, VoteChoice::Approve, now_millis(), no_refresh)
            .await;

        assert_eq!(outcome.status, VoteStatus::Refused(VoteGuardViolation::WalletNotConnected));
        assert_eq!(outcome.notification.title, "Wallet not connected");
        assert_eq!(store.vote_calls(), 1);
        assert_eq!(fixture(&store, "1").await.vote_counts, VoteCounts::new(46, 12));
    }

    #[tokio::test]
    async fn test_failed_submission_resets_selection() {
        let store = store().with_failing_votes(true);
        let expectation = fixture(&store, "1").await;
        let wallet = WalletSession::connected(ACCOUNT).unwrap();
        let mut panel = VotingPanel::new();

        let outcome = panel
            .vote(&store, &wallet, &expectation, VoteChoice::Approve, now_millis(), no_refresh)
            .await;

        assert_eq!(outcome.status, VoteStatus::Failed);
        assert_eq!(outcome.notification.title, "Vote submission failed");
        assert_eq!(panel.phase(), PanelPhase::Idle);
        assert!(panel.state().current_vote.is_none());
        assert!(!panel.state().has_voted);

        // Retry succeeds once the store recovers
        store.set_failing_votes(false);
        let retry = panel
            .vote(&store, &wallet, &expectation, VoteChoice::Approve, now_millis(), no_refresh)
            .await;
        assert!(retry.is_recorded());
    }

    #[tokio::test]
    async fn test_status_messages() {
        let store = store();
        let now = now_millis();
        assert_eq!(status_message(&fixture(&store, "1").await, now), "Voting is currently active");
        assert_eq!(
            status_message(&fixture(&store, "2").await, now),
            "This expectation was approved by the community"
        );
        assert_eq!(
            status_message(&fixture(&store, "3").await, now),
            "This expectation was not approved by the community"
        );
    }
}
