//! deWhitepaper - expectation browsing and voting
//!
//! Expectations are milestones tied to treasury withdrawals. Shareholders
//! browse them, read the milestone proposal, and vote to approve or
//! disapprove.
//!
//! # Architecture
//!
//! ```text
//! ExpectationListView ──► ExpectationStore (mock, in memory)
//!         │                       ▲
//!         ▼                       │ fallback content, votes, refresh
//! ExpectationDetailView ──► ContentResolver (gateway chain)
//!         │
//!         ▼
//!    VotingPanel ── guard: wallet connected + voting window open
//! ```
//!
//! # Example
//!
//! ```rust,ignore
//! use dewhitepaper::{ExpectationDetailView, GatewayResolver, MockExpectationStore};
//!
//! let store = MockExpectationStore::new();
//! let resolver = GatewayResolver::public()?;
//!
//! let mut view = ExpectationDetailView::new("ipfs://QmMock1");
//! view.load(&store, &resolver).await?;
//! ```

pub mod config;
pub mod countdown;
pub mod error;
pub mod notify;
pub mod render;
pub mod resolver;
pub mod routes;
pub mod shares;
pub mod store;
pub mod types;
pub mod views;
pub mod voting;
pub mod wallet;

pub use config::Config;
pub use error::{DewhitepaperError, Result, VoteGuardViolation};
pub use notify::{Notification, NotificationVariant};
pub use resolver::{ContentResolver, GatewayResolver, OfflineResolver};
pub use routes::Route;
pub use shares::ShareBreakdown;
pub use store::{ExpectationStore, MockExpectationStore, StoreLatency};
pub use types::*;
pub use views::{ExpectationDetailView, ExpectationListView, StatusFilter};
pub use voting::{check_vote_guard, VoteOutcome, VoteStatus, VotingPanel};
pub use wallet::WalletSession;
