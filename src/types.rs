//! Expectation and milestone content records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Scheme marker on content-addressed milestone URIs.
pub const IPFS_SCHEME: &str = "ipfs://";

/// Current wall-clock time as unix milliseconds.
pub fn now_millis() -> i64 {
    Utc::now().timestamp_millis()
}

/// Strip the first `ipfs://` marker, leaving the content hash.
///
/// Later occurrences are part of the path and stay.
pub fn content_hash(uri: &str) -> String {
    uri.replacen(IPFS_SCHEME, "", 1)
}

/// Lifecycle status of an expectation.
///
/// Set externally; never derived from the deadline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExpectationStatus {
    Ongoing,
    Fulfilled,
    Rejected,
}

impl ExpectationStatus {
    pub const ALL: [ExpectationStatus; 3] = [Self::Ongoing, Self::Fulfilled, Self::Rejected];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ongoing => "ongoing",
            Self::Fulfilled => "fulfilled",
            Self::Rejected => "rejected",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "ongoing" => Some(Self::Ongoing),
            "fulfilled" => Some(Self::Fulfilled),
            "rejected" => Some(Self::Rejected),
            _ => None,
        }
    }

    /// Badge shown next to the status on cards and filter tabs.
    pub fn icon(&self) -> &'static str {
        match self {
            Self::Ongoing => "🟡",
            Self::Fulfilled => "🟢",
            Self::Rejected => "🔴",
        }
    }
}

impl std::fmt::Display for ExpectationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A ballot option.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VoteChoice {
    Approve,
    Disapprove,
}

impl VoteChoice {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Approve => "approve",
            Self::Disapprove => "disapprove",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "approve" | "yes" => Some(Self::Approve),
            "disapprove" | "no" => Some(Self::Disapprove),
            _ => None,
        }
    }
}

impl std::fmt::Display for VoteChoice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Running tally for one expectation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoteCounts {
    pub approve: u64,
    pub disapprove: u64,
}

impl VoteCounts {
    pub fn new(approve: u64, disapprove: u64) -> Self {
        Self { approve, disapprove }
    }

    pub fn total(&self) -> u64 {
        self.approve + self.disapprove
    }

    /// Bump the counter for `choice` by one.
    pub fn record(&mut self, choice: VoteChoice) {
        match choice {
            VoteChoice::Approve => self.approve += 1,
            VoteChoice::Disapprove => self.disapprove += 1,
        }
    }

    /// Approval percentage with one decimal, `"0"` when nobody voted.
    pub fn approval_rate(&self) -> String {
        let total = self.total();
        if total == 0 {
            return "0".to_string();
        }
        format!("{:.1}", self.approve as f64 / total as f64 * 100.0)
    }
}

/// A milestone proposal open to (or closed after) community vote.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Expectation {
    pub id: String,
    #[serde(rename = "milestoneURI")]
    pub milestone_uri: String,
    pub title: String,
    pub summary: String,
    /// Unix milliseconds
    pub deadline: i64,
    pub status: ExpectationStatus,
    pub vote_counts: VoteCounts,
}

impl Expectation {
    /// Whether the voting window is open at `now` (unix ms).
    pub fn is_voting_active(&self, now: i64) -> bool {
        self.status == ExpectationStatus::Ongoing && self.deadline > now
    }

    pub fn total_votes(&self) -> u64 {
        self.vote_counts.total()
    }

    pub fn approval_rate(&self) -> String {
        self.vote_counts.approval_rate()
    }

    /// Hash portion of the milestone URI.
    pub fn content_hash(&self) -> String {
        content_hash(&self.milestone_uri)
    }
}

/// Proposal body fetched by content identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MilestoneContent {
    pub title: String,
    /// Link to the full proposal document
    pub bip_link: String,
    /// Markdown body
    pub content: String,
    /// ISO-8601 creation time as published
    pub created_at: String,
}

impl MilestoneContent {
    /// Parsed creation time, if the published string is RFC 3339.
    pub fn created_at_utc(&self) -> Option<DateTime<Utc>> {
        DateTime::parse_from_rfc3339(&self.created_at)
            .ok()
            .map(|dt| dt.with_timezone(&Utc))
    }
}

/// A vote cast from this session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserVote {
    pub expectation_id: String,
    pub vote: VoteChoice,
    /// Unix milliseconds
    pub timestamp: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

/// Per-session ballot state held by the voting panel.
///
/// Not tied to a wallet address; a fresh panel starts over.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VotingState {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_vote: Option<VoteChoice>,
    pub has_voted: bool,
    pub comment: String,
}
