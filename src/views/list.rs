//! Expectation list with status filter tabs.

use tracing::{debug, error};

use crate::countdown::countdown_text;
use crate::error::Result;
use crate::routes::expectation_route;
use crate::store::ExpectationStore;
use crate::types::{Expectation, ExpectationStatus};

pub const EMPTY_FILTER_MESSAGE: &str = "No expectations found for the selected filter";

/// Active filter tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Only(ExpectationStatus),
}

impl StatusFilter {
    pub fn parse(s: &str) -> Option<Self> {
        if s.eq_ignore_ascii_case("all") {
            return Some(Self::All);
        }
        ExpectationStatus::parse(s).map(Self::Only)
    }

    pub fn matches(&self, expectation: &Expectation) -> bool {
        match self {
            Self::All => true,
            Self::Only(status) => expectation.status == *status,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StatusCounts {
    pub total: usize,
    pub ongoing: usize,
    pub fulfilled: usize,
    pub rejected: usize,
}

impl StatusCounts {
    pub fn get(&self, status: ExpectationStatus) -> usize {
        match status {
            ExpectationStatus::Ongoing => self.ongoing,
            ExpectationStatus::Fulfilled => self.fulfilled,
            ExpectationStatus::Rejected => self.rejected,
        }
    }
}

/// Summary card for one expectation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpectationCard {
    pub id: String,
    pub title: String,
    pub summary: String,
    pub status: ExpectationStatus,
    pub approve: u64,
    pub disapprove: u64,
    pub total_votes: u64,
    pub approval_rate: String,
    /// Only ongoing expectations show a countdown
    pub countdown: Option<String>,
    pub route: String,
    pub action_label: &'static str,
}

impl ExpectationCard {
    pub fn from_expectation(expectation: &Expectation, now: i64) -> Self {
        let ongoing = expectation.status == ExpectationStatus::Ongoing;
        Self {
            id: expectation.id.clone(),
            title: expectation.title.clone(),
            summary: expectation.summary.clone(),
            status: expectation.status,
            approve: expectation.vote_counts.approve,
            disapprove: expectation.vote_counts.disapprove,
            total_votes: expectation.total_votes(),
            approval_rate: expectation.approval_rate(),
            countdown: ongoing.then(|| countdown_text(expectation.deadline, now)),
            route: expectation_route(&expectation.milestone_uri),
            action_label: if ongoing { "Vote Now" } else { "View Details" },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ListState {
    #[default]
    Loading,
    Ready,
    Failed(String),
}

/// The expectations page.
#[derive(Debug, Clone, Default)]
pub struct ExpectationListView {
    expectations: Vec<Expectation>,
    filter: StatusFilter,
    state: ListState,
}

impl ExpectationListView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fetch every expectation from the store.
    pub async fn load<S>(&mut self, store: &S) -> Result<()>
    where
        S: ExpectationStore + ?Sized,
    {
        self.state = ListState::Loading;
        match store.list_expectations().await {
            Ok(expectations) => {
                debug!(count = expectations.len(), "Expectations loaded");
                self.expectations = expectations;
                self.state = ListState::Ready;
                Ok(())
            }
            Err(e) => {
                error!(error = %e, "Failed to fetch expectations");
                self.state = ListState::Failed("Failed to load expectations".into());
                Err(e)
            }
        }
    }

    pub fn state(&self) -> &ListState {
        &self.state
    }

    pub fn filter(&self) -> StatusFilter {
        self.filter
    }

    pub fn set_filter(&mut self, filter: StatusFilter) {
        self.filter = filter;
    }

    pub fn expectations(&self) -> &[Expectation] {
        &self.expectations
    }

    /// Expectations under the active filter, in store order.
    pub fn filtered(&self) -> Vec<&Expectation> {
        self.expectations
            .iter()
            .filter(|e| self.filter.matches(e))
            .collect()
    }

    pub fn cards(&self, now: i64) -> Vec<ExpectationCard> {
        self.filtered()
            .into_iter()
            .map(|e| ExpectationCard::from_expectation(e, now))
            .collect()
    }

    /// Tab counts, always over the unfiltered list.
    pub fn counts(&self) -> StatusCounts {
        let mut counts = StatusCounts {
            total: self.expectations.len(),
            ..Default::default()
        };
        for expectation in &self.expectations {
            match expectation.status {
                ExpectationStatus::Ongoing => counts.ongoing += 1,
                ExpectationStatus::Fulfilled => counts.fulfilled += 1,
                ExpectationStatus::Rejected => counts.rejected += 1,
            }
        }
        counts
    }
}
