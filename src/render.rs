//! Plain-text rendering of the views for the terminal.
//!
//! Markdown bodies are printed as-is.

use std::fmt::Write;

use crate::countdown::countdown_text;
use crate::notify::Notification;
use crate::shares::ShareBreakdown;
use crate::types::{Expectation, ExpectationStatus};
use crate::views::{
    DetailState, ExpectationCard, ExpectationDetailView, ExpectationListView, ListState,
    StatusFilter, EMPTY_FILTER_MESSAGE,
};
use crate::voting::{status_message, VotingPanel};

const RULE: &str = "────────────────────────────────────────";

pub fn render_list(view: &ExpectationListView, now: i64) -> String {
    let mut out = String::new();

    match view.state() {
        ListState::Loading => return "Loading expectations...\n".to_string(),
        ListState::Failed(message) => return format!("{}\n", message),
        ListState::Ready => {}
    }

    let counts = view.counts();
    let _ = writeln!(out, "COMMUNITY EXPECTATIONS");
    let _ = write!(out, "Total {}", counts.total);
    for status in ExpectationStatus::ALL {
        let _ = write!(out, " | {} {} {}", status.icon(), status, counts.get(status));
    }
    let _ = writeln!(out);
    let filter = match view.filter() {
        StatusFilter::All => "all".to_string(),
        StatusFilter::Only(status) => status.to_string(),
    };
    let _ = writeln!(out, "Filter: {}", filter);
    let _ = writeln!(out, "{}", RULE);

    let cards = view.cards(now);
    if cards.is_empty() {
        let _ = writeln!(out, "{}", EMPTY_FILTER_MESSAGE);
        return out;
    }

    for card in &cards {
        out.push_str(&render_card(card));
        let _ = writeln!(out, "{}", RULE);
    }
    out
}

pub fn render_card(card: &ExpectationCard) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{} {}  [{}]",
        card.status.icon(),
        card.title,
        card.status.as_str().to_uppercase()
    );
    let _ = writeln!(out, "  {}", card.summary);
    let _ = write!(
        out,
        "  {} votes | {}% approval | ✅ {} ❌ {}",
        card.total_votes, card.approval_rate, card.approve, card.disapprove
    );
    if let Some(countdown) = &card.countdown {
        let _ = write!(out, " | {}", countdown);
    }
    let _ = writeln!(out);
    let _ = writeln!(out, "  {} → {}", card.action_label, card.route);
    out
}

pub fn render_detail(view: &ExpectationDetailView, now: i64) -> String {
    let (expectation, content) = match view.state() {
        DetailState::Loading => return "Loading expectation...\n".to_string(),
        DetailState::Failed(message) => {
            return format!("{}\n← Back to Expectations\n", message);
        }
        DetailState::Ready {
            expectation,
            content,
        } => (expectation, content),
    };

    let mut out = String::new();
    let _ = writeln!(out, "{}", content.title);
    let _ = write!(out, "[{}]", expectation.status.as_str().to_uppercase());
    if expectation.is_voting_active(now) {
        let _ = write!(out, " {}", countdown_text(expectation.deadline, now));
    }
    let _ = writeln!(out);
    if let Some(created) = content.created_at_utc() {
        let _ = writeln!(out, "Published {}", created.format("%Y-%m-%d %H:%M UTC"));
    }
    let _ = writeln!(out, "{}", RULE);
    let _ = writeln!(out, "Proposal Details\n");
    let _ = writeln!(out, "{}", content.content);
    let _ = writeln!(out, "{}", RULE);
    let _ = writeln!(out, "Full Proposal: {}", content.bip_link);
    let _ = writeln!(out, "{}", RULE);
    out.push_str(&render_voting(expectation, view.panel(), now));
    out
}

pub fn render_voting(expectation: &Expectation, panel: &VotingPanel, now: i64) -> String {
    let mut out = String::new();
    let counts = expectation.vote_counts;

    let _ = writeln!(out, "Voting Results");
    let _ = writeln!(out, "{}", status_message(expectation, now));
    let _ = writeln!(out, "  Approve     {}", counts.approve);
    let _ = writeln!(out, "  Disapprove  {}", counts.disapprove);
    let _ = writeln!(
        out,
        "  {}% Approval Rate ({} total votes)",
        counts.approval_rate(),
        counts.total()
    );

    if expectation.is_voting_active(now) {
        if panel.state().has_voted {
            let _ = writeln!(out, "✅ Your vote has been submitted successfully!");
        } else {
            let _ = writeln!(out, "Cast your vote: approve or disapprove");
        }
    } else {
        let verdict = if expectation.status == ExpectationStatus::Fulfilled {
            "✅ Approved"
        } else {
            "❌ Rejected"
        };
        let _ = writeln!(out, "{}\nVoting period has ended", verdict);
    }
    out
}

pub fn render_notification(notification: &Notification) -> String {
    format!("{}\n", notification)
}

pub fn render_shares(breakdown: &ShareBreakdown) -> String {
    let mut out = String::new();
    for slice in breakdown.slices() {
        let _ = writeln!(
            out,
            "{:<18} {:>10.2} ({:.1}%)",
            slice.name, slice.value, slice.percent
        );
    }
    let _ = writeln!(out, "{:<18} {:>10.2}", "Team Shares", breakdown.team);
    out
}
