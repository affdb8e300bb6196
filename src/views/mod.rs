//! View models for the expectation pages.
//!
//! Each view owns its load state and the data derived from it. Rendering
//! to text lives in `render`.

mod detail;
mod list;

pub use detail::{
    DetailState, ExpectationDetailView, CONTENT_FAILED_MESSAGE, LOAD_FAILED_MESSAGE,
    NOT_FOUND_MESSAGE,
};
pub use list::{
    ExpectationCard, ExpectationListView, ListState, StatusCounts, StatusFilter,
    EMPTY_FILTER_MESSAGE,
};
