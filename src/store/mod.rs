//! Expectation store abstraction.
//!
//! The site has no backend; records live in an in-memory mock that
//! simulates request latency. Views talk to it through the
//! `ExpectationStore` trait so other backends can slot in later.

pub mod fixtures;
pub mod mock;
pub mod traits;

pub use mock::{MockExpectationStore, StoreLatency};
pub use traits::ExpectationStore;
