//! Error types for the deWhitepaper crate

use thiserror::Error;

/// Result type for deWhitepaper operations
pub type Result<T> = std::result::Result<T, DewhitepaperError>;

/// Crate error types
#[derive(Error, Debug)]
pub enum DewhitepaperError {
    /// No expectation matches the requested id or milestone URI
    #[error("Expectation not found: {0}")]
    NotFound(String),

    /// Every gateway and the store fallback came back empty
    #[error("Failed to load milestone content: {0}")]
    ContentUnavailable(String),

    /// Network error
    #[error("Network error: {0}")]
    Network(String),

    /// Unknown route or malformed argument
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Reasons a vote never reaches the store.
///
/// Reported through `VoteStatus::Refused`, not as an error.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum VoteGuardViolation {
    #[error("wallet not connected")]
    WalletNotConnected,

    #[error("voting closed")]
    VotingClosed,

    #[error("already voted this session")]
    AlreadyVoted,
}

impl From<reqwest::Error> for DewhitepaperError {
    fn from(err: reqwest::Error) -> Self {
        DewhitepaperError::Network(err.to_string())
    }
}

impl From<toml::de::Error> for DewhitepaperError {
    fn from(err: toml::de::Error) -> Self {
        DewhitepaperError::Config(err.to_string())
    }
}

impl From<std::io::Error> for DewhitepaperError {
    fn from(err: std::io::Error) -> Self {
        DewhitepaperError::Config(err.to_string())
    }
}
