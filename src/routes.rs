//! Client-side routes for the deWhitepaper section.

use crate::error::{DewhitepaperError, Result};

pub const WHITEPAPER_ROUTE: &str = "/dewhitepaper";
pub const EXPECTATIONS_ROUTE: &str = "/dewhitepaper/expectations";
const EXPECTATION_PREFIX: &str = "/dewhitepaper/expectation/";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Whitepaper,
    Expectations,
    /// Detail page, carrying the decoded milestone URI
    Expectation { uri: String },
}

impl Route {
    /// Parse a path. Trailing slashes are ignored.
    pub fn parse(path: &str) -> Result<Self> {
        let trimmed = path.trim_end_matches('/');

        if trimmed == WHITEPAPER_ROUTE {
            return Ok(Self::Whitepaper);
        }
        if trimmed == EXPECTATIONS_ROUTE {
            return Ok(Self::Expectations);
        }
        if let Some(encoded) = trimmed.strip_prefix(EXPECTATION_PREFIX) {
            if encoded.is_empty() {
                return Err(DewhitepaperError::InvalidInput(
                    "expectation route without identifier".into(),
                ));
            }
            let uri = urlencoding::decode(encoded)
                .map_err(|e| DewhitepaperError::InvalidInput(e.to_string()))?;
            return Ok(Self::Expectation {
                uri: uri.into_owned(),
            });
        }

        Err(DewhitepaperError::InvalidInput(format!("unknown route: {}", path)))
    }

    pub fn path(&self) -> String {
        match self {
            Self::Whitepaper => WHITEPAPER_ROUTE.to_string(),
            Self::Expectations => EXPECTATIONS_ROUTE.to_string(),
            Self::Expectation { uri } => expectation_route(uri),
        }
    }
}

/// Detail page path for a milestone URI.
pub fn expectation_route(uri: &str) -> String {
    format!("{}{}", EXPECTATION_PREFIX, urlencoding::encode(uri))
}
