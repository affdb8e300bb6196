//! Wallet connection state.
//!
//! Connector internals live with the wallet provider. Here a wallet is
//! just an optional account address; it counts as connected when one is
//! present.

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::{DewhitepaperError, Result};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WalletSession {
    account: Option<String>,
}

impl WalletSession {
    /// A session with no account attached.
    pub fn disconnected() -> Self {
        Self::default()
    }

    /// A session already connected to `account`.
    pub fn connected(account: impl Into<String>) -> Result<Self> {
        let mut session = Self::default();
        session.connect(account)?;
        Ok(session)
    }

    /// Attach an account. Addresses must be `0x`-prefixed hex.
    pub fn connect(&mut self, account: impl Into<String>) -> Result<()> {
        let account = account.into();
        validate_address(&account)?;
        info!(account = %short_address(&account), "Wallet connected");
        self.account = Some(account);
        Ok(())
    }

    pub fn disconnect(&mut self) {
        if let Some(account) = self.account.take() {
            info!(account = %short_address(&account), "Wallet disconnected");
        }
    }

    pub fn is_connected(&self) -> bool {
        self.account.is_some()
    }

    pub fn account(&self) -> Option<&str> {
        self.account.as_deref()
    }
}

fn validate_address(account: &str) -> Result<()> {
    let hex = account
        .strip_prefix("0x")
        .ok_or_else(|| DewhitepaperError::InvalidInput(format!("address must start with 0x: {}", account)))?;

    if hex.is_empty() || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(DewhitepaperError::InvalidInput(format!(
            "address is not hex: {}",
            account
        )));
    }
    Ok(())
}

/// `0x1234…abcd` form used in logs and the connect button.
pub fn short_address(account: &str) -> String {
    let chars: Vec<char> = account.chars().collect();
    if chars.len() <= 10 {
        return account.to_string();
    }
    let head: String = chars[..6].iter().collect();
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("{}…{}", head, tail)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_connect_and_disconnect() {
        let mut wallet = WalletSession::disconnected();
        assert!(!wallet.is_connected());

        wallet
            .connect("0xdB7295B36236D766200D5382F26170b8DB7bf9Df")
            .unwrap();
        assert!(wallet.is_connected());

        wallet.disconnect();
        assert!(!wallet.is_connected());
        assert!(wallet.account().is_none());
    }

    #[test]
    fn test_rejects_malformed_address() {
        assert!(WalletSession::connected("dB7295B3").is_err());
        assert!(WalletSession::connected("0x").is_err());
        assert!(WalletSession::connected("0xZZ").is_err());
    }

    #[test]
    fn test_short_address() {
        assert_eq!(
            short_address("0x34Da66269431a3DaDE50DA17F88F4b8F1F2Ed771"),
            "0x34Da…d771"
        );
        assert_eq!(short_address("0xabc"), "0xabc");
    }
}
