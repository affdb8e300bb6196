//! Revenue-share chart data for the deWhitepaper page.
//!
//! Share balances come off-chain as raw integers with six decimals. Chain
//! reads belong to the wallet provider; this module only shapes the
//! numbers for display.

use serde::{Deserialize, Serialize};

use crate::error::{DewhitepaperError, Result};

/// Decimals of the share token.
pub const SHARE_DECIMALS: u32 = 6;

/// Shares in existence.
pub const TOTAL_SHARES: f64 = 100.0;

/// Decimal string for a raw token amount, trailing zeros trimmed.
pub fn format_units(raw: u128, decimals: u32) -> String {
    let scale = 10u128.pow(decimals);
    let whole = raw / scale;
    let fraction = raw % scale;

    if fraction == 0 {
        return whole.to_string();
    }

    let digits = format!("{:0width$}", fraction, width = decimals as usize);
    format!("{}.{}", whole, digits.trim_end_matches('0'))
}

/// Parse a raw integer amount as typed on the command line.
pub fn parse_raw(s: &str) -> Result<u128> {
    s.trim()
        .parse::<u128>()
        .map_err(|e| DewhitepaperError::InvalidInput(format!("invalid share amount {:?}: {}", s, e)))
}

fn to_shares(raw: u128) -> f64 {
    raw as f64 / 10f64.powi(SHARE_DECIMALS as i32)
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShareSlice {
    pub name: &'static str,
    pub value: f64,
    /// Share of the chart, 0-100
    pub percent: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ShareBreakdown {
    pub yours: f64,
    pub available: f64,
    pub sold: f64,
    pub team: f64,
}

impl Default for ShareBreakdown {
    fn default() -> Self {
        Self {
            yours: 0.0,
            available: TOTAL_SHARES,
            sold: 0.0,
            team: 0.0,
        }
    }
}

impl ShareBreakdown {
    pub fn from_raw(yours: u128, available: u128, sold: u128, team: u128) -> Self {
        Self {
            yours: to_shares(yours),
            available: to_shares(available),
            sold: to_shares(sold),
            team: to_shares(team),
        }
    }

    /// Pie slices in legend order. Team shares are not charted.
    pub fn slices(&self) -> Vec<ShareSlice> {
        let entries = [
            ("Your Shares", self.yours),
            ("Available Shares", self.available),
            ("Sold Shares", self.sold),
        ];
        let sum: f64 = entries.iter().map(|(_, v)| v).sum();

        entries
            .into_iter()
            .map(|(name, value)| ShareSlice {
                name,
                value,
                percent: if sum > 0.0 { value / sum * 100.0 } else { 0.0 },
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_units() {
        assert_eq!(format_units(0, 6), "0");
        assert_eq!(format_units(100_000_000, 6), "100");
        assert_eq!(format_units(1_500_000, 6), "1.5");
        assert_eq!(format_units(1, 6), "0.000001");
    }

    #[test]
    fn test_default_is_all_available() {
        let slices = ShareBreakdown::default().slices();
        assert_eq!(slices[1].name, "Available Shares");
        assert_eq!(slices[1].percent, 100.0);
        assert_eq!(slices[0].percent, 0.0);
    }

    #[test]
    fn test_from_raw_slices() {
        let breakdown = ShareBreakdown::from_raw(5_000_000, 70_000_000, 25_000_000, 10_000_000);
        assert_eq!(breakdown.yours, 5.0);
        assert_eq!(breakdown.team, 10.0);

        let slices = breakdown.slices();
        assert_eq!(slices.len(), 3);
        assert!((slices[2].percent - 25.0).abs() < 1e-9);
    }

    #[test]
    fn test_empty_chart_has_zero_percent() {
        let slices = ShareBreakdown::from_raw(0, 0, 0, 0).slices();
        assert!(slices.iter().all(|s| s.percent == 0.0));
    }

    #[test]
    fn test_parse_raw() {
        assert_eq!(parse_raw(" 42 ").unwrap(), 42);
        assert!(parse_raw("-1").is_err());
    }
}
