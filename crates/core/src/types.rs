//! Core type definitions

use serde::{Deserialize, Serialize};
use std::fmt;

/// Assets tracked by the dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Asset {
    Bitcoin,
    Ethereum,
}

impl Asset {
    /// All tracked assets, in provider query order.
    pub const ALL: [Asset; 2] = [Asset::Bitcoin, Asset::Ethereum];

    /// Identifier the quote provider uses for this asset.
    pub fn provider_id(&self) -> &'static str {
        match self {
            Asset::Bitcoin => "bitcoin",
            Asset::Ethereum => "ethereum",
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Asset::Bitcoin => "BTC",
            Asset::Ethereum => "ETH",
        }
    }
}

impl fmt::Display for Asset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.provider_id())
    }
}

/// Result of the last successful quote refresh
///
/// A price field is `None` when the provider response omitted that asset.
/// "Never fetched" is modeled by the absence of a snapshot, not by a
/// sentinel timestamp.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceSnapshot {
    pub bitcoin_usd: Option<f64>,
    pub ethereum_usd: Option<f64>,
    pub fetched_at_ms: u64,
}

impl PriceSnapshot {
    pub fn age_ms(&self, now_ms: u64) -> u64 {
        now_ms.saturating_sub(self.fetched_at_ms)
    }

    /// A snapshot is fresh while its age is strictly under `max_age_ms`.
    pub fn is_fresh(&self, max_age_ms: u64, now_ms: u64) -> bool {
        self.age_ms(now_ms) < max_age_ms
    }

    pub fn price_usd(&self, asset: Asset) -> Option<f64> {
        match asset {
            Asset::Bitcoin => self.bitcoin_usd,
            Asset::Ethereum => self.ethereum_usd,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_asset_ids() {
        assert_eq!(Asset::Bitcoin.provider_id(), "bitcoin");
        assert_eq!(Asset::Ethereum.provider_id(), "ethereum");
        assert_eq!(Asset::Bitcoin.symbol(), "BTC");
        assert_eq!(serde_json::to_string(&Asset::Ethereum).unwrap(), "\"ethereum\"");
    }

    #[test]
    fn test_snapshot_freshness_boundary() {
        let snapshot = PriceSnapshot {
            bitcoin_usd: Some(65_000.0),
            ethereum_usd: Some(3_500.0),
            fetched_at_ms: 1_000,
        };

        // Fresh strictly inside the window, stale at and past the boundary
        assert!(snapshot.is_fresh(300_000, 1_000));
        assert!(snapshot.is_fresh(300_000, 300_999));
        assert!(!snapshot.is_fresh(300_000, 301_000));
        assert!(!snapshot.is_fresh(300_000, 400_000));
    }

    #[test]
    fn test_snapshot_age_saturates() {
        let snapshot = PriceSnapshot {
            bitcoin_usd: None,
            ethereum_usd: None,
            fetched_at_ms: 5_000,
        };

        // A clock that moved backwards must not underflow
        assert_eq!(snapshot.age_ms(4_000), 0);
    }

    #[test]
    fn test_price_lookup_by_asset() {
        let snapshot = PriceSnapshot {
            bitcoin_usd: Some(65_000.0),
            ethereum_usd: None,
            fetched_at_ms: 0,
        };

        assert_eq!(snapshot.price_usd(Asset::Bitcoin), Some(65_000.0));
        assert_eq!(snapshot.price_usd(Asset::Ethereum), None);
    }
}
