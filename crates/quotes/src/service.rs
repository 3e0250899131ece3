//! Price service with stale-serving

use std::sync::Arc;
use tracing::{debug, error, warn};

use muscadine_core::{CacheConfig, PriceError, PriceResult, PriceSnapshot};

use crate::cache::SnapshotCache;
use crate::client::QuoteProvider;

/// Result of a price lookup
#[derive(Debug, Clone, PartialEq)]
pub struct PriceQuote {
    pub snapshot: PriceSnapshot,
    /// True when the snapshot was served without an upstream call.
    pub cached: bool,
    /// Set when a stale snapshot was served because the provider failed.
    pub stale_note: Option<String>,
}

/// Serves current USD prices, minimizing provider calls.
///
/// One instance per process, injected into the request handlers. After the
/// first successful fetch the service never returns a hard failure: an
/// unavailable provider degrades to the last snapshot.
pub struct PriceService {
    provider: Arc<dyn QuoteProvider>,
    cache: SnapshotCache,
}

impl PriceService {
    pub fn new(provider: Arc<dyn QuoteProvider>, config: &CacheConfig) -> Self {
        Self {
            provider,
            cache: SnapshotCache::new(config.freshness_window),
        }
    }

    /// Current USD prices for the tracked assets.
    ///
    /// Serves from cache inside the freshness window, refreshes otherwise.
    /// Fails only when the provider is down and no snapshot was ever stored.
    pub async fn get_prices(&self) -> PriceResult<PriceQuote> {
        if let Some(snapshot) = self.cache.fresh(now_ms()) {
            return Ok(PriceQuote {
                snapshot,
                cached: true,
                stale_note: None,
            });
        }

        match self.provider.fetch_usd_quotes().await {
            Ok(quotes) => {
                let snapshot = PriceSnapshot {
                    bitcoin_usd: quotes.bitcoin,
                    ethereum_usd: quotes.ethereum,
                    fetched_at_ms: now_ms(),
                };
                self.cache.store(snapshot);
                debug!(
                    "Refreshed quotes: BTC={:?} ETH={:?}",
                    snapshot.bitcoin_usd, snapshot.ethereum_usd
                );

                Ok(PriceQuote {
                    snapshot,
                    cached: false,
                    stale_note: None,
                })
            }
            Err(err) => match self.cache.latest() {
                Some(snapshot) => {
                    warn!("Quote provider unavailable, serving stale snapshot: {}", err);
                    Ok(PriceQuote {
                        snapshot,
                        cached: true,
                        stale_note: Some(format!("quote provider unavailable: {err}")),
                    })
                }
                None => {
                    error!("Quote provider unavailable and cache is empty: {}", err);
                    Err(PriceError::NoCacheAvailable { cause: err })
                }
            },
        }
    }
}

fn now_ms() -> u64 {
    chrono::Utc::now().timestamp_millis() as u64
}
