//! Quote fetching and caching
//!
//! Features:
//! - CoinGecko-compatible upstream client
//! - In-memory snapshot cache with a freshness window
//! - Stale-serving: the last snapshot is returned when the provider is down

pub mod cache;
pub mod client;
pub mod service;

pub use cache::SnapshotCache;
pub use client::{CoinGeckoClient, QuoteProvider, UsdQuotes};
pub use service::{PriceQuote, PriceService};
