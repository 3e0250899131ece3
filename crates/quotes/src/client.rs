//! Quote provider client

use async_trait::async_trait;
use serde::Deserialize;
use tracing::debug;

use muscadine_core::{Asset, ProviderConfig, QuoteError, QuoteResult};

/// USD quotes for the tracked assets, as returned by one provider call.
///
/// A field is `None` when the provider omitted that asset from the body.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct UsdQuotes {
    pub bitcoin: Option<f64>,
    pub ethereum: Option<f64>,
}

/// Seam to the external quote provider
#[async_trait]
pub trait QuoteProvider: Send + Sync {
    /// Fetch current USD prices for all tracked assets in a single call.
    async fn fetch_usd_quotes(&self) -> QuoteResult<UsdQuotes>;
}

/// Body of `GET /simple/price?ids=bitcoin,ethereum&vs_currencies=usd`
#[derive(Debug, Deserialize)]
struct SimplePriceResponse {
    bitcoin: Option<AssetQuote>,
    ethereum: Option<AssetQuote>,
}

#[derive(Debug, Deserialize)]
struct AssetQuote {
    usd: Option<f64>,
}

/// CoinGecko-compatible HTTP client
pub struct CoinGeckoClient {
    http: reqwest::Client,
    base_url: String,
}

impl CoinGeckoClient {
    pub fn new(config: &ProviderConfig) -> QuoteResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()
            .map_err(|e| QuoteError::Transport(e.to_string()))?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    fn simple_price_url(&self) -> String {
        let ids: Vec<&str> = Asset::ALL.iter().map(|a| a.provider_id()).collect();
        format!(
            "{}/simple/price?ids={}&vs_currencies=usd",
            self.base_url,
            ids.join(",")
        )
    }
}

#[async_trait]
impl QuoteProvider for CoinGeckoClient {
    async fn fetch_usd_quotes(&self) -> QuoteResult<UsdQuotes> {
        let url = self.simple_price_url();
        debug!("Fetching quotes from {}", url);

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| QuoteError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(QuoteError::Status(status.as_u16()));
        }

        let body: SimplePriceResponse = response
            .json()
            .await
            .map_err(|e| QuoteError::Malformed(e.to_string()))?;

        Ok(UsdQuotes {
            bitcoin: body.bitcoin.and_then(|q| q.usd),
            ethereum: body.ethereum.and_then(|q| q.usd),
        })
    }
}
