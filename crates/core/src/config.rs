//! Configuration types

use std::env;
use std::time::Duration;

/// Quote provider endpoint configuration
#[derive(Debug, Clone)]
pub struct ProviderConfig {
    pub base_url: String,
    pub request_timeout: Duration,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.coingecko.com/api/v3".to_string(),
            request_timeout: Duration::from_secs(10),
        }
    }
}

/// Snapshot cache configuration
#[derive(Debug, Clone)]
pub struct CacheConfig {
    pub freshness_window: Duration,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            freshness_window: Duration::from_secs(300), // 5 minutes
        }
    }
}

/// HTTP server configuration
#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
        }
    }
}

/// Complete service configuration
#[derive(Debug, Clone, Default)]
pub struct ServiceConfig {
    pub api: ApiConfig,
    pub provider: ProviderConfig,
    pub cache: CacheConfig,
}

impl ServiceConfig {
    /// Load configuration from the environment, falling back to defaults
    /// for anything unset or unparsable.
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let host = env::var("HTTP_HOST").unwrap_or(defaults.api.host);
        let port = env::var("HTTP_PORT")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(defaults.api.port);

        let base_url = env::var("QUOTE_API_URL").unwrap_or(defaults.provider.base_url);
        let request_timeout = env::var("QUOTE_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .map(Duration::from_secs)
            .unwrap_or(defaults.provider.request_timeout);

        let freshness_window = env::var("PRICE_TTL_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .map(Duration::from_secs)
            .unwrap_or(defaults.cache.freshness_window);

        Self {
            api: ApiConfig { host, port },
            provider: ProviderConfig {
                base_url,
                request_timeout,
            },
            cache: CacheConfig { freshness_window },
        }
    }
}
