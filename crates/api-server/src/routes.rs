//! HTTP route handlers

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;
use tracing::debug;

use muscadine_quotes::PriceService;

/// Shared handler state
#[derive(Clone)]
pub struct AppState {
    pub prices: Arc<PriceService>,
}

/// Body of `GET /api/prices`
///
/// The price keys are always present, `null` when unknown; `error` is only
/// present on degraded (stale-served) responses.
#[derive(Debug, Serialize)]
pub struct PricesResponse {
    pub bitcoin: Option<f64>,
    pub ethereum: Option<f64>,
    pub cached: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
}

/// Build the API router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/prices", get(get_prices))
        .route("/api/health", get(health))
        .with_state(state)
}

/// GET /api/prices - current USD prices, cache-first.
///
/// 200 with prices (possibly stale-served with an `error` annotation);
/// 500 only when the provider is down and no snapshot was ever stored.
async fn get_prices(
    State(state): State<AppState>,
) -> Result<Json<PricesResponse>, (StatusCode, Json<ErrorResponse>)> {
    match state.prices.get_prices().await {
        Ok(quote) => {
            debug!("Served prices (cached={})", quote.cached);
            Ok(Json(PricesResponse {
                bitcoin: quote.snapshot.bitcoin_usd,
                ethereum: quote.snapshot.ethereum_usd,
                cached: quote.cached,
                error: quote.stale_note,
            }))
        }
        Err(err) => Err((
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse {
                error: err.to_string(),
            }),
        )),
    }
}

/// GET /api/health - liveness probe.
async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use axum::body::Body;
    use axum::http::Request;
    use parking_lot::Mutex;
    use serde_json::Value;
    use std::collections::VecDeque;
    use std::time::Duration;
    use tower::ServiceExt;

    use muscadine_core::{CacheConfig, QuoteError, QuoteResult};
    use muscadine_quotes::{QuoteProvider, UsdQuotes};

    struct ScriptedProvider {
        responses: Mutex<VecDeque<QuoteResult<UsdQuotes>>>,
    }

    #[async_trait]
    impl QuoteProvider for ScriptedProvider {
        async fn fetch_usd_quotes(&self) -> QuoteResult<UsdQuotes> {
            self.responses
                .lock()
                .pop_front()
                .expect("provider called more times than scripted")
        }
    }

    fn app(
        responses: Vec<QuoteResult<UsdQuotes>>,
        freshness_window: Duration,
    ) -> Router {
        let provider = Arc::new(ScriptedProvider {
            responses: Mutex::new(responses.into()),
        });
        let service = PriceService::new(provider, &CacheConfig { freshness_window });
        router(AppState {
            prices: Arc::new(service),
        })
    }

    async fn get_json(router: &Router, uri: &str) -> (StatusCode, Value) {
        let response = router
            .clone()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();

        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    fn full_quotes() -> UsdQuotes {
        UsdQuotes {
            bitcoin: Some(65_000.0),
            ethereum: Some(3_500.0),
        }
    }

    #[tokio::test]
    async fn test_prices_fetch_then_cache() {
        let app = app(vec![Ok(full_quotes())], Duration::from_secs(300));

        let (status, body) = get_json(&app, "/api/prices").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["bitcoin"], 65_000.0);
        assert_eq!(body["ethereum"], 3_500.0);
        assert_eq!(body["cached"], false);
        assert!(body.get("error").is_none());

        // Second request inside the window is served from cache
        let (status, body) = get_json(&app, "/api/prices").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["cached"], true);
    }

    #[tokio::test]
    async fn test_prices_degraded_still_200() {
        let app = app(
            vec![Ok(full_quotes()), Err(QuoteError::Status(503))],
            Duration::ZERO,
        );

        get_json(&app, "/api/prices").await;
        let (status, body) = get_json(&app, "/api/prices").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["bitcoin"], 65_000.0);
        assert_eq!(body["cached"], true);
        assert!(body["error"].as_str().unwrap().contains("503"));
    }

    #[tokio::test]
    async fn test_prices_500_when_no_cache() {
        let app = app(vec![Err(QuoteError::Status(503))], Duration::from_secs(300));

        let (status, body) = get_json(&app, "/api/prices").await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(body["error"].as_str().unwrap().contains("no cached prices"));
        assert!(body.get("bitcoin").is_none());
    }

    #[tokio::test]
    async fn test_prices_missing_asset_serialized_null() {
        let app = app(
            vec![Ok(UsdQuotes {
                bitcoin: Some(65_000.0),
                ethereum: None,
            })],
            Duration::from_secs(300),
        );

        let (status, body) = get_json(&app, "/api/prices").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["ethereum"], Value::Null);
        assert_eq!(body["bitcoin"], 65_000.0);
    }

    #[tokio::test]
    async fn test_health() {
        let app = app(vec![], Duration::from_secs(300));

        let (status, body) = get_json(&app, "/api/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
    }
}
