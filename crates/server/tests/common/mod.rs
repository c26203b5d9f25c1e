//! Common test utilities for API testing with a mock catalog source.
//!
//! The fixture builds the full router in-process around a
//! [`MockCatalogSource`], so tests control the dataset and can inject load
//! failures without touching disk or network.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{HeaderMap, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use iptv_catalog_core::{testing::MockCatalogSource, CatalogSnapshot, CatalogSource, Config};
use iptv_catalog_server::{api::create_router, state::AppState};

/// Re-export fixtures for test convenience
pub use iptv_catalog_core::testing::fixtures;

/// Test fixture wrapping the router and its mock source.
///
/// # Example
///
/// ```rust,ignore
/// #[tokio::test]
/// async fn test_channel_lookup() {
///     let fixture = TestFixture::new();
///     let response = fixture.get("/channels/CNN.us").await;
///     assert_eq!(response.status, 200);
/// }
/// ```
pub struct TestFixture {
    pub router: Router,
    pub source: Arc<MockCatalogSource>,
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Value,
    pub raw: Vec<u8>,
}

impl TestFixture {
    /// Fixture serving the sample dataset.
    pub fn new() -> Self {
        Self::with_snapshot(fixtures::sample_snapshot())
    }

    pub fn with_snapshot(snapshot: CatalogSnapshot) -> Self {
        let source = Arc::new(MockCatalogSource::new(snapshot));
        let state = Arc::new(AppState::new(
            Config::default(),
            Arc::clone(&source) as Arc<dyn CatalogSource>,
        ));
        Self {
            router: create_router(state),
            source,
        }
    }

    /// Send a GET request.
    pub async fn get(&self, path: &str) -> TestResponse {
        let request = Request::builder()
            .method("GET")
            .uri(path)
            .header("Origin", "http://example.com")
            .body(Body::empty())
            .unwrap();
        self.send(request).await
    }

    /// Send a CORS preflight request.
    pub async fn options(&self, path: &str) -> TestResponse {
        let request = Request::builder()
            .method("OPTIONS")
            .uri(path)
            .header("Origin", "http://example.com")
            .header("Access-Control-Request-Method", "GET")
            .body(Body::empty())
            .unwrap();
        self.send(request).await
    }

    async fn send(&self, request: Request<Body>) -> TestResponse {
        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let headers = response.headers().clone();
        let raw = response
            .into_body()
            .collect()
            .await
            .expect("Failed to read body")
            .to_bytes()
            .to_vec();
        let body = serde_json::from_slice(&raw).unwrap_or(Value::Null);

        TestResponse {
            status,
            headers,
            body,
            raw,
        }
    }
}

impl TestResponse {
    /// Channel ids of the `data` array.
    pub fn ids(&self) -> Vec<String> {
        self.body["data"]
            .as_array()
            .map(|items| {
                items
                    .iter()
                    .filter_map(|c| c["id"].as_str().map(String::from))
                    .collect()
            })
            .unwrap_or_default()
    }
}
