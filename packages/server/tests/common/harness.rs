//! In-process test harness for the HTTP API.
//!
//! Builds the real router over mock infrastructure and drives it with
//! `tower::ServiceExt::oneshot`, so no sockets are opened.

use std::sync::Arc;

use axum::body::{to_bytes, Body, Bytes};
use axum::http::{Method, Request, StatusCode};
use axum::Router;
use scrape_server::domains::extraction::{ExtractionService, ExtractionSettings};
use scrape_server::kernel::{BaseAI, MockAI, MockPageFetcher};
use scrape_server::server::{build_app, AppState};
use serde_json::Value;
use tower::ServiceExt;

/// Response captured from the router.
pub struct TestResponse {
    pub status: StatusCode,
    pub bytes: Bytes,
}

impl TestResponse {
    pub fn json(&self) -> Value {
        serde_json::from_slice(&self.bytes).expect("Response body is not JSON")
    }
}

pub struct TestHarness {
    pub fetcher: MockPageFetcher,
    pub ai: MockAI,
    pub app: Router,
}

impl TestHarness {
    /// Router with an LLM configured.
    pub fn new(fetcher: MockPageFetcher, ai: MockAI) -> Self {
        Self::build(fetcher, ai, true)
    }

    /// Router as it runs when no API key is set.
    pub fn without_credentials(fetcher: MockPageFetcher) -> Self {
        Self::build(fetcher, MockAI::new(), false)
    }

    fn build(fetcher: MockPageFetcher, ai: MockAI, configured: bool) -> Self {
        init_tracing();

        let llm: Option<Arc<dyn BaseAI>> = if configured {
            Some(Arc::new(ai.clone()))
        } else {
            None
        };
        let service = ExtractionService::new(
            Arc::new(fetcher.clone()),
            llm,
            ExtractionSettings::default(),
        );

        Self {
            fetcher,
            ai,
            app: build_app(AppState::new(service)),
        }
    }

    pub async fn post_scrape(&self, body: &str) -> TestResponse {
        self.send(
            Request::builder()
                .method(Method::POST)
                .uri("/api/scrape")
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
    }

    pub async fn get(&self, uri: &str) -> TestResponse {
        self.send(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
    }

    pub async fn send(&self, request: Request<Body>) -> TestResponse {
        let response = self.app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        TestResponse { status, bytes }
    }
}

/// Respect RUST_LOG in tests. Run with: RUST_LOG=debug cargo test -- --nocapture
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
