//! Application setup and server configuration.

use std::sync::Arc;

use anthropic_client::AnthropicClient;
use anyhow::Result;
use axum::{
    extract::Extension,
    http::{header::CONTENT_TYPE, Method},
    routing::{get, post},
    Router,
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::domains::extraction::ExtractionService;
use crate::kernel::{AnthropicAdapter, BaseAI, HttpPageFetcher};
use crate::server::routes::{health_handler, scrape_handler};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub extraction: Arc<ExtractionService>,
}

impl AppState {
    pub fn new(extraction: ExtractionService) -> Self {
        Self {
            extraction: Arc::new(extraction),
        }
    }

    /// Wire the real page fetcher and LLM client from configuration.
    ///
    /// A missing API key leaves the service without an LLM; scrape requests
    /// then fail with a configuration error instead of the server refusing
    /// to start.
    pub fn from_config(config: &Config) -> Result<Self> {
        let fetcher = Arc::new(HttpPageFetcher::new()?);

        let ai = config.anthropic_api_key.as_ref().map(|key| {
            let client = AnthropicClient::new(key.clone())
                .with_base_url(config.anthropic_base_url.clone());
            Arc::new(AnthropicAdapter::new(client, config.model.clone(), config.max_tokens))
                as Arc<dyn BaseAI>
        });

        Ok(Self::new(ExtractionService::new(
            fetcher,
            ai,
            config.extraction_settings(),
        )))
    }
}

/// Build the Axum application router
pub fn build_app(state: AppState) -> Router {
    // CORS configuration - the editor runs on a different origin
    let cors = CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([CONTENT_TYPE]);

    Router::new()
        .route("/api/scrape", post(scrape_handler))
        .route("/health", get(health_handler))
        // Middleware layers (applied in reverse order - last added runs first)
        .layer(Extension(state))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}
