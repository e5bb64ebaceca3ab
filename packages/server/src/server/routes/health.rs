use axum::{extract::Extension, http::StatusCode, Json};
use serde::Serialize;

use crate::server::app::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    status: String,
    llm_configured: bool,
}

/// Health check endpoint
///
/// Always 200 while the process serves requests. `llm_configured` reports
/// whether scrape requests can reach the model.
pub async fn health_handler(
    Extension(state): Extension<AppState>,
) -> (StatusCode, Json<HealthResponse>) {
    (
        StatusCode::OK,
        Json(HealthResponse {
            status: "healthy".to_string(),
            llm_configured: state.extraction.is_configured(),
        }),
    )
}
