use axum::{
    extract::{rejection::JsonRejection, Extension},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use records::wire::{CONFIGURATION_ERROR, SCRAPE_FAILED};
use records::{ErrorBody, PartialRecord, ScrapeRequest};
use tracing::{error, warn};

use crate::domains::extraction::ExtractError;
use crate::server::app::AppState;

impl IntoResponse for ExtractError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            ExtractError::Validation(message) => {
                (StatusCode::BAD_REQUEST, ErrorBody::new(message.clone()))
            }
            ExtractError::Configuration(details) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorBody::new(CONFIGURATION_ERROR).with_details(details.clone()),
            ),
            ExtractError::Fetch(_) | ExtractError::Model(_) | ExtractError::Parse => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorBody::new(SCRAPE_FAILED)
                    .with_details(self.to_string())
                    .with_kind(self.kind_name()),
            ),
        };

        (status, Json(body)).into_response()
    }
}

/// `POST /api/scrape`: extract a record from `{ url, type }`.
///
/// An unreadable body is answered like one with both fields missing.
pub async fn scrape_handler(
    Extension(state): Extension<AppState>,
    payload: Result<Json<ScrapeRequest>, JsonRejection>,
) -> Result<Json<PartialRecord>, ExtractError> {
    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => {
            warn!(error = %rejection, "Unreadable scrape request body");
            ScrapeRequest::default()
        }
    };

    match state.extraction.handle(&request).await {
        Ok(record) => Ok(Json(record)),
        Err(e) => {
            if !e.is_client_error() {
                error!(kind = e.kind_name(), error = %e, "Scrape failed");
            }
            Err(e)
        }
    }
}
