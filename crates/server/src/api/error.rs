//! Error envelope returned by every handler.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use iptv_catalog_core::CatalogError;
use serde_json::json;
use thiserror::Error;
use tracing::error;

/// Code reported with every 500 response.
pub const INTERNAL_ERROR_CODE: &str = "INTERNAL_ERROR";

#[derive(Debug, Error)]
pub enum ApiError {
    /// Missing or invalid request parameter (400).
    #[error("{0}")]
    Validation(String),

    /// Requested entity does not exist (404).
    #[error("{0}")]
    NotFound(String),

    /// Dataset could not be loaded (500).
    #[error("Failed to load catalog data: {0}")]
    Upstream(#[source] CatalogError),

    /// Anything else (500).
    #[error("{0}")]
    Internal(String),
}

impl From<CatalogError> for ApiError {
    fn from(err: CatalogError) -> Self {
        if err.is_upstream() {
            ApiError::Upstream(err)
        } else {
            ApiError::Internal(err.to_string())
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            ApiError::Validation(message) => (
                StatusCode::BAD_REQUEST,
                json!({ "success": false, "error": message }),
            ),
            ApiError::NotFound(message) => (
                StatusCode::NOT_FOUND,
                json!({ "success": false, "error": message }),
            ),
            ApiError::Upstream(_) | ApiError::Internal(_) => {
                error!("Request failed: {}", self);
                internal_error_body(&self.to_string())
            }
        };

        (status, Json(body)).into_response()
    }
}

/// Status and body of a 500 response.
pub fn internal_error_body(message: &str) -> (StatusCode, serde_json::Value) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        json!({
            "success": false,
            "error": { "message": message, "code": INTERNAL_ERROR_CODE },
        }),
    )
}
