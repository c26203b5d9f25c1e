use axum::{
    extract::State,
    http::header,
    response::IntoResponse,
    Json,
};
use iptv_catalog_core::SanitizedConfig;
use serde::Serialize;
use serde_json::{json, Value};
use std::sync::Arc;

use super::{
    channels::CHANNELS_DEFAULT_LIMIT,
    search::{ADVANCED_SEARCH_DEFAULT_LIMIT, SEARCH_DEFAULT_LIMIT},
    timestamp,
};
use crate::metrics::encode_metrics;
use crate::state::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub source: String,
    pub timestamp: String,
}

pub async fn health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        source: state.source().mode_name().to_string(),
        timestamp: timestamp(),
    })
}

pub async fn get_config(State(state): State<Arc<AppState>>) -> Json<SanitizedConfig> {
    Json(state.sanitized_config())
}

/// GET /metrics in Prometheus text format.
pub async fn metrics() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        encode_metrics(),
    )
}

/// GET / - describes the available endpoints.
pub async fn index() -> Json<Value> {
    Json(json!({
        "name": "IPTV Catalog API",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": {
            "/search": {
                "description": "Search channels by name or alternative name",
                "params": {
                    "q": "search text (required)",
                    "country": "country code",
                    "category": "category name",
                    "limit": format!("max results (default {})", SEARCH_DEFAULT_LIMIT),
                },
            },
            "/search/advanced": {
                "description": "Search with every filter, most streams first",
                "params": {
                    "q": "text in name, alternative names, network or owners",
                    "country": "country code",
                    "category": "category name",
                    "nsfw": "true or false",
                    "hasStreams": "true to keep channels with streams only",
                    "limit": format!("page size (default {})", ADVANCED_SEARCH_DEFAULT_LIMIT),
                    "offset": "page start (default 0)",
                },
            },
            "/channels": {
                "description": "List channels",
                "params": {
                    "country": "country code",
                    "category": "category name",
                    "search": "text in name or alternative names",
                    "limit": format!("max results (default {})", CHANNELS_DEFAULT_LIMIT),
                },
            },
            "/channels/{id}": {
                "description": "One channel by id",
            },
            "/channel/{id}": {
                "description": "Alias of /channels/{id}",
            },
            "/country/{code}": {
                "description": "Channels of one country",
                "params": {
                    "limit": format!("max results (default {})", CHANNELS_DEFAULT_LIMIT),
                },
            },
            "/countries": {
                "description": "Countries that have channels",
                "params": {
                    "code": "single country code",
                    "includeChannels": "true to list each country's channels",
                },
            },
            "/categories": {
                "description": "Categories with channel counts",
            },
            "/health": { "description": "Liveness check" },
        },
    }))
}
