//! Channel search handlers.

use std::sync::Arc;

use axum::{extract::State, Json};
use iptv_catalog_core::{
    parse_flag, parse_or, ChannelFilter, EnrichedChannel, Pagination, QueryEngine, SortOrder,
};
use serde::{Deserialize, Serialize};

use super::{error::ApiError, timestamp, LenientQuery};
use crate::state::AppState;

/// Default result count of the strict search.
pub const SEARCH_DEFAULT_LIMIT: usize = 20;
/// Default page size of the advanced search.
pub const ADVANCED_SEARCH_DEFAULT_LIMIT: usize = 50;

pub const QUERY_REQUIRED: &str = "Search query (q) is required";

// ============================================================================
// Request/Response types
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub q: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub limit: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub success: bool,
    pub query: String,
    pub data: Vec<EnrichedChannel>,
    pub total: usize,
}

#[derive(Debug, Deserialize)]
pub struct AdvancedSearchParams {
    #[serde(default)]
    pub q: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub nsfw: Option<String>,
    #[serde(default, rename = "hasStreams")]
    pub has_streams: Option<String>,
    #[serde(default)]
    pub limit: Option<String>,
    #[serde(default)]
    pub offset: Option<String>,
}

/// Filters as understood by the server, echoed back to the client.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EchoedQuery {
    pub q: Option<String>,
    pub country: Option<String>,
    pub category: Option<String>,
    pub nsfw: Option<bool>,
    pub has_streams: bool,
}

#[derive(Debug, Serialize)]
pub struct AdvancedSearchResponse {
    pub success: bool,
    pub timestamp: String,
    pub pagination: Pagination,
    pub query: EchoedQuery,
    pub data: Vec<EnrichedChannel>,
}

// ============================================================================
// Handlers
// ============================================================================

/// GET /search
///
/// Search channels by name or alternative name. `q` is required.
pub async fn search(
    State(state): State<Arc<AppState>>,
    LenientQuery(params): LenientQuery<SearchParams>,
) -> Result<Json<SearchResponse>, ApiError> {
    let query = params
        .q
        .as_deref()
        .map(str::trim)
        .filter(|q| !q.is_empty())
        .ok_or_else(|| ApiError::Validation(QUERY_REQUIRED.to_string()))?
        .to_string();

    let snapshot = state.snapshot().await?;
    let engine = QueryEngine::new(&snapshot);

    let filter = ChannelFilter {
        text: Some(query.clone()),
        country: params.country,
        category: params.category,
        ..Default::default()
    };
    let limit = parse_or(params.limit.as_deref(), SEARCH_DEFAULT_LIMIT);
    let matches = engine.search(&filter, limit);

    Ok(Json(SearchResponse {
        success: true,
        query,
        data: matches.channels,
        total: matches.total,
    }))
}

/// GET /search/advanced
///
/// Search with every filter, most streams first, paginated by limit/offset.
/// Text also matches network and owners.
pub async fn advanced_search(
    State(state): State<Arc<AppState>>,
    LenientQuery(params): LenientQuery<AdvancedSearchParams>,
) -> Result<Json<AdvancedSearchResponse>, ApiError> {
    let filter = ChannelFilter {
        text: params.q.clone(),
        text_in_network: true,
        country: params.country.clone(),
        category: params.category.clone(),
        nsfw: parse_flag(params.nsfw.as_deref()),
        has_streams: parse_flag(params.has_streams.as_deref()).unwrap_or(false),
    };
    let limit = parse_or(params.limit.as_deref(), ADVANCED_SEARCH_DEFAULT_LIMIT);
    let offset = parse_or(params.offset.as_deref(), 0);

    let snapshot = state.snapshot().await?;
    let engine = QueryEngine::new(&snapshot);
    let page = engine.search_page(&filter, SortOrder::StreamCountDesc, limit, offset);

    Ok(Json(AdvancedSearchResponse {
        success: true,
        timestamp: timestamp(),
        pagination: page.pagination,
        query: EchoedQuery {
            q: params.q,
            country: params.country,
            category: params.category,
            nsfw: filter.nsfw,
            has_streams: filter.has_streams,
        },
        data: page.items,
    }))
}
