//! Country listing handler.

use std::sync::Arc;

use axum::{extract::State, Json};
use iptv_catalog_core::{parse_flag, CountrySummary, QueryEngine};
use serde::{Deserialize, Serialize};

use super::{error::ApiError, timestamp, LenientQuery};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct CountriesParams {
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default, rename = "includeChannels")]
    pub include_channels: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CountriesQuery {
    pub code: Option<String>,
    pub include_channels: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CountriesResponse {
    pub success: bool,
    pub timestamp: String,
    pub count: usize,
    pub total_channels: usize,
    pub query: CountriesQuery,
    pub data: Vec<CountrySummary>,
}

/// GET /countries
///
/// Countries with at least one channel, most channels first.
pub async fn list_countries(
    State(state): State<Arc<AppState>>,
    LenientQuery(params): LenientQuery<CountriesParams>,
) -> Result<Json<CountriesResponse>, ApiError> {
    let include_channels = parse_flag(params.include_channels.as_deref()).unwrap_or(false);

    let snapshot = state.snapshot().await?;
    let report = QueryEngine::new(&snapshot).countries(params.code.as_deref(), include_channels);

    Ok(Json(CountriesResponse {
        success: true,
        timestamp: timestamp(),
        count: report.countries.len(),
        total_channels: report.total_channels,
        query: CountriesQuery {
            code: params.code,
            include_channels,
        },
        data: report.countries,
    }))
}
