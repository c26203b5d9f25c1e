//! Channel listing and lookup handlers.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};
use iptv_catalog_core::{parse_or, ChannelFilter, EnrichedChannel, QueryEngine};
use serde::{Deserialize, Serialize};

use super::{error::ApiError, LenientQuery};
use crate::state::AppState;

/// Default result count of channel listings.
pub const CHANNELS_DEFAULT_LIMIT: usize = 50;

#[derive(Debug, Deserialize)]
pub struct ChannelsParams {
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub search: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub limit: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct LimitParams {
    #[serde(default)]
    pub limit: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ChannelsResponse {
    pub success: bool,
    pub data: Vec<EnrichedChannel>,
    pub total: usize,
}

#[derive(Debug, Serialize)]
pub struct ChannelResponse {
    pub success: bool,
    pub data: EnrichedChannel,
}

#[derive(Debug, Serialize)]
pub struct CountryChannelsResponse {
    pub success: bool,
    pub country: String,
    pub total: usize,
    pub data: Vec<EnrichedChannel>,
}

/// GET /channels
pub async fn list_channels(
    State(state): State<Arc<AppState>>,
    LenientQuery(params): LenientQuery<ChannelsParams>,
) -> Result<Json<ChannelsResponse>, ApiError> {
    let snapshot = state.snapshot().await?;
    let engine = QueryEngine::new(&snapshot);

    let filter = ChannelFilter {
        text: params.search,
        country: params.country,
        category: params.category,
        ..Default::default()
    };
    let matches = engine.search(&filter, parse_or(params.limit.as_deref(), CHANNELS_DEFAULT_LIMIT));

    Ok(Json(ChannelsResponse {
        success: true,
        data: matches.channels,
        total: matches.total,
    }))
}

/// GET /channels/{id}
pub async fn get_channel(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<ChannelResponse>, ApiError> {
    let snapshot = state.snapshot().await?;
    let engine = QueryEngine::new(&snapshot);

    match engine.channel(&id) {
        Some(channel) => Ok(Json(ChannelResponse {
            success: true,
            data: channel,
        })),
        None => Err(ApiError::NotFound(format!("Channel not found: {}", id))),
    }
}

/// GET /country/{code}
///
/// Channels of one country; 404 when it has none.
pub async fn channels_by_country(
    State(state): State<Arc<AppState>>,
    Path(code): Path<String>,
    LenientQuery(params): LenientQuery<LimitParams>,
) -> Result<Json<CountryChannelsResponse>, ApiError> {
    let code = code.trim().to_uppercase();

    let snapshot = state.snapshot().await?;
    let engine = QueryEngine::new(&snapshot);

    let filter = ChannelFilter {
        country: Some(code.clone()),
        ..Default::default()
    };
    let matches = engine.search(&filter, parse_or(params.limit.as_deref(), CHANNELS_DEFAULT_LIMIT));

    if matches.total == 0 {
        return Err(ApiError::NotFound(format!(
            "No channels found for country code: {}",
            code
        )));
    }

    Ok(Json(CountryChannelsResponse {
        success: true,
        country: code,
        total: matches.total,
        data: matches.channels,
    }))
}
