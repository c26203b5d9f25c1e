//! Category listing handler.

use std::sync::Arc;

use axum::{extract::State, Json};
use iptv_catalog_core::{CategorySummary, QueryEngine};
use serde::Serialize;

use super::{error::ApiError, timestamp};
use crate::state::AppState;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoriesResponse {
    pub success: bool,
    pub timestamp: String,
    pub count: usize,
    pub total_channels: usize,
    pub data: Vec<CategorySummary>,
}

/// GET /categories
pub async fn list_categories(
    State(state): State<Arc<AppState>>,
) -> Result<Json<CategoriesResponse>, ApiError> {
    let snapshot = state.snapshot().await?;
    let report = QueryEngine::new(&snapshot).categories();

    Ok(Json(CategoriesResponse {
        success: true,
        timestamp: timestamp(),
        count: report.categories.len(),
        total_channels: report.total_channels,
        data: report.categories,
    }))
}
