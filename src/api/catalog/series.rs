//! Series listing handler

use axum::{Json, extract::State};

use crate::api::state::AppState;
use crate::api::types::{ApiError, SeriesRecord};

/// GET /api/series
pub async fn list_series(State(state): State<AppState>) -> Result<Json<Vec<SeriesRecord>>, ApiError> {
    let series = state.catalog_service.list_series().await?;

    Ok(Json(series.iter().map(SeriesRecord::from_domain).collect()))
}
