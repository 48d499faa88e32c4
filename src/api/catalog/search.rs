//! Catalog search handlers

use axum::{Json, extract::State};
use tracing::debug;

use crate::api::state::AppState;
use crate::api::types::form::{present, required_decimal, required_integer};
use crate::api::types::{ApiError, AreaSearchForm, Form, ModelRecord, PriceSearchForm};
use crate::infrastructure::services::{AreaQuery, PriceRangeQuery};

/// POST /api/search_by_area
pub async fn search_by_area(
    State(state): State<AppState>,
    Form(form): Form<AreaSearchForm>,
) -> Result<Json<Vec<ModelRecord>>, ApiError> {
    let query = AreaQuery {
        area: required_decimal("area", form.area.as_deref())?,
        brand: present(form.brand.as_deref()).map(str::to_string),
    };

    let models = state.catalog_service.find_by_area(&query).await?;
    debug!(area = query.area, matches = models.len(), "Area search completed");

    Ok(Json(ModelRecord::from_models(&models)))
}

/// POST /api/search_by_price
pub async fn search_by_price(
    State(state): State<AppState>,
    Form(form): Form<PriceSearchForm>,
) -> Result<Json<Vec<ModelRecord>>, ApiError> {
    let query = PriceRangeQuery {
        min_price: required_integer("min_price", form.min_price.as_deref())?,
        max_price: required_integer("max_price", form.max_price.as_deref())?,
        brand: present(form.brand.as_deref()).map(str::to_string),
    };

    let models = state.catalog_service.find_by_price_range(&query).await?;
    debug!(
        min_price = query.min_price,
        max_price = query.max_price,
        matches = models.len(),
        "Price search completed"
    );

    Ok(Json(ModelRecord::from_models(&models)))
}
