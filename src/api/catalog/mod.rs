//! Catalog search and sizing endpoints

pub mod search;
pub mod series;
pub mod sizing;

use axum::{
    Router,
    routing::{get, post},
};

use super::state::AppState;

/// Create the catalog API router
pub fn create_catalog_router() -> Router<AppState> {
    Router::new()
        .route("/search_by_area", post(search::search_by_area))
        .route("/search_by_price", post(search::search_by_price))
        .route("/calculate", post(sizing::calculate))
        .route("/series", get(series::list_series))
}
