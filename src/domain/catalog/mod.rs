//! Catalog domain - air-conditioner models, series and recommendations

mod entity;
mod recommendation;
pub mod repository;
mod validation;

pub use entity::{AirConditionerModel, SeriesDescription};
pub use recommendation::{CAPACITY_EXCEEDED_ADVISORY, DEFAULT_SUGGESTION_LIMIT, Recommendation};
pub use repository::CatalogRepository;
pub use repository::in_memory::InMemoryCatalogRepository;
pub use validation::{
    CatalogValidationError, MAX_BRAND_LENGTH, validate_area, validate_brand, validate_price_bounds,
};
