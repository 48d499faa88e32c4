//! Application services built on the catalog repository

mod advisor_service;
mod catalog_service;

pub use advisor_service::{AdvisorService, SizingAdvice};
pub use catalog_service::{AreaQuery, CatalogService, PriceRangeQuery};
