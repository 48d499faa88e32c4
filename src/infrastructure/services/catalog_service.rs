//! Catalog service - validated read access to the model catalog

use std::sync::Arc;

use metrics::counter;
use tracing::debug;

use crate::domain::catalog::{validate_area, validate_brand, validate_price_bounds};
use crate::domain::{AirConditionerModel, CatalogRepository, DomainError, SeriesDescription};

/// Area search parameters
#[derive(Debug, Clone, PartialEq)]
pub struct AreaQuery {
    pub area: f64,
    pub brand: Option<String>,
}

/// Price range search parameters
#[derive(Debug, Clone, PartialEq)]
pub struct PriceRangeQuery {
    pub min_price: i64,
    pub max_price: i64,
    pub brand: Option<String>,
}

/// Catalog service for search operations
#[derive(Debug)]
pub struct CatalogService {
    repository: Arc<dyn CatalogRepository>,
}

impl CatalogService {
    /// Create a new CatalogService over the given repository
    pub fn new(repository: Arc<dyn CatalogRepository>) -> Self {
        Self { repository }
    }

    /// Models suited to a room of the given area
    pub async fn find_by_area(
        &self,
        query: &AreaQuery,
    ) -> Result<Vec<AirConditionerModel>, DomainError> {
        validate_area(query.area)?;
        let brand = normalize_brand(query.brand.as_deref())?;

        debug!(area = query.area, brand = ?brand, "Searching catalog by area");
        counter!("catalog_queries_total", "operation" => "find_by_area").increment(1);

        self.repository.find_by_area(query.area, brand).await
    }

    /// Models priced within the requested range
    pub async fn find_by_price_range(
        &self,
        query: &PriceRangeQuery,
    ) -> Result<Vec<AirConditionerModel>, DomainError> {
        validate_price_bounds(query.min_price, query.max_price)?;
        let brand = normalize_brand(query.brand.as_deref())?;

        debug!(
            min_price = query.min_price,
            max_price = query.max_price,
            brand = ?brand,
            "Searching catalog by price"
        );
        counter!("catalog_queries_total", "operation" => "find_by_price_range").increment(1);

        self.repository
            .find_by_price_range(query.min_price, query.max_price, brand)
            .await
    }

    /// All series descriptions
    pub async fn list_series(&self) -> Result<Vec<SeriesDescription>, DomainError> {
        counter!("catalog_queries_total", "operation" => "list_series").increment(1);
        self.repository.list_series().await
    }

    /// Number of models in the catalog
    pub async fn count_models(&self) -> Result<usize, DomainError> {
        self.repository.count_models().await
    }
}

/// Blank brand filters mean "no filter"; anything else must be a valid brand
fn normalize_brand(brand: Option<&str>) -> Result<Option<&str>, DomainError> {
    match brand.map(str::trim) {
        None | Some("") => Ok(None),
        Some(b) => {
            validate_brand(b)?;
            Ok(Some(b))
        }
    }
}
