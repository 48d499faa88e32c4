//! Application state for shared services

use std::sync::Arc;

use crate::domain::{
    AirConditionerModel, DomainError, Recommendation, SeriesDescription, SizingRequest,
};
use crate::infrastructure::services::{
    AdvisorService, AreaQuery, CatalogService, PriceRangeQuery, SizingAdvice,
};

/// Application state containing shared services using dynamic dispatch
#[derive(Clone)]
pub struct AppState {
    pub catalog_service: Arc<dyn CatalogServiceTrait>,
    pub advisor_service: Arc<dyn AdvisorServiceTrait>,
}

/// Trait for catalog search operations
#[async_trait::async_trait]
pub trait CatalogServiceTrait: Send + Sync {
    async fn find_by_area(&self, query: &AreaQuery)
    -> Result<Vec<AirConditionerModel>, DomainError>;
    async fn find_by_price_range(
        &self,
        query: &PriceRangeQuery,
    ) -> Result<Vec<AirConditionerModel>, DomainError>;
    async fn list_series(&self) -> Result<Vec<SeriesDescription>, DomainError>;
    async fn count_models(&self) -> Result<usize, DomainError>;
}

/// Trait for capacity estimation and model suggestions
#[async_trait::async_trait]
pub trait AdvisorServiceTrait: Send + Sync {
    fn estimate(&self, request: &SizingRequest) -> Result<f64, DomainError>;
    async fn suggest(&self, target_capacity: f64) -> Result<Recommendation, DomainError>;
    async fn advise(&self, request: SizingRequest) -> Result<SizingAdvice, DomainError>;
}

#[async_trait::async_trait]
impl CatalogServiceTrait for CatalogService {
    async fn find_by_area(
        &self,
        query: &AreaQuery,
    ) -> Result<Vec<AirConditionerModel>, DomainError> {
        CatalogService::find_by_area(self, query).await
    }

    async fn find_by_price_range(
        &self,
        query: &PriceRangeQuery,
    ) -> Result<Vec<AirConditionerModel>, DomainError> {
        CatalogService::find_by_price_range(self, query).await
    }

    async fn list_series(&self) -> Result<Vec<SeriesDescription>, DomainError> {
        CatalogService::list_series(self).await
    }

    async fn count_models(&self) -> Result<usize, DomainError> {
        CatalogService::count_models(self).await
    }
}

#[async_trait::async_trait]
impl AdvisorServiceTrait for AdvisorService {
    fn estimate(&self, request: &SizingRequest) -> Result<f64, DomainError> {
        AdvisorService::estimate(self, request)
    }

    async fn suggest(&self, target_capacity: f64) -> Result<Recommendation, DomainError> {
        AdvisorService::suggest(self, target_capacity).await
    }

    async fn advise(&self, request: SizingRequest) -> Result<SizingAdvice, DomainError> {
        AdvisorService::advise(self, request).await
    }
}

impl AppState {
    /// Create new application state with provided services
    pub fn new(
        catalog_service: Arc<dyn CatalogServiceTrait>,
        advisor_service: Arc<dyn AdvisorServiceTrait>,
    ) -> Self {
        Self {
            catalog_service,
            advisor_service,
        }
    }
}
