//! Advisor service - capacity estimation and model recommendation

use std::sync::Arc;

use metrics::counter;
use serde::Serialize;
use tracing::{debug, warn};

use crate::domain::catalog::DEFAULT_SUGGESTION_LIMIT;
use crate::domain::{
    CatalogRepository, DomainError, Recommendation, SizingRequest, estimate_cooling_capacity,
};

/// Capacity estimate together with the models suggested for it
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SizingAdvice {
    pub request: SizingRequest,
    pub capacity: f64,
    pub recommendation: Recommendation,
}

/// Advisor service combining the estimator with catalog selection
#[derive(Debug)]
pub struct AdvisorService {
    repository: Arc<dyn CatalogRepository>,
    limit: usize,
}

impl AdvisorService {
    /// Create a new AdvisorService with the default suggestion limit
    pub fn new(repository: Arc<dyn CatalogRepository>) -> Self {
        Self {
            repository,
            limit: DEFAULT_SUGGESTION_LIMIT,
        }
    }

    /// Override how many models a recommendation may contain
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit.max(1);
        self
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Recommended cooling capacity in kW for a room
    pub fn estimate(&self, request: &SizingRequest) -> Result<f64, DomainError> {
        request.validate()?;
        Ok(estimate_cooling_capacity(request))
    }

    /// Models closest to, but not below, the target capacity.
    ///
    /// Falls back to the single largest model with an advisory when nothing
    /// is big enough.
    pub async fn suggest(&self, target_capacity: f64) -> Result<Recommendation, DomainError> {
        if !target_capacity.is_finite() || target_capacity < 0.0 {
            return Err(DomainError::invalid_param(
                "capacity",
                format!("Invalid capacity {}: must be a non-negative number", target_capacity),
            ));
        }

        counter!("catalog_queries_total", "operation" => "suggest").increment(1);

        let models = self
            .repository
            .find_closest_sufficient(target_capacity, self.limit)
            .await?;

        if !models.is_empty() {
            debug!(target_capacity, count = models.len(), "Suggested models");
            return Ok(Recommendation::sufficient(target_capacity, models));
        }

        match self.repository.find_largest().await? {
            Some(largest) => {
                warn!(
                    target_capacity,
                    largest_capacity = largest.cooling_capacity(),
                    model_number = largest.model_number(),
                    "Required capacity exceeds every single unit, falling back to largest model"
                );
                counter!("recommendation_fallbacks_total").increment(1);
                Ok(Recommendation::largest_available(target_capacity, largest))
            }
            None => {
                warn!(target_capacity, "Catalog is empty, nothing to suggest");
                Ok(Recommendation::empty(target_capacity))
            }
        }
    }

    /// Estimate the capacity for a room and suggest models for it
    pub async fn advise(&self, request: SizingRequest) -> Result<SizingAdvice, DomainError> {
        let capacity = self.estimate(&request)?;
        debug!(
            area = request.area,
            height = request.height,
            room_type = %request.room_type,
            orientation = %request.orientation,
            windows = request.has_large_windows,
            capacity,
            "Estimated cooling capacity"
        );

        let recommendation = self.suggest(capacity).await?;

        Ok(SizingAdvice {
            request,
            capacity,
            recommendation,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::CAPACITY_EXCEEDED_ADVISORY;
    use crate::domain::catalog::repository::mock::MockCatalogRepository;
    use crate::domain::{AirConditionerModel, Orientation, RoomType};

    fn unit(number: &str, capacity: f64, price: i64) -> AirConditionerModel {
        AirConditionerModel::new(number, "Series", "split", capacity, (1.0, 2.0), price)
    }

    fn catalog() -> Vec<AirConditionerModel> {
        vec![
            unit("A-22", 2.2, 20000),
            unit("A-28", 2.8, 25000),
            unit("B-28", 2.8, 23000),
            unit("A-36", 3.6, 30000),
            unit("A-50", 5.0, 42000),
            unit("A-71", 7.1, 60000),
            unit("A-90", 9.0, 80000),
        ]
    }

    fn create_service() -> AdvisorService {
        AdvisorService::new(Arc::new(MockCatalogRepository::new().with_models(catalog())))
    }

    #[tokio::test]
    async fn test_suggest_smallest_sufficient_first() {
        let service = create_service();

        let rec = service.suggest(2.5).await.unwrap();
        let numbers: Vec<&str> = rec.models().iter().map(|m| m.model_number()).collect();

        assert_eq!(numbers, vec!["B-28", "A-28", "A-36", "A-50", "A-71"]);
        assert!(rec.advisory().is_none());
    }

    #[tokio::test]
    async fn test_suggest_never_returns_undersized_models() {
        let service = create_service();

        for target in [0.0, 2.2, 3.0, 5.0, 8.9, 9.0] {
            let rec = service.suggest(target).await.unwrap();
            assert!(!rec.is_fallback());
            assert!(rec.models().iter().all(|m| m.cooling_capacity() >= target));
        }
    }

    #[tokio::test]
    async fn test_suggest_respects_limit() {
        let service = create_service().with_limit(3);

        let rec = service.suggest(1.0).await.unwrap();
        assert_eq!(rec.models().len(), 3);
    }

    #[tokio::test]
    async fn test_suggest_falls_back_to_largest() {
        let service = create_service();

        let rec = service.suggest(12.0).await.unwrap();

        assert_eq!(rec.models().len(), 1);
        assert_eq!(rec.models()[0].model_number(), "A-90");
        assert_eq!(rec.advisory(), Some(CAPACITY_EXCEEDED_ADVISORY));
    }

    #[tokio::test]
    async fn test_suggest_on_empty_catalog() {
        let service = AdvisorService::new(Arc::new(MockCatalogRepository::new()));

        let rec = service.suggest(3.0).await.unwrap();

        assert!(rec.is_empty());
        assert!(rec.advisory().is_none());
    }

    #[tokio::test]
    async fn test_suggest_rejects_invalid_capacity() {
        let service = create_service();

        assert!(service.suggest(f64::NAN).await.unwrap_err().is_invalid_input());
        assert!(service.suggest(-1.0).await.unwrap_err().is_invalid_input());
    }

    #[tokio::test]
    async fn test_suggest_is_idempotent() {
        let service = create_service();

        assert_eq!(
            service.suggest(3.3).await.unwrap(),
            service.suggest(3.3).await.unwrap()
        );
    }

    #[tokio::test]
    async fn test_advise_combines_estimate_and_selection() {
        let service = create_service();
        let request = SizingRequest::new(10.0)
            .with_height(3.5)
            .with_room_type(RoomType::Kitchen)
            .with_orientation(Orientation::South)
            .with_large_windows(true);

        let advice = service.advise(request).await.unwrap();

        assert_eq!(advice.capacity, 9.1);
        assert_eq!(advice.recommendation.models().len(), 1);
        assert!(advice.recommendation.is_fallback());
    }

    #[tokio::test]
    async fn test_advise_rejects_invalid_room() {
        let service = create_service();

        let result = service.advise(SizingRequest::new(0.0)).await;
        assert!(matches!(result, Err(DomainError::InvalidInput { .. })));
    }

    #[tokio::test]
    async fn test_storage_error_during_selection_propagates() {
        let service =
            AdvisorService::new(Arc::new(MockCatalogRepository::new().with_error("locked")));

        let result = service.suggest(3.0).await;
        assert!(matches!(result, Err(DomainError::Storage { .. })));
    }

    #[tokio::test]
    async fn test_storage_error_during_fallback_propagates() {
        let repository = Arc::new(
            MockCatalogRepository::new()
                .with_models(catalog())
                .with_error_on("find_largest", "locked"),
        );
        let service = AdvisorService::new(repository.clone());

        // Nothing covers 12 kW, so selection comes back empty and the fallback runs
        let result = service.suggest(12.0).await;

        assert!(matches!(result, Err(DomainError::Storage { .. })));
        assert_eq!(repository.calls(), 2);
    }
}
