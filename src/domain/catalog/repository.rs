//! Catalog repository trait

use std::cmp::Ordering;

use async_trait::async_trait;

use super::{AirConditionerModel, SeriesDescription};
use crate::domain::DomainError;

/// Read-only access to the air-conditioner catalog
#[async_trait]
pub trait CatalogRepository: Send + Sync + std::fmt::Debug {
    /// Models whose suitable area range contains `area`.
    ///
    /// Ordered by price when filtered by brand, by brand then price otherwise.
    async fn find_by_area(
        &self,
        area: f64,
        brand: Option<&str>,
    ) -> Result<Vec<AirConditionerModel>, DomainError>;

    /// Models priced within `[min_price, max_price]`, same ordering as `find_by_area`
    async fn find_by_price_range(
        &self,
        min_price: i64,
        max_price: i64,
        brand: Option<&str>,
    ) -> Result<Vec<AirConditionerModel>, DomainError>;

    /// All series descriptions
    async fn list_series(&self) -> Result<Vec<SeriesDescription>, DomainError>;

    /// Up to `limit` models with capacity at or above `target`, smallest margin first,
    /// then cheapest
    async fn find_closest_sufficient(
        &self,
        target: f64,
        limit: usize,
    ) -> Result<Vec<AirConditionerModel>, DomainError>;

    /// The model with the highest cooling capacity, if any
    async fn find_largest(&self) -> Result<Option<AirConditionerModel>, DomainError>;

    /// Number of models in the catalog
    async fn count_models(&self) -> Result<usize, DomainError>;
}

/// Listing order shared by the area and price queries
pub(crate) fn listing_order(
    a: &AirConditionerModel,
    b: &AirConditionerModel,
    group_by_brand: bool,
) -> Ordering {
    let by_brand = if group_by_brand {
        a.brand().cmp(&b.brand())
    } else {
        Ordering::Equal
    };

    by_brand
        .then_with(|| a.price().cmp(&b.price()))
        .then_with(|| a.model_number().cmp(b.model_number()))
}

/// Order used by the closest-match selection
pub(crate) fn closest_order(
    a: &AirConditionerModel,
    b: &AirConditionerModel,
    target: f64,
) -> Ordering {
    a.capacity_margin(target)
        .total_cmp(&b.capacity_margin(target))
        .then_with(|| a.price().cmp(&b.price()))
        .then_with(|| a.model_number().cmp(b.model_number()))
}

/// In-memory implementation of CatalogRepository
pub mod in_memory {
    use super::*;

    /// In-memory implementation of CatalogRepository for testing and development
    #[derive(Debug, Default, Clone)]
    pub struct InMemoryCatalogRepository {
        models: Vec<AirConditionerModel>,
        series: Vec<SeriesDescription>,
    }

    impl InMemoryCatalogRepository {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn with_models(mut self, models: Vec<AirConditionerModel>) -> Self {
            self.models.extend(models);
            self
        }

        pub fn with_series(mut self, series: Vec<SeriesDescription>) -> Self {
            self.series.extend(series);
            self
        }

        fn listing<F>(&self, brand: Option<&str>, predicate: F) -> Vec<AirConditionerModel>
        where
            F: Fn(&AirConditionerModel) -> bool,
        {
            let mut matches: Vec<AirConditionerModel> = self
                .models
                .iter()
                .filter(|m| predicate(m))
                .filter(|m| brand.is_none_or(|b| m.brand() == Some(b)))
                .cloned()
                .collect();

            matches.sort_by(|a, b| listing_order(a, b, brand.is_none()));
            matches
        }
    }

    #[async_trait]
    impl CatalogRepository for InMemoryCatalogRepository {
        async fn find_by_area(
            &self,
            area: f64,
            brand: Option<&str>,
        ) -> Result<Vec<AirConditionerModel>, DomainError> {
            Ok(self.listing(brand, |m| m.fits_area(area)))
        }

        async fn find_by_price_range(
            &self,
            min_price: i64,
            max_price: i64,
            brand: Option<&str>,
        ) -> Result<Vec<AirConditionerModel>, DomainError> {
            Ok(self.listing(brand, |m| m.priced_within(min_price, max_price)))
        }

        async fn list_series(&self) -> Result<Vec<SeriesDescription>, DomainError> {
            Ok(self.series.clone())
        }

        async fn find_closest_sufficient(
            &self,
            target: f64,
            limit: usize,
        ) -> Result<Vec<AirConditionerModel>, DomainError> {
            let mut matches: Vec<AirConditionerModel> = self
                .models
                .iter()
                .filter(|m| m.cooling_capacity() >= target)
                .cloned()
                .collect();

            matches.sort_by(|a, b| closest_order(a, b, target));
            matches.truncate(limit);
            Ok(matches)
        }

        async fn find_largest(&self) -> Result<Option<AirConditionerModel>, DomainError> {
            // Lowest model number wins among equal maxima
            Ok(self
                .models
                .iter()
                .max_by(|a, b| {
                    a.cooling_capacity()
                        .total_cmp(&b.cooling_capacity())
                        .then_with(|| b.model_number().cmp(a.model_number()))
                })
                .cloned())
        }

        async fn count_models(&self) -> Result<usize, DomainError> {
            Ok(self.models.len())
        }
    }
}


#[cfg(test)]
mod tests {
    use super::in_memory::InMemoryCatalogRepository;
    use super::*;

    fn unit(brand: &str, number: &str, capacity: f64, area: (f64, f64), price: i64) -> AirConditionerModel {
        AirConditionerModel::new(number, "Series", "split", capacity, area, price).with_brand(brand)
    }

    fn repository() -> InMemoryCatalogRepository {
        InMemoryCatalogRepository::new().with_models(vec![
            unit("Hitachi", "H-36", 3.6, (5.0, 6.0), 33000),
            unit("Daikin", "D-36", 3.6, (5.0, 6.0), 35000),
            unit("Daikin", "D-28", 2.8, (4.0, 5.0), 28000),
            unit("Daikin", "D-41", 4.1, (6.0, 7.0), 35000),
            unit("Hitachi", "H-71", 7.1, (10.0, 12.0), 62000),
        ])
    }

    #[tokio::test]
    async fn test_find_by_area_inclusive_bounds() {
        let repo = repository();

        let at_lower = repo.find_by_area(5.0, None).await.unwrap();
        let numbers: Vec<&str> = at_lower.iter().map(|m| m.model_number()).collect();
        assert_eq!(numbers, vec!["D-28", "D-36", "H-36"]);

        let at_upper = repo.find_by_area(12.0, None).await.unwrap();
        assert_eq!(at_upper.len(), 1);
        assert_eq!(at_upper[0].model_number(), "H-71");
    }

    #[tokio::test]
    async fn test_find_by_area_outside_every_range() {
        let repo = repository();

        assert!(repo.find_by_area(30.0, None).await.unwrap().is_empty());
        assert!(repo.find_by_area(1.0, None).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_find_by_area_with_brand_orders_by_price() {
        let repo = repository();

        let result = repo.find_by_area(6.0, Some("Daikin")).await.unwrap();
        let numbers: Vec<&str> = result.iter().map(|m| m.model_number()).collect();

        assert_eq!(numbers, vec!["D-36", "D-41"]);
        assert!(result.iter().all(|m| m.brand() == Some("Daikin")));
    }

    #[tokio::test]
    async fn test_find_by_price_range_groups_by_brand() {
        let repo = repository();

        let result = repo.find_by_price_range(28000, 35000, None).await.unwrap();
        let numbers: Vec<&str> = result.iter().map(|m| m.model_number()).collect();

        assert_eq!(numbers, vec!["D-28", "D-36", "D-41", "H-36"]);
    }

    #[tokio::test]
    async fn test_find_by_price_range_inverted_is_empty() {
        let repo = repository();

        assert!(repo.find_by_price_range(50000, 10000, None).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_find_closest_sufficient_orders_by_margin_then_price() {
        let repo = repository();

        let result = repo.find_closest_sufficient(3.0, 5).await.unwrap();
        let numbers: Vec<&str> = result.iter().map(|m| m.model_number()).collect();

        assert_eq!(numbers, vec!["H-36", "D-36", "D-41", "H-71"]);
    }

    #[tokio::test]
    async fn test_find_closest_sufficient_respects_limit() {
        let repo = repository();

        let result = repo.find_closest_sufficient(1.0, 2).await.unwrap();
        assert_eq!(result.len(), 2);
        assert_eq!(result[0].model_number(), "D-28");
    }

    #[tokio::test]
    async fn test_find_largest() {
        let repo = repository();

        let largest = repo.find_largest().await.unwrap().unwrap();
        assert_eq!(largest.model_number(), "H-71");

        let empty = InMemoryCatalogRepository::new();
        assert!(empty.find_largest().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_repeated_queries_are_identical() {
        let repo = repository();

        let first = repo.find_by_area(5.5, None).await.unwrap();
        let second = repo.find_by_area(5.5, None).await.unwrap();
        assert_eq!(first, second);
    }
}
