//! Air-conditioner catalog and sizing advisor
//!
//! Looks up catalog models by room area or price range, estimates the
//! cooling capacity a room needs, and suggests the closest adequate models.
//! Served over HTTP (axum) and from the command line.

pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use crate::config::AppConfig;

use std::sync::Arc;

use tracing::info;

use api::state::AppState;
use domain::CatalogRepository;
use infrastructure::services::{AdvisorService, CatalogService};
use infrastructure::storage::StorageFactory;

/// Create the application state with custom configuration.
/// Storage is connected and initialized before any request is served.
pub async fn create_app_state_with_config(config: &AppConfig) -> anyhow::Result<AppState> {
    let storage_config = config.database.storage_config()?;
    info!("Storage backend: {:?}", storage_config.storage_type());

    let repository = StorageFactory::create_catalog(&storage_config).await?;
    let models = repository.count_models().await?;
    info!(models, "Catalog ready");

    Ok(create_app_state_with_repository(
        repository,
        config.recommendation.limit,
    ))
}

/// Create the application state over an existing catalog
pub fn create_app_state_with_repository(
    repository: Arc<dyn CatalogRepository>,
    suggestion_limit: usize,
) -> AppState {
    let catalog_service = CatalogService::new(repository.clone());
    let advisor_service = AdvisorService::new(repository).with_limit(suggestion_limit);

    AppState::new(Arc::new(catalog_service), Arc::new(advisor_service))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DatabaseConfig;

    fn memory_config() -> AppConfig {
        AppConfig {
            database: DatabaseConfig {
                storage: "memory".to_string(),
                ..Default::default()
            },
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_create_app_state_in_memory() {
        let state = create_app_state_with_config(&memory_config()).await.unwrap();

        assert!(state.catalog_service.count_models().await.unwrap() > 0);
        assert!(!state.catalog_service.list_series().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_create_app_state_sqlite_memory() {
        let mut config = memory_config();
        config.database.storage = "sqlite".to_string();
        config.database.url = "sqlite::memory:".to_string();

        let state = create_app_state_with_config(&config).await.unwrap();
        let advice = state
            .advisor_service
            .advise(domain::SizingRequest::new(10.0))
            .await
            .unwrap();

        assert_eq!(advice.capacity, 5.0);
        assert!(!advice.recommendation.models().is_empty());
    }

    #[tokio::test]
    async fn test_unknown_storage_is_rejected() {
        let mut config = memory_config();
        config.database.storage = "redis".to_string();

        assert!(create_app_state_with_config(&config).await.is_err());
    }
}
