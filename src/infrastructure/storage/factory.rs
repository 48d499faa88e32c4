//! Storage factory for runtime storage selection

use std::sync::Arc;

use tracing::info;

use crate::domain::{CatalogRepository, DomainError, InMemoryCatalogRepository};

use super::seed::{default_models, default_series};
use super::sqlite::{SqliteCatalogRepository, SqliteConfig};

/// Supported storage types
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorageType {
    /// In-memory storage (for testing/development)
    InMemory,
    /// SQLite storage
    Sqlite,
}

impl StorageType {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "memory" | "inmemory" | "in-memory" | "in_memory" => Some(Self::InMemory),
            "sqlite" | "sqlite3" | "file" => Some(Self::Sqlite),
            _ => None,
        }
    }
}

/// Storage configuration
#[derive(Debug, Clone)]
pub enum StorageConfig {
    /// In-memory storage seeded with the built-in catalog
    InMemory,
    /// SQLite storage configuration
    Sqlite(SqliteConfig),
}

impl StorageConfig {
    /// Creates an in-memory storage configuration
    pub fn in_memory() -> Self {
        Self::InMemory
    }

    /// Creates a SQLite storage configuration
    pub fn sqlite(config: SqliteConfig) -> Self {
        Self::Sqlite(config)
    }

    /// Creates a SQLite configuration from a URL
    pub fn sqlite_url(url: impl Into<String>) -> Self {
        Self::Sqlite(SqliteConfig::new(url))
    }

    /// Returns the storage type
    pub fn storage_type(&self) -> StorageType {
        match self {
            Self::InMemory => StorageType::InMemory,
            Self::Sqlite(_) => StorageType::Sqlite,
        }
    }
}

/// Factory for creating catalog repositories
#[derive(Debug)]
pub struct StorageFactory;

impl StorageFactory {
    /// Creates an initialized catalog repository based on the configuration
    pub async fn create_catalog(
        config: &StorageConfig,
    ) -> Result<Arc<dyn CatalogRepository>, DomainError> {
        match config {
            StorageConfig::InMemory => {
                info!("Using in-memory catalog");
                Ok(Self::create_in_memory())
            }
            StorageConfig::Sqlite(sqlite_config) => {
                info!(url = %sqlite_config.url, "Using SQLite catalog");
                Ok(Self::create_sqlite(sqlite_config).await?)
            }
        }
    }

    /// Creates an in-memory catalog holding the built-in dataset
    pub fn create_in_memory() -> Arc<InMemoryCatalogRepository> {
        Arc::new(
            InMemoryCatalogRepository::new()
                .with_models(default_models())
                .with_series(default_series()),
        )
    }

    /// Creates a SQLite catalog and runs its one-time initialization
    pub async fn create_sqlite(
        config: &SqliteConfig,
    ) -> Result<Arc<SqliteCatalogRepository>, DomainError> {
        let repository = SqliteCatalogRepository::connect(config).await?;
        repository.ensure_initialized().await?;
        Ok(Arc::new(repository))
    }
}
