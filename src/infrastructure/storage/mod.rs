//! Storage infrastructure - Catalog storage implementations

mod factory;
mod seed;
mod sqlite;

pub use factory::{StorageConfig, StorageFactory, StorageType};
pub use seed::{CATALOG_SCHEMA, default_models, default_series};
pub use sqlite::{SqliteCatalogRepository, SqliteConfig};
