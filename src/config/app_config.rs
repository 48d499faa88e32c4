use std::path::PathBuf;

use serde::Deserialize;

use crate::domain::catalog::DEFAULT_SUGGESTION_LIMIT;
use crate::infrastructure::observability::ObservabilityConfig;
use crate::infrastructure::storage::{SqliteConfig, StorageConfig, StorageType};

/// Application configuration
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    pub database: DatabaseConfig,
    pub recommendation: RecommendationConfig,
    pub observability: ObservabilityConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Directory holding the static UI
    pub public_dir: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub format: LogFormat,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    /// `sqlite` or `memory`
    pub storage: String,
    pub url: String,
    pub max_connections: u32,
    pub connect_timeout_secs: u64,
    /// SQL script used instead of the built-in dataset when the database is created
    pub init_script: Option<PathBuf>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RecommendationConfig {
    /// Maximum number of models suggested for a capacity
    pub limit: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            public_dir: "public".to_string(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::default(),
        }
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        let sqlite = SqliteConfig::default();
        Self {
            storage: "sqlite".to_string(),
            url: sqlite.url,
            max_connections: sqlite.max_connections,
            connect_timeout_secs: sqlite.connect_timeout_secs,
            init_script: None,
        }
    }
}

impl Default for RecommendationConfig {
    fn default() -> Self {
        Self {
            limit: DEFAULT_SUGGESTION_LIMIT,
        }
    }
}

impl DatabaseConfig {
    /// SQLite settings derived from this section
    pub fn sqlite_config(&self) -> SqliteConfig {
        SqliteConfig {
            url: self.url.clone(),
            max_connections: self.max_connections,
            connect_timeout_secs: self.connect_timeout_secs,
            init_script: self.init_script.clone(),
        }
    }

    /// Resolve the configured backend
    pub fn storage_config(&self) -> Result<StorageConfig, config::ConfigError> {
        match StorageType::from_str(&self.storage) {
            Some(StorageType::InMemory) => Ok(StorageConfig::in_memory()),
            Some(StorageType::Sqlite) => Ok(StorageConfig::sqlite(self.sqlite_config())),
            None => Err(config::ConfigError::Message(format!(
                "Unknown storage type '{}': expected 'sqlite' or 'memory'",
                self.storage
            ))),
        }
    }
}

impl AppConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name("config/local").required(false))
            .add_source(
                config::Environment::with_prefix("APP")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();

        assert_eq!(config.server.port, 8080);
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.database.storage, "sqlite");
        assert_eq!(config.database.url, "sqlite://aircond.db");
        assert_eq!(config.recommendation.limit, DEFAULT_SUGGESTION_LIMIT);
        assert!(config.observability.metrics.enabled);
    }

    #[test]
    fn test_partial_sections_fill_defaults() {
        let config: AppConfig = serde_json::from_str(
            r#"{"server": {"port": 9000}, "database": {"storage": "memory"}}"#,
        )
        .unwrap();

        assert_eq!(config.server.port, 9000);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.database.url, "sqlite://aircond.db");
        assert_eq!(
            config.database.storage_config().unwrap().storage_type(),
            StorageType::InMemory
        );
    }

    #[test]
    fn test_unknown_storage_type_is_rejected() {
        let database = DatabaseConfig {
            storage: "postgres".to_string(),
            ..Default::default()
        };

        assert!(database.storage_config().is_err());
    }

    #[test]
    fn test_log_format_deserialize() {
        let format: LogFormat = serde_json::from_str("\"json\"").unwrap();
        assert!(matches!(format, LogFormat::Json));
    }
}
