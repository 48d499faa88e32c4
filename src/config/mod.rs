//! Application configuration

mod app_config;

pub use self::app_config::{
    AppConfig, DatabaseConfig, LogFormat, LoggingConfig, RecommendationConfig, ServerConfig,
};
