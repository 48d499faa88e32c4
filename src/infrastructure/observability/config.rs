//! Metrics settings for the advisor service (`[observability.metrics]`)

use serde::Deserialize;

/// Routes the advisor already serves; the scrape endpoint must not shadow them
const RESERVED_PATHS: [&str; 4] = ["/", "/health", "/ready", "/live"];
const API_PREFIX: &str = "/api";

#[derive(Debug, Clone, Deserialize, Default)]
pub struct ObservabilityConfig {
    #[serde(default)]
    pub metrics: MetricsConfig,
}

/// Prometheus scrape endpoint for the catalog query, fallback and HTTP counters
#[derive(Debug, Clone, Deserialize)]
pub struct MetricsConfig {
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    /// Mounted next to the API and health routes on the same port
    #[serde(default = "default_metrics_path")]
    pub path: String,
}

fn default_enabled() -> bool {
    true
}

fn default_metrics_path() -> String {
    "/metrics".to_string()
}

impl Default for MetricsConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            path: default_metrics_path(),
        }
    }
}

impl MetricsConfig {
    /// The router cannot mount a relative path or one it already serves
    pub fn validate(&self) -> Result<(), ::config::ConfigError> {
        let path = match self.path.trim_end_matches('/') {
            "" => "/",
            trimmed => trimmed,
        };

        if !self.path.starts_with('/') {
            return Err(::config::ConfigError::Message(format!(
                "Metrics path '{}' must start with '/'",
                self.path
            )));
        }

        let under_api = path == API_PREFIX || path.starts_with("/api/");
        if under_api || RESERVED_PATHS.contains(&path) {
            return Err(::config::ConfigError::Message(format!(
                "Metrics path '{}' collides with an advisor route",
                self.path
            )));
        }

        Ok(())
    }
}
