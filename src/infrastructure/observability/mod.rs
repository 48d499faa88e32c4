//! Observability infrastructure - Prometheus metrics

mod config;
mod metrics;

pub use self::config::{MetricsConfig, ObservabilityConfig};
pub use self::metrics::{PrometheusMetrics, create_metrics_router, init_metrics, record_http_request};
