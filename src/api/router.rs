use axum::{Router, middleware, routing::get};
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

use super::catalog;
use super::health;
use super::middleware::{logging_middleware, metrics_middleware};
use super::state::AppState;
use crate::infrastructure::observability::{PrometheusMetrics, create_metrics_router};

/// Create the API router with application state
pub fn create_router_with_state(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/ready", get(health::ready_check))
        .route("/live", get(health::live_check))
        .nest("/api", catalog::create_catalog_router())
        .with_state(state)
        .layer(middleware::from_fn(logging_middleware))
        .layer(middleware::from_fn(metrics_middleware))
        .layer(TraceLayer::new_for_http())
}

/// Full application router: API, optional metrics endpoint, static UI at `/`
pub fn create_app_router(
    state: AppState,
    metrics: Option<PrometheusMetrics>,
    public_dir: &str,
) -> Router {
    let mut router = create_router_with_state(state);

    if let Some(m) = metrics {
        router = router.merge(create_metrics_router(m));
    }

    let index = format!("{}/index.html", public_dir.trim_end_matches('/'));
    router.fallback_service(ServeDir::new(public_dir).fallback(ServeFile::new(index)))
}
