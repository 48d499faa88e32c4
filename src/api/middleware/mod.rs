//! API middleware components

pub mod logging;
pub mod metrics;

pub use logging::{REQUEST_ID_HEADER, logging_middleware, truncate_for_log};
pub use metrics::metrics_middleware;
