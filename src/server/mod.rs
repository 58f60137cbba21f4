//! HTTP query surface
//!
//! Read-only endpoints over the sample store. Parameter validation and
//! pagination live here; everything else is delegated to the ticker
//! service. The ingestion path never crosses this boundary.

mod routes;

pub use routes::router;

use crate::config::ServerConfig;
use crate::error::TickerError;
use crate::ticker::TickerService;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use std::sync::Arc;

/// Shared state passed to route handlers via `axum::extract::State`
pub struct AppState {
    pub service: Arc<TickerService>,
    pub default_page_size: usize,
    pub max_page_size: usize,
}

impl AppState {
    /// Build the shared state from a service and server configuration
    pub fn new(service: Arc<TickerService>, config: &ServerConfig) -> Arc<Self> {
        Arc::new(Self {
            service,
            default_page_size: config.default_page_size,
            max_page_size: config.max_page_size,
        })
    }
}

/// Error responses for the query surface
#[derive(Debug)]
pub enum ApiError {
    /// Missing or invalid request parameter
    BadRequest(String),
    /// Storage backend fault
    Unavailable(String),
    /// Upstream provider fault surfaced on the read path
    Upstream(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            Self::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            Self::Unavailable(msg) => (StatusCode::SERVICE_UNAVAILABLE, msg),
            Self::Upstream(msg) => (StatusCode::BAD_GATEWAY, msg),
        };

        (status, axum::Json(json!({ "error": message }))).into_response()
    }
}

impl From<TickerError> for ApiError {
    fn from(err: TickerError) -> Self {
        match err {
            TickerError::InvalidNumericInput(_) => {
                Self::BadRequest("Timestamps must be valid numbers.".to_string())
            }
            TickerError::StoreUnavailable(msg) => Self::Unavailable(msg),
            other => Self::Upstream(other.to_string()),
        }
    }
}
