//! API route handlers
//!
//! Routes are organized by functionality:
//!
//! - `health`: Health checks, readiness, and metrics
//! - `items`: Report intake, listing/search, lookup and status changes
//! - `locations`: Building → floor → location catalog walk
//! - `matching`: Ranked candidates for stored items and ad-hoc probes
//! - `assistant`: Chat intent routing

pub mod assistant;
pub mod health;
pub mod items;
pub mod locations;
pub mod matching;

use crate::error::{ServerError, ServerResult};
use axum::response::IntoResponse;
use axum::Json;
use serde_json::json;

/// API version and base info
///
/// Returns server information including version and available endpoints.
///
/// # Response
///
/// ```json
/// {
///   "name": "LostFound Server",
///   "version": "0.1.0",
///   "api_version": "v1",
///   "endpoints": ["..."]
/// }
/// ```
pub async fn api_info() -> ServerResult<impl IntoResponse> {
    Ok(Json(json!({
        "name": "LostFound Server",
        "version": env!("CARGO_PKG_VERSION"),
        "api_version": "v1",
        "endpoints": [
            "/api/v1/categories",
            "/api/v1/locations/buildings",
            "/api/v1/locations/floors",
            "/api/v1/locations",
            "/api/v1/items/{kind}",
            "/api/v1/items/{kind}/{id}",
            "/api/v1/items/{kind}/{id}/status",
            "/api/v1/items/{kind}/{id}/matches",
            "/api/v1/match",
            "/api/v1/chat",
            "/health",
            "/ready",
            "/metrics"
        ]
    })))
}

/// 404 Not Found handler
///
/// Returns a standardized error response for undefined routes.
pub async fn not_found() -> ServerError {
    ServerError::NotFound
}
