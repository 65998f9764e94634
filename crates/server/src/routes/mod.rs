//! API route handlers
//!
//! - `books`: the `/api/books` CRUD endpoints
//! - `health`: liveness probe

pub mod books;
pub mod health;

use crate::error::{ServerError, ServerResult};
use axum::http::{Method, Uri};
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
///   "name": "Bookshelf Server",
///   "version": "0.1.0",
///   "endpoints": ["..."]
/// }
/// ```
pub async fn api_info() -> ServerResult<impl IntoResponse> {
    Ok(Json(json!({
        "name": "Bookshelf Server",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": [
            "GET /api/books?category=",
            "GET /api/books/{id}",
            "POST /api/books",
            "PUT /api/books/{id}",
            "DELETE /api/books/{id}",
            "GET /health",
            "GET /api-docs/openapi.json"
        ]
    })))
}

/// 404 handler for undefined routes
pub async fn not_found(uri: Uri) -> ServerError {
    ServerError::RouteNotFound(uri.path().to_string())
}

/// 405 handler for known paths hit with an unsupported method
pub async fn method_not_allowed(method: Method, uri: Uri) -> ServerError {
    ServerError::MethodNotAllowed(format!("{method} {}", uri.path()))
}
