use crate::state::ServerState;
use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;
use std::sync::Arc;

/// Liveness response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: &'static str,
    pub timestamp: String,
    pub uptime_seconds: u64,
    pub books: usize,
}

/// Health check endpoint (liveness)
/// Returns 200 if server is running
pub async fn health_check(State(state): State<Arc<ServerState>>) -> impl IntoResponse {
    Json(HealthResponse {
        status: "healthy",
        service: "bookshelf-server",
        timestamp: chrono::Utc::now().to_rfc3339(),
        uptime_seconds: state.uptime_seconds(),
        books: state.store.len(),
    })
}
