//! Observability HTTP Routes
//!
//! Health check and counters.

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, response::IntoResponse, routing::get, Json, Router};
use serde::Serialize;

use super::server::AppState;
use crate::observability::MetricsSnapshot;
use crate::storage::StorageStats;

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

#[derive(Debug, Serialize)]
pub struct MetricsResponse {
    pub metrics: MetricsSnapshot,
    pub storage: StorageStats,
}

/// Create observability routes
pub fn observability_routes(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route("/metrics", get(metrics_handler))
        .with_state(state)
}

/// Health check route (also available under /observability)
pub fn health_routes() -> Router {
    Router::new().route("/health", get(health_handler))
}

async fn health_handler() -> impl IntoResponse {
    let response = HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    };

    (StatusCode::OK, Json(response))
}

async fn metrics_handler(State(state): State<Arc<AppState>>) -> Json<MetricsResponse> {
    Json(MetricsResponse {
        metrics: state.metrics.snapshot(),
        storage: state.storage.stats(),
    })
}
