//! Showcase HTTP Routes
//!
//! Read-only listings of portfolio items and testimonials. Every record is
//! returned in insertion order; no paging or filtering.

use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};

use super::errors::catch_panic;
use super::server::AppState;
use crate::schema::{PortfolioItem, Testimonial};

const PORTFOLIO_FAILED: &str = "Failed to fetch portfolio items";
const TESTIMONIALS_FAILED: &str = "Failed to fetch testimonials";

/// Create showcase routes
pub fn showcase_routes(state: Arc<AppState>) -> Router {
    let metrics = Arc::clone(&state.metrics);
    Router::new()
        .route(
            "/portfolio",
            get(list_portfolio_handler).layer(catch_panic(PORTFOLIO_FAILED, Arc::clone(&metrics))),
        )
        .route(
            "/testimonials",
            get(list_testimonials_handler)
                .layer(catch_panic(TESTIMONIALS_FAILED, Arc::clone(&metrics))),
        )
        .with_state(state)
}

async fn list_portfolio_handler(State(state): State<Arc<AppState>>) -> Json<Vec<PortfolioItem>> {
    state.metrics.increment_portfolio_reads();
    Json(state.storage.get_portfolio_items())
}

async fn list_testimonials_handler(State(state): State<Arc<AppState>>) -> Json<Vec<Testimonial>> {
    state.metrics.increment_testimonial_reads();
    Json(state.storage.get_testimonials())
}
