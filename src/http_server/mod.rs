//! # HTTP Server Module
//!
//! Axum front end over the storage engine.
//!
//! # Endpoints
//!
//! - `POST /api/contact` - Contact form submission
//! - `GET /api/portfolio` - Portfolio items
//! - `GET /api/testimonials` - Testimonials
//! - `/health` - Health check
//! - `/observability/*` - Health and counters

pub mod config;
pub mod contact_routes;
pub mod errors;
pub mod observability_routes;
pub mod server;
pub mod showcase_routes;

pub use config::HttpServerConfig;
pub use errors::{ApiError, ApiResult, ErrorResponse};
pub use server::{AppState, HttpServer};
