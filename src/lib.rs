//! showcase - marketing-site backend
//!
//! Contact form intake plus read-only portfolio and testimonial listings,
//! served from an in-memory store.

pub mod cli;
pub mod http_server;
pub mod observability;
pub mod schema;
pub mod seed;
pub mod storage;
