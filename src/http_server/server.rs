//! # HTTP Server
//!
//! Combines every endpoint router into one axum app around an injected
//! store.

use std::sync::Arc;
use std::time::Instant;

use axum::extract::{Request, State};
use axum::http::HeaderValue;
use axum::middleware::{self, Next};
use axum::response::Response;
use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

use super::config::HttpServerConfig;
use super::contact_routes::contact_routes;
use super::observability_routes::{health_routes, observability_routes};
use super::showcase_routes::showcase_routes;
use crate::observability::{log_event, log_event_with_fields, Event, Logger, MetricsRegistry};
use crate::storage::Storage;

/// State shared by every handler
pub struct AppState {
    pub storage: Arc<dyn Storage>,
    pub metrics: Arc<MetricsRegistry>,
}

impl AppState {
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self {
            storage,
            metrics: Arc::new(MetricsRegistry::new()),
        }
    }
}

/// HTTP server for the site API
pub struct HttpServer {
    config: HttpServerConfig,
    router: Router,
}

impl HttpServer {
    /// Create a server over `storage`
    pub fn new(config: HttpServerConfig, storage: Arc<dyn Storage>) -> Self {
        let state = Arc::new(AppState::new(storage));
        let router = Self::build_router(&config, state);
        Self { config, router }
    }

    /// Build the combined router with all endpoints
    fn build_router(config: &HttpServerConfig, state: Arc<AppState>) -> Router {
        let api = Router::new()
            .merge(contact_routes(Arc::clone(&state)))
            .merge(showcase_routes(Arc::clone(&state)));

        Router::new()
            .merge(health_routes())
            .nest("/api", api)
            .nest("/observability", observability_routes(Arc::clone(&state)))
            .layer(middleware::from_fn_with_state(state, log_requests))
            .layer(cors_layer(&config.cors_origins))
    }

    /// Get the socket address
    pub fn socket_addr(&self) -> String {
        self.config.socket_addr()
    }

    /// Get the router (for testing)
    pub fn router(self) -> Router {
        self.router
    }

    /// Bind and serve until Ctrl-C
    pub async fn start(self) -> Result<(), std::io::Error> {
        let addr = self.socket_addr();
        let listener = TcpListener::bind(&addr).await?;
        let local = listener.local_addr()?.to_string();

        log_event_with_fields(Event::Serving, &[("addr", local.as_str())]);

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        log_event(Event::Shutdown);
        Ok(())
    }
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    if origins.is_empty() {
        return CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);
    }

    let parsed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                Logger::warn("CORS_ORIGIN_IGNORED", &[("origin", origin.as_str())]);
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(parsed))
        .allow_methods(Any)
        .allow_headers(Any)
}

/// One log line per request
async fn log_requests(
    State(state): State<Arc<AppState>>,
    request: Request,
    next: Next,
) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_owned();
    let started = Instant::now();

    let response = next.run(request).await;

    state.metrics.increment_http_requests();
    let elapsed_ms = started.elapsed().as_millis().to_string();
    log_event_with_fields(
        Event::HttpRequest,
        &[
            ("method", method.as_str()),
            ("path", path.as_str()),
            ("status", response.status().as_str()),
            ("duration_ms", elapsed_ms.as_str()),
        ],
    );

    response
}

async fn shutdown_signal() {
    // If the handler cannot be installed, serve until the process is killed.
    if tokio::signal::ctrl_c().await.is_err() {
        std::future::pending::<()>().await;
    }
}
