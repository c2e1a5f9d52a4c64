//! HTTP Server Configuration
//!
//! Host, port, CORS origins and the optional seed file.

use std::path::PathBuf;

use axum::http::HeaderValue;
use serde::{Deserialize, Serialize};

/// HTTP server configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HttpServerConfig {
    /// Host to bind to (default: "0.0.0.0")
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to bind to (default: 5000)
    #[serde(default = "default_port")]
    pub port: u16,

    /// CORS allowed origins; empty means any origin
    #[serde(default = "default_cors_origins")]
    pub cors_origins: Vec<String>,

    /// JSON file with portfolio items and testimonials loaded at startup
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed_path: Option<PathBuf>,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    5000
}

fn default_cors_origins() -> Vec<String> {
    vec![
        "http://localhost:5173".to_string(), // Vite dev server
        "http://localhost:3000".to_string(),
    ]
}

impl Default for HttpServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            cors_origins: default_cors_origins(),
            seed_path: None,
        }
    }
}

impl HttpServerConfig {
    /// Create a new config with specified port
    pub fn with_port(port: u16) -> Self {
        Self {
            port,
            ..Default::default()
        }
    }

    /// Get the socket address string
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Reject values the listener could never bind or send
    pub fn validate(&self) -> Result<(), String> {
        if self.host.trim().is_empty() {
            return Err("host must not be empty".to_string());
        }
        if self.port == 0 {
            return Err("port must be > 0".to_string());
        }
        for origin in &self.cors_origins {
            if HeaderValue::from_str(origin).is_err() {
                return Err(format!("invalid CORS origin {:?}", origin));
            }
        }
        Ok(())
    }
}
