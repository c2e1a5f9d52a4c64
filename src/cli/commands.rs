//! CLI command implementations
//!
//! Boot order for `serve`:
//! 1. Resolve configuration (file, then flag overrides)
//! 2. Construct the store
//! 3. Apply the seed file, if any
//! 4. Bind and serve

use std::fs;
use std::path::Path;
use std::sync::Arc;

use serde::Serialize;

use crate::http_server::{HttpServer, HttpServerConfig};
use crate::observability::{log_event, log_event_with_fields, Event};
use crate::seed::{load_and_apply, SeedFile, SeedSummary};
use crate::storage::{MemStorage, Storage};

use super::args::{Command, ConfigArgs};
use super::errors::{CliError, CliResult};
use super::io::write_json;

/// Main CLI entry point
///
/// Parses arguments and dispatches to the appropriate command.
/// This is the only function that main.rs should call.
pub fn run() -> CliResult<()> {
    let cli = super::args::Cli::parse_args();
    run_command(cli.command)
}

/// Run the appropriate command based on CLI args
pub fn run_command(cmd: Command) -> CliResult<()> {
    match cmd {
        Command::Serve { config } => serve(&config),
        Command::CheckConfig { config } => check_config(&config),
    }
}

/// Load configuration from a JSON file
pub fn load_config(path: &Path) -> CliResult<HttpServerConfig> {
    let content = fs::read_to_string(path)
        .map_err(|e| CliError::config_error(format!("Failed to read config: {}", e)))?;

    serde_json::from_str(&content)
        .map_err(|e| CliError::config_error(format!("Invalid config JSON: {}", e)))
}

/// Resolve the effective configuration: file (or defaults), then flags.
pub fn resolve_config(args: &ConfigArgs) -> CliResult<HttpServerConfig> {
    let mut config = match &args.config {
        Some(path) => load_config(path)?,
        None => HttpServerConfig::default(),
    };

    if let Some(host) = &args.host {
        config.host = host.clone();
    }
    if let Some(port) = args.port {
        config.port = port;
    }
    if let Some(seed) = &args.seed {
        config.seed_path = Some(seed.clone());
    }

    config.validate().map_err(CliError::config_error)?;
    Ok(config)
}

/// Build the store and apply the configured seed file.
pub fn build_storage(config: &HttpServerConfig) -> CliResult<Arc<MemStorage>> {
    let storage = Arc::new(MemStorage::new());

    if let Some(path) = &config.seed_path {
        let summary = load_and_apply(path, storage.as_ref())?;
        log_event_with_fields(
            Event::SeedLoaded,
            &[
                ("path", path.display().to_string().as_str()),
                ("portfolio_items", summary.portfolio_items.to_string().as_str()),
                ("testimonials", summary.testimonials.to_string().as_str()),
            ],
        );
    }

    Ok(storage)
}

/// Start the HTTP server and block until it stops.
pub fn serve(args: &ConfigArgs) -> CliResult<()> {
    log_event(Event::BootStart);

    let config = resolve_config(args)?;
    log_event_with_fields(
        Event::ConfigLoaded,
        &[
            ("host", config.host.as_str()),
            ("port", config.port.to_string().as_str()),
        ],
    );

    let storage = build_storage(&config)?;
    let server = HttpServer::new(config, storage as Arc<dyn Storage>);

    let rt = tokio::runtime::Runtime::new()
        .map_err(|e| CliError::boot_failed(format!("Failed to create tokio runtime: {}", e)))?;

    rt.block_on(async {
        server
            .start()
            .await
            .map_err(|e| CliError::boot_failed(format!("HTTP server failed: {}", e)))
    })
}

#[derive(Debug, Serialize)]
struct CheckReport<'a> {
    config: &'a HttpServerConfig,
    seed: SeedSummary,
}

/// Validate configuration and seed file without serving.
pub fn check_config(args: &ConfigArgs) -> CliResult<()> {
    let config = resolve_config(args)?;
    let seed = match &config.seed_path {
        Some(path) => SeedFile::load(path)?.validate()?.summary(),
        None => SeedSummary::default(),
    };

    write_json(&CheckReport {
        config: &config,
        seed,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::path::PathBuf;
    use tempfile::NamedTempFile;

    fn config_file(json: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_defaults_without_file() {
        let config = resolve_config(&ConfigArgs::default()).unwrap();
        assert_eq!(config, HttpServerConfig::default());
    }

    #[test]
    fn test_flags_override_file() {
        let file = config_file(r#"{"host": "127.0.0.1", "port": 7000}"#);
        let args = ConfigArgs {
            config: Some(file.path().to_path_buf()),
            port: Some(7100),
            ..Default::default()
        };

        let config = resolve_config(&args).unwrap();
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 7100);
    }

    #[test]
    fn test_invalid_json_is_config_error() {
        let file = config_file("{ not json");
        let args = ConfigArgs {
            config: Some(file.path().to_path_buf()),
            ..Default::default()
        };

        let err = resolve_config(&args).unwrap_err();
        assert!(err.message().contains("Invalid config JSON"));
    }

    #[test]
    fn test_zero_port_rejected() {
        let args = ConfigArgs {
            port: Some(0),
            ..Default::default()
        };
        assert!(resolve_config(&args).is_err());
    }

    #[test]
    fn test_bad_cors_origin_in_file_rejected() {
        let file = config_file(r#"{"cors_origins": ["http://ok.example", "bad\norigin"]}"#);
        let args = ConfigArgs {
            config: Some(file.path().to_path_buf()),
            ..Default::default()
        };

        let err = resolve_config(&args).unwrap_err();
        assert!(err.message().contains("CORS origin"));
    }

    #[test]
    fn test_missing_config_file() {
        let args = ConfigArgs {
            config: Some(PathBuf::from("/nonexistent/showcase.json")),
            ..Default::default()
        };
        let err = resolve_config(&args).unwrap_err();
        assert!(err.message().contains("Failed to read config"));
    }

    #[test]
    fn test_build_storage_applies_seed() {
        let seed = config_file(
            r#"{"testimonials": [{"name": "Ann", "company": "Acme", "review": "Great",
                "rating": 5, "projectType": "video", "initials": "AN"}]}"#,
        );
        let config = HttpServerConfig {
            seed_path: Some(seed.path().to_path_buf()),
            ..Default::default()
        };

        let storage = build_storage(&config).unwrap();
        assert_eq!(storage.stats().testimonials, 1);
        assert_eq!(storage.get_testimonials()[0].name, "Ann");
    }

    #[test]
    fn test_build_storage_rejects_bad_seed() {
        let seed = config_file(r#"{"portfolio": [{"title": "no fields"}]}"#);
        let config = HttpServerConfig {
            seed_path: Some(seed.path().to_path_buf()),
            ..Default::default()
        };

        assert!(build_storage(&config).is_err());
    }
}
