//! CLI argument definitions using clap
//!
//! Commands:
//! - showcase serve [--config <path>] [--host <host>] [--port <port>] [--seed <path>]
//! - showcase check-config [--config <path>] [--seed <path>]

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Showcase - marketing-site API server
#[derive(Parser, Debug)]
#[command(name = "showcase")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Start the HTTP server
    Serve {
        #[command(flatten)]
        config: ConfigArgs,
    },

    /// Validate configuration and seed file, print the resolved config
    CheckConfig {
        #[command(flatten)]
        config: ConfigArgs,
    },
}

/// Configuration sources; flags override the file
#[derive(Args, Debug, Clone, Default)]
pub struct ConfigArgs {
    /// Path to JSON configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Host to bind to
    #[arg(long)]
    pub host: Option<String>,

    /// Port to bind to
    #[arg(long, short)]
    pub port: Option<u16>,

    /// Seed file with portfolio items and testimonials
    #[arg(long)]
    pub seed: Option<PathBuf>,
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serve_with_overrides() {
        let cli = Cli::parse_from(["showcase", "serve", "--port", "8080", "--seed", "seed.json"]);
        match cli.command {
            Command::Serve { config } => {
                assert_eq!(config.port, Some(8080));
                assert_eq!(config.seed, Some(PathBuf::from("seed.json")));
                assert!(config.config.is_none());
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_check_config() {
        let cli = Cli::parse_from(["showcase", "check-config", "--config", "site.json"]);
        assert!(matches!(cli.command, Command::CheckConfig { .. }));
    }

    #[test]
    fn test_rejects_bad_port() {
        assert!(Cli::try_parse_from(["showcase", "serve", "--port", "99999"]).is_err());
    }
}
