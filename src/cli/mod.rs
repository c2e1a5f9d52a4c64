//! CLI module
//!
//! Provides command-line interface for:
//! - serve: Resolve config, seed the store, serve HTTP
//! - check-config: Validate config and seed file, then exit

mod args;
mod commands;
mod errors;
mod io;

pub use args::{Cli, Command, ConfigArgs};
pub use commands::{
    build_storage, check_config, load_config, resolve_config, run, run_command, serve,
};
pub use errors::{CliError, CliErrorCode, CliResult};
