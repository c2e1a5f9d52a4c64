//! Showcase entry point
//!
//! Parses arguments and hands off to `cli::run`. Errors are logged as a
//! FATAL line on stderr and the process exits non-zero.

use showcase::cli;
use showcase::observability::{log_event_with_fields, Event};

fn main() {
    if let Err(e) = cli::run() {
        log_event_with_fields(
            Event::BootFailed,
            &[("code", e.code().code()), ("message", e.message())],
        );
        std::process::exit(1);
    }
}
