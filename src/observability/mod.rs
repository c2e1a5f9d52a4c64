//! Observability subsystem
//!
//! Provides:
//! - Structured logging (JSON lines)
//! - Process-lifetime counters
//! - Typed lifecycle and request events
//!
//! Observability is read-only: nothing here changes how a request is served.
//!
//! # Usage
//!
//! ```ignore
//! use showcase::observability::{log_event_with_fields, Event, MetricsRegistry};
//!
//! log_event_with_fields(Event::Serving, &[("addr", "0.0.0.0:5000")]);
//!
//! let metrics = MetricsRegistry::new();
//! metrics.increment_contact_messages();
//! ```

mod events;
mod logger;
mod metrics;

pub use events::Event;
pub use logger::{Logger, Severity};
pub use metrics::{MetricsRegistry, MetricsSnapshot};

fn severity_for(event: Event) -> Severity {
    if event.is_fatal() {
        Severity::Fatal
    } else if event.is_failure() {
        Severity::Error
    } else {
        Severity::Info
    }
}

/// Log a lifecycle event
pub fn log_event(event: Event) {
    Logger::log(severity_for(event), event.as_str(), &[]);
}

/// Log an event with fields
pub fn log_event_with_fields(event: Event, fields: &[(&str, &str)]) {
    Logger::log(severity_for(event), event.as_str(), fields);
}
