//! Observable events
//!
//! Every log line the server emits names one of these.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    // Lifecycle
    /// Process startup begins
    BootStart,
    /// Configuration resolved
    ConfigLoaded,
    /// Seed file applied to the store
    SeedLoaded,
    /// Listener bound, ready for requests
    Serving,
    /// Listener stopped
    Shutdown,
    /// Startup aborted
    BootFailed,

    // Requests
    /// One HTTP request completed
    HttpRequest,
    /// Contact form stored
    ContactReceived,
    /// Contact form failed validation
    ContactRejected,
    /// Unexpected failure while serving a request
    RequestFailed,
}

impl Event {
    pub fn as_str(&self) -> &'static str {
        match self {
            Event::BootStart => "BOOT_START",
            Event::ConfigLoaded => "CONFIG_LOADED",
            Event::SeedLoaded => "SEED_LOADED",
            Event::Serving => "SERVING",
            Event::Shutdown => "SHUTDOWN",
            Event::BootFailed => "BOOT_FAILED",
            Event::HttpRequest => "HTTP_REQUEST",
            Event::ContactReceived => "CONTACT_RECEIVED",
            Event::ContactRejected => "CONTACT_REJECTED",
            Event::RequestFailed => "REQUEST_FAILED",
        }
    }

    /// Whether the event means the process cannot continue
    pub fn is_fatal(&self) -> bool {
        matches!(self, Event::BootFailed)
    }

    /// Whether the event reports a failed operation
    pub fn is_failure(&self) -> bool {
        matches!(self, Event::RequestFailed | Event::BootFailed)
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
