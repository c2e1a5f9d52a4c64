//! Structured JSON logger
//!
//! - One log line = one event
//! - `event`, `severity`, `ts` first, then fields sorted by key
//! - INFO to stdout, WARN and above to stderr
//! - Synchronous, no buffering

use std::fmt;
use std::io::{self, Write};

use chrono::{SecondsFormat, Utc};

/// Log severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    /// Normal operations
    Info = 0,
    /// Recoverable issues
    Warn = 1,
    /// Operation failures
    Error = 2,
    /// Unrecoverable, process exits
    Fatal = 3,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Info => "INFO",
            Severity::Warn => "WARN",
            Severity::Error => "ERROR",
            Severity::Fatal => "FATAL",
        }
    }

    fn to_stderr(self) -> bool {
        self >= Severity::Warn
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A structured logger that writes one JSON object per line
pub struct Logger;

impl Logger {
    /// Log an event with the given severity and fields
    pub fn log(severity: Severity, event: &str, fields: &[(&str, &str)]) {
        let line = format_line(severity, event, fields);
        // Logging must never take the process down.
        let _ = if severity.to_stderr() {
            write_line(&mut io::stderr().lock(), &line)
        } else {
            write_line(&mut io::stdout().lock(), &line)
        };
    }

    pub fn warn(event: &str, fields: &[(&str, &str)]) {
        Self::log(Severity::Warn, event, fields);
    }
}

fn write_line<W: Write>(writer: &mut W, line: &str) -> io::Result<()> {
    writer.write_all(line.as_bytes())?;
    writer.flush()
}

/// Renders a log line, including the trailing newline.
pub(crate) fn format_line(severity: Severity, event: &str, fields: &[(&str, &str)]) -> String {
    let ts = Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true);

    let mut line = String::with_capacity(128);
    line.push('{');
    push_pair(&mut line, "event", event);
    line.push(',');
    push_pair(&mut line, "severity", severity.as_str());
    line.push(',');
    push_pair(&mut line, "ts", &ts);

    let mut sorted: Vec<_> = fields.iter().collect();
    sorted.sort_by_key(|(key, _)| *key);
    for (key, value) in sorted {
        line.push(',');
        push_pair(&mut line, key, value);
    }

    line.push_str("}\n");
    line
}

fn push_pair(line: &mut String, key: &str, value: &str) {
    line.push_str(&quote(key));
    line.push(':');
    line.push_str(&quote(value));
}

fn quote(s: &str) -> String {
    serde_json::Value::from(s).to_string()
}
