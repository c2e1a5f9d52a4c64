//! Metrics registry
//!
//! - Counters only
//! - Monotonic increase
//! - Reset only on process start

use std::sync::atomic::{AtomicU64, Ordering};

use serde::Serialize;

/// Operational counters, shared by every request handler.
///
/// Relaxed ordering is enough: counters are independent and only read for
/// reporting.
#[derive(Debug, Default)]
pub struct MetricsRegistry {
    http_requests: AtomicU64,
    contact_messages_received: AtomicU64,
    validation_failures: AtomicU64,
    portfolio_reads: AtomicU64,
    testimonial_reads: AtomicU64,
    internal_errors: AtomicU64,
}

/// Point-in-time copy of every counter
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct MetricsSnapshot {
    pub http_requests: u64,
    pub contact_messages_received: u64,
    pub validation_failures: u64,
    pub portfolio_reads: u64,
    pub testimonial_reads: u64,
    pub internal_errors: u64,
}

impl MetricsRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment_http_requests(&self) {
        self.http_requests.fetch_add(1, Ordering::Relaxed);
    }

    pub fn increment_contact_messages(&self) {
        self.contact_messages_received
            .fetch_add(1, Ordering::Relaxed);
    }

    pub fn increment_validation_failures(&self) {
        self.validation_failures.fetch_add(1, Ordering::Relaxed);
    }

    pub fn increment_portfolio_reads(&self) {
        self.portfolio_reads.fetch_add(1, Ordering::Relaxed);
    }

    pub fn increment_testimonial_reads(&self) {
        self.testimonial_reads.fetch_add(1, Ordering::Relaxed);
    }

    pub fn increment_internal_errors(&self) {
        self.internal_errors.fetch_add(1, Ordering::Relaxed);
    }

    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            http_requests: self.http_requests.load(Ordering::Relaxed),
            contact_messages_received: self.contact_messages_received.load(Ordering::Relaxed),
            validation_failures: self.validation_failures.load(Ordering::Relaxed),
            portfolio_reads: self.portfolio_reads.load(Ordering::Relaxed),
            testimonial_reads: self.testimonial_reads.load(Ordering::Relaxed),
            internal_errors: self.internal_errors.load(Ordering::Relaxed),
        }
    }
}
