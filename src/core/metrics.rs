//! Logger metrics for observability
//!
//! Counts what happened to the events that passed the level filter: written,
//! failed to render, failed to write. Suppressed events are never counted, so
//! a filtered call costs exactly one comparison.

use std::sync::atomic::{AtomicU64, Ordering};

/// Counters describing logger health
///
/// # Example
///
/// ```
/// use rust_kv_logger::LoggerMetrics;
///
/// let metrics = LoggerMetrics::new();
/// metrics.record_logged();
/// metrics.record_write_failure();
///
/// assert_eq!(metrics.total_logged(), 1);
/// assert_eq!(metrics.failure_count(), 1);
/// ```
#[derive(Debug)]
pub struct LoggerMetrics {
    /// Messages handed to the sink successfully
    total_logged: AtomicU64,

    /// Events the formatter could not render
    render_failures: AtomicU64,

    /// Messages the sink rejected
    write_failures: AtomicU64,

    /// Failures that could not be handed to a notifier thread
    notifications_dropped: AtomicU64,
}

impl LoggerMetrics {
    /// Create a new metrics instance with all counters at zero
    pub const fn new() -> Self {
        Self {
            total_logged: AtomicU64::new(0),
            render_failures: AtomicU64::new(0),
            write_failures: AtomicU64::new(0),
            notifications_dropped: AtomicU64::new(0),
        }
    }

    #[inline]
    pub fn total_logged(&self) -> u64 {
        self.total_logged.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn render_failures(&self) -> u64 {
        self.render_failures.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn write_failures(&self) -> u64 {
        self.write_failures.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn notifications_dropped(&self) -> u64 {
        self.notifications_dropped.load(Ordering::Relaxed)
    }

    /// Render and write failures together
    pub fn failure_count(&self) -> u64 {
        self.render_failures() + self.write_failures()
    }

    /// Record a successfully written message, returning the previous count
    #[inline]
    pub fn record_logged(&self) -> u64 {
        self.total_logged.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_render_failure(&self) -> u64 {
        self.render_failures.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_write_failure(&self) -> u64 {
        self.write_failures.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_notification_dropped(&self) -> u64 {
        self.notifications_dropped.fetch_add(1, Ordering::Relaxed)
    }

    /// Failure rate as a percentage (0.0 - 100.0)
    ///
    /// Returns 0.0 if nothing passed the level filter yet.
    pub fn failure_rate(&self) -> f64 {
        let failed = self.failure_count() as f64;
        let total = self.total_logged() as f64 + failed;
        if total == 0.0 {
            0.0
        } else {
            (failed / total) * 100.0
        }
    }

    /// Reset all metrics to zero
    pub fn reset(&self) {
        self.total_logged.store(0, Ordering::Relaxed);
        self.render_failures.store(0, Ordering::Relaxed);
        self.write_failures.store(0, Ordering::Relaxed);
        self.notifications_dropped.store(0, Ordering::Relaxed);
    }
}

impl Default for LoggerMetrics {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for LoggerMetrics {
    /// Create a snapshot of the current metrics values
    fn clone(&self) -> Self {
        Self {
            total_logged: AtomicU64::new(self.total_logged()),
            render_failures: AtomicU64::new(self.render_failures()),
            write_failures: AtomicU64::new(self.write_failures()),
            notifications_dropped: AtomicU64::new(self.notifications_dropped()),
        }
    }
}
