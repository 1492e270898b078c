//! Logger metrics for observability
//!
//! Counters for the life of an entry: accepted into the queue, dropped
//! because the queue was full, written by the worker, or failed to write.

use std::sync::atomic::{AtomicU64, Ordering};

/// Metrics for logger observability
///
/// # Example
///
/// ```
/// use safe_toolkit::LoggerMetrics;
///
/// let metrics = LoggerMetrics::new();
///
/// metrics.record_enqueued();
/// metrics.record_dropped();
///
/// assert_eq!(metrics.enqueued(), 1);
/// assert_eq!(metrics.dropped_count(), 1);
/// assert_eq!(metrics.drop_rate(), 50.0);
/// ```
#[derive(Debug)]
pub struct LoggerMetrics {
    /// Entries accepted into the bounded queue
    enqueued: AtomicU64,

    /// Entries rejected because the queue was full
    dropped_count: AtomicU64,

    /// Entries formatted and handed to the sink by the worker
    written: AtomicU64,

    /// Entries the sink failed to accept
    write_errors: AtomicU64,
}

impl LoggerMetrics {
    pub const fn new() -> Self {
        Self {
            enqueued: AtomicU64::new(0),
            dropped_count: AtomicU64::new(0),
            written: AtomicU64::new(0),
            write_errors: AtomicU64::new(0),
        }
    }

    #[inline]
    pub fn enqueued(&self) -> u64 {
        self.enqueued.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn dropped_count(&self) -> u64 {
        self.dropped_count.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn written(&self) -> u64 {
        self.written.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn write_errors(&self) -> u64 {
        self.write_errors.load(Ordering::Relaxed)
    }

    /// Record an accepted entry, returning the previous count
    #[inline]
    pub fn record_enqueued(&self) -> u64 {
        self.enqueued.fetch_add(1, Ordering::Relaxed)
    }

    /// Record a dropped entry, returning the previous count
    #[inline]
    pub fn record_dropped(&self) -> u64 {
        self.dropped_count.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_written(&self) -> u64 {
        self.written.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_write_error(&self) -> u64 {
        self.write_errors.fetch_add(1, Ordering::Relaxed)
    }

    /// Get drop rate as a percentage (0.0 - 100.0) of all qualifying calls
    ///
    /// Returns 0.0 if nothing has been logged.
    pub fn drop_rate(&self) -> f64 {
        let dropped = self.dropped_count() as f64;
        let total = self.enqueued() as f64 + dropped;
        if total == 0.0 {
            0.0
        } else {
            (dropped / total) * 100.0
        }
    }

    pub fn reset(&self) {
        self.enqueued.store(0, Ordering::Relaxed);
        self.dropped_count.store(0, Ordering::Relaxed);
        self.written.store(0, Ordering::Relaxed);
        self.write_errors.store(0, Ordering::Relaxed);
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
            enqueued: AtomicU64::new(self.enqueued()),
            dropped_count: AtomicU64::new(self.dropped_count()),
            written: AtomicU64::new(self.written()),
            write_errors: AtomicU64::new(self.write_errors()),
        }
    }
}
