//! # Metrics
//!
//! Operation counters for queues. A `Metrics` handle is cheap to clone and
//! every clone feeds the same counters, so several queues can report into
//! one collector.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Metrics collector
#[derive(Debug, Clone, Default)]
pub struct Metrics {
    inner: Arc<MetricsInner>,
}

#[derive(Debug, Default)]
struct MetricsInner {
    // Element traffic
    inserts: AtomicU64,
    removals: AtomicU64,
    releases: AtomicU64,
    allocation_failures: AtomicU64,

    // Algorithms
    structural_ops: AtomicU64,
    sorts: AtomicU64,
    merges: AtomicU64,
}

impl Metrics {
    /// Create new metrics collector
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a successful insert
    pub fn record_insert(&self) {
        self.inner.inserts.fetch_add(1, Ordering::Relaxed);
    }

    /// Record an element handed to a caller by a remove
    pub fn record_removal(&self) {
        self.inner.removals.fetch_add(1, Ordering::Relaxed);
    }

    /// Record elements released by the queue itself
    pub fn record_releases(&self, count: u64) {
        self.inner.releases.fetch_add(count, Ordering::Relaxed);
    }

    /// Record an insert rejected for lack of storage or capacity
    pub fn record_allocation_failure(&self) {
        self.inner.allocation_failures.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_structural_op(&self) {
        self.inner.structural_ops.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_sort(&self) {
        self.inner.sorts.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_merge(&self) {
        self.inner.merges.fetch_add(1, Ordering::Relaxed);
    }

    /// Get current metrics snapshot
    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            inserts: self.inner.inserts.load(Ordering::Relaxed),
            removals: self.inner.removals.load(Ordering::Relaxed),
            releases: self.inner.releases.load(Ordering::Relaxed),
            allocation_failures: self.inner.allocation_failures.load(Ordering::Relaxed),
            structural_ops: self.inner.structural_ops.load(Ordering::Relaxed),
            sorts: self.inner.sorts.load(Ordering::Relaxed),
            merges: self.inner.merges.load(Ordering::Relaxed),
        }
    }
}

/// Metrics snapshot
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MetricsSnapshot {
    pub inserts: u64,
    pub removals: u64,
    pub releases: u64,
    pub allocation_failures: u64,
    pub structural_ops: u64,
    pub sorts: u64,
    pub merges: u64,
}

/// Timer for measuring operation duration
pub struct Timer {
    start: Instant,
    name: &'static str,
}

impl Timer {
    /// Start new timer
    pub fn new(name: &'static str) -> Self {
        Self {
            start: Instant::now(),
            name,
        }
    }

    /// Get elapsed time
    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }

    /// Stop timer and log duration
    pub fn stop(self) {
        let duration = self.elapsed();
        tracing::debug!(
            name = self.name,
            duration_us = duration.as_micros() as u64,
            "Operation completed"
        );
    }
}
