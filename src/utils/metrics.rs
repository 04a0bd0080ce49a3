//! Conversion Metrics
//!
//! Counters for the converter front-end: how many conversions ran, how many
//! failed and why, and how many bytes went in and out.
//!
//! Uses atomic counters so a single `Converter` can be shared across threads.
//! Each `Converter` owns its own instance; there is no process-wide collector.

use serde::Serialize;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Instant;
use tracing::{debug, info};

/// Metrics collector for converter operations
#[derive(Debug)]
pub struct ConversionMetrics {
    /// Total conversions attempted
    pub conversions_total: AtomicU64,
    /// Conversions that produced a value
    pub conversions_success: AtomicU64,
    /// Conversions that failed for any reason
    pub conversions_failed: AtomicU64,
    /// Failures caused by input validation (invalid hex, bad number, size cap)
    pub validation_failures: AtomicU64,
    /// Total input bytes seen
    pub bytes_in: AtomicU64,
    /// Total output bytes produced
    pub bytes_out: AtomicU64,
    /// Start time for uptime calculation
    start_time: Instant,
}

impl ConversionMetrics {
    /// Create a new metrics collector
    pub fn new() -> Self {
        Self {
            conversions_total: AtomicU64::new(0),
            conversions_success: AtomicU64::new(0),
            conversions_failed: AtomicU64::new(0),
            validation_failures: AtomicU64::new(0),
            bytes_in: AtomicU64::new(0),
            bytes_out: AtomicU64::new(0),
            start_time: Instant::now(),
        }
    }

    /// Record a conversion attempt
    pub fn conversion_attempt(&self, input_bytes: u64) {
        self.conversions_total.fetch_add(1, Ordering::Relaxed);
        self.bytes_in.fetch_add(input_bytes, Ordering::Relaxed);
    }

    /// Record a successful conversion
    pub fn conversion_success(&self, output_bytes: u64) {
        self.conversions_success.fetch_add(1, Ordering::Relaxed);
        self.bytes_out.fetch_add(output_bytes, Ordering::Relaxed);
    }

    /// Record a failed conversion
    pub fn conversion_failed(&self, validation: bool) {
        self.conversions_failed.fetch_add(1, Ordering::Relaxed);
        if validation {
            self.validation_failures.fetch_add(1, Ordering::Relaxed);
        }
    }

    /// Zero every counter
    pub fn reset(&self) {
        for counter in [
            &self.conversions_total,
            &self.conversions_success,
            &self.conversions_failed,
            &self.validation_failures,
            &self.bytes_in,
            &self.bytes_out,
        ] {
            counter.store(0, Ordering::Relaxed);
        }
    }

    /// Get current metrics snapshot
    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            conversions_total: self.conversions_total.load(Ordering::Relaxed),
            conversions_success: self.conversions_success.load(Ordering::Relaxed),
            conversions_failed: self.conversions_failed.load(Ordering::Relaxed),
            validation_failures: self.validation_failures.load(Ordering::Relaxed),
            bytes_in: self.bytes_in.load(Ordering::Relaxed),
            bytes_out: self.bytes_out.load(Ordering::Relaxed),
            uptime_seconds: self.start_time.elapsed().as_secs(),
        }
    }

    /// Log current metrics
    pub fn log_summary(&self) {
        let snapshot = self.snapshot();
        info!(
            conversions_total = snapshot.conversions_total,
            conversions_success = snapshot.conversions_success,
            conversions_failed = snapshot.conversions_failed,
            validation_failures = snapshot.validation_failures,
            bytes_in = snapshot.bytes_in,
            bytes_out = snapshot.bytes_out,
            uptime_seconds = snapshot.uptime_seconds,
            "Conversion metrics snapshot"
        );
    }
}

impl Default for ConversionMetrics {
    fn default() -> Self {
        Self::new()
    }
}

/// Snapshot of metrics at a point in time
#[derive(Debug, Clone, Serialize)]
pub struct MetricsSnapshot {
    pub conversions_total: u64,
    pub conversions_success: u64,
    pub conversions_failed: u64,
    pub validation_failures: u64,
    pub bytes_in: u64,
    pub bytes_out: u64,
    pub uptime_seconds: u64,
}

/// Timer for measuring operation duration
pub struct Timer {
    start: Instant,
    operation: &'static str,
}

impl Timer {
    /// Start timing an operation
    pub fn start(operation: &'static str) -> Self {
        Self {
            start: Instant::now(),
            operation,
        }
    }
}

impl Drop for Timer {
    fn drop(&mut self) {
        let duration = self.start.elapsed();
        debug!(
            operation = self.operation,
            duration_us = duration.as_micros() as u64,
            "Operation completed"
        );
    }
}
