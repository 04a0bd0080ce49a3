//! # Utility Modules
//!
//! Supporting utilities for the converter front-end and binary.
//!
//! ## Components
//! - **Logging**: `tracing-subscriber` setup from `LoggingConfig`
//! - **Metrics**: Thread-safe conversion counters and an operation timer
//!
//! The codec core depends on neither.

pub mod logging;
pub mod metrics;

pub use metrics::{ConversionMetrics, MetricsSnapshot};
