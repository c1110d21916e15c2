//! Observability: structured logging and metrics.
//!
//! # Design Decisions
//! - tracing for structured logs, format selected by config
//! - Prometheus exporter on its own listener, off by default

pub mod logging;
pub mod metrics;
