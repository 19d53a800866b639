//! Observability utilities for Confab.
//!
//! Provides tracing subscriber setup with optional OpenTelemetry export.

pub mod tracing_setup;
