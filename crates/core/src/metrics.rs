//! Metrics definitions for the gateway.
//!
//! This module defines all metrics used throughout the gateway.
//! Metrics are collected using the `metrics` crate and can be exported
//! to Prometheus via `metrics-exporter-prometheus`.

use metrics::{counter, describe_counter};

/// Initialize all metric descriptions.
/// Call this once at startup before any metrics are recorded.
pub fn init_metrics() {
    describe_counter!(
        "upstream_requests_total",
        "Total number of requests issued to the upstream REST API"
    );
    describe_counter!(
        "upstream_errors_total",
        "Total number of failed upstream requests"
    );
}

/// Record an upstream request.
///
/// # Arguments
/// * `endpoint` - The upstream endpoint ("bootstrap-static" or "element-summary")
pub fn record_upstream_request(endpoint: &str) {
    counter!("upstream_requests_total", "endpoint" => endpoint.to_string()).increment(1);
}

/// Record a failed upstream request.
///
/// # Arguments
/// * `endpoint` - The upstream endpoint ("bootstrap-static" or "element-summary")
/// * `kind` - The failure kind ("transport", "status" or "decode")
pub fn record_upstream_error(endpoint: &str, kind: &str) {
    counter!("upstream_errors_total", "endpoint" => endpoint.to_string(), "kind" => kind.to_string())
        .increment(1);
}
