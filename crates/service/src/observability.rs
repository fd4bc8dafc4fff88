use once_cell::sync::Lazy;
use prometheus::{
    register_histogram_vec, register_int_counter_vec, Encoder, HistogramVec, IntCounterVec,
    TextEncoder,
};

// Prometheus metrics (default registry)
pub static UPSTREAM_REQUESTS_TOTAL: Lazy<IntCounterVec> = Lazy::new(|| {
    register_int_counter_vec!(
        "employee_api_upstream_requests_total",
        "Upstream round-trips by operation and outcome",
        &["op", "outcome"]
    )
    .expect("register upstream_requests_total")
});

pub static UPSTREAM_DURATION: Lazy<HistogramVec> = Lazy::new(|| {
    register_histogram_vec!(
        "employee_api_upstream_duration_seconds",
        "Upstream round-trip duration in seconds",
        &["op"],
        vec![0.005, 0.01, 0.025, 0.05, 0.1, 0.25, 0.5, 1.0, 2.5, 5.0, 10.0, 30.0]
    )
    .expect("register upstream_duration")
});

pub fn record_upstream(op: &str, ok: bool, elapsed_secs: f64) {
    let outcome = if ok { "ok" } else { "error" };
    UPSTREAM_REQUESTS_TOTAL.with_label_values(&[op, outcome]).inc();
    UPSTREAM_DURATION.with_label_values(&[op]).observe(elapsed_secs);
}

/// Render the default registry in the text exposition format.
pub fn encode_metrics() -> Result<String, String> {
    let encoder = TextEncoder::new();
    let metric_families = prometheus::gather();
    let mut buffer = Vec::new();
    encoder
        .encode(&metric_families, &mut buffer)
        .map_err(|e| format!("metrics encode error: {e}"))?;
    String::from_utf8(buffer).map_err(|e| format!("metrics encode error: {e}"))
}
