use once_cell::sync::Lazy;
use prometheus::{register_int_counter, Encoder, IntCounter, TextEncoder};

// Prometheus metrics (default registry)
pub static LIST_REQUESTS_TOTAL: Lazy<IntCounter> = Lazy::new(|| {
    register_int_counter!(
        "todo_api_list_requests_total",
        "Total todo list requests served"
    )
    .expect("register list_requests_total")
});

pub static CREATED_TOTAL: Lazy<IntCounter> = Lazy::new(|| {
    register_int_counter!(
        "todo_api_created_total",
        "Total todos created"
    )
    .expect("register created_total")
});

pub static VALIDATION_FAILURES_TOTAL: Lazy<IntCounter> = Lazy::new(|| {
    register_int_counter!(
        "todo_api_validation_failures_total",
        "Total create requests rejected by validation or payload parsing"
    )
    .expect("register validation_failures_total")
});

pub static STORAGE_ERRORS_TOTAL: Lazy<IntCounter> = Lazy::new(|| {
    register_int_counter!(
        "todo_api_storage_errors_total",
        "Total requests that failed in the storage layer"
    )
    .expect("register storage_errors_total")
});

/// Touch every metric so it appears in the exposition before first use.
pub fn init() {
    Lazy::force(&LIST_REQUESTS_TOTAL);
    Lazy::force(&CREATED_TOTAL);
    Lazy::force(&VALIDATION_FAILURES_TOTAL);
    Lazy::force(&STORAGE_ERRORS_TOTAL);
}

pub fn encode_metrics() -> (axum::http::StatusCode, String) {
    let encoder = TextEncoder::new();
    let metric_families = prometheus::gather();
    let mut buffer = Vec::new();
    if let Err(e) = encoder.encode(&metric_families, &mut buffer) {
        return (
            axum::http::StatusCode::INTERNAL_SERVER_ERROR,
            format!("metrics encode error: {e}"),
        );
    }
    (
        axum::http::StatusCode::OK,
        String::from_utf8(buffer).unwrap_or_default(),
    )
}
