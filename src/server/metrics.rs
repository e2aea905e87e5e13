use axum::{http::StatusCode, response::IntoResponse};
use lazy_static::lazy_static;
use prometheus::{
    CounterVec, Encoder, GaugeVec, HistogramOpts, HistogramVec, Opts, Registry, TextEncoder,
};
use std::time::Duration;

/// Metric name prefix for all report-server metrics
const PREFIX: &str = "emolex";

lazy_static! {
    // Global Prometheus registry
    pub static ref REGISTRY: Registry = Registry::new();

    // HTTP Request Metrics
    pub static ref HTTP_REQUESTS_TOTAL: CounterVec = CounterVec::new(
        Opts::new(format!("{PREFIX}_http_requests_total"), "Total number of HTTP requests"),
        &["method", "path", "status"]
    ).expect("Failed to create http_requests_total metric");

    pub static ref HTTP_REQUEST_DURATION_SECONDS: HistogramVec = HistogramVec::new(
        HistogramOpts::new(
            format!("{PREFIX}_http_request_duration_seconds"),
            "HTTP request duration in seconds"
        )
        .buckets(vec![0.001, 0.01, 0.05, 0.1, 0.5, 1.0, 2.0, 5.0]),
        &["method", "path"]
    ).expect("Failed to create http_request_duration_seconds metric");

    // Report Execution Metrics
    pub static ref REPORT_EXECUTIONS_TOTAL: CounterVec = CounterVec::new(
        Opts::new(format!("{PREFIX}_report_executions_total"), "Report executions by outcome"),
        &["report", "status"]
    ).expect("Failed to create report_executions_total metric");

    pub static ref REPORT_DURATION_SECONDS: HistogramVec = HistogramVec::new(
        HistogramOpts::new(
            format!("{PREFIX}_report_duration_seconds"),
            "Report execution duration in seconds"
        )
        .buckets(vec![0.001, 0.01, 0.05, 0.1, 0.5, 1.0, 5.0]),
        &["report"]
    ).expect("Failed to create report_duration_seconds metric");

    // Database Metrics
    pub static ref DB_QUERY_DURATION_SECONDS: HistogramVec = HistogramVec::new(
        HistogramOpts::new(
            format!("{PREFIX}_db_query_duration_seconds"),
            "Database query duration in seconds"
        )
        .buckets(vec![0.001, 0.01, 0.05, 0.1, 0.5, 1.0]),
        &["operation"]
    ).expect("Failed to create db_query_duration_seconds metric");

    // Corpus Metrics
    pub static ref CORPUS_ITEMS_TOTAL: GaugeVec = GaugeVec::new(
        Opts::new(format!("{PREFIX}_corpus_items_total"), "Corpus entity counts at startup"),
        &["entity"]
    ).expect("Failed to create corpus_items_total metric");

    pub static ref CORPUS_INTEGRITY_VIOLATIONS: GaugeVec = GaugeVec::new(
        Opts::new(
            format!("{PREFIX}_corpus_integrity_violations"),
            "Speeches with broken references, by probe"
        ),
        &["probe"]
    ).expect("Failed to create corpus_integrity_violations metric");
}

/// Initialize all metrics and register them with the Prometheus registry
pub fn init_metrics() {
    // Register all metrics - ignore errors if already registered (for tests)
    let _ = REGISTRY.register(Box::new(HTTP_REQUESTS_TOTAL.clone()));
    let _ = REGISTRY.register(Box::new(HTTP_REQUEST_DURATION_SECONDS.clone()));
    let _ = REGISTRY.register(Box::new(REPORT_EXECUTIONS_TOTAL.clone()));
    let _ = REGISTRY.register(Box::new(REPORT_DURATION_SECONDS.clone()));
    let _ = REGISTRY.register(Box::new(DB_QUERY_DURATION_SECONDS.clone()));
    let _ = REGISTRY.register(Box::new(CORPUS_ITEMS_TOTAL.clone()));
    let _ = REGISTRY.register(Box::new(CORPUS_INTEGRITY_VIOLATIONS.clone()));

    tracing::info!("Metrics system initialized successfully");
}

/// Initialize corpus-size gauges from the opened store
pub fn init_corpus_metrics(num_speeches: u64, num_politicians: u64, num_parties: u64) {
    CORPUS_ITEMS_TOTAL
        .with_label_values(&["speech"])
        .set(num_speeches as f64);

    CORPUS_ITEMS_TOTAL
        .with_label_values(&["politician"])
        .set(num_politicians as f64);

    CORPUS_ITEMS_TOTAL
        .with_label_values(&["party"])
        .set(num_parties as f64);

    tracing::info!(
        "Corpus metrics initialized: {} speeches, {} politicians, {} parties",
        num_speeches,
        num_politicians,
        num_parties
    );
}

pub fn record_http_request(method: &str, path: &str, status: u16, duration: Duration) {
    HTTP_REQUESTS_TOTAL
        .with_label_values(&[method, path, &status.to_string()])
        .inc();

    HTTP_REQUEST_DURATION_SECONDS
        .with_label_values(&[method, path])
        .observe(duration.as_secs_f64());
}

pub fn record_report_execution(report: &str, status: &str, duration: Duration) {
    REPORT_EXECUTIONS_TOTAL
        .with_label_values(&[report, status])
        .inc();

    REPORT_DURATION_SECONDS
        .with_label_values(&[report])
        .observe(duration.as_secs_f64());
}

pub fn record_db_query(operation: &str, duration: Duration) {
    DB_QUERY_DURATION_SECONDS
        .with_label_values(&[operation])
        .observe(duration.as_secs_f64());
}

pub fn record_integrity_violations(probe: &str, count: u64) {
    CORPUS_INTEGRITY_VIOLATIONS
        .with_label_values(&[probe])
        .set(count as f64);
}

/// Handler for the /metrics endpoint
pub async fn metrics_handler() -> impl IntoResponse {
    let encoder = TextEncoder::new();
    let metric_families = REGISTRY.gather();

    let mut buffer = vec![];
    match encoder.encode(&metric_families, &mut buffer) {
        Ok(()) => {
            let response = String::from_utf8(buffer).unwrap_or_else(|_| String::from(""));
            (StatusCode::OK, response)
        }
        Err(e) => {
            tracing::error!("Failed to encode metrics: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Failed to encode metrics: {}", e),
            )
        }
    }
}
