use anyhow::{Context, Result};
use std::sync::Arc;
use std::time::{Duration, Instant};

use tracing::info;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    middleware,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};

use super::{log_requests, metrics, state::*, RequestsLoggingLevel, ServerConfig};
use crate::reports::{
    find_report, Aggregate, Metric, ReportEngine, ReportError, ReportSpec, SortDirection,
    CANONICAL_REPORTS, DEFAULT_LIMIT,
};

#[derive(Serialize)]
struct ServerStats {
    pub uptime: String,
    pub hash: String,
}

fn format_uptime(duration: Duration) -> String {
    let total_seconds = duration.as_secs();

    let days = total_seconds / 86_400;
    let hours = (total_seconds % 86_400) / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;

    format!("{}d {:02}:{:02}:{:02}", days, hours, minutes, seconds)
}

async fn home(State(state): State<ServerState>) -> impl IntoResponse {
    let stats = ServerStats {
        uptime: format_uptime(state.start_time.elapsed()),
        hash: state.hash.clone(),
    };
    Json(stats)
}

fn report_error_response(err: &ReportError) -> Response {
    let status = match err {
        ReportError::InvalidMetric(_) | ReportError::InvalidLimit(_) => StatusCode::BAD_REQUEST,
        ReportError::MissingEncoding { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        ReportError::Store(_) => StatusCode::SERVICE_UNAVAILABLE,
    };
    (status, err.to_string()).into_response()
}

async fn list_reports(State(_engine): State<GuardedReportEngine>) -> Response {
    let listings: Vec<_> = CANONICAL_REPORTS
        .iter()
        .map(|report| report.listing())
        .collect();
    Json(listings).into_response()
}

async fn run_report(
    State(engine): State<GuardedReportEngine>,
    Path(id): Path<String>,
) -> Response {
    let Some(definition) = find_report(&id) else {
        return (StatusCode::NOT_FOUND, format!("unknown report: {}", id)).into_response();
    };

    let start = Instant::now();
    match engine.run(definition) {
        Ok(output) => {
            metrics::record_report_execution(definition.id, "ok", start.elapsed());
            Json(output).into_response()
        }
        Err(err) => {
            metrics::record_report_execution(definition.id, "error", start.elapsed());
            report_error_response(&err)
        }
    }
}

#[derive(Deserialize, Debug)]
struct CustomReportQuery {
    pub metric: String,
    pub aggregate: Option<String>,
    pub direction: Option<String>,
    pub limit: Option<i64>,
}

impl CustomReportQuery {
    fn into_spec(self) -> Result<ReportSpec, Response> {
        let metric = Metric::parse(&self.metric)
            .ok_or_else(|| report_error_response(&ReportError::InvalidMetric(self.metric.clone())))?;

        let aggregate = match self.aggregate.as_deref() {
            Some(s) => Aggregate::parse(s).ok_or_else(|| {
                (StatusCode::BAD_REQUEST, format!("unknown aggregate: {}", s)).into_response()
            })?,
            // Sensible default per metric: volume is counted, emotions are
            // averaged.
            None => match metric {
                Metric::SpeechCount => Aggregate::Count,
                Metric::Emotion(_) => Aggregate::Average,
            },
        };

        let direction = match self.direction.as_deref() {
            Some(s) => SortDirection::parse(s).ok_or_else(|| {
                (StatusCode::BAD_REQUEST, format!("unknown direction: {}", s)).into_response()
            })?,
            None => SortDirection::Descending,
        };

        let limit = self.limit.unwrap_or(DEFAULT_LIMIT as i64);

        ReportSpec::new(metric, aggregate, direction, limit)
            .map_err(|err| report_error_response(&err))
    }
}

async fn run_custom_report(
    State(engine): State<GuardedReportEngine>,
    Query(query): Query<CustomReportQuery>,
) -> Response {
    let spec = match query.into_spec() {
        Ok(spec) => spec,
        Err(response) => return response,
    };

    let start = Instant::now();
    match engine.run_spec(&spec) {
        Ok(rows) => {
            metrics::record_report_execution("custom", "ok", start.elapsed());
            Json(serde_json::json!({ "spec": spec, "rows": rows })).into_response()
        }
        Err(err) => {
            metrics::record_report_execution("custom", "error", start.elapsed());
            report_error_response(&err)
        }
    }
}

async fn corpus_summary(State(engine): State<GuardedReportEngine>) -> Response {
    match engine.corpus_summary() {
        Ok(summary) => Json(serde_json::json!({
            "speeches": summary.speeches,
            "politicians": summary.politicians,
            "parties": summary.parties,
            "speeches_missing_encoding": summary.speeches_missing_encoding,
            "speeches_missing_speaker": summary.speeches_missing_speaker,
            "consistent": summary.is_consistent(),
        }))
        .into_response(),
        Err(err) => report_error_response(&err),
    }
}

async fn health() -> impl IntoResponse {
    StatusCode::OK
}

pub fn make_app(config: ServerConfig, engine: Arc<ReportEngine>) -> Router {
    let state = ServerState::new(config, engine);

    let report_routes: Router = Router::new()
        .route("/", get(list_reports))
        .route("/custom", get(run_custom_report))
        .route("/{id}", get(run_report))
        .with_state(state.clone());

    let corpus_routes: Router = Router::new()
        .route("/summary", get(corpus_summary))
        .with_state(state.clone());

    let mut app: Router = Router::new()
        .route("/", get(home))
        .route("/health", get(health))
        .with_state(state.clone())
        .nest("/v1/reports", report_routes)
        .nest("/v1/corpus", corpus_routes);

    #[cfg(feature = "slowdown")]
    {
        app = app.layer(middleware::from_fn(super::slowdown_request));
    }
    app = app.layer(middleware::from_fn_with_state(state, log_requests));

    app
}

fn make_metrics_app() -> Router {
    Router::new().route("/metrics", get(metrics::metrics_handler))
}

pub async fn run_server(
    engine: Arc<ReportEngine>,
    requests_logging_level: RequestsLoggingLevel,
    port: u16,
    metrics_port: u16,
) -> Result<()> {
    let config = ServerConfig {
        port,
        requests_logging_level,
    };
    let app = make_app(config, engine);

    // Metrics get their own listener so the scrape endpoint never sits
    // behind the public port.
    let metrics_listener = tokio::net::TcpListener::bind(format!("127.0.0.1:{}", metrics_port))
        .await
        .with_context(|| format!("Failed to bind metrics port {}", metrics_port))?;
    tokio::spawn(async move {
        if let Err(err) = axum::serve(metrics_listener, make_metrics_app()).await {
            tracing::error!("Metrics server failed: {}", err);
        }
    });
    info!("Metrics available at port {}", metrics_port);

    let listener = tokio::net::TcpListener::bind(format!("127.0.0.1:{}", port))
        .await
        .with_context(|| format!("Failed to bind port {}", port))?;

    Ok(axum::serve(listener, app).await?)
}
