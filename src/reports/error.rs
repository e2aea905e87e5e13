use thiserror::Error;

/// Errors surfaced by report execution.
///
/// Validation failures (`InvalidMetric`, `InvalidLimit`) are caller mistakes;
/// `MissingEncoding` is a corpus integrity violation that must never be
/// silently absorbed, since dropping the affected speeches would skew every
/// average; `Store` propagates the underlying database failure unmodified.
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("unknown metric: {0}")]
    InvalidMetric(String),

    #[error("limit must be positive, got {0}")]
    InvalidLimit(i64),

    #[error("{count} speech(es) have no emotion encoding")]
    MissingEncoding { count: u64 },

    #[error("store error: {0}")]
    Store(#[source] anyhow::Error),
}
