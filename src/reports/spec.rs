use super::{Aggregate, Metric, ReportError, SortDirection};
use serde::Serialize;

pub const DEFAULT_LIMIT: usize = 10;

/// A fully validated ranking query: group speeches by speaker, aggregate the
/// metric, sort, truncate. Consumed by the store as-is; every report is one
/// of these plus the degenerate corpus total.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ReportSpec {
    pub metric: Metric,
    pub aggregate: Aggregate,
    pub direction: SortDirection,
    pub limit: usize,
}

impl ReportSpec {
    /// Validates and builds a spec from caller-supplied parts.
    pub fn new(
        metric: Metric,
        aggregate: Aggregate,
        direction: SortDirection,
        limit: i64,
    ) -> Result<Self, ReportError> {
        if limit <= 0 {
            return Err(ReportError::InvalidLimit(limit));
        }
        // There is no per-speech column behind the speech-count metric, so an
        // average over it has nothing to aggregate.
        if aggregate == Aggregate::Average && metric == Metric::SpeechCount {
            return Err(ReportError::InvalidMetric(
                "speech_count cannot be averaged".to_string(),
            ));
        }
        Ok(Self {
            metric,
            aggregate,
            direction,
            limit: limit as usize,
        })
    }

    /// Const constructor for the canonical catalog entries, which are valid
    /// by construction.
    pub(crate) const fn canonical(
        metric: Metric,
        aggregate: Aggregate,
        direction: SortDirection,
    ) -> Self {
        Self {
            metric,
            aggregate,
            direction,
            limit: DEFAULT_LIMIT,
        }
    }
}
