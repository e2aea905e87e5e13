mod catalog;
mod engine;
mod error;
mod metric;
mod spec;

pub use catalog::{find_report, ReportDefinition, ReportKind, ReportListing, CANONICAL_REPORTS};
pub use engine::{ReportEngine, ReportOutput};
pub use error::ReportError;
pub use metric::{Aggregate, Emotion, Metric, SortDirection};
pub use spec::{ReportSpec, DEFAULT_LIMIT};
