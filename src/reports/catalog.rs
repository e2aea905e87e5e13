//! The canonical report catalog.
//!
//! Adding a report is a new entry here, not new execution logic. Identifiers
//! are stable API consumed by the dashboard.

use super::{Aggregate, Emotion, Metric, ReportSpec, SortDirection};
use serde::Serialize;

#[derive(Debug)]
pub enum ReportKind {
    TotalSpeeches,
    Ranking(ReportSpec),
}

#[derive(Debug)]
pub struct ReportDefinition {
    pub id: &'static str,
    pub title: &'static str,
    pub kind: ReportKind,
}

const fn top(emotion: Emotion) -> ReportKind {
    ReportKind::Ranking(ReportSpec::canonical(
        Metric::Emotion(emotion),
        Aggregate::Average,
        SortDirection::Descending,
    ))
}

const fn bottom(emotion: Emotion) -> ReportKind {
    ReportKind::Ranking(ReportSpec::canonical(
        Metric::Emotion(emotion),
        Aggregate::Average,
        SortDirection::Ascending,
    ))
}

/// The fixed report set mirrored from the dashboard: the corpus total, the
/// most/least active speakers, and top/bottom speakers for the five reported
/// emotion dimensions. The remaining NRC dimensions stay reachable through
/// ad-hoc specs.
pub const CANONICAL_REPORTS: &[ReportDefinition] = &[
    ReportDefinition {
        id: "total_speeches",
        title: "Total speeches in the corpus",
        kind: ReportKind::TotalSpeeches,
    },
    ReportDefinition {
        id: "most_active_speakers",
        title: "Speakers with the most speeches",
        kind: ReportKind::Ranking(ReportSpec::canonical(
            Metric::SpeechCount,
            Aggregate::Count,
            SortDirection::Descending,
        )),
    },
    ReportDefinition {
        id: "least_active_speakers",
        title: "Speakers with the fewest speeches",
        kind: ReportKind::Ranking(ReportSpec::canonical(
            Metric::SpeechCount,
            Aggregate::Count,
            SortDirection::Ascending,
        )),
    },
    ReportDefinition {
        id: "top_anger",
        title: "Speakers with the highest average anger",
        kind: top(Emotion::Anger),
    },
    ReportDefinition {
        id: "bottom_anger",
        title: "Speakers with the lowest average anger",
        kind: bottom(Emotion::Anger),
    },
    ReportDefinition {
        id: "top_disgust",
        title: "Speakers with the highest average disgust",
        kind: top(Emotion::Disgust),
    },
    ReportDefinition {
        id: "bottom_disgust",
        title: "Speakers with the lowest average disgust",
        kind: bottom(Emotion::Disgust),
    },
    ReportDefinition {
        id: "top_fear",
        title: "Speakers with the highest average fear",
        kind: top(Emotion::Fear),
    },
    ReportDefinition {
        id: "bottom_fear",
        title: "Speakers with the lowest average fear",
        kind: bottom(Emotion::Fear),
    },
    ReportDefinition {
        id: "top_joy",
        title: "Speakers with the highest average joy",
        kind: top(Emotion::Joy),
    },
    ReportDefinition {
        id: "bottom_joy",
        title: "Speakers with the lowest average joy",
        kind: bottom(Emotion::Joy),
    },
    ReportDefinition {
        id: "top_sadness",
        title: "Speakers with the highest average sadness",
        kind: top(Emotion::Sadness),
    },
    ReportDefinition {
        id: "bottom_sadness",
        title: "Speakers with the lowest average sadness",
        kind: bottom(Emotion::Sadness),
    },
];

/// Looks up a canonical report by its identifier.
pub fn find_report(id: &str) -> Option<&'static ReportDefinition> {
    CANONICAL_REPORTS.iter().find(|report| report.id == id)
}

/// Catalog entry as listed by the HTTP API: identifier, title, and the
/// underlying spec (absent for the scalar total).
#[derive(Debug, Serialize)]
pub struct ReportListing {
    pub id: &'static str,
    pub title: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spec: Option<ReportSpec>,
}

impl ReportDefinition {
    pub fn listing(&self) -> ReportListing {
        ReportListing {
            id: self.id,
            title: self.title,
            spec: match &self.kind {
                ReportKind::TotalSpeeches => None,
                ReportKind::Ranking(spec) => Some(*spec),
            },
        }
    }
}
