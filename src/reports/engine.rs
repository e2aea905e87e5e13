//! Report execution over the corpus store.

use super::catalog::{ReportDefinition, ReportKind};
use super::{Aggregate, ReportError, ReportSpec};
use crate::corpus_store::{CorpusStore, CorpusSummary, SpeakerStat};
use serde::Serialize;
use std::sync::Arc;

/// Result of running a report: either the scalar corpus total or ranked
/// speaker rows.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum ReportOutput {
    Total { total: u64 },
    Ranking { rows: Vec<SpeakerStat> },
}

/// Executes report specs against a corpus store. Stateless besides the store
/// handle; every run is one synchronous read.
pub struct ReportEngine {
    store: Arc<dyn CorpusStore>,
}

impl ReportEngine {
    pub fn new(store: Arc<dyn CorpusStore>) -> Self {
        Self { store }
    }

    /// Runs a catalog report.
    pub fn run(&self, definition: &ReportDefinition) -> Result<ReportOutput, ReportError> {
        match &definition.kind {
            ReportKind::TotalSpeeches => {
                let total = self.total_speeches()?;
                Ok(ReportOutput::Total { total })
            }
            ReportKind::Ranking(spec) => {
                let rows = self.run_spec(spec)?;
                Ok(ReportOutput::Ranking { rows })
            }
        }
    }

    /// Runs an ad-hoc ranking spec.
    ///
    /// Average-based reports first probe for speeches with a broken encoding
    /// join: the inner join would silently drop them and skew every average,
    /// so their presence is an error, not a filter.
    pub fn run_spec(&self, spec: &ReportSpec) -> Result<Vec<SpeakerStat>, ReportError> {
        if spec.aggregate == Aggregate::Average {
            let missing = self
                .store
                .count_speeches_missing_encoding()
                .map_err(ReportError::Store)?;
            if missing > 0 {
                return Err(ReportError::MissingEncoding { count: missing });
            }
        }
        self.store.rank_speakers(spec).map_err(ReportError::Store)
    }

    /// The degenerate scalar report: total speech count, 0 for an empty
    /// corpus.
    pub fn total_speeches(&self) -> Result<u64, ReportError> {
        self.store.count_speeches().map_err(ReportError::Store)
    }

    /// Corpus-wide counts plus integrity probes.
    pub fn corpus_summary(&self) -> Result<CorpusSummary, ReportError> {
        let summary = CorpusSummary {
            speeches: self.store.count_speeches().map_err(ReportError::Store)?,
            politicians: self.store.count_politicians().map_err(ReportError::Store)?,
            parties: self.store.count_parties().map_err(ReportError::Store)?,
            speeches_missing_encoding: self
                .store
                .count_speeches_missing_encoding()
                .map_err(ReportError::Store)?,
            speeches_missing_speaker: self
                .store
                .count_speeches_missing_speaker()
                .map_err(ReportError::Store)?,
        };
        Ok(summary)
    }
}
