use serde::Serialize;

/// One ranked row of a speaker report.
///
/// `party` is `None` exactly when the politician has no party affiliation;
/// unaffiliated speakers are never excluded from aggregates.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpeakerStat {
    pub speaker: String,
    pub party: Option<String>,
    pub value: f64,
}

/// Corpus-wide counts plus the integrity probes, for the summary endpoint
/// and the startup/periodic integrity check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CorpusSummary {
    pub speeches: u64,
    pub politicians: u64,
    pub parties: u64,
    /// Speeches whose nrc_encoding reference resolves to no row.
    pub speeches_missing_encoding: u64,
    /// Speeches whose speaker reference resolves to no row.
    pub speeches_missing_speaker: u64,
}

impl CorpusSummary {
    pub fn is_consistent(&self) -> bool {
        self.speeches_missing_encoding == 0 && self.speeches_missing_speaker == 0
    }
}
