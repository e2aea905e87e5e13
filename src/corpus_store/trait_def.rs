//! CorpusStore trait definition.
//!
//! The seam between the reporting engine and the relational corpus store.
//! The store is read-only from the engine's point of view: the external
//! bulk loaders own every row.

use super::models::SpeakerStat;
use crate::reports::ReportSpec;
use anyhow::Result;

pub trait CorpusStore: Send + Sync {
    /// Execute one grouped-aggregate ranking over the speech corpus.
    ///
    /// Groups speeches by politician (joined to party for display), computes
    /// the spec's aggregate, orders by the aggregate value in the requested
    /// direction with politician id ascending as tie-break, truncates to the
    /// spec's limit. Politicians with no speeches never appear; grouping is
    /// driven by the speech rows themselves.
    fn rank_speakers(&self, spec: &ReportSpec) -> Result<Vec<SpeakerStat>>;

    /// Total number of speeches in the corpus. 0 for an empty corpus.
    fn count_speeches(&self) -> Result<u64>;

    /// Number of politician rows (loaded speakers, whether or not they spoke).
    fn count_politicians(&self) -> Result<u64>;

    /// Number of party rows.
    fn count_parties(&self) -> Result<u64>;

    // =========================================================================
    // Integrity probes
    // =========================================================================

    /// Speeches whose `nrc_encoding` reference resolves to no encoding row.
    /// Must be 0 for averages to be trustworthy.
    fn count_speeches_missing_encoding(&self) -> Result<u64>;

    /// Speeches whose `speaker` reference resolves to no politician row.
    fn count_speeches_missing_speaker(&self) -> Result<u64>;
}
