//! Shared constants for end-to-end tests
//!
//! This module contains all constants used across the test suite.
//! When the seeded corpus changes, update only this file.

// ============================================================================
// Seeded corpus shape
// ============================================================================

/// Speaker with the most speeches (5), Red Party, highest average anger.
pub const SPEAKER_ALICE: &str = "Alice Anderson";

/// Speaker with 3 speeches, Blue Party. Ties with Carol on speech count;
/// wins the tie-break by lower politician id.
pub const SPEAKER_BOB: &str = "Bob Baker";

/// Speaker with 3 speeches and no party affiliation.
pub const SPEAKER_CAROL: &str = "Carol Clark";

/// Politician row with zero speeches; must never appear in rankings.
pub const SPEAKER_SILENT: &str = "Dave Dunn";

pub const PARTY_RED: &str = "Red Party";
pub const PARTY_BLUE: &str = "Blue Party";

/// Total speeches in the default seeded corpus.
pub const SEEDED_SPEECH_COUNT: u64 = 11;

/// Distinct speakers with at least one speech.
pub const SEEDED_ACTIVE_SPEAKERS: usize = 3;

/// Per-speaker average anger in the seeded corpus.
pub const ALICE_AVG_ANGER: f64 = 0.6;
pub const BOB_AVG_ANGER: f64 = 0.3;
pub const CAROL_AVG_ANGER: f64 = 0.1;

// ============================================================================
// Server timing
// ============================================================================

/// Maximum time to wait for the test server to become ready.
pub const SERVER_READY_TIMEOUT_MS: u64 = 5000;

/// Polling interval while waiting for readiness.
pub const SERVER_READY_POLL_INTERVAL_MS: u64 = 20;

/// Request timeout for test clients.
pub const REQUEST_TIMEOUT_SECS: u64 = 5;
