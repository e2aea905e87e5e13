//! Emolex Report Server Library
//!
//! This library exposes the internal modules for testing and potential reuse.

pub mod config;
pub mod corpus_store;
pub mod reports;
pub mod server;
pub mod sqlite_persistence;

// Re-export commonly used types for convenience
pub use corpus_store::{CorpusStore, SqliteCorpusStore};
pub use reports::{ReportEngine, ReportError, ReportSpec};
pub use server::{make_app, run_server, RequestsLoggingLevel, ServerConfig};
