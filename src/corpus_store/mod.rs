mod models;
mod schema;
mod store;
mod trait_def;

pub use models::{CorpusSummary, SpeakerStat};
pub use store::SqliteCorpusStore;
pub use trait_def::CorpusStore;
