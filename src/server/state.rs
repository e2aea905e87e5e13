use axum::extract::FromRef;

use crate::reports::ReportEngine;
use std::sync::Arc;
use std::time::Instant;

use super::ServerConfig;

pub type GuardedReportEngine = Arc<ReportEngine>;

#[derive(Clone)]
pub struct ServerState {
    pub config: ServerConfig,
    pub start_time: Instant,
    pub engine: GuardedReportEngine,
    pub hash: String,
}

impl ServerState {
    pub fn new(config: ServerConfig, engine: GuardedReportEngine) -> Self {
        Self {
            config,
            start_time: Instant::now(),
            engine,
            hash: env!("GIT_HASH").to_owned(),
        }
    }
}

impl FromRef<ServerState> for GuardedReportEngine {
    fn from_ref(input: &ServerState) -> Self {
        input.engine.clone()
    }
}

impl FromRef<ServerState> for ServerConfig {
    fn from_ref(input: &ServerState) -> Self {
        input.config.clone()
    }
}
