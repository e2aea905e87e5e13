//! Test server lifecycle management
//!
//! This module manages spawning and shutting down test HTTP servers.
//! Each test gets an isolated server with its own corpus database.

use super::constants::*;
use super::fixtures::{create_corrupt_corpus, create_empty_corpus, create_seeded_corpus};
use emolex_report_server::corpus_store::SqliteCorpusStore;
use emolex_report_server::reports::ReportEngine;
use emolex_report_server::server::{make_app, RequestsLoggingLevel, ServerConfig};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tempfile::TempDir;
use tokio::net::TcpListener;

/// Test server instance with an isolated corpus database
///
/// When dropped, the server gracefully shuts down and temp resources are
/// cleaned up.
pub struct TestServer {
    /// Base URL for making requests (e.g., "http://127.0.0.1:12345")
    pub base_url: String,

    /// The port the server is listening on
    pub port: u16,

    // Private fields - keep resources alive until drop
    _temp_dir: TempDir,
    _shutdown_tx: Option<tokio::sync::oneshot::Sender<()>>,
}

impl TestServer {
    /// Spawns a server over the default seeded corpus.
    pub async fn spawn() -> Self {
        let (temp_dir, db_path) =
            create_seeded_corpus().expect("Failed to create seeded corpus");
        Self::spawn_with(temp_dir, db_path).await
    }

    /// Spawns a server over an empty corpus.
    pub async fn spawn_empty() -> Self {
        let (temp_dir, db_path) = create_empty_corpus().expect("Failed to create empty corpus");
        Self::spawn_with(temp_dir, db_path).await
    }

    /// Spawns a server over a corpus with a broken encoding reference.
    pub async fn spawn_corrupt() -> Self {
        let (temp_dir, db_path) =
            create_corrupt_corpus().expect("Failed to create corrupt corpus");
        Self::spawn_with(temp_dir, db_path).await
    }

    async fn spawn_with(temp_dir: TempDir, db_path: PathBuf) -> Self {
        let store = Arc::new(SqliteCorpusStore::new(&db_path).expect("Failed to open corpus"));
        let engine = Arc::new(ReportEngine::new(store));

        // Bind to random port
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind to random port");

        let port = listener
            .local_addr()
            .expect("Failed to get local address")
            .port();

        let base_url = format!("http://127.0.0.1:{}", port);

        // Create shutdown channel
        let (shutdown_tx, shutdown_rx) = tokio::sync::oneshot::channel::<()>();

        let config = ServerConfig {
            port,
            requests_logging_level: RequestsLoggingLevel::None,
        };
        let app = make_app(config, engine);

        // Spawn server in background task with graceful shutdown
        tokio::spawn(async move {
            axum::serve(listener, app)
                .with_graceful_shutdown(async {
                    shutdown_rx.await.ok();
                })
                .await
                .expect("Server failed");
        });

        let server = Self {
            base_url,
            port,
            _temp_dir: temp_dir,
            _shutdown_tx: Some(shutdown_tx),
        };

        server.wait_for_ready().await;

        server
    }

    /// Waits for the server to become ready by polling the home endpoint
    async fn wait_for_ready(&self) {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_millis(100))
            .build()
            .expect("Failed to build reqwest client");

        let start = std::time::Instant::now();
        let timeout = Duration::from_millis(SERVER_READY_TIMEOUT_MS);

        loop {
            if start.elapsed() > timeout {
                panic!(
                    "Server did not become ready within {}ms",
                    SERVER_READY_TIMEOUT_MS
                );
            }

            match client.get(format!("{}/", self.base_url)).send().await {
                Ok(response) if response.status().is_success() => {
                    return;
                }
                _ => {
                    tokio::time::sleep(Duration::from_millis(SERVER_READY_POLL_INTERVAL_MS)).await;
                }
            }
        }
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        // Send shutdown signal
        if let Some(tx) = self._shutdown_tx.take() {
            let _ = tx.send(());
        }
        // TempDir will be cleaned up automatically
    }
}
