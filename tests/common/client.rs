//! HTTP client for end-to-end tests
//!
//! A thin wrapper over reqwest with one method per report-server endpoint.
//! When API routes or request formats change, update only this file.

use super::constants::*;
use reqwest::Response;
use std::time::Duration;

pub struct TestClient {
    /// The underlying reqwest client (public for custom requests in tests)
    pub client: reqwest::Client,
    /// The base URL of the test server
    pub base_url: String,
}

impl TestClient {
    pub fn new(base_url: String) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .expect("Failed to build reqwest client");

        Self { client, base_url }
    }

    async fn get(&self, path: &str) -> Response {
        self.client
            .get(format!("{}{}", self.base_url, path))
            .send()
            .await
            .expect("Request failed")
    }

    /// GET / - server stats
    pub async fn get_home(&self) -> Response {
        self.get("/").await
    }

    /// GET /health - liveness
    pub async fn get_health(&self) -> Response {
        self.get("/health").await
    }

    /// GET /v1/reports - the report catalog
    pub async fn list_reports(&self) -> Response {
        self.get("/v1/reports").await
    }

    /// GET /v1/reports/{id} - run a canonical report
    pub async fn run_report(&self, id: &str) -> Response {
        self.get(&format!("/v1/reports/{}", id)).await
    }

    /// GET /v1/reports/custom?... - run an ad-hoc report
    ///
    /// `query` is the raw query string, e.g. "metric=joy&limit=5".
    pub async fn run_custom_report(&self, query: &str) -> Response {
        self.get(&format!("/v1/reports/custom?{}", query)).await
    }

    /// GET /v1/corpus/summary - corpus counts and integrity status
    pub async fn get_corpus_summary(&self) -> Response {
        self.get("/v1/corpus/summary").await
    }
}
