//! Dev-only middleware that delays every request, for exercising dashboard
//! loading states against a local server.
#![allow(dead_code)]

use axum::{body::Body, http::Request, middleware::Next, response::IntoResponse};
use std::time::Duration;

const SLOWDOWN_DELAY_MS: u64 = 400;

pub async fn slowdown_request(request: Request<Body>, next: Next) -> impl IntoResponse {
    tokio::time::sleep(Duration::from_millis(SLOWDOWN_DELAY_MS)).await;
    next.run(request).await
}
