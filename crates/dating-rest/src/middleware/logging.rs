//! Access log for every request.

use axum::{
    body::Body,
    http::{Request, StatusCode},
    middleware::Next,
    response::Response,
};
use std::time::Instant;
use tracing::{info, warn};

const REQUEST_ID_HEADER: &str = "x-request-id";

/// Logs method, path, status and latency once the response is ready.
///
/// Server errors are logged at `warn` so they stand out from normal traffic.
pub async fn logging_middleware(request: Request<Body>, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_owned();
    let request_id = request
        .headers()
        .get(REQUEST_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("-")
        .to_owned();
    let started = Instant::now();

    let response = next.run(request).await;

    let status = response.status();
    let elapsed_ms = started.elapsed().as_millis();
    if status >= StatusCode::INTERNAL_SERVER_ERROR {
        warn!(target: "http", %method, %path, %request_id, status = status.as_u16(), elapsed_ms, "request failed");
    } else {
        info!(target: "http", %method, %path, %request_id, status = status.as_u16(), elapsed_ms, "request served");
    }

    response
}
