//! Last-activity tracking.

use crate::state::AppState;
use axum::{body::Body, extract::State, http::Request, middleware::Next, response::Response};
use dating_security::{current_identity, Claims};
use tracing::warn;

/// Stamps the caller's `last_active` once the handler has run.
///
/// Only requests carrying a valid identity are recorded. A failed stamp is
/// logged and never alters the response.
pub async fn activity_middleware(
    State(state): State<AppState>,
    request: Request<Body>,
    next: Next,
) -> Response {
    let caller = request
        .extensions()
        .get::<Claims>()
        .and_then(|claims| current_identity(claims).ok());

    let response = next.run(request).await;

    if let Some(user_id) = caller {
        if let Err(e) = state.user_service.record_activity(user_id).await {
            warn!("Recording activity for user {} failed: {}", user_id, e);
        }
    }

    response
}
