//! API response types.

use axum::{
    http::{header::ACCESS_CONTROL_EXPOSE_HEADERS, HeaderMap, HeaderName, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use dating_core::{DatingError, ErrorResponse, PageInfo};
use serde::{Deserialize, Serialize};
use tracing::error;
use utoipa::ToSchema;

/// Name of the header carrying page metadata for list endpoints.
pub const PAGINATION_HEADER: &str = "pagination";

/// Error envelope returned by every failing endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ApiResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorResponse>,
}

impl ApiResponse {
    /// Creates an error response.
    #[must_use]
    pub fn error(error: ErrorResponse) -> Self {
        Self {
            success: false,
            error: Some(error),
        }
    }
}

/// Application error type for Axum.
#[derive(Debug)]
pub struct AppError(pub DatingError);

impl From<DatingError> for AppError {
    fn from(err: DatingError) -> Self {
        Self(err)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.0.status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        if status.is_server_error() {
            error!("Request failed: {}", self.0);
        }

        let error_response = ErrorResponse::from_error(&self.0);
        let body = Json(ApiResponse::error(error_response));

        (status, body).into_response()
    }
}

/// Result type for Axum handlers.
pub type ApiResult<T> = Result<T, AppError>;

/// Page metadata as sent in the `Pagination` header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationHeader {
    pub current_page: usize,
    pub items_per_page: usize,
    pub total_items: u64,
    pub total_pages: u64,
}

impl From<PageInfo> for PaginationHeader {
    fn from(info: PageInfo) -> Self {
        Self {
            current_page: info.current_page,
            items_per_page: info.page_size,
            total_items: info.total_count,
            total_pages: info.total_pages,
        }
    }
}

/// Builds the `Pagination` header and exposes it to browser clients.
pub fn pagination_headers(info: PageInfo) -> Result<HeaderMap, AppError> {
    let json = serde_json::to_string(&PaginationHeader::from(info)).map_err(DatingError::from)?;
    let value = HeaderValue::from_str(&json)
        .map_err(|e| DatingError::internal(format!("Invalid pagination header: {e}")))?;

    let mut headers = HeaderMap::new();
    headers.insert(HeaderName::from_static(PAGINATION_HEADER), value);
    headers.insert(
        ACCESS_CONTROL_EXPOSE_HEADERS,
        HeaderValue::from_static("Pagination"),
    );
    Ok(headers)
}

/// Helper to create a no content (204) response.
#[must_use]
pub const fn no_content() -> StatusCode {
    StatusCode::NO_CONTENT
}
