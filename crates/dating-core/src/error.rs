//! Unified error types for all layers of the application.

use crate::UserId;
use serde::{Deserialize, Serialize};
use std::fmt::Debug;
use thiserror::Error;

/// Unified error type for the DatingApp API.
///
/// Every layer returns this type; the REST layer turns it into a status
/// code and an [`ErrorResponse`] body.
#[derive(Error, Debug)]
pub enum DatingError {
    // ============ Domain Errors ============
    /// Resource not found
    #[error("Resource not found: {resource_type} with id {id}")]
    NotFound {
        resource_type: &'static str,
        id: String,
    },

    /// Validation error
    #[error("Validation error: {0}")]
    Validation(String),

    /// Request was well-formed but cannot be carried out
    #[error("{0}")]
    BadRequest(String),

    // ============ Authentication Errors ============
    /// Unauthorized access
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// Invalid token
    #[error("Invalid token: {0}")]
    InvalidToken(String),

    /// Token expired
    #[error("Token expired")]
    TokenExpired,

    // ============ Infrastructure Errors ============
    /// Database error
    #[error("Database error: {0}")]
    Database(String),

    /// A write for a specific user could not be persisted
    #[error("Updating user {id} failed on save: {message}")]
    Persistence { id: UserId, message: String },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),

    // ============ Internal Errors ============
    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),

    /// Generic error wrapper
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl DatingError {
    /// Returns the HTTP status code for this error.
    #[must_use]
    pub const fn status_code(&self) -> u16 {
        match self {
            Self::NotFound { .. } => 404,
            Self::Validation(_) | Self::BadRequest(_) => 400,
            Self::Unauthorized(_) | Self::InvalidToken(_) | Self::TokenExpired => 401,
            Self::Database(_)
            | Self::Persistence { .. }
            | Self::Configuration(_)
            | Self::Internal(_)
            | Self::Other(_) => 500,
        }
    }

    /// Returns a machine-readable error code.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::NotFound { .. } => "NOT_FOUND",
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::BadRequest(_) => "BAD_REQUEST",
            Self::Unauthorized(_) => "UNAUTHORIZED",
            Self::InvalidToken(_) => "INVALID_TOKEN",
            Self::TokenExpired => "TOKEN_EXPIRED",
            Self::Database(_) => "DATABASE_ERROR",
            Self::Persistence { .. } => "PERSISTENCE_ERROR",
            Self::Configuration(_) => "CONFIGURATION_ERROR",
            Self::Internal(_) | Self::Other(_) => "INTERNAL_ERROR",
        }
    }

    /// Creates a not found error for a resource.
    #[must_use]
    pub fn not_found<T: ToString>(resource_type: &'static str, id: T) -> Self {
        Self::NotFound {
            resource_type,
            id: id.to_string(),
        }
    }

    /// Creates a validation error.
    #[must_use]
    pub fn validation<T: Into<String>>(message: T) -> Self {
        Self::Validation(message.into())
    }

    /// Creates a bad request error.
    #[must_use]
    pub fn bad_request<T: Into<String>>(message: T) -> Self {
        Self::BadRequest(message.into())
    }

    /// Creates an unauthorized error.
    #[must_use]
    pub fn unauthorized<T: Into<String>>(message: T) -> Self {
        Self::Unauthorized(message.into())
    }

    /// Creates a persistence error for the given user.
    #[must_use]
    pub fn persistence<T: ToString>(id: UserId, cause: T) -> Self {
        Self::Persistence {
            id,
            message: cause.to_string(),
        }
    }

    /// Creates an internal error.
    #[must_use]
    pub fn internal<T: Into<String>>(message: T) -> Self {
        Self::Internal(message.into())
    }

    /// Message safe to send to clients.
    ///
    /// Server-side faults never carry driver or infrastructure text.
    #[must_use]
    pub fn client_message(&self) -> String {
        match self {
            Self::Persistence { id, .. } => format!("Updating user {id} failed on save"),
            Self::Database(_) | Self::Configuration(_) | Self::Internal(_) | Self::Other(_) => {
                "An internal error occurred".to_string()
            }
            _ => self.to_string(),
        }
    }
}

#[cfg(feature = "sqlx")]
impl From<sqlx::Error> for DatingError {
    fn from(err: sqlx::Error) -> Self {
        match &err {
            sqlx::Error::RowNotFound => Self::NotFound {
                resource_type: "database_row",
                id: "unknown".to_string(),
            },
            _ => Self::Database(err.to_string()),
        }
    }
}

impl From<serde_json::Error> for DatingError {
    fn from(err: serde_json::Error) -> Self {
        Self::Internal(format!("JSON serialization error: {}", err))
    }
}

/// Serializable error response for API responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct ErrorResponse {
    /// Machine-readable error code
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Optional field-level errors for validation
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Vec<FieldError>>,
}

/// Field-level validation error.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct FieldError {
    /// Field name
    pub field: String,
    /// Error message
    pub message: String,
    /// Error code
    pub code: String,
}

impl ErrorResponse {
    /// Creates a new error response from a `DatingError`.
    #[must_use]
    pub fn from_error(error: &DatingError) -> Self {
        Self {
            code: error.error_code().to_string(),
            message: error.client_message(),
            details: None,
        }
    }

    /// Sets field-level validation errors.
    #[must_use]
    pub fn with_details(mut self, details: Vec<FieldError>) -> Self {
        self.details = Some(details);
        self
    }
}

impl From<&DatingError> for ErrorResponse {
    fn from(error: &DatingError) -> Self {
        Self::from_error(error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_status_codes() {
        assert_eq!(DatingError::not_found("User", 1).status_code(), 404);
        assert_eq!(DatingError::validation("unknown gender").status_code(), 400);
        assert_eq!(DatingError::bad_request("You already liked the user").status_code(), 400);
        assert_eq!(DatingError::unauthorized("id mismatch").status_code(), 401);
        assert_eq!(DatingError::TokenExpired.status_code(), 401);
        assert_eq!(DatingError::InvalidToken("bad".to_string()).status_code(), 401);
    }

    #[test]
    fn test_storage_errors_are_server_errors() {
        assert_eq!(DatingError::Database("db error".to_string()).status_code(), 500);
        assert_eq!(DatingError::persistence(UserId::new(5), "disk full").status_code(), 500);
        assert_eq!(DatingError::internal("oops").status_code(), 500);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(DatingError::not_found("User", 1).error_code(), "NOT_FOUND");
        assert_eq!(DatingError::bad_request("x").error_code(), "BAD_REQUEST");
        assert_eq!(DatingError::unauthorized("x").error_code(), "UNAUTHORIZED");
        assert_eq!(DatingError::TokenExpired.error_code(), "TOKEN_EXPIRED");
        assert_eq!(DatingError::persistence(UserId::new(1), "x").error_code(), "PERSISTENCE_ERROR");
        assert_eq!(DatingError::internal("err").error_code(), "INTERNAL_ERROR");
    }

    #[test]
    fn test_persistence_error_carries_user_id() {
        let err = DatingError::persistence(UserId::new(42), "connection reset");
        let message = err.to_string();
        assert!(message.contains("Updating user 42 failed on save"));
        assert!(message.contains("connection reset"));
    }

    #[test]
    fn test_bad_request_message_is_verbatim() {
        let err = DatingError::bad_request("Failed to like user");
        assert_eq!(err.to_string(), "Failed to like user");
    }

    #[test]
    fn test_client_message_hides_server_faults() {
        let persistence = DatingError::persistence(UserId::new(5), "connection reset");
        assert_eq!(persistence.client_message(), "Updating user 5 failed on save");

        let database = DatingError::Database("Access denied for user 'dating'".to_string());
        assert_eq!(database.client_message(), "An internal error occurred");

        let missing = DatingError::not_found("User", 1);
        assert_eq!(missing.client_message(), missing.to_string());
    }

    #[test]
    fn test_error_response_from_error() {
        let err = DatingError::not_found("User", 999);
        let response = ErrorResponse::from_error(&err);
        assert_eq!(response.code, "NOT_FOUND");
        assert!(response.message.contains("999"));
        assert!(response.details.is_none());
    }

    #[test]
    fn test_error_response_with_details() {
        let err = DatingError::validation("bad input");
        let details = vec![FieldError {
            field: "city".to_string(),
            message: "too long".to_string(),
            code: "length".to_string(),
        }];
        let response = ErrorResponse::from_error(&err).with_details(details);
        assert_eq!(response.details.map(|d| d.len()), Some(1));
    }
}
