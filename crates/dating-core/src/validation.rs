//! Validation utilities.

use crate::{DatingError, FieldError};
use validator::{Validate, ValidationErrors};

/// Extension trait for validation.
pub trait ValidateExt: Validate {
    /// Validates the struct and returns a `DatingError` on failure.
    fn validate_request(&self) -> Result<(), DatingError> {
        self.validate().map_err(validation_errors_to_dating_error)
    }
}

impl<T: Validate> ValidateExt for T {}

/// Flattens `validator::ValidationErrors` into field errors.
#[must_use]
pub fn field_errors(errors: &ValidationErrors) -> Vec<FieldError> {
    errors
        .field_errors()
        .iter()
        .flat_map(|(field, errors)| {
            errors.iter().map(move |error| FieldError {
                field: (*field).to_string(),
                message: error
                    .message
                    .as_ref()
                    .map_or_else(|| error.code.to_string(), |m| m.to_string()),
                code: error.code.to_string(),
            })
        })
        .collect()
}

/// Converts `validator::ValidationErrors` to `DatingError`.
#[must_use]
pub fn validation_errors_to_dating_error(errors: ValidationErrors) -> DatingError {
    let message = field_errors(&errors)
        .iter()
        .map(|e| format!("{}: {}", e.field, e.message))
        .collect::<Vec<_>>()
        .join("; ");

    DatingError::Validation(message)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Validate)]
    struct Profile {
        #[validate(length(max = 5, message = "City is too long"))]
        city: String,
    }

    #[test]
    fn test_validate_request_collects_messages() {
        let profile = Profile {
            city: "Greater London".to_string(),
        };
        let err = profile.validate_request().unwrap_err();
        assert_eq!(err.status_code(), 400);
        assert!(err.to_string().contains("city: City is too long"));
    }

    #[test]
    fn test_validate_request_passes() {
        let profile = Profile {
            city: "Oslo".to_string(),
        };
        assert!(profile.validate_request().is_ok());
    }
}
