//! Result type aliases for the DatingApp API.

use crate::DatingError;

/// A specialized `Result` type for DatingApp operations.
pub type DatingResult<T> = Result<T, DatingError>;
