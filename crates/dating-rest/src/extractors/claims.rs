//! JWT claims extractor.

use crate::responses::AppError;
use axum::{
    async_trait,
    extract::FromRequestParts,
    http::request::Parts,
};
use dating_core::{DatingError, UserId};
use dating_security::{current_identity, Claims};

/// Extractor for authenticated user claims.
///
/// Reads the claims the auth middleware stored for a valid bearer token.
pub struct AuthenticatedUser(pub Claims);

impl AuthenticatedUser {
    /// Identity of the caller, taken from the `sub` claim.
    pub fn identity(&self) -> Result<UserId, AppError> {
        current_identity(&self.0).map_err(AppError)
    }

    /// Fails with 401 unless the caller is the owner of `id`.
    pub fn require_self(&self, id: UserId) -> Result<UserId, AppError> {
        let caller = self.identity()?;
        if caller != id {
            return Err(AppError(DatingError::unauthorized(format!(
                "User {caller} cannot act on behalf of user {id}"
            ))));
        }
        Ok(caller)
    }
}

impl std::ops::Deref for AuthenticatedUser {
    type Target = Claims;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for AuthenticatedUser
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<Claims>()
            .cloned()
            .map(AuthenticatedUser)
            .ok_or_else(|| AppError(DatingError::unauthorized("Missing or invalid access token")))
    }
}
