//! JWT claims structure.

use chrono::{DateTime, Utc};
use dating_core::{DatingError, DatingResult, UserId};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// JWT claims carried by access tokens.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (numeric user id as a string).
    pub sub: String,

    /// Username.
    #[serde(alias = "unique_name")]
    pub username: String,

    /// Issued at timestamp.
    pub iat: i64,

    /// Expiration timestamp.
    pub exp: i64,

    /// Not before timestamp.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nbf: Option<i64>,

    pub iss: String,

    pub aud: String,

    /// JWT ID (unique identifier for this token).
    pub jti: String,
}

impl Claims {
    /// Creates new access token claims.
    #[must_use]
    pub fn new_access(
        user_id: UserId,
        username: String,
        issuer: String,
        audience: String,
        expires_at: DateTime<Utc>,
    ) -> Self {
        let now = Utc::now();
        Self {
            sub: user_id.to_string(),
            username,
            iat: now.timestamp(),
            exp: expires_at.timestamp(),
            nbf: Some(now.timestamp()),
            iss: issuer,
            aud: audience,
            jti: Uuid::now_v7().to_string(),
        }
    }

    /// Parses the subject as a user id.
    pub fn user_id(&self) -> DatingResult<UserId> {
        UserId::parse(&self.sub)
            .map_err(|_| DatingError::unauthorized("Token subject is not a valid user id"))
    }

    /// Checks if the token is expired.
    #[must_use]
    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp() > self.exp
    }

    /// Returns the expiration time.
    #[must_use]
    pub fn expires_at(&self) -> DateTime<Utc> {
        DateTime::from_timestamp(self.exp, 0).unwrap_or_else(Utc::now)
    }
}

/// Returns the id of the authenticated caller.
///
/// This is the single place where request identity is derived from a token.
pub fn current_identity(claims: &Claims) -> DatingResult<UserId> {
    claims.user_id()
}
