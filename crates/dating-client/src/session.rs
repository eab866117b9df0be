//! Client-held session state.

use chrono::Utc;
use dating_core::DatingResult;
use dating_security::decode_unverified;
use parking_lot::RwLock;
use serde::Deserialize;
use tracing::debug;

/// Reports whether the client currently holds a usable login.
pub trait SessionState: Send + Sync {
    /// Pure check; never changes the session.
    fn logged_in(&self) -> bool;
}

/// Claims the client reads from its own token.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SessionClaims {
    pub exp: i64,
    #[serde(default)]
    pub sub: Option<String>,
    #[serde(default, alias = "unique_name")]
    pub username: Option<String>,
}

impl SessionClaims {
    #[must_use]
    pub fn is_expired_at(&self, now: i64) -> bool {
        self.exp <= now
    }
}

/// Session backed by the stored access token.
///
/// The signature is not checked here; the API verifies it on every call.
#[derive(Debug, Default)]
pub struct TokenSession {
    token: RwLock<Option<String>>,
}

impl TokenSession {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            token: RwLock::new(Some(token.into())),
        }
    }

    /// Stores the token returned by a successful login.
    pub fn store_token(&self, token: impl Into<String>) {
        *self.token.write() = Some(token.into());
    }

    /// Forgets the stored token.
    pub fn logout(&self) {
        self.token.write().take();
    }

    pub fn token(&self) -> Option<String> {
        self.token.read().clone()
    }

    /// Decodes the stored token, if there is one.
    pub fn claims(&self) -> Option<DatingResult<SessionClaims>> {
        self.token.read().as_deref().map(decode_unverified::<SessionClaims>)
    }
}

impl SessionState for TokenSession {
    fn logged_in(&self) -> bool {
        match self.claims() {
            Some(Ok(claims)) => !claims.is_expired_at(Utc::now().timestamp()),
            Some(Err(e)) => {
                debug!("Stored token is unreadable: {}", e);
                false
            }
            None => false,
        }
    }
}
