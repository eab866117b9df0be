//! JWT token provider for validating and minting access tokens.

use super::Claims;
use chrono::{Duration, Utc};
use dating_config::SecurityConfig;
use dating_core::{DatingError, DatingResult, UserId};
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::de::DeserializeOwned;
use std::sync::Arc;
use tracing::{debug, warn};

/// JWT token provider service.
///
/// The API validates bearer tokens issued by the identity service with the
/// shared secret. Minting is kept for tooling and tests.
#[derive(Clone)]
pub struct TokenProvider {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    config: Arc<SecurityConfig>,
    validation: Validation,
}

impl TokenProvider {
    /// Creates a new token provider.
    #[must_use]
    pub fn new(config: Arc<SecurityConfig>) -> Self {
        let encoding_key = EncodingKey::from_secret(config.jwt_secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.jwt_secret.as_bytes());

        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_issuer(&[&config.jwt_issuer]);
        validation.set_audience(&[&config.jwt_audience]);
        validation.validate_exp = true;
        validation.validate_nbf = true;

        Self {
            encoding_key,
            decoding_key,
            config,
            validation,
        }
    }

    /// Generates an access token for a user.
    pub fn generate_access_token(&self, user_id: UserId, username: &str) -> DatingResult<String> {
        let lifetime = i64::try_from(self.config.jwt_access_expiration_secs).unwrap_or(i64::MAX);
        let expires_at = Utc::now() + Duration::seconds(lifetime);

        let claims = Claims::new_access(
            user_id,
            username.to_string(),
            self.config.jwt_issuer.clone(),
            self.config.jwt_audience.clone(),
            expires_at,
        );

        self.encode_claims(&claims)
    }

    /// Signs arbitrary claims with the configured secret.
    pub fn encode_claims(&self, claims: &Claims) -> DatingResult<String> {
        let token = encode(&Header::default(), claims, &self.encoding_key)
            .map_err(|e| DatingError::Internal(format!("Failed to generate access token: {e}")))?;

        debug!("Generated access token for subject {}", claims.sub);
        Ok(token)
    }

    /// Validates an access token and returns its claims.
    pub fn validate_access_token(&self, token: &str) -> DatingResult<Claims> {
        let token_data = decode::<Claims>(token, &self.decoding_key, &self.validation).map_err(|e| {
            warn!("Token validation failed: {}", e);
            match e.kind() {
                ErrorKind::ExpiredSignature => DatingError::TokenExpired,
                ErrorKind::InvalidToken | ErrorKind::InvalidSignature => {
                    DatingError::InvalidToken("Invalid token signature".to_string())
                }
                ErrorKind::InvalidIssuer => DatingError::InvalidToken("Invalid token issuer".to_string()),
                ErrorKind::InvalidAudience => DatingError::InvalidToken("Invalid token audience".to_string()),
                _ => DatingError::InvalidToken(e.to_string()),
            }
        })?;

        Ok(token_data.claims)
    }
}

impl std::fmt::Debug for TokenProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenProvider")
            .field("issuer", &self.config.jwt_issuer)
            .field("audience", &self.config.jwt_audience)
            .finish_non_exhaustive()
    }
}

/// Decodes a token's payload without checking signature, expiry or audience.
///
/// Only for inspecting tokens the caller already holds.
pub fn decode_unverified<T: DeserializeOwned>(token: &str) -> DatingResult<T> {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.insecure_disable_signature_validation();
    validation.validate_exp = false;
    validation.validate_nbf = false;
    validation.validate_aud = false;
    validation.required_spec_claims.clear();

    let token_data = decode::<T>(token, &DecodingKey::from_secret(&[]), &validation)
        .map_err(|e| DatingError::InvalidToken(e.to_string()))?;

    Ok(token_data.claims)
}
