pub mod verifier;

use chrono::{TimeDelta, Utc};
use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use verifier::{TokenVerifier, VerifyError};

/// Claims carried by a blog bearer token.
///
/// Only `id` is meaningful to the gate. `exp` is optional so tokens minted
/// without an expiry keep working; when present it is enforced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    #[serde(default)]
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iat: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exp: Option<i64>,
}

impl Claims {
    /// Fails with `TokenGeneration` when the expiry does not fit a timestamp
    pub fn new(id: impl Into<String>, expiry_hours: Option<u64>) -> Result<Self, AuthError> {
        let now = Utc::now();
        let exp = match expiry_hours {
            Some(hours) => {
                let expires_at = i64::try_from(hours)
                    .ok()
                    .and_then(TimeDelta::try_hours)
                    .and_then(|delta| now.checked_add_signed(delta))
                    .ok_or_else(|| {
                        AuthError::TokenGeneration(format!("expiry of {} hours is out of range", hours))
                    })?;
                Some(expires_at.timestamp())
            }
            None => None,
        };

        Ok(Self {
            id: id.into(),
            iat: Some(now.timestamp()),
            exp,
        })
    }
}

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("missing credential")]
    MissingCredential,

    #[error("invalid credential")]
    InvalidCredential,

    #[error("JWT secret not configured")]
    MissingSecret,

    #[error("JWT generation error: {0}")]
    TokenGeneration(String),
}

/// Sign claims with the shared HS256 secret.
pub fn issue_token(claims: &Claims, secret: &str) -> Result<String, AuthError> {
    if secret.is_empty() {
        return Err(AuthError::MissingSecret);
    }
    if claims.id.is_empty() {
        return Err(AuthError::TokenGeneration("claim `id` must not be empty".to_string()));
    }

    let encoding_key = EncodingKey::from_secret(secret.as_bytes());
    let header = Header::new(Algorithm::HS256);

    encode(&header, claims, &encoding_key).map_err(|e| AuthError::TokenGeneration(e.to_string()))
}
