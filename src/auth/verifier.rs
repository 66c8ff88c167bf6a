//! Bearer token verification.
//!
//! Pure HS256 validation of a token against the process secret. Failure
//! reasons are kept distinct here for logging; the gate reports all of them
//! to clients as a single `unauthorized`.

use jsonwebtoken::{decode, errors::ErrorKind, Algorithm, DecodingKey, Validation};
use thiserror::Error;

use super::{AuthError, Claims};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VerifyError {
    #[error("token is malformed")]
    Malformed,

    #[error("token signature does not match")]
    InvalidSignature,

    #[error("token signed with an unexpected algorithm")]
    AlgorithmMismatch,

    #[error("token has expired")]
    Expired,

    #[error("token carries no principal id")]
    MissingId,
}

impl From<jsonwebtoken::errors::Error> for VerifyError {
    fn from(err: jsonwebtoken::errors::Error) -> Self {
        match err.kind() {
            ErrorKind::InvalidSignature => VerifyError::InvalidSignature,
            ErrorKind::InvalidAlgorithm | ErrorKind::InvalidAlgorithmName => {
                VerifyError::AlgorithmMismatch
            }
            ErrorKind::ExpiredSignature => VerifyError::Expired,
            _ => VerifyError::Malformed,
        }
    }
}

/// Validates tokens signed with the shared secret.
#[derive(Clone)]
pub struct TokenVerifier {
    decoding_key: DecodingKey,
    validation: Validation,
}

impl TokenVerifier {
    pub fn hs256(secret: &str) -> Result<Self, AuthError> {
        if secret.is_empty() {
            return Err(AuthError::MissingSecret);
        }

        let mut validation = Validation::new(Algorithm::HS256);
        // `exp` is checked when present but not required
        validation.required_spec_claims.clear();
        validation.validate_aud = false;

        Ok(Self {
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            validation,
        })
    }

    /// Validate a token and return its claims
    pub fn verify(&self, token: &str) -> Result<Claims, VerifyError> {
        let token_data = decode::<Claims>(token, &self.decoding_key, &self.validation)?;

        if token_data.claims.id.is_empty() {
            return Err(VerifyError::MissingId);
        }

        Ok(token_data.claims)
    }
}
