//! Accept/reject shape checks for blog request bodies.

use axum::body::Bytes;
use serde::{de::DeserializeOwned, Deserialize};

use crate::error::ApiError;

/// Body of `POST /api/v1/blog`
#[derive(Debug, Clone, Deserialize)]
pub struct CreatePostInput {
    pub title: String,
    pub content: String,
}

/// Body of `PUT /api/v1/blog`
#[derive(Debug, Clone, Deserialize)]
pub struct UpdatePostInput {
    pub id: String,
    pub title: String,
    pub content: String,
}

/// Decode a raw body as JSON into `T`, collapsing every failure to
/// `400 invalid input`. The `Content-Type` header is not consulted and
/// unknown fields are ignored.
pub fn parse<T: DeserializeOwned>(body: &Bytes) -> Result<T, ApiError> {
    serde_json::from_slice(body).map_err(|e| {
        tracing::debug!("Request body failed shape check: {}", e);
        ApiError::invalid_input()
    })
}
