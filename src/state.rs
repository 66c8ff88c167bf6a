use std::sync::Arc;

use crate::auth::{AuthError, TokenVerifier};
use crate::database::PostStore;

/// Shared, immutable application state handed to the router
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn PostStore>,
    pub verifier: Arc<TokenVerifier>,
}

impl AppState {
    pub fn new(store: Arc<dyn PostStore>, jwt_secret: &str) -> Result<Self, AuthError> {
        Ok(Self {
            store,
            verifier: Arc::new(TokenVerifier::hs256(jwt_secret)?),
        })
    }
}
