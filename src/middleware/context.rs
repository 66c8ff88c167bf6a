use std::sync::Arc;

use axum::{async_trait, extract::FromRequestParts, http::request::Parts};

use super::auth::Principal;
use crate::database::PostStore;
use crate::error::ApiError;
use crate::state::AppState;

/// Per-request context for blog handlers: who is calling and where posts live.
///
/// Built fresh for every request from the gate's [`Principal`] and the shared
/// store handle; handlers never see one without a verified caller.
pub struct BlogContext {
    pub user_id: String,
    pub store: Arc<dyn PostStore>,
}

#[async_trait]
impl FromRequestParts<AppState> for BlogContext {
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let principal = Principal::from_request_parts(parts, state).await?;

        Ok(Self {
            user_id: principal.into_id(),
            store: state.store.clone(),
        })
    }
}
