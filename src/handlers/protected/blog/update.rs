use axum::{body::Bytes, Json};
use serde_json::{json, Value};
use uuid::Uuid;

use super::input::{self, UpdatePostInput};
use crate::database::PostChanges;
use crate::error::ApiError;
use crate::middleware::BlogContext;

/// PUT /api/v1/blog - replace title and content of an existing post
///
/// Input: `{"id": string, "title": string, "content": string}`
/// Output: `{"id": "<uuid>"}`; 404 when the post does not exist
pub async fn update(
    ctx: BlogContext,
    body: Bytes,
) -> Result<Json<Value>, ApiError> {
    let UpdatePostInput { id, title, content } = input::parse(&body)?;

    let id = Uuid::parse_str(&id).map_err(|_| ApiError::not_found("post not found"))?;

    let post = ctx.store.update(PostChanges { id, title, content }).await?;

    tracing::info!(post_id = %post.id, user_id = %ctx.user_id, "Updated post");
    Ok(Json(json!({ "id": post.id })))
}
