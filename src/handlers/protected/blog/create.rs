use axum::{body::Bytes, Json};
use serde_json::{json, Value};

use super::input::{self, CreatePostInput};
use crate::database::NewPost;
use crate::error::ApiError;
use crate::middleware::BlogContext;

/// POST /api/v1/blog - create a post authored by the caller
///
/// Input: `{"title": string, "content": string}`
/// Output: `{"id": "<uuid>"}`
pub async fn create(
    ctx: BlogContext,
    body: Bytes,
) -> Result<Json<Value>, ApiError> {
    let CreatePostInput { title, content } = input::parse(&body)?;

    let post = ctx
        .store
        .create(NewPost {
            title,
            content,
            author_id: ctx.user_id,
        })
        .await?;

    tracing::info!(post_id = %post.id, author_id = %post.author_id, "Created post");
    Ok(Json(json!({ "id": post.id })))
}
