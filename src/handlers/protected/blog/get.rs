use axum::{extract::Path, Json};
use uuid::Uuid;

use crate::database::Post;
use crate::error::ApiError;
use crate::middleware::BlogContext;

/// GET /api/v1/blog/:id - single post, or `null` when no post has that id
pub async fn get(ctx: BlogContext, Path(id): Path<String>) -> Result<Json<Option<Post>>, ApiError> {
    // An id that is not a UUID cannot match any post
    let Ok(id) = Uuid::parse_str(&id) else {
        return Ok(Json(None));
    };

    let post = ctx.store.find(id).await?;
    Ok(Json(post))
}
