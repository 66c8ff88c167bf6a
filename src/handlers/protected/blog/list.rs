use axum::Json;

use crate::database::Post;
use crate::error::ApiError;
use crate::middleware::BlogContext;

/// GET /api/v1/blog/bulk - every post
pub async fn list(ctx: BlogContext) -> Result<Json<Vec<Post>>, ApiError> {
    let posts = ctx.store.list().await?;
    Ok(Json(posts))
}
