use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::database::manager::{DatabaseError, DatabaseManager};
use crate::database::models::{NewPost, Post, PostChanges};

/// Data-store handle the blog handlers work against
#[async_trait]
pub trait PostStore: Send + Sync {
    async fn create(&self, post: NewPost) -> Result<Post, DatabaseError>;

    async fn list(&self) -> Result<Vec<Post>, DatabaseError>;

    async fn find(&self, id: Uuid) -> Result<Option<Post>, DatabaseError>;

    /// Replace title and content; `NotFound` when no post has that id
    async fn update(&self, changes: PostChanges) -> Result<Post, DatabaseError>;

    async fn health_check(&self) -> Result<(), DatabaseError>;
}

/// Postgres-backed post store
#[derive(Clone)]
pub struct PgPostStore {
    pool: PgPool,
}

impl PgPostStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PostStore for PgPostStore {
    async fn create(&self, post: NewPost) -> Result<Post, DatabaseError> {
        let row = sqlx::query_as::<_, Post>(
            r#"INSERT INTO "posts" ("id", "title", "content", "author_id")
               VALUES ($1, $2, $3, $4)
               RETURNING "id", "title", "content", "published", "author_id""#,
        )
        .bind(Uuid::new_v4())
        .bind(&post.title)
        .bind(&post.content)
        .bind(&post.author_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(row)
    }

    async fn list(&self) -> Result<Vec<Post>, DatabaseError> {
        let rows = sqlx::query_as::<_, Post>(
            r#"SELECT "id", "title", "content", "published", "author_id" FROM "posts""#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    async fn find(&self, id: Uuid) -> Result<Option<Post>, DatabaseError> {
        let row = sqlx::query_as::<_, Post>(
            r#"SELECT "id", "title", "content", "published", "author_id" FROM "posts" WHERE "id" = $1"#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row)
    }

    async fn update(&self, changes: PostChanges) -> Result<Post, DatabaseError> {
        sqlx::query_as::<_, Post>(
            r#"UPDATE "posts" SET "title" = $2, "content" = $3
               WHERE "id" = $1
               RETURNING "id", "title", "content", "published", "author_id""#,
        )
        .bind(changes.id)
        .bind(&changes.title)
        .bind(&changes.content)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| DatabaseError::NotFound("post not found".to_string()))
    }

    async fn health_check(&self) -> Result<(), DatabaseError> {
        DatabaseManager::health_check(&self.pool).await
    }
}
