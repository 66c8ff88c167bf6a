use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::database::manager::DatabaseError;
use crate::database::models::{NewPost, Post, PostChanges};
use crate::database::repository::PostStore;

/// In-process post store for tests and `serve --memory`
#[derive(Debug, Default)]
pub struct MemoryPostStore {
    posts: RwLock<Vec<Post>>,
}

impl MemoryPostStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.posts.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.posts.read().await.is_empty()
    }
}

#[async_trait]
impl PostStore for MemoryPostStore {
    async fn create(&self, post: NewPost) -> Result<Post, DatabaseError> {
        let post = post.into_post(Uuid::new_v4());
        self.posts.write().await.push(post.clone());
        Ok(post)
    }

    async fn list(&self) -> Result<Vec<Post>, DatabaseError> {
        Ok(self.posts.read().await.clone())
    }

    async fn find(&self, id: Uuid) -> Result<Option<Post>, DatabaseError> {
        Ok(self.posts.read().await.iter().find(|p| p.id == id).cloned())
    }

    async fn update(&self, changes: PostChanges) -> Result<Post, DatabaseError> {
        let mut posts = self.posts.write().await;
        let post = posts
            .iter_mut()
            .find(|p| p.id == changes.id)
            .ok_or_else(|| DatabaseError::NotFound("post not found".to_string()))?;

        post.title = changes.title;
        post.content = changes.content;
        Ok(post.clone())
    }

    async fn health_check(&self) -> Result<(), DatabaseError> {
        Ok(())
    }
}
