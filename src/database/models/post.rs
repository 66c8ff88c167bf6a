use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub published: bool,
    pub author_id: String,
}

/// Fields supplied when creating a post; `author_id` is the authenticated principal
#[derive(Debug, Clone)]
pub struct NewPost {
    pub title: String,
    pub content: String,
    pub author_id: String,
}

#[derive(Debug, Clone)]
pub struct PostChanges {
    pub id: Uuid,
    pub title: String,
    pub content: String,
}

impl NewPost {
    pub fn into_post(self, id: Uuid) -> Post {
        Post {
            id,
            title: self.title,
            content: self.content,
            published: false,
            author_id: self.author_id,
        }
    }
}
