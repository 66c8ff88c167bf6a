pub mod manager;
pub mod memory;
pub mod models;
pub mod repository;

pub use manager::{DatabaseError, DatabaseManager};
pub use memory::MemoryPostStore;
pub use models::{NewPost, Post, PostChanges};
pub use repository::{PgPostStore, PostStore};
