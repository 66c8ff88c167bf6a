pub mod auth;
pub mod context;

pub use auth::{require_auth, Principal};
pub use context::BlogContext;
