// handlers/protected/mod.rs - Protected handlers (bearer token required)
//
// Every route here sits behind `middleware::require_auth`; handlers take a
// `BlogContext` to get the caller's id and the post store.
pub mod blog;
