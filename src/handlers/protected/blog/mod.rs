pub mod create;
pub mod get;
pub mod input;
pub mod list;
pub mod update;

// Re-export handler functions for use in routing
pub use create::create;
pub use get::get;
pub use list::list;
pub use update::update;
