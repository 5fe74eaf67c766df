//! Configuration types
//!
//! What the board shows is a small [`DisplayConfig`] shared through a
//! versioned [`ConfigStore`] and persisted as postcard binary data.

pub mod store;
pub mod types;

pub use store::*;
pub use types::*;
