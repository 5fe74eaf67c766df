//! Configuration storage in on-chip flash

pub mod flash;
pub mod persistence;

pub use flash::FlashStorage;
pub use persistence::{ConfigError, ConfigPersistence};
