//! Infrastructure layer with filesystem adapters.

/// Application configuration.
pub mod config;
/// Inventory storage adapters.
pub mod storage;

pub use config::{AppConfig, CliArgs, ConfigError, LogLevel, StateConfig, StorageManager};
pub use storage::JsonInventoryStorage;
