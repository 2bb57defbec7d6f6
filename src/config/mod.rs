//! Configuration module.

pub mod loader;

pub use loader::{default_config_path, load_or_default, ConfigError, ConfigFile, EngineConfig};
