// Port Layer - Interfaces for external dependencies

pub mod config_source;

// Re-exports
pub use config_source::{ConfigError, ConfigSource, ConfigSourceExt, MemoryConfig};
