// qhier Infrastructure - Configuration Adapters
// Implements: ConfigSource over files and environment variables

pub mod layered_source;

pub use layered_source::{default_config_path, LayeredConfigBuilder, LayeredConfigSource};
