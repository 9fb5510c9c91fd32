// Layered Configuration Source
// File (TOML/YAML/JSON/INI, by extension) overlaid with environment variables

use config::{Config, Environment, File, Source, Value, ValueKind};
use directories::ProjectDirs;
use qhier_core::port::{ConfigError, ConfigSource, MemoryConfig};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Default environment prefix: `QHIER_CONF_MAPRED__QUEUE__NAMES=a,b`
pub const DEFAULT_ENV_PREFIX: &str = "QHIER_CONF";

/// Nesting separator inside environment variable names
pub const ENV_SEPARATOR: &str = "__";

/// Default configuration file name inside the user config directory
pub const DEFAULT_CONFIG_FILE: &str = "queues.toml";

/// Per-user configuration file (e.g. `~/.config/qhier/queues.toml`)
pub fn default_config_path() -> Option<PathBuf> {
    ProjectDirs::from("org", "qhier", "qhier")
        .map(|dirs| dirs.config_dir().join(DEFAULT_CONFIG_FILE))
}

/// Flat snapshot of a layered configuration
///
/// Nested tables are flattened into dotted keys, so
///
/// ```toml
/// [mapred.queue]
/// names = "default,research"
///
/// [mapred.queue.research]
/// state = "stopped"
/// ```
///
/// reads as `mapred.queue.names` and `mapred.queue.research.state`.
/// Arrays are joined with `,`. A key present without a value reads as `""`.
///
/// Keys are case-insensitive: the `config` crate lowercases them on load,
/// so lookups are lowercased too. Values keep their case.
#[derive(Debug, Clone, Default)]
pub struct LayeredConfigSource {
    entries: MemoryConfig,
}

impl LayeredConfigSource {
    pub fn builder() -> LayeredConfigBuilder {
        LayeredConfigBuilder::default()
    }

    /// Load a single required file, no environment overrides
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Self::builder().file(path.as_ref()).build()
    }

    /// Flattened entries
    pub fn entries(&self) -> &MemoryConfig {
        &self.entries
    }
}

impl ConfigSource for LayeredConfigSource {
    fn get(&self, key: &str) -> Result<Option<String>, ConfigError> {
        self.entries.get(&key.to_lowercase())
    }
}

/// Builder for [`LayeredConfigSource`]
///
/// Later layers win: defaults, then the file, then the environment.
#[derive(Debug, Default)]
pub struct LayeredConfigBuilder {
    file: Option<PathBuf>,
    file_required: bool,
    env_prefix: Option<String>,
    defaults: Vec<(String, String)>,
}

impl LayeredConfigBuilder {
    /// Required configuration file
    pub fn file(mut self, path: impl Into<PathBuf>) -> Self {
        self.file = Some(path.into());
        self.file_required = true;
        self
    }

    /// Configuration file that may be missing
    pub fn optional_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.file = Some(path.into());
        self.file_required = false;
        self
    }

    /// Overlay environment variables starting with `<prefix>_`
    pub fn env_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.env_prefix = Some(prefix.into());
        self
    }

    /// Value used when no layer sets `key`
    pub fn default_value(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.defaults.push((key.into(), value.into()));
        self
    }

    pub fn build(self) -> Result<LayeredConfigSource, ConfigError> {
        let mut builder = Config::builder();

        for (key, value) in &self.defaults {
            builder = builder
                .set_default(key.as_str(), value.clone())
                .map_err(|e| ConfigError::Load(e.to_string()))?;
        }

        if let Some(path) = &self.file {
            debug!(
                path = %path.display(),
                required = self.file_required,
                "Adding configuration file"
            );
            builder = builder.add_source(File::from(path.as_path()).required(self.file_required));
        }

        if let Some(prefix) = &self.env_prefix {
            builder = builder.add_source(
                Environment::with_prefix(prefix)
                    .prefix_separator("_")
                    .separator(ENV_SEPARATOR),
            );
        }

        let config = builder
            .build()
            .map_err(|e| ConfigError::Load(e.to_string()))?;
        let table = config
            .collect()
            .map_err(|e| ConfigError::Load(e.to_string()))?;

        let mut entries = MemoryConfig::new();
        flatten_into("", table, &mut entries);

        info!(keys = entries.len(), "Configuration loaded");

        Ok(LayeredConfigSource { entries })
    }
}

fn flatten_into(prefix: &str, table: config::Map<String, Value>, out: &mut MemoryConfig) {
    for (key, value) in table {
        let full_key = if prefix.is_empty() {
            key.to_lowercase()
        } else {
            format!("{prefix}.{}", key.to_lowercase())
        };

        match value.kind {
            ValueKind::Table(nested) => flatten_into(&full_key, nested, out),
            ValueKind::Array(items) => {
                let joined = items
                    .iter()
                    .map(Value::to_string)
                    .collect::<Vec<_>>()
                    .join(",");
                out.set(full_key, joined);
            }
            ValueKind::Nil => out.set(full_key, ""),
            other => out.set(full_key, other.to_string()),
        }
    }
}
