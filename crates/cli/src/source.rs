//! Configuration loading for every subcommand

use anyhow::{Context, Result};
use qhier_infra_config::layered_source::DEFAULT_ENV_PREFIX;
use qhier_infra_config::{default_config_path, LayeredConfigSource};
use std::path::Path;

/// Load the queue configuration
///
/// An explicit `config` file must exist; otherwise the per-user
/// `queues.toml` is used when present. `QHIER_CONF_*` variables overlay
/// the file unless `use_env` is false.
pub fn load_source(config: Option<&Path>, use_env: bool) -> Result<LayeredConfigSource> {
    let mut builder = LayeredConfigSource::builder();

    builder = match (config, default_config_path()) {
        (Some(path), _) => builder.file(path),
        (None, Some(path)) => builder.optional_file(path),
        (None, None) => builder,
    };

    if use_env {
        builder = builder.env_prefix(DEFAULT_ENV_PREFIX);
    }

    builder.build().context("Failed to load queue configuration")
}
