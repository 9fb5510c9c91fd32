//! Logging setup
//!
//! Diagnostics go to stderr so `--format json` output stays parseable.

use anyhow::Result;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Default filter when `RUST_LOG` is unset
pub const DEFAULT_LOG_FILTER: &str = "qhier=info,qhier_core=info,qhier_infra_config=warn";

/// Initialize the global subscriber
///
/// # Environment Variables
///
/// - `RUST_LOG`: filter directives (default: [`DEFAULT_LOG_FILTER`])
/// - `QHIER_LOG_FORMAT`: `json` for structured output, anything else for pretty
pub fn init_logging(verbose: bool) -> Result<()> {
    let log_format = std::env::var("QHIER_LOG_FORMAT").unwrap_or_else(|_| "pretty".to_string());

    let env_filter = if verbose {
        EnvFilter::try_new("qhier=debug,qhier_core=debug,qhier_infra_config=debug")?
    } else {
        EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(DEFAULT_LOG_FILTER))?
    };

    match log_format.as_str() {
        "json" => {
            // Production: JSON structured logging
            tracing_subscriber::registry()
                .with(env_filter)
                .with(fmt::layer().json().with_writer(std::io::stderr))
                .try_init()?;
        }
        _ => {
            // Development: compact human-readable output
            tracing_subscriber::registry()
                .with(env_filter)
                .with(fmt::layer().compact().with_writer(std::io::stderr))
                .try_init()?;
        }
    }

    Ok(())
}
