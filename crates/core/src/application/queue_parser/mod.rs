// Queue Configuration Parsers

pub mod builder;
pub mod deprecated;
pub mod detector;

#[cfg(test)]
mod builder_test;

pub use deprecated::DeprecatedQueueConfigParser;
pub use detector::{DeprecationWarning, LegacyDetection};

use crate::domain::Queue;
use serde::Serialize;

/// How a parser finished construction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ParseOutcome {
    /// The source held queue configuration; a root was produced
    Built,
    /// The source did not apply; no root
    Skipped,
}

/// Source of a queue hierarchy
pub trait QueueConfigurationParser {
    /// Root of the hierarchy, `None` when this source does not apply
    fn root(&self) -> Option<&Queue>;

    /// Whether queue ACLs are enforced cluster-wide
    fn acls_enabled(&self) -> bool;
}
