// Deprecated Queue Configuration Parser
// Builds a one-level queue hierarchy from mapred-site.xml style keys

use tracing::debug;

use super::builder::{self, BuiltHierarchy};
use super::detector::{self, DeprecationWarning};
use super::{ParseOutcome, QueueConfigurationParser};
use crate::domain::Queue;
use crate::port::ConfigSource;

/// Queue hierarchy read from the deprecated flat configuration
///
/// Construction is one pass: when `mapred.queue.names` is not set the
/// parser is SKIPPED and [`root`](QueueConfigurationParser::root) is
/// `None`, leaving the caller to use the hierarchical queue file.
/// Otherwise it is BUILT: every listed queue is a direct child of an
/// empty-named root.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeprecatedQueueConfigParser {
    root: Option<Queue>,
    acls_enabled: bool,
    warnings: Vec<DeprecationWarning>,
    skipped_queues: Vec<String>,
}

impl DeprecatedQueueConfigParser {
    pub fn new(conf: &dyn ConfigSource) -> Self {
        let Some(detection) = detector::detect(conf) else {
            debug!("No deprecated queue configuration found");
            return Self::default();
        };

        let BuiltHierarchy {
            root,
            acls_enabled,
            skipped,
        } = builder::build(conf, &detection.queue_names);

        Self {
            root: Some(root),
            acls_enabled,
            warnings: detection.warnings,
            skipped_queues: skipped,
        }
    }

    pub fn outcome(&self) -> ParseOutcome {
        if self.root.is_some() {
            ParseOutcome::Built
        } else {
            ParseOutcome::Skipped
        }
    }

    /// Deprecation warnings raised during detection
    pub fn warnings(&self) -> &[DeprecationWarning] {
        &self.warnings
    }

    /// Listed names that produced no queue
    pub fn skipped_queues(&self) -> &[String] {
        &self.skipped_queues
    }

    /// Take ownership of the tree
    pub fn into_root(self) -> Option<Queue> {
        self.root
    }
}

impl QueueConfigurationParser for DeprecatedQueueConfigParser {
    fn root(&self) -> Option<&Queue> {
        self.root.as_ref()
    }

    fn acls_enabled(&self) -> bool {
        self.acls_enabled
    }
}
