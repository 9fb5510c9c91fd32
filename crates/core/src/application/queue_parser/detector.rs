// Legacy-Format Detector
// Decides whether queues are configured through the deprecated flat keys

use serde::Serialize;
use tracing::{debug, warn};

use crate::domain::property::{
    to_full_property_name, MAPRED_ACLS_ENABLED_KEY, MAPRED_QUEUE_NAMES_KEY, QUEUE_CONF_FILE_NAME,
};
use crate::domain::QueueOperation;
use crate::port::{ConfigSource, ConfigSourceExt};

/// Deprecated configuration found during detection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DeprecationWarning {
    /// `mapred.queue.names` is set
    QueueNames,
    /// `mapred.acls.enabled` is set
    AclsEnabled,
    /// At least one `mapred.queue.<name>.acl-*` key is set
    QueueAcls,
}

impl DeprecationWarning {
    pub fn message(&self) -> String {
        match self {
            DeprecationWarning::QueueNames => format!(
                "Configuring \"{MAPRED_QUEUE_NAMES_KEY}\" in mapred-site.xml or hadoop-site.xml \
                 is deprecated. Configure the queue hierarchy in {QUEUE_CONF_FILE_NAME}"
            ),
            DeprecationWarning::AclsEnabled => format!(
                "Configuring \"{MAPRED_ACLS_ENABLED_KEY}\" in mapred-site.xml or hadoop-site.xml \
                 is deprecated. Configure the queue hierarchy in {QUEUE_CONF_FILE_NAME}"
            ),
            DeprecationWarning::QueueAcls => format!(
                "Configuring queue ACLs in mapred-site.xml or hadoop-site.xml is deprecated. \
                 Configure queue ACLs in {QUEUE_CONF_FILE_NAME}"
            ),
        }
    }
}

impl std::fmt::Display for DeprecationWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message())
    }
}

/// Result of a positive detection
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LegacyDetection {
    /// Queue names from `mapred.queue.names`, in configured order
    pub queue_names: Vec<String>,
    /// Warnings emitted, in emission order
    pub warnings: Vec<DeprecationWarning>,
}

/// Detect the deprecated queue configuration
///
/// Returns `None` when `mapred.queue.names` is not set; nothing else is read
/// in that case. Presence alone is enough: a blank list still counts as
/// legacy configuration.
pub fn detect(conf: &dyn ConfigSource) -> Option<LegacyDetection> {
    let queue_names = match conf.get_strings(MAPRED_QUEUE_NAMES_KEY) {
        Ok(Some(names)) => names,
        Ok(None) => return None,
        Err(e) => {
            debug!(
                key = MAPRED_QUEUE_NAMES_KEY,
                error = %e,
                "Queue name list unreadable, treating as unset"
            );
            return None;
        }
    };

    let mut warnings = vec![DeprecationWarning::QueueNames];

    if conf.contains(MAPRED_ACLS_ENABLED_KEY) {
        warnings.push(DeprecationWarning::AclsEnabled);
    }

    // One warning is enough: stop at the first configured ACL key
    let queue_acls_configured = queue_names.iter().any(|queue| {
        QueueOperation::ALL
            .iter()
            .any(|op| conf.contains(&to_full_property_name(queue, op.acl_name())))
    });
    if queue_acls_configured {
        warnings.push(DeprecationWarning::QueueAcls);
    }

    for warning in &warnings {
        warn!("{}", warning);
    }

    Some(LegacyDetection {
        queue_names,
        warnings,
    })
}
