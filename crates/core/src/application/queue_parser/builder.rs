// Hierarchy Builder
// Turns the legacy queue name list into a single-level queue tree

use std::collections::BTreeMap;
use tracing::{debug, info, warn};

use crate::domain::property::{
    to_full_property_name, MAPRED_ACLS_ENABLED_KEY, QUEUE_STATE_PROPERTY,
};
use crate::domain::{AccessControlList, Queue, QueueOperation, QueueState, WILDCARD_ACL};
use crate::error::Result;
use crate::port::{ConfigSource, ConfigSourceExt};

/// Output of one build pass
///
/// The ACL flag is global, so it travels beside the tree rather than on
/// any queue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuiltHierarchy {
    pub root: Queue,
    pub acls_enabled: bool,
    /// Names that could not be turned into a queue, in list order
    pub skipped: Vec<String>,
}

/// Build the root queue and one child per valid name
///
/// A failing name is skipped with a warning; the others are still built.
pub fn build(conf: &dyn ConfigSource, queue_names: &[String]) -> BuiltHierarchy {
    let mut root = Queue::root();
    let mut skipped = Vec::new();

    for name in queue_names {
        let added = build_queue(conf, name)
            .and_then(|queue| root.add_child(queue).map_err(Into::into));
        if let Err(e) = added {
            warn!(queue = %name, error = %e, "Not able to initialize queue");
            skipped.push(name.clone());
        }
    }

    let acls_enabled = read_acls_enabled(conf);

    info!(
        queues = root.children().len(),
        skipped = skipped.len(),
        acls_enabled,
        "Built queue hierarchy from deprecated configuration"
    );

    BuiltHierarchy {
        root,
        acls_enabled,
        skipped,
    }
}

/// Build a single leaf queue from its flat properties
pub fn build_queue(conf: &dyn ConfigSource, name: &str) -> Result<Queue> {
    let acls = queue_acls(conf, name)?;
    let state = queue_state(conf, name)?;
    Ok(Queue::new(name, acls, state))
}

/// Read every operation's ACL; unset means unrestricted
fn queue_acls(
    conf: &dyn ConfigSource,
    name: &str,
) -> Result<BTreeMap<QueueOperation, AccessControlList>> {
    let mut acls = BTreeMap::new();
    for op in QueueOperation::ALL {
        let key = to_full_property_name(name, op.acl_name());
        let value = conf.get_or(&key, WILDCARD_ACL)?;
        debug!(queue = %name, key = %key, acl = %value, "Resolved queue ACL");
        acls.insert(op, AccessControlList::new(value));
    }
    Ok(acls)
}

fn queue_state(conf: &dyn ConfigSource, name: &str) -> Result<QueueState> {
    let key = to_full_property_name(name, QUEUE_STATE_PROPERTY);
    let value = conf.get_or(&key, QueueState::Running.state_name())?;
    Ok(value.parse::<QueueState>()?)
}

fn read_acls_enabled(conf: &dyn ConfigSource) -> bool {
    conf.get_bool(MAPRED_ACLS_ENABLED_KEY, false)
        .unwrap_or_else(|e| {
            warn!(error = %e, "Ignoring unreadable ACL flag, ACLs stay disabled");
            false
        })
}
