// Legacy configuration key names

/// Prefix shared by all per-queue properties
pub const QUEUE_CONF_PROPERTY_NAME_PREFIX: &str = "mapred.queue.";

/// Comma-separated list of queue names (deprecated)
pub const MAPRED_QUEUE_NAMES_KEY: &str = "mapred.queue.names";

/// Global ACL enforcement flag (deprecated)
pub const MAPRED_ACLS_ENABLED_KEY: &str = "mapred.acls.enabled";

/// Per-queue run state property suffix
pub const QUEUE_STATE_PROPERTY: &str = "state";

/// Hierarchical queue file that supersedes the flat keys
pub const QUEUE_CONF_FILE_NAME: &str = "mapred-queues.xml";

/// Build `mapred.queue.<queue>.<property>`
pub fn to_full_property_name(queue: &str, property: &str) -> String {
    format!("{QUEUE_CONF_PROPERTY_NAME_PREFIX}{queue}.{property}")
}
