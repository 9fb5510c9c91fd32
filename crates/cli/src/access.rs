//! Access check for `qhier check-access`

use qhier_core::domain::QueueOperation;
use qhier_core::{AppError, DeprecatedQueueConfigParser, QueueConfigurationParser};

/// Outcome of an access check
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccessDecision {
    Allowed(String),
    Denied(String),
}

impl AccessDecision {
    pub fn is_allowed(&self) -> bool {
        matches!(self, AccessDecision::Allowed(_))
    }
}

/// Request for [`check_access`]
#[derive(Debug, Clone)]
pub struct AccessRequest<'a> {
    pub queue: &'a str,
    pub operation: QueueOperation,
    pub user: &'a str,
    pub groups: &'a [String],
    pub job_owner: bool,
}

/// Decide whether a user may perform an operation on a queue
///
/// Submissions to a stopped queue are refused whatever the ACL says.
pub fn check_access(
    parser: &DeprecatedQueueConfigParser,
    req: &AccessRequest<'_>,
) -> qhier_core::Result<AccessDecision> {
    let root = parser
        .root()
        .ok_or_else(|| AppError::NotFound("deprecated queue configuration".to_string()))?;
    let queue = root
        .child(req.queue)
        .ok_or_else(|| AppError::NotFound(format!("queue {}", req.queue)))?;

    if req.operation == QueueOperation::SubmitJob && !queue.state().accepts_jobs() {
        return Ok(AccessDecision::Denied(format!(
            "queue {} is {}",
            queue.name(),
            queue.state()
        )));
    }

    if !parser.acls_enabled() {
        return Ok(AccessDecision::Allowed(
            "ACLs are not enforced (mapred.acls.enabled=false)".to_string(),
        ));
    }

    let acl = queue.acl(req.operation);
    if queue.has_access(req.operation, req.user, req.groups, req.job_owner) {
        Ok(AccessDecision::Allowed(format!(
            "{} permits {} (acl: {:?})",
            queue.acl_property_name(req.operation),
            req.user,
            acl.as_str()
        )))
    } else {
        Ok(AccessDecision::Denied(format!(
            "{} does not list {} (acl: {:?})",
            queue.acl_property_name(req.operation),
            req.user,
            acl.as_str()
        )))
    }
}
