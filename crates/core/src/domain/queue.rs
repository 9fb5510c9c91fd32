// Queue Domain Model

use serde::{Serialize, Serializer};
use std::collections::BTreeMap;
use std::str::FromStr;

use super::acl::AccessControlList;
use super::error::DomainError;
use super::property::to_full_property_name;
use super::state::QueueState;

/// Queue identifier
pub type QueueId = String;

/// Operations guarded by a per-queue ACL
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum QueueOperation {
    SubmitJob,
    AdministerJobs,
}

impl QueueOperation {
    /// All operations, in declaration order
    pub const ALL: [QueueOperation; 2] = [QueueOperation::SubmitJob, QueueOperation::AdministerJobs];

    /// Property suffix holding this operation's ACL (`mapred.queue.<q>.<suffix>`)
    pub fn acl_name(&self) -> &'static str {
        match self {
            QueueOperation::SubmitJob => "acl-submit-job",
            QueueOperation::AdministerJobs => "acl-administer-jobs",
        }
    }

    /// Whether the owner of a job may perform this operation on it
    /// regardless of the ACL
    pub fn is_job_owner_allowed(&self) -> bool {
        matches!(self, QueueOperation::AdministerJobs)
    }
}

impl std::fmt::Display for QueueOperation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            QueueOperation::SubmitJob => write!(f, "submit-job"),
            QueueOperation::AdministerJobs => write!(f, "administer-jobs"),
        }
    }
}

impl FromStr for QueueOperation {
    type Err = DomainError;

    /// Accepts `submit-job` or the ACL suffix `acl-submit-job`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        let wanted = wanted.strip_prefix("acl-").unwrap_or(&wanted);
        QueueOperation::ALL
            .into_iter()
            .find(|op| op.to_string() == wanted)
            .ok_or_else(|| DomainError::UnknownQueueOperation(s.to_string()))
    }
}

impl Serialize for QueueOperation {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Node of the queue hierarchy
///
/// The root is a synthetic queue with an empty name. It only groups the
/// top-level queues; its state and ACLs carry no meaning.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Queue {
    name: QueueId,
    state: QueueState,
    acls: BTreeMap<QueueOperation, AccessControlList>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    children: Vec<Queue>,
}

impl Queue {
    /// Create a leaf queue
    ///
    /// Operations missing from `acls` are unrestricted.
    pub fn new(
        name: impl Into<String>,
        acls: BTreeMap<QueueOperation, AccessControlList>,
        state: QueueState,
    ) -> Self {
        Self {
            name: name.into(),
            state,
            acls,
            children: Vec::new(),
        }
    }

    /// Create the synthetic, empty-named root
    pub fn root() -> Self {
        Self::new("", BTreeMap::new(), QueueState::default())
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn state(&self) -> QueueState {
        self.state
    }

    pub fn is_root(&self) -> bool {
        self.name.is_empty()
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Append a child, keeping insertion order
    ///
    /// Sibling names are unique.
    pub fn add_child(&mut self, child: Queue) -> crate::domain::error::Result<()> {
        if self.child(child.name()).is_some() {
            return Err(DomainError::DuplicateQueue(child.name));
        }
        self.children.push(child);
        Ok(())
    }

    pub fn children(&self) -> &[Queue] {
        &self.children
    }

    pub fn child(&self, name: &str) -> Option<&Queue> {
        self.children.iter().find(|q| q.name == name)
    }

    /// ACL for `op`; unrestricted when none was configured
    pub fn acl(&self, op: QueueOperation) -> AccessControlList {
        self.acls.get(&op).cloned().unwrap_or_default()
    }

    /// Fully-qualified property holding this queue's ACL for `op`
    pub fn acl_property_name(&self, op: QueueOperation) -> String {
        to_full_property_name(&self.name, op.acl_name())
    }

    /// ACLs keyed by their fully-qualified property name
    pub fn acls(&self) -> BTreeMap<String, AccessControlList> {
        QueueOperation::ALL
            .into_iter()
            .map(|op| (self.acl_property_name(op), self.acl(op)))
            .collect()
    }

    /// Check whether `user` may perform `op` on this queue
    ///
    /// `is_job_owner` only matters for operations that let job owners
    /// through (see [`QueueOperation::is_job_owner_allowed`]).
    pub fn has_access<S: AsRef<str>>(
        &self,
        op: QueueOperation,
        user: &str,
        groups: &[S],
        is_job_owner: bool,
    ) -> bool {
        if is_job_owner && op.is_job_owner_allowed() {
            return true;
        }
        self.acl(op).is_user_allowed(user, groups)
    }

    /// Names of all leaf queues below this node, depth-first
    pub fn leaf_names(&self) -> Vec<&str> {
        let mut names = Vec::new();
        self.collect_leaf_names(&mut names);
        names
    }

    fn collect_leaf_names<'a>(&'a self, out: &mut Vec<&'a str>) {
        for child in &self.children {
            if child.is_leaf() {
                out.push(child.name());
            } else {
                child.collect_leaf_names(out);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const NO_GROUPS: &[&str] = &[];

    fn queue_with_submit_acl(name: &str, acl: &str) -> Queue {
        let mut acls = BTreeMap::new();
        acls.insert(QueueOperation::SubmitJob, AccessControlList::new(acl));
        Queue::new(name, acls, QueueState::Running)
    }

    #[test]
    fn test_operation_acl_names() {
        assert_eq!(QueueOperation::SubmitJob.acl_name(), "acl-submit-job");
        assert_eq!(QueueOperation::AdministerJobs.acl_name(), "acl-administer-jobs");
        assert!(!QueueOperation::SubmitJob.is_job_owner_allowed());
        assert!(QueueOperation::AdministerJobs.is_job_owner_allowed());
    }

    #[test]
    fn test_operation_from_str() {
        assert_eq!(
            "submit-job".parse::<QueueOperation>().unwrap(),
            QueueOperation::SubmitJob
        );
        assert_eq!(
            "acl-administer-jobs".parse::<QueueOperation>().unwrap(),
            QueueOperation::AdministerJobs
        );
        assert!("kill-job".parse::<QueueOperation>().is_err());
    }

    #[test]
    fn test_root_queue() {
        let root = Queue::root();
        assert!(root.is_root());
        assert!(root.is_leaf());
        assert_eq!(root.name(), "");
    }

    #[test]
    fn test_add_child_keeps_order_and_rejects_duplicates() {
        let mut root = Queue::root();
        root.add_child(queue_with_submit_acl("b", "*")).unwrap();
        root.add_child(queue_with_submit_acl("a", "*")).unwrap();

        let names: Vec<_> = root.children().iter().map(Queue::name).collect();
        assert_eq!(names, vec!["b", "a"]);

        let err = root.add_child(queue_with_submit_acl("a", "bob")).unwrap_err();
        assert_eq!(err, DomainError::DuplicateQueue("a".to_string()));
        assert_eq!(root.children().len(), 2);
        assert_eq!(root.child("a").unwrap().acl(QueueOperation::SubmitJob).as_str(), "*");
    }

    #[test]
    fn test_missing_acl_is_unrestricted() {
        let queue = queue_with_submit_acl("q", "alice");
        assert!(queue.acl(QueueOperation::AdministerJobs).is_all_allowed());
        assert_eq!(queue.acl(QueueOperation::SubmitJob).as_str(), "alice");
    }

    #[test]
    fn test_acls_keyed_by_property_name() {
        let queue = queue_with_submit_acl("q", "alice");
        let acls = queue.acls();
        assert_eq!(acls.len(), 2);
        assert_eq!(acls["mapred.queue.q.acl-submit-job"].as_str(), "alice");
        assert_eq!(acls["mapred.queue.q.acl-administer-jobs"].as_str(), "*");
    }

    #[test]
    fn test_has_access() {
        let mut acls = BTreeMap::new();
        acls.insert(QueueOperation::SubmitJob, AccessControlList::new("alice"));
        acls.insert(QueueOperation::AdministerJobs, AccessControlList::new(" admins"));
        let queue = Queue::new("q", acls, QueueState::Running);

        assert!(queue.has_access(QueueOperation::SubmitJob, "alice", NO_GROUPS, false));
        assert!(!queue.has_access(QueueOperation::SubmitJob, "bob", NO_GROUPS, true));
        assert!(queue.has_access(QueueOperation::AdministerJobs, "bob", &["admins"], false));
        // Job owners may administer their own jobs
        assert!(queue.has_access(QueueOperation::AdministerJobs, "bob", NO_GROUPS, true));
        assert!(!queue.has_access(QueueOperation::AdministerJobs, "bob", NO_GROUPS, false));
    }

    #[test]
    fn test_leaf_names() {
        let mut root = Queue::root();
        root.add_child(queue_with_submit_acl("a", "*")).unwrap();
        root.add_child(queue_with_submit_acl("b", "*")).unwrap();
        assert_eq!(root.leaf_names(), vec!["a", "b"]);
    }

    #[test]
    fn test_serialize_queue() {
        let mut root = Queue::root();
        root.add_child(queue_with_submit_acl("a", "alice")).unwrap();

        let json = serde_json::to_value(&root).unwrap();
        assert_eq!(json["name"], "");
        assert_eq!(json["children"][0]["name"], "a");
        assert_eq!(json["children"][0]["state"], "RUNNING");
        assert_eq!(json["children"][0]["acls"]["submit-job"], "alice");
        assert!(json["children"][0].get("children").is_none());
    }
}
