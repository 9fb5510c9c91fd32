//! Unit tests for hierarchy building

#[cfg(test)]
mod tests {
    use super::super::builder::*;
    use crate::domain::{DomainError, QueueOperation, QueueState};
    use crate::error::AppError;
    use crate::port::config_source::mocks::RecordingConfig;
    use crate::port::MemoryConfig;

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_defaults() {
        let conf = MemoryConfig::new();
        let queue = build_queue(&conf, "a").unwrap();

        assert_eq!(queue.name(), "a");
        assert_eq!(queue.state(), QueueState::Running);
        for op in QueueOperation::ALL {
            assert!(queue.acl(op).is_all_allowed());
            assert_eq!(queue.acl(op).as_str(), "*");
        }
    }

    #[test]
    fn test_configured_values() {
        let conf = MemoryConfig::new()
            .with("mapred.queue.a.state", "stopped")
            .with("mapred.queue.a.acl-submit-job", "alice,bob users")
            .with("mapred.queue.a.acl-administer-jobs", " admins");
        let queue = build_queue(&conf, "a").unwrap();

        assert_eq!(queue.state(), QueueState::Stopped);
        assert_eq!(queue.acl(QueueOperation::SubmitJob).as_str(), "alice,bob users");
        assert_eq!(queue.acl(QueueOperation::AdministerJobs).as_str(), " admins");
    }

    #[test]
    fn test_unknown_state_fails() {
        let conf = MemoryConfig::new().with("mapred.queue.a.state", "draining");
        let err = build_queue(&conf, "a").unwrap_err();

        assert_eq!(
            err,
            AppError::Domain(DomainError::UnknownQueueState("draining".to_string()))
        );
    }

    #[test]
    fn test_accessor_failure_fails_queue() {
        let conf = RecordingConfig::new(MemoryConfig::new())
            .failing_on("mapred.queue.a.acl-administer-jobs");
        let err = build_queue(&conf, "a").unwrap_err();

        assert!(matches!(err, AppError::Config(_)));
    }

    #[test]
    fn test_failure_isolation() {
        let conf = MemoryConfig::new()
            .with("mapred.queue.b.state", "bogus")
            .with("mapred.queue.c.state", "STOPPED");
        let built = build(&conf, &names(&["a", "b", "c"]));

        let children: Vec<_> = built.root.children().iter().map(|q| q.name()).collect();
        assert_eq!(children, vec!["a", "c"]);
        assert_eq!(built.skipped, vec!["b"]);
        assert_eq!(built.root.child("c").unwrap().state(), QueueState::Stopped);
    }

    #[test]
    fn test_children_keep_list_order() {
        let conf = MemoryConfig::new();
        let built = build(&conf, &names(&["zeta", "alpha", "mid"]));

        let children: Vec<_> = built.root.children().iter().map(|q| q.name()).collect();
        assert_eq!(children, vec!["zeta", "alpha", "mid"]);
    }

    #[test]
    fn test_single_level_under_empty_root() {
        let conf = MemoryConfig::new();
        let built = build(&conf, &names(&["a", "b"]));

        assert!(built.root.is_root());
        assert!(built.root.children().iter().all(|q| q.is_leaf()));
    }

    #[test]
    fn test_empty_list_gives_empty_root() {
        let built = build(&MemoryConfig::new(), &[]);

        assert!(built.root.is_root());
        assert!(built.root.children().is_empty());
        assert!(built.skipped.is_empty());
    }

    #[test]
    fn test_duplicate_name_keeps_first() {
        let conf = MemoryConfig::new();
        let built = build(&conf, &names(&["a", "b", "a"]));

        assert_eq!(built.root.children().len(), 2);
        assert_eq!(built.skipped, vec!["a"]);
    }

    #[test]
    fn test_acls_flag() {
        let enabled = MemoryConfig::new().with("mapred.acls.enabled", "true");
        assert!(build(&enabled, &[]).acls_enabled);

        assert!(!build(&MemoryConfig::new(), &[]).acls_enabled);

        let garbage = MemoryConfig::new().with("mapred.acls.enabled", "yes please");
        assert!(!build(&garbage, &[]).acls_enabled);
    }

    #[test]
    fn test_acls_flag_read_once() {
        let conf = RecordingConfig::new(MemoryConfig::new().with("mapred.acls.enabled", "true"));
        build(&conf, &names(&["a", "b"]));

        let flag_reads = conf
            .reads()
            .iter()
            .filter(|key| key.as_str() == "mapred.acls.enabled")
            .count();
        assert_eq!(flag_reads, 1);
    }
}
