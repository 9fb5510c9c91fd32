// Access Control List value

use serde::{Serialize, Serializer};
use std::collections::BTreeSet;

/// Wildcard ACL: everyone is allowed
pub const WILDCARD_ACL: &str = "*";

/// Access control list for one queue operation
///
/// Format: `"user1,user2 group1,group2"`. Users come before the first
/// space, groups after it. A lone `*` allows everyone. Blank entries
/// are ignored, so `" admins"` names only a group.
///
/// Parsing never fails; the literal string is kept for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessControlList {
    raw: String,
    all_allowed: bool,
    users: BTreeSet<String>,
    groups: BTreeSet<String>,
}

impl AccessControlList {
    pub fn new(acl: impl Into<String>) -> Self {
        let raw = acl.into();

        if raw.trim() == WILDCARD_ACL {
            return Self {
                raw,
                all_allowed: true,
                users: BTreeSet::new(),
                groups: BTreeSet::new(),
            };
        }

        let (user_part, group_part) = match raw.split_once(' ') {
            Some((users, groups)) => (users, groups),
            None => (raw.as_str(), ""),
        };

        let users = split_names(user_part);
        let groups = split_names(group_part);

        Self {
            raw,
            all_allowed: false,
            users,
            groups,
        }
    }

    /// ACL that allows everyone
    pub fn allow_all() -> Self {
        Self::new(WILDCARD_ACL)
    }

    /// The configured string, unchanged
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn is_all_allowed(&self) -> bool {
        self.all_allowed
    }

    pub fn users(&self) -> impl Iterator<Item = &str> {
        self.users.iter().map(String::as_str)
    }

    pub fn groups(&self) -> impl Iterator<Item = &str> {
        self.groups.iter().map(String::as_str)
    }

    /// Check whether `user`, member of `groups`, is listed
    pub fn is_user_allowed<S: AsRef<str>>(&self, user: &str, groups: &[S]) -> bool {
        if self.all_allowed || self.users.contains(user) {
            return true;
        }
        groups
            .iter()
            .any(|group| self.groups.contains(group.as_ref()))
    }
}

impl Default for AccessControlList {
    fn default() -> Self {
        Self::allow_all()
    }
}

impl std::fmt::Display for AccessControlList {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.raw)
    }
}

impl Serialize for AccessControlList {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.raw)
    }
}

fn split_names(list: &str) -> BTreeSet<String> {
    list.split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const NO_GROUPS: &[&str] = &[];

    #[test]
    fn test_wildcard_allows_everyone() {
        let acl = AccessControlList::new("*");
        assert!(acl.is_all_allowed());
        assert!(acl.is_user_allowed("anyone", NO_GROUPS));
        assert_eq!(acl.as_str(), "*");
    }

    #[test]
    fn test_users_and_groups() {
        let acl = AccessControlList::new("alice,bob admins,ops");
        assert!(!acl.is_all_allowed());
        assert_eq!(acl.users().collect::<Vec<_>>(), vec!["alice", "bob"]);
        assert_eq!(acl.groups().collect::<Vec<_>>(), vec!["admins", "ops"]);

        assert!(acl.is_user_allowed("alice", NO_GROUPS));
        assert!(acl.is_user_allowed("carol", &["ops"]));
        assert!(!acl.is_user_allowed("carol", &["dev"]));
    }

    #[test]
    fn test_groups_only() {
        let acl = AccessControlList::new(" admins");
        assert_eq!(acl.users().count(), 0);
        assert!(acl.is_user_allowed("dave", &["admins"]));
        assert!(!acl.is_user_allowed("admins", NO_GROUPS));
    }

    #[test]
    fn test_empty_acl_allows_nobody() {
        let acl = AccessControlList::new("");
        assert!(!acl.is_all_allowed());
        assert!(!acl.is_user_allowed("alice", &["admins"]));
    }

    #[test]
    fn test_literal_string_is_kept() {
        let acl = AccessControlList::new("alice,,bob ops");
        assert_eq!(acl.to_string(), "alice,,bob ops");
        assert_eq!(acl.users().collect::<Vec<_>>(), vec!["alice", "bob"]);
    }
}
