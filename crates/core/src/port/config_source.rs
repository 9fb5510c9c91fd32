// Configuration Source Port
// Flat, string-keyed key/value snapshot (e.g. mapred-site.xml)

use std::collections::BTreeMap;
use thiserror::Error;

/// Configuration accessor errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Configuration unavailable for {key}: {reason}")]
    Unavailable { key: String, reason: String },

    #[error("Invalid value for {key}: {value:?} (expected {expected})")]
    InvalidValue {
        key: String,
        value: String,
        expected: &'static str,
    },

    #[error("Failed to load configuration: {0}")]
    Load(String),
}

/// Read-only view of a flat configuration namespace
///
/// `Ok(None)` means the key is not set. `Err` is reserved for accessor
/// failures (backing store unreadable, value of the wrong shape).
#[cfg_attr(test, mockall::automock)]
pub trait ConfigSource {
    fn get(&self, key: &str) -> Result<Option<String>, ConfigError>;
}

/// Typed lookups shared by every [`ConfigSource`]
pub trait ConfigSourceExt: ConfigSource {
    /// Value of `key`, or `default` when unset
    fn get_or(&self, key: &str, default: &str) -> Result<String, ConfigError> {
        Ok(self.get(key)?.unwrap_or_else(|| default.to_string()))
    }

    /// Comma-separated list, trimmed, blank entries dropped
    ///
    /// `None` when the key is unset. A set but blank value yields an empty list.
    fn get_strings(&self, key: &str) -> Result<Option<Vec<String>>, ConfigError> {
        Ok(self.get(key)?.map(|value| split_list(&value)))
    }

    /// Boolean value (`true`/`false`, case-insensitive), `default` when unset
    fn get_bool(&self, key: &str, default: bool) -> Result<bool, ConfigError> {
        match self.get(key)? {
            None => Ok(default),
            Some(value) => match value.trim().to_ascii_lowercase().as_str() {
                "true" => Ok(true),
                "false" => Ok(false),
                _ => Err(ConfigError::InvalidValue {
                    key: key.to_string(),
                    value,
                    expected: "true or false",
                }),
            },
        }
    }

    /// Whether `key` is set; accessor failures count as unset
    fn contains(&self, key: &str) -> bool {
        matches!(self.get(key), Ok(Some(_)))
    }
}

impl<T: ConfigSource + ?Sized> ConfigSourceExt for T {}

/// Split a comma-separated list
pub fn split_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}

/// In-memory configuration snapshot
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryConfig {
    entries: BTreeMap<String, String>,
}

impl MemoryConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style setter
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(key, value);
        self
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(key.into(), value.into());
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl ConfigSource for MemoryConfig {
    fn get(&self, key: &str) -> Result<Option<String>, ConfigError> {
        Ok(self.entries.get(key).cloned())
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for MemoryConfig {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

// ============================================================================
// Mock Implementations for Testing
// ============================================================================

pub mod mocks {
    use super::*;
    use std::cell::RefCell;
    use std::collections::BTreeSet;

    /// Wraps a [`MemoryConfig`], records every key read and fails on
    /// selected keys
    #[derive(Debug, Default)]
    pub struct RecordingConfig {
        inner: MemoryConfig,
        failing: BTreeSet<String>,
        reads: RefCell<Vec<String>>,
    }

    impl RecordingConfig {
        pub fn new(inner: MemoryConfig) -> Self {
            Self {
                inner,
                ..Self::default()
            }
        }

        /// Make reads of `key` fail with [`ConfigError::Unavailable`]
        pub fn failing_on(mut self, key: impl Into<String>) -> Self {
            self.failing.insert(key.into());
            self
        }

        /// Keys read so far, in order
        pub fn reads(&self) -> Vec<String> {
            self.reads.borrow().clone()
        }
    }

    impl ConfigSource for RecordingConfig {
        fn get(&self, key: &str) -> Result<Option<String>, ConfigError> {
            self.reads.borrow_mut().push(key.to_string());
            if self.failing.contains(key) {
                return Err(ConfigError::Unavailable {
                    key: key.to_string(),
                    reason: "injected failure".to_string(),
                });
            }
            self.inner.get(key)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_or_default() {
        let conf = MemoryConfig::new().with("a", "1");
        assert_eq!(conf.get_or("a", "x").unwrap(), "1");
        assert_eq!(conf.get_or("b", "x").unwrap(), "x");
    }

    #[test]
    fn test_get_strings() {
        let conf = MemoryConfig::new()
            .with("list", " a, b ,,c ")
            .with("blank", "   ");
        assert_eq!(
            conf.get_strings("list").unwrap(),
            Some(vec!["a".to_string(), "b".to_string(), "c".to_string()])
        );
        assert_eq!(conf.get_strings("blank").unwrap(), Some(vec![]));
        assert_eq!(conf.get_strings("missing").unwrap(), None);
    }

    #[test]
    fn test_get_bool() {
        let conf = MemoryConfig::new()
            .with("yes", "TRUE")
            .with("no", "false")
            .with("bad", "maybe");
        assert!(conf.get_bool("yes", false).unwrap());
        assert!(!conf.get_bool("no", true).unwrap());
        assert!(conf.get_bool("missing", true).unwrap());

        let err = conf.get_bool("bad", false).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { ref key, .. } if key == "bad"));
    }

    #[test]
    fn test_contains_treats_failures_as_unset() {
        let mut mock = MockConfigSource::new();
        mock.expect_get().returning(|key| {
            Err(ConfigError::Unavailable {
                key: key.to_string(),
                reason: "down".to_string(),
            })
        });
        assert!(!mock.contains("anything"));
    }

    #[test]
    fn test_recording_config() {
        let conf = mocks::RecordingConfig::new(MemoryConfig::new().with("a", "1")).failing_on("b");
        assert_eq!(conf.get("a").unwrap(), Some("1".to_string()));
        assert!(conf.get("b").is_err());
        assert_eq!(conf.reads(), vec!["a".to_string(), "b".to_string()]);
    }

    #[test]
    fn test_memory_config_from_iter() {
        let conf: MemoryConfig = [("k1", "v1"), ("k2", "v2")].into_iter().collect();
        assert_eq!(conf.len(), 2);
        assert_eq!(conf.iter().next(), Some(("k1", "v1")));
    }
}
