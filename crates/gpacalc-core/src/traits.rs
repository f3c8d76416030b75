//! Storage backend trait.
//!
//! The calculator persists its input slices through this trait; the
//! `gpacalc-store` crate provides the file-backed implementation.

use std::collections::BTreeMap;

use crate::error::StoreError;

/// Durable string key/value storage scoped to one user on one device.
///
/// Calls are synchronous: every write happens inside the user action that
/// caused it.
pub trait KeyValueStore {
    /// Read a record. `Ok(None)` means the key was never written.
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Replace a record.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// In-memory storage, for tests and throwaway sessions.
///
/// An optional byte quota makes writes fail the way a full browser
/// storage area does.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    records: BTreeMap<String, String>,
    quota: Option<usize>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Limit the total size of all stored values.
    pub fn with_quota(quota: usize) -> Self {
        Self {
            records: BTreeMap::new(),
            quota: Some(quota),
        }
    }

    /// Store raw bytes under a key, bypassing the quota.
    pub fn insert_raw(&mut self, key: &str, value: &str) {
        self.records.insert(key.to_string(), value.to_string());
    }

    pub fn raw(&self, key: &str) -> Option<&str> {
        self.records.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    fn used_without(&self, key: &str) -> usize {
        self.records
            .iter()
            .filter(|(k, _)| k.as_str() != key)
            .map(|(_, v)| v.len())
            .sum()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.records.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        if let Some(limit) = self.quota {
            let needed = self.used_without(key) + value.len();
            if needed > limit {
                return Err(StoreError::QuotaExceeded {
                    key: key.to_string(),
                    needed,
                    limit,
                });
            }
        }
        self.records.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_store_roundtrip() {
        let mut store = MemoryStore::new();
        assert_eq!(store.get("k").unwrap(), None);
        store.set("k", "v").unwrap();
        store.set("k", "w").unwrap();
        assert_eq!(store.get("k").unwrap().as_deref(), Some("w"));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn quota_counts_replaced_values_once() {
        let mut store = MemoryStore::with_quota(8);
        store.set("a", "1234").unwrap();
        store.set("a", "12345678").unwrap();
        let err = store.set("b", "x").unwrap_err();
        assert!(matches!(err, StoreError::QuotaExceeded { needed: 9, limit: 8, .. }));
        assert_eq!(store.raw("a"), Some("12345678"));
    }
}
