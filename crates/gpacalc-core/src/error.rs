//! Storage error types.
//!
//! These errors represent failures of the durable key/value backend.
//! Defined in `gpacalc-core` so the state store can classify them when it
//! decides between falling back to a default and logging a failed write.

use thiserror::Error;

/// Errors that can occur while reading or writing a persisted record.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The backend failed to read or write the record.
    #[error("I/O error on record '{key}': {source}")]
    Io {
        key: String,
        #[source]
        source: std::io::Error,
    },

    /// The stored bytes do not decode into the expected record shape.
    #[error("record '{key}' is corrupt: {reason}")]
    Corrupt { key: String, reason: String },

    /// The record could not be encoded for storage.
    #[error("failed to serialize record '{key}': {reason}")]
    Serialization { key: String, reason: String },

    /// The backend refused the write because it is full.
    #[error("storage quota exceeded writing '{key}' ({needed} bytes, limit {limit})")]
    QuotaExceeded {
        key: String,
        needed: usize,
        limit: usize,
    },

    /// The key cannot be mapped onto the backend.
    #[error("invalid record key: {0}")]
    InvalidKey(String),
}

impl StoreError {
    /// The record key this error concerns.
    pub fn key(&self) -> &str {
        match self {
            StoreError::Io { key, .. }
            | StoreError::Corrupt { key, .. }
            | StoreError::Serialization { key, .. }
            | StoreError::QuotaExceeded { key, .. } => key,
            StoreError::InvalidKey(key) => key,
        }
    }

    /// Returns `true` if the stored record itself is unusable, as opposed
    /// to the backend failing to reach it.
    pub fn is_corruption(&self) -> bool {
        matches!(self, StoreError::Corrupt { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_is_reported_for_every_variant() {
        let io = StoreError::Io {
            key: "sgpaState".into(),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        assert_eq!(io.key(), "sgpaState");
        assert_eq!(StoreError::InvalidKey("../x".into()).key(), "../x");
    }

    #[test]
    fn only_corrupt_records_count_as_corruption() {
        let corrupt = StoreError::Corrupt {
            key: "cgpaState".into(),
            reason: "expected map".into(),
        };
        let quota = StoreError::QuotaExceeded {
            key: "cgpaState".into(),
            needed: 10,
            limit: 4,
        };
        assert!(corrupt.is_corruption());
        assert!(!quota.is_corruption());
        assert!(quota.to_string().contains("quota exceeded"));
    }
}
