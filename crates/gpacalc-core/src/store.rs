//! Persisted state store.
//!
//! Round-trips the input slices through a [`KeyValueStore`]. Reads fall
//! back to the slice's empty default and writes log and carry on, so no
//! storage problem ever reaches the caller: a missing or corrupt record is
//! the same as one that was never written, and the in-memory state stays
//! authoritative when a write fails.

use crate::error::StoreError;
use crate::state::{CumulativeRecord, GradeSelection, ImprovementRecord, Slice, Theme};
use crate::traits::KeyValueStore;

/// Typed access to the persisted slices of one user.
#[derive(Debug)]
pub struct StateStore<S> {
    backend: S,
}

impl<S: KeyValueStore> StateStore<S> {
    pub fn new(backend: S) -> Self {
        Self { backend }
    }

    /// Read a slice, or its empty default if absent or unreadable.
    pub fn load<T: Slice>(&self) -> T {
        match self.try_load::<T>() {
            Ok(Some(value)) => value,
            Ok(None) => T::default(),
            Err(e) => {
                tracing::warn!(key = T::KEY, "using empty default: {e}");
                T::default()
            }
        }
    }

    /// Write a slice. Failures are logged and otherwise ignored.
    pub fn save<T: Slice>(&mut self, value: &T) {
        match self.try_save(value) {
            Ok(()) => tracing::debug!(key = T::KEY, "saved record"),
            Err(e) => tracing::warn!(key = T::KEY, "failed to save record: {e}"),
        }
    }

    /// Reset every calculator slice to its empty default.
    ///
    /// Three independent writes; repeating the call changes nothing.
    pub fn clear_all(&mut self) {
        self.save(&GradeSelection::default());
        self.save(&CumulativeRecord::default());
        self.save(&ImprovementRecord::default());
    }

    /// The saved theme, or the default one.
    pub fn load_theme(&self) -> Theme {
        self.load()
    }

    pub fn save_theme(&mut self, theme: Theme) {
        self.save(&theme);
    }

    pub fn backend(&self) -> &S {
        &self.backend
    }

    pub fn into_inner(self) -> S {
        self.backend
    }

    fn try_load<T: Slice>(&self) -> Result<Option<T>, StoreError> {
        let Some(raw) = self.backend.get(T::KEY)? else {
            return Ok(None);
        };
        serde_json::from_str(&raw)
            .map(Some)
            .map_err(|e| StoreError::Corrupt {
                key: T::KEY.to_string(),
                reason: e.to_string(),
            })
    }

    fn try_save<T: Slice>(&mut self, value: &T) -> Result<(), StoreError> {
        let json = serde_json::to_string(value).map_err(|e| StoreError::Serialization {
            key: T::KEY.to_string(),
            reason: e.to_string(),
        })?;
        self.backend.set(T::KEY, &json)
    }
}
