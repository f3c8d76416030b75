//! File-backed key/value storage.
//!
//! Each record lives in `{dir}/{key}.json`. Writes go to a sibling
//! temporary file that is renamed over the record, so a crash mid-write
//! leaves either the old or the new value on disk.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use gpacalc_core::{KeyValueStore, StoreError};

/// Records stored as one file per key under a directory.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Use `dir` for storage. The directory is created on first write.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of the file holding `key`.
    pub fn record_path(&self, key: &str) -> Result<PathBuf, StoreError> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
        if !valid {
            return Err(StoreError::InvalidKey(key.to_string()));
        }
        Ok(self.dir.join(format!("{key}.json")))
    }
}

fn io_error(key: &str, source: std::io::Error) -> StoreError {
    StoreError::Io {
        key: key.to_string(),
        source,
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let path = self.record_path(key)?;
        match std::fs::read_to_string(&path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(io_error(key, e)),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        let path = self.record_path(key)?;
        std::fs::create_dir_all(&self.dir).map_err(|e| io_error(key, e))?;

        let tmp = path.with_extension("json.tmp");
        std::fs::write(&tmp, value).map_err(|e| io_error(key, e))?;
        std::fs::rename(&tmp, &path).map_err(|e| {
            let _ = std::fs::remove_file(&tmp);
            io_error(key, e)
        })?;
        tracing::trace!(path = %path.display(), "wrote record");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gpacalc_core::state::{CumulativeRecord, Slice};
    use gpacalc_core::StateStore;

    #[test]
    fn missing_record_reads_as_none() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().join("never-created"));
        assert_eq!(store.get("sgpaState").unwrap(), None);
    }

    #[test]
    fn set_creates_directory_and_replaces_value() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileStore::new(dir.path().join("state"));

        store.set("cgpaState", "{}").unwrap();
        store.set("cgpaState", r#"{"gpas":{"1":"3.5"}}"#).unwrap();

        assert_eq!(
            store.get("cgpaState").unwrap().as_deref(),
            Some(r#"{"gpas":{"1":"3.5"}}"#)
        );
        let names: Vec<_> = std::fs::read_dir(store.dir())
            .unwrap()
            .map(|e| e.unwrap().file_name().into_string().unwrap())
            .collect();
        assert_eq!(names, vec!["cgpaState.json"]);
    }

    #[test]
    fn keys_cannot_escape_the_directory() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileStore::new(dir.path());
        for key in ["", "../evil", "a/b", "dot.ted"] {
            let err = store.set(key, "x").unwrap_err();
            assert!(matches!(err, StoreError::InvalidKey(_)), "key {key:?}");
        }
    }

    #[test]
    fn unreadable_record_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path());
        std::fs::create_dir(dir.path().join("sgpaState.json")).unwrap();
        let err = store.get("sgpaState").unwrap_err();
        assert!(matches!(err, StoreError::Io { .. }));
        assert!(!err.is_corruption());
    }

    #[test]
    fn state_store_over_files_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let mut record = CumulativeRecord::default();
        record.gpas.insert("2".into(), "3.25".into());

        let mut store = StateStore::new(FileStore::new(dir.path()));
        store.save(&record);

        let reopened = StateStore::new(FileStore::new(dir.path()));
        assert_eq!(reopened.load::<CumulativeRecord>(), record);
        assert!(dir
            .path()
            .join(format!("{}.json", CumulativeRecord::KEY))
            .exists());
    }
}
