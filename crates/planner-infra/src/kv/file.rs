//! File-backed key-value store - the durable local backend.
//!
//! Each key lives in its own `<key>.json` file under a data directory.
//! Writes go to a sibling temp file first and are then renamed over the
//! target, so a crash mid-write leaves the previous record intact.

use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use planner_core::StoreError;
use planner_core::ports::KeyValueStore;

pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Open a store rooted at `dir`. The directory is created lazily on the
    /// first write.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn path_for(&self, key: &str) -> Result<PathBuf, StoreError> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'))
            && !key.starts_with('.');

        if !valid {
            return Err(StoreError::Backend(format!("invalid store key '{key}'")));
        }

        Ok(self.dir.join(format!("{key}.json")))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let path = self.path_for(key)?;
        match fs::read_to_string(&path) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StoreError::Backend(format!(
                "failed to read {}: {e}",
                path.display()
            ))),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let path = self.path_for(key)?;
        let tmp = path.with_extension("json.tmp");

        fs::create_dir_all(&self.dir).map_err(|e| StoreError::write_failure(key, e))?;
        fs::write(&tmp, value).map_err(|e| StoreError::write_failure(key, e))?;
        fs::rename(&tmp, &path).map_err(|e| StoreError::write_failure(key, e))?;

        tracing::trace!(key = %key, bytes = value.len(), "Record written");
        Ok(())
    }

    fn delete(&self, key: &str) -> Result<(), StoreError> {
        let path = self.path_for(key)?;
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StoreError::write_failure(key, e)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_key_reads_none() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().join("data"));
        assert_eq!(store.get("posts").unwrap(), None);
        assert!(!store.exists("posts"));
    }

    #[test]
    fn test_set_creates_dir_and_persists() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().join("data");

        FileStore::new(&root).set("posts", "[]").unwrap();

        let reopened = FileStore::new(&root);
        assert_eq!(reopened.get("posts").unwrap(), Some("[]".to_string()));
        assert!(!root.join("posts.json.tmp").exists());
    }

    #[test]
    fn test_overwrite_and_delete() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path());

        store.set("clientProfile", "{}").unwrap();
        store.set("clientProfile", "{\"username\":\"a\"}").unwrap();
        assert_eq!(
            store.get("clientProfile").unwrap().as_deref(),
            Some("{\"username\":\"a\"}")
        );

        store.delete("clientProfile").unwrap();
        store.delete("clientProfile").unwrap();
        assert_eq!(store.get("clientProfile").unwrap(), None);
    }

    #[test]
    fn test_rejects_path_like_keys() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path());

        assert!(store.set("../escape", "x").is_err());
        assert!(store.get("a/b").is_err());
        assert!(store.get("").is_err());
    }
}
