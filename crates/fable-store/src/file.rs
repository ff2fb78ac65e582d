//! File-backed store implementation.
//!
//! Each key maps to `<dir>/<key>.json`. Writes go through a temporary
//! file followed by a rename, so a crash mid-write never leaves a
//! half-written document behind.

use std::fs;
use std::path::{Path, PathBuf};

use fable_types::{Result, SkinError};

use crate::KvStore;

/// A key-value store persisted as one file per key under a directory.
#[derive(Debug)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Open a store rooted at `dir`, creating the directory if needed.
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    /// Directory the store writes into.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> Result<PathBuf> {
        // Keys become file names; reject anything that could escape the
        // store directory.
        if key.is_empty() || key.contains(['/', '\\']) || key.contains("..") {
            return Err(SkinError::Store(format!("invalid store key: {key:?}")));
        }
        Ok(self.dir.join(format!("{key}.json")))
    }
}

impl KvStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.path_for(key)?;
        match fs::read_to_string(&path) {
            Ok(raw) => Ok(Some(raw)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn put(&mut self, key: &str, value: &str) -> Result<()> {
        let path = self.path_for(key)?;
        let tmp = self.dir.join(format!("{key}.json.tmp"));
        fs::write(&tmp, value)?;
        fs::rename(&tmp, &path)?;
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        let path = self.path_for(key)?;
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_missing_key() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::open(dir.path()).unwrap();
        assert!(store.get("nope").unwrap().is_none());
    }

    #[test]
    fn put_then_get() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileStore::open(dir.path()).unwrap();
        store.put("skins", r#"{"fingerprint":"fp"}"#).unwrap();
        assert_eq!(
            store.get("skins").unwrap().as_deref(),
            Some(r#"{"fingerprint":"fp"}"#)
        );
    }

    #[test]
    fn put_overwrites_whole_value() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileStore::open(dir.path()).unwrap();
        store.put("k", "a much longer first value").unwrap();
        store.put("k", "short").unwrap();
        assert_eq!(store.get("k").unwrap().as_deref(), Some("short"));
    }

    #[test]
    fn put_leaves_no_temp_file() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileStore::open(dir.path()).unwrap();
        store.put("k", "v").unwrap();
        let names: Vec<String> = fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["k.json".to_string()]);
    }

    #[test]
    fn remove_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileStore::open(dir.path()).unwrap();
        store.put("k", "v").unwrap();
        store.remove("k").unwrap();
        store.remove("k").unwrap();
        assert!(store.get("k").unwrap().is_none());
    }

    #[test]
    fn rejects_path_traversal_keys() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileStore::open(dir.path()).unwrap();
        assert!(store.put("../escape", "v").is_err());
        assert!(store.get("a/b").is_err());
        assert!(store.remove("").is_err());
    }

    #[test]
    fn reopen_sees_existing_data() {
        let dir = tempfile::tempdir().unwrap();
        {
            let mut store = FileStore::open(dir.path()).unwrap();
            store.put("k", "persisted").unwrap();
        }
        let store = FileStore::open(dir.path()).unwrap();
        assert_eq!(store.get("k").unwrap().as_deref(), Some("persisted"));
    }
}
