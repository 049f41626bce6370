//! File-backed storage backend.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::error::StorageError;

use super::StorageBackend;

/// Durable storage rooted at a directory, one file per key.
///
/// Keys are restricted to a filename-safe alphabet so a key can never
/// resolve outside the root.
#[derive(Debug)]
pub struct FileBackend {
    root: PathBuf,
}

impl FileBackend {
    /// Open (creating if needed) a backend rooted at `root`.
    pub fn open(root: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let root = root.into();
        fs::create_dir_all(&root)?;
        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn entry_path(&self, key: &str) -> Result<PathBuf, StorageError> {
        let safe = !key.is_empty()
            && !key.starts_with('.')
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'));
        if !safe {
            return Err(StorageError::InvalidKey(key.to_string()));
        }
        Ok(self.root.join(key))
    }
}

impl StorageBackend for FileBackend {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let path = self.entry_path(key)?;
        match fs::read_to_string(&path) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        let path = self.entry_path(key)?;
        fs::write(&path, value)?;
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        let path = self.entry_path(key)?;
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roundtrip_on_disk() {
        let dir = tempfile::tempdir().unwrap();
        let mut backend = FileBackend::open(dir.path()).unwrap();

        assert_eq!(backend.get("fundme_user_data").unwrap(), None);
        backend.set("fundme_user_data", "{\"a\":1}").unwrap();
        assert_eq!(
            backend.get("fundme_user_data").unwrap().as_deref(),
            Some("{\"a\":1}")
        );

        // Survives a reopen of the same root
        let reopened = FileBackend::open(dir.path()).unwrap();
        assert_eq!(
            reopened.get("fundme_user_data").unwrap().as_deref(),
            Some("{\"a\":1}")
        );

        backend.remove("fundme_user_data").unwrap();
        assert_eq!(backend.get("fundme_user_data").unwrap(), None);
        // Removing again is fine
        backend.remove("fundme_user_data").unwrap();
    }

    #[test]
    fn rejects_unsafe_keys() {
        let dir = tempfile::tempdir().unwrap();
        let mut backend = FileBackend::open(dir.path()).unwrap();

        for key in ["", "..", "../escape", "a/b", ".hidden"] {
            assert!(
                matches!(backend.get(key), Err(StorageError::InvalidKey(_))),
                "key {key:?} should be rejected"
            );
            assert!(matches!(
                backend.set(key, "x"),
                Err(StorageError::InvalidKey(_))
            ));
        }
    }
}
