//! In-memory storage backend.

use std::collections::HashMap;

use crate::error::StorageError;

use super::StorageBackend;

/// HashMap-backed storage. Nothing survives the process; this is the
/// backend for tests and for hosts that run without durable storage.
#[derive(Debug, Clone, Default)]
pub struct MemoryBackend {
    entries: HashMap<String, String>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StorageBackend for MemoryBackend {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        self.entries.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_get_remove() {
        let mut backend = MemoryBackend::new();
        assert_eq!(backend.get("k").unwrap(), None);

        backend.set("k", "v1").unwrap();
        assert_eq!(backend.get("k").unwrap().as_deref(), Some("v1"));

        backend.set("k", "v2").unwrap();
        assert_eq!(backend.get("k").unwrap().as_deref(), Some("v2"));

        backend.remove("k").unwrap();
        assert_eq!(backend.get("k").unwrap(), None);
    }

    #[test]
    fn remove_absent_key_is_ok() {
        let mut backend = MemoryBackend::new();
        backend.remove("never-set").unwrap();
    }
}
