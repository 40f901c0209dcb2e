use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

use super::{BackendError, BlobStore};

/// In-process blob store, with switchable read/write failures for tests
#[derive(Debug, Default)]
pub struct MemoryBlobStore {
    entries: Mutex<HashMap<String, String>>,
    fail_reads: AtomicBool,
    fail_writes: AtomicBool,
}

impl MemoryBlobStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every `get` fail until switched off
    pub fn fail_reads(&self, fail: bool) {
        self.fail_reads.store(fail, Ordering::SeqCst);
    }

    /// Make every `set` and `remove` fail until switched off
    pub fn fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    /// Stored value regardless of injected failures
    pub fn raw(&self, key: &str) -> Option<String> {
        self.entries
            .lock()
            .ok()
            .and_then(|entries| entries.get(key).cloned())
    }

    fn entries(&self) -> Result<std::sync::MutexGuard<'_, HashMap<String, String>>, BackendError> {
        self.entries
            .lock()
            .map_err(|_| BackendError::Unavailable("memory store lock poisoned".to_string()))
    }

    fn check_writable(&self) -> Result<(), BackendError> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(BackendError::Unavailable("writes disabled".to_string()));
        }
        Ok(())
    }
}

impl BlobStore for MemoryBlobStore {
    fn get(&self, key: &str) -> Result<Option<String>, BackendError> {
        if self.fail_reads.load(Ordering::SeqCst) {
            return Err(BackendError::Unavailable("reads disabled".to_string()));
        }
        Ok(self.entries()?.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), BackendError> {
        self.check_writable()?;
        self.entries()?.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), BackendError> {
        self.check_writable()?;
        self.entries()?.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_set_remove() {
        let store = MemoryBlobStore::new();
        assert_eq!(store.get("k").unwrap(), None);

        store.set("k", "v1").unwrap();
        store.set("k", "v2").unwrap();
        assert_eq!(store.get("k").unwrap(), Some("v2".to_string()));

        store.remove("k").unwrap();
        assert_eq!(store.get("k").unwrap(), None);
        // removing a missing key is fine
        store.remove("k").unwrap();
    }

    #[test]
    fn test_injected_failures() {
        let store = MemoryBlobStore::new();
        store.set("k", "v").unwrap();

        store.fail_writes(true);
        assert!(store.set("k", "other").is_err());
        assert!(store.remove("k").is_err());
        assert_eq!(store.get("k").unwrap(), Some("v".to_string()));

        store.fail_reads(true);
        assert!(store.get("k").is_err());
        assert_eq!(store.raw("k"), Some("v".to_string()));
    }
}
