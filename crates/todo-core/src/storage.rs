//! Storage Seam
//!
//! String key-value storage, shaped like the browser's `localStorage`.
//! The frontend binds it to `window.localStorage`; tests use `MemoryStorage`.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::error::{StoreError, StoreResult};

/// Key-value storage with string values
pub trait KeyValueStorage {
    /// Read a value; `Ok(None)` when the key is absent
    fn get_item(&self, key: &str) -> StoreResult<Option<String>>;

    /// Write a value, replacing any previous one
    fn set_item(&self, key: &str, value: &str) -> StoreResult<()>;
}

/// In-memory storage. Clones share the same map, so a second store built
/// from a clone sees what the first one wrote, the way a page reload does.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    items: Arc<Mutex<HashMap<String, String>>>,
    read_only: bool,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// A view over the same map whose writes fail, for quota/disabled cases
    #[cfg(any(test, feature = "testing"))]
    pub fn read_only(&self) -> Self {
        Self {
            items: Arc::clone(&self.items),
            read_only: true,
        }
    }

    fn lock(&self) -> StoreResult<std::sync::MutexGuard<'_, HashMap<String, String>>> {
        self.items
            .lock()
            .map_err(|e| StoreError::Storage(e.to_string()))
    }
}

impl KeyValueStorage for MemoryStorage {
    fn get_item(&self, key: &str) -> StoreResult<Option<String>> {
        Ok(self.lock()?.get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> StoreResult<()> {
        if self.read_only {
            return Err(StoreError::Storage(format!("write to '{}' rejected", key)));
        }
        self.lock()?.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clones_share_state() {
        let a = MemoryStorage::new();
        let b = a.clone();
        a.set_item("k", "v").unwrap();
        assert_eq!(b.get_item("k").unwrap(), Some("v".to_string()));
        b.set_item("k", "w").unwrap();
        assert_eq!(a.get_item("k").unwrap(), Some("w".to_string()));
    }

    #[test]
    fn test_read_only_rejects_writes() {
        let storage = MemoryStorage::new();
        storage.set_item("k", "v").unwrap();
        let ro = storage.read_only();
        assert!(ro.set_item("k", "w").is_err());
        assert_eq!(ro.get_item("k").unwrap(), Some("v".to_string()));
    }
}
