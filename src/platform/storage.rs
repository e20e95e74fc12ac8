//! `localStorage` binding for the to-do store.

use todo_core::{KeyValueStorage, StoreError, StoreResult};

/// `window.localStorage`, looked up on every call
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStorage;

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

fn unavailable() -> StoreError {
    StoreError::Storage("localStorage unavailable".to_string())
}

impl KeyValueStorage for BrowserStorage {
    fn get_item(&self, key: &str) -> StoreResult<Option<String>> {
        let Some(storage) = local_storage() else {
            log::warn!("localStorage unavailable, reading '{}' as empty", key);
            return Ok(None);
        };
        storage
            .get_item(key)
            .map_err(|e| StoreError::Storage(format!("{:?}", e)))
    }

    fn set_item(&self, key: &str, value: &str) -> StoreResult<()> {
        local_storage()
            .ok_or_else(unavailable)?
            .set_item(key, value)
            .map_err(|e| StoreError::Storage(format!("{:?}", e)))
    }
}
