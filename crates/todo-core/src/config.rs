//! Configuration
//!
//! Storage keys and notice defaults.

use crate::notice::Variant;

/// Where the store keeps its data
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    /// Key holding the JSON-encoded collection
    pub todos_key: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            todos_key: "todos".to_string(),
        }
    }
}

/// Defaults applied by `Notice::show_default`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NoticeConfig {
    pub auto_hide_ms: u32,
    pub variant: Variant,
}

impl Default for NoticeConfig {
    fn default() -> Self {
        Self {
            auto_hide_ms: 3000,
            variant: Variant::Filled,
        }
    }
}
