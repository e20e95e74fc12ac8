//! Store Errors
//!
//! Error type shared by the store and its storage seam.

/// Common result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Store-level errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// Content was empty after trimming
    EmptyContent,
    /// The id counter has no room for another todo
    IdExhausted,
    /// Durable storage could not be read or written
    Storage(String),
    /// Persisted data could not be decoded
    Corrupt(String),
}

impl std::fmt::Display for StoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StoreError::EmptyContent => write!(f, "Invalid input: content is empty"),
            StoreError::IdExhausted => write!(f, "Conflict: no ids left"),
            StoreError::Storage(msg) => write!(f, "Storage error: {}", msg),
            StoreError::Corrupt(msg) => write!(f, "Corrupt data: {}", msg),
        }
    }
}

impl std::error::Error for StoreError {}

impl From<serde_json::Error> for StoreError {
    fn from(err: serde_json::Error) -> Self {
        StoreError::Corrupt(err.to_string())
    }
}
