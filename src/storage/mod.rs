use crate::error::Result;
use async_trait::async_trait;

#[cfg(feature = "file-storage")]
pub mod file_storage;
pub mod memory_storage;

#[cfg(feature = "sqlite-storage")]
pub mod sqlite_storage;

#[cfg(feature = "file-storage")]
pub use file_storage::FileStorage;
pub use memory_storage::MemoryStorage;

#[cfg(feature = "sqlite-storage")]
pub use sqlite_storage::SqliteStorage;

/// Checks that `key` is usable as a storage slot name by every backend:
/// non-empty ASCII letters, digits, `-` and `_`
pub fn is_valid_key(key: &str) -> bool {
    !key.is_empty()
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

/// Key-value storage holding serialized board snapshots
#[async_trait]
pub trait Storage: Send + Sync {
    /// Reads the value stored under `key`, `None` if the slot is empty
    async fn get_item(&self, key: &str) -> Result<Option<String>>;

    /// Writes `value` under `key`, replacing any previous value
    async fn set_item(&self, key: &str, value: &str) -> Result<()>;

    /// Clears the slot under `key`; clearing an empty slot is not an error
    async fn remove_item(&self, key: &str) -> Result<()>;

    /// Lists occupied keys in ascending order
    async fn keys(&self) -> Result<Vec<String>>;
}
