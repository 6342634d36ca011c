pub(crate) mod error;
pub(crate) mod file_store;
pub(crate) mod identity_record;
pub(crate) mod load_result;
pub(crate) mod memory_store;

pub use error::{Result as StoreResult, StoreError};
pub use file_store::FileStore;
pub use identity_record::{USER_STORAGE_KEY, clear_identity, load_identity, save_identity};
pub use load_result::LoadResult;
pub use memory_store::MemoryStore;

/// Durable string key-value storage (the browser's localStorage, on disk).
pub trait DurableStore: Send + Sync {
    fn get(&self, key: &str) -> StoreResult<Option<String>>;

    fn set(&self, key: &str, value: &str) -> StoreResult<()>;

    /// Removing a missing key is not an error.
    fn remove(&self, key: &str) -> StoreResult<()>;

    /// Purges a record that failed to parse. Afterwards `get(key)` is `None`.
    fn discard_corrupted(&self, key: &str) -> StoreResult<()> {
        self.remove(key)
    }
}
