use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::Mutex;

use crate::storage::{KeyValueStore, StorageError};

#[derive(Default)]
struct MemoryInner {
    values: HashMap<String, String>,
    writes: usize,
}

/// In-memory key-value store.
///
/// Clones share the same map, so a test can keep a handle while the cart
/// store owns another and then inspect what was written.
#[derive(Clone, Default)]
pub struct MemoryStore {
    inner: Arc<Mutex<MemoryInner>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of `set` and `remove` calls so far.
    pub fn writes(&self) -> usize {
        self.inner.lock().writes
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.inner.lock().values.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut inner = self.inner.lock();
        inner.values.insert(key.to_string(), value.to_string());
        inner.writes += 1;
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        let mut inner = self.inner.lock();
        inner.values.remove(key);
        inner.writes += 1;
        Ok(())
    }
}
