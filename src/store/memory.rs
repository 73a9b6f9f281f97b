use parking_lot::RwLock;
use std::collections::BTreeMap;

use super::{Batch, KeyValueStore, StoreError, Value};

/// In-process store. Contents live as long as the value does.
pub struct MemoryStore {
    namespace: String,
    entries: RwLock<BTreeMap<String, Value>>,
}

impl MemoryStore {
    pub fn new(namespace: &str) -> Self {
        Self {
            namespace: namespace.to_string(),
            entries: RwLock::new(BTreeMap::new()),
        }
    }
}

impl KeyValueStore for MemoryStore {
    fn namespace(&self) -> &str {
        &self.namespace
    }

    fn get(&self, key: &str) -> Option<Value> {
        self.entries.read().get(key).cloned()
    }

    fn commit(&self, batch: Batch) -> Result<(), StoreError> {
        batch.apply_to(&mut self.entries.write());
        Ok(())
    }
}
