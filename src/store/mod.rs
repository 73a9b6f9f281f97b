//! Namespaced key-value storage with typed string/integer access.
//!
//! Writes are staged in a [`Batch`] and applied with [`KeyValueStore::commit`],
//! so a group of keys is replaced together. Reads of absent keys (or keys
//! holding a value of the other type) return `None`.

mod file;
mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;
use thiserror::Error;

/// A single stored value.
///
/// Anything that is not an `i32` or a string (floats, bools, wide integers,
/// tables written by hand) lands in `Other`. It is kept so a commit writes it
/// back unchanged, and reads of it through the typed getters yield `None`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    Int(i32),
    Text(String),
    Other(toml::Value),
}

/// Errors raised by persistent stores.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Store I/O failed for '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse store file '{path}': {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Failed to serialize store contents: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Staged writes for one commit. Later puts to the same key win.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Batch {
    entries: BTreeMap<String, Value>,
}

impl Batch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn put_string(mut self, key: &str, value: impl Into<String>) -> Self {
        self.entries.insert(key.to_string(), Value::Text(value.into()));
        self
    }

    pub fn put_int(mut self, key: &str, value: i32) -> Self {
        self.entries.insert(key.to_string(), Value::Int(value));
        self
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub(crate) fn apply_to(self, target: &mut BTreeMap<String, Value>) {
        target.extend(self.entries);
    }
}

/// A named, string-keyed mapping of typed values.
pub trait KeyValueStore: Send + Sync {
    /// Namespace this store is scoped to.
    fn namespace(&self) -> &str;

    /// Raw value lookup.
    fn get(&self, key: &str) -> Option<Value>;

    /// Apply all staged writes of `batch`.
    fn commit(&self, batch: Batch) -> Result<(), StoreError>;

    fn get_string(&self, key: &str) -> Option<String> {
        match self.get(key) {
            Some(Value::Text(text)) => Some(text),
            _ => None,
        }
    }

    fn get_int(&self, key: &str) -> Option<i32> {
        match self.get(key) {
            Some(Value::Int(value)) => Some(value),
            _ => None,
        }
    }
}
