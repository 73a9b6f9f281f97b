//! File-backed store: one TOML file per namespace.
//!
//! The whole namespace is cached in memory on open. A commit writes the
//! merged contents to a temporary file and renames it over the old one while
//! holding an exclusive lock on `<namespace>.lock`, so readers in other
//! processes never observe a half-written file.

use fs2::FileExt;
use parking_lot::RwLock;
use std::collections::BTreeMap;
use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use super::{Batch, KeyValueStore, StoreError, Value};

pub struct FileStore {
    namespace: String,
    dir: PathBuf,
    path: PathBuf,
    entries: RwLock<BTreeMap<String, Value>>,
}

impl FileStore {
    /// Open (or lazily create) the namespace file under `dir`.
    ///
    /// A missing file is an empty namespace; nothing is written until the
    /// first commit.
    pub fn open(dir: &Path, namespace: &str) -> Result<Self, StoreError> {
        let path = dir.join(format!("{}.toml", namespace));
        let entries = if path.exists() {
            let content = fs::read_to_string(&path).map_err(|source| StoreError::Io {
                path: path.clone(),
                source,
            })?;
            toml::from_str(&content).map_err(|source| StoreError::Parse {
                path: path.clone(),
                source,
            })?
        } else {
            BTreeMap::new()
        };

        tracing::debug!(
            namespace = %namespace,
            path = %path.display(),
            keys = entries.len(),
            "Opened store"
        );

        Ok(Self {
            namespace: namespace.to_string(),
            dir: dir.to_path_buf(),
            path,
            entries: RwLock::new(entries),
        })
    }

    /// Path of the namespace file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_err(path: &Path) -> impl FnOnce(std::io::Error) -> StoreError {
        let path = path.to_path_buf();
        move |source| StoreError::Io { path, source }
    }

    fn persist(&self, entries: &BTreeMap<String, Value>) -> Result<(), StoreError> {
        fs::create_dir_all(&self.dir).map_err(Self::io_err(&self.dir))?;

        let lock_path = self.dir.join(format!("{}.lock", self.namespace));
        let lock = OpenOptions::new()
            .create(true)
            .truncate(false)
            .write(true)
            .open(&lock_path)
            .map_err(Self::io_err(&lock_path))?;
        lock.lock_exclusive().map_err(Self::io_err(&lock_path))?;

        let content = toml::to_string(entries)?;
        let tmp_path = self.path.with_extension("toml.tmp");
        let result = File::create(&tmp_path)
            .and_then(|mut file| {
                file.write_all(content.as_bytes())?;
                file.sync_all()
            })
            .and_then(|_| fs::rename(&tmp_path, &self.path))
            .map_err(Self::io_err(&self.path));

        let _ = FileExt::unlock(&lock);
        result
    }
}

impl KeyValueStore for FileStore {
    fn namespace(&self) -> &str {
        &self.namespace
    }

    fn get(&self, key: &str) -> Option<Value> {
        self.entries.read().get(key).cloned()
    }

    fn commit(&self, batch: Batch) -> Result<(), StoreError> {
        if batch.is_empty() {
            return Ok(());
        }

        let mut entries = self.entries.write();
        let mut next = entries.clone();
        let staged = batch.len();
        batch.apply_to(&mut next);

        self.persist(&next)?;
        *entries = next;

        tracing::debug!(
            namespace = %self.namespace,
            keys = staged,
            "Committed store batch"
        );
        Ok(())
    }
}
