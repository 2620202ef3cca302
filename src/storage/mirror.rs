// Whole-collection JSON mirror of a repository.
//
// Layout: one object keyed by lowercase hyphenated UUID, each value the
// entity's own JSON object (which repeats the id). Every write replaces the
// file with a full snapshot.

use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};

use dashmap::DashMap;
use uuid::Uuid;

use crate::core::entity::{Entity, FieldValue};
use crate::core::error::RepositoryError;

/// JSON file holding the full identity-keyed collection of one entity type
#[derive(Debug)]
pub struct MirrorFile {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl MirrorFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the collection. A missing, empty or `null` file is an empty collection.
    ///
    /// Every top-level key must equal the `id` of the object stored under it.
    pub fn load<T: Entity>(&self) -> Result<HashMap<Uuid, T>, RepositoryError> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!(path = %self.path.display(), entity = T::NAME, "No mirror file, starting empty");
                return Ok(HashMap::new());
            }
            Err(source) => {
                return Err(RepositoryError::Persistence {
                    path: self.path.clone(),
                    source,
                })
            }
        };

        if contents.trim().is_empty() {
            return Ok(HashMap::new());
        }

        let loaded: Option<HashMap<Uuid, T>> =
            serde_json::from_str(&contents).map_err(|source| RepositoryError::Serialization {
                path: self.path.clone(),
                entity: T::NAME,
                source,
            })?;

        let loaded = loaded.unwrap_or_default();
        for (key, entity) in &loaded {
            match entity.field_value("id") {
                Some(FieldValue::Uuid(id)) if id == *key => {}
                other => {
                    return Err(RepositoryError::MismatchedKey {
                        path: self.path.clone(),
                        entity: T::NAME,
                        key: *key,
                        found: other.map_or_else(|| "nothing".to_string(), |v| v.to_string()),
                    })
                }
            }
        }

        Ok(loaded)
    }

    /// Overwrite the file with a snapshot of `storage`.
    ///
    /// The snapshot is taken under the write lock, so the last writer to get
    /// the lock always records every mutation that finished before it.
    pub fn write<T: Entity>(&self, storage: &DashMap<Uuid, T>) -> Result<(), RepositoryError> {
        let _guard = self
            .write_lock
            .lock()
            .unwrap_or_else(PoisonError::into_inner);

        let snapshot: BTreeMap<Uuid, T> = storage
            .iter()
            .map(|entry| (*entry.key(), entry.value().clone()))
            .collect();

        let encoded =
            serde_json::to_vec_pretty(&snapshot).map_err(|source| RepositoryError::Serialization {
                path: self.path.clone(),
                entity: T::NAME,
                source,
            })?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|source| self.io_error(source))?;
        }

        let staging = self.staging_path();
        fs::write(&staging, &encoded).map_err(|source| self.io_error(source))?;
        fs::rename(&staging, &self.path).map_err(|source| self.io_error(source))?;

        tracing::debug!(
            path = %self.path.display(),
            entity = T::NAME,
            count = snapshot.len(),
            "Mirror file rewritten"
        );

        Ok(())
    }

    fn staging_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    fn io_error(&self, source: std::io::Error) -> RepositoryError {
        RepositoryError::Persistence {
            path: self.path.clone(),
            source,
        }
    }
}
