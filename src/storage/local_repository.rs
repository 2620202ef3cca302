use dashmap::DashMap;
use std::path::PathBuf;
use uuid::Uuid;

use crate::core::entity::{Entity, FieldValue};
use crate::core::error::RepositoryError;
use crate::core::params::{matches_criteria, Params};
use crate::core::traits::Repository;
use crate::storage::mirror::MirrorFile;

/// In-memory repository mirrored to a JSON file
pub struct LocalRepository<T: Entity> {
    storage: DashMap<Uuid, T>,
    mirror: Option<MirrorFile>,
}

impl<T: Entity> LocalRepository<T> {
    /// Open a repository backed by `path`, loading whatever the file holds
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, RepositoryError> {
        let mirror = MirrorFile::new(path);
        let loaded = mirror.load::<T>()?;

        tracing::info!(
            entity = T::NAME,
            path = %mirror.path().display(),
            count = loaded.len(),
            "Repository loaded"
        );

        Ok(Self {
            storage: loaded.into_iter().collect(),
            mirror: Some(mirror),
        })
    }

    /// Repository with no mirror file; nothing survives the process
    pub fn in_memory() -> Self {
        Self {
            storage: DashMap::new(),
            mirror: None,
        }
    }

    pub fn len(&self) -> usize {
        self.storage.len()
    }

    pub fn is_empty(&self) -> bool {
        self.storage.is_empty()
    }

    fn extract_id(entity: &T) -> Result<Uuid, RepositoryError> {
        match entity.field_value("id") {
            Some(FieldValue::Uuid(id)) => Ok(id),
            Some(other) => Err(RepositoryError::WrongIdentityType {
                entity: T::NAME,
                found: other.kind(),
            }),
            None => Err(RepositoryError::MissingIdentity { entity: T::NAME }),
        }
    }

    fn persist(&self) -> Result<(), RepositoryError> {
        match &self.mirror {
            Some(mirror) => mirror.write(&self.storage),
            None => Ok(()),
        }
    }
}

impl<T: Entity> Repository<T> for LocalRepository<T> {
    fn save(&self, entity: T) -> Result<(), RepositoryError> {
        let id = Self::extract_id(&entity)?;
        let replaced = self.storage.insert(id, entity).is_some();

        tracing::debug!(entity = T::NAME, %id, replaced, "Entity saved");

        self.persist()
    }

    fn find(&self, params: Option<&Params<T>>) -> Vec<T> {
        self.storage
            .iter()
            .filter(|entry| matches_criteria(params, entry.value()))
            .map(|entry| entry.value().clone())
            .collect()
    }

    fn find_first(&self, params: Option<&Params<T>>) -> Option<T> {
        self.storage
            .iter()
            .find(|entry| matches_criteria(params, entry.value()))
            .map(|entry| entry.value().clone())
    }

    fn exists(&self, params: Option<&Params<T>>) -> bool {
        self.storage
            .iter()
            .any(|entry| matches_criteria(params, entry.value()))
    }

    fn delete(&self, params: Option<&Params<T>>) -> Result<usize, RepositoryError> {
        let mut removed = 0;
        self.storage.retain(|_, entity| {
            if matches_criteria(params, entity) {
                removed += 1;
                false
            } else {
                true
            }
        });

        if removed > 0 {
            tracing::debug!(entity = T::NAME, count = removed, "Entities deleted");
            self.persist()?;
        }

        Ok(removed)
    }
}
