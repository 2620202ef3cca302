use uuid::Uuid;

use crate::core::entity::Entity;
use crate::core::error::RepositoryError;
use crate::core::params::Params;

/// Base repository trait for identity-keyed storage with filter queries.
///
/// `None` criteria act as a wildcard. The `*_by_id`, `find_all` and
/// `delete_all` helpers are expressed through the primitive operations.
pub trait Repository<T: Entity>: Send + Sync {
    /// Insert or replace an entity by its id
    fn save(&self, entity: T) -> Result<(), RepositoryError>;

    /// All entities matching the criteria, in unspecified order
    fn find(&self, params: Option<&Params<T>>) -> Vec<T>;

    /// First match found while iterating
    fn find_first(&self, params: Option<&Params<T>>) -> Option<T>;

    /// Whether any entity matches
    fn exists(&self, params: Option<&Params<T>>) -> bool;

    /// Remove every match and return how many were removed
    fn delete(&self, params: Option<&Params<T>>) -> Result<usize, RepositoryError>;

    fn count(&self, params: Option<&Params<T>>) -> usize {
        self.find(params).len()
    }

    fn find_all(&self) -> Vec<T> {
        self.find(None)
    }

    fn find_by_id(&self, id: Uuid) -> Result<Option<T>, RepositoryError> {
        let params = Params::new("id", id)?;
        Ok(self.find_first(Some(&params)))
    }

    fn exists_by_id(&self, id: Uuid) -> Result<bool, RepositoryError> {
        let params = Params::new("id", id)?;
        Ok(self.exists(Some(&params)))
    }

    /// Returns true when an entity was removed
    fn delete_by_id(&self, id: Uuid) -> Result<bool, RepositoryError> {
        let params = Params::new("id", id)?;
        Ok(self.delete(Some(&params))? > 0)
    }

    fn delete_all(&self) -> Result<usize, RepositoryError> {
        self.delete(None)
    }
}
