//! Filter criteria for repository queries.
//!
//! A `Params<T>` is a conjunction of field equalities. Field names are
//! checked against `T`'s accessor table when the filter is built, so a
//! filter that exists is always evaluable.

use std::collections::BTreeMap;
use std::fmt;
use std::marker::PhantomData;

use crate::core::entity::{Entity, FieldValue};
use crate::core::error::RepositoryError;

/// Validated field -> expected value mapping for entity type `T`
pub struct Params<T: Entity> {
    parameters: BTreeMap<String, FieldValue>,
    entity: PhantomData<fn() -> T>,
}

impl<T: Entity> Params<T> {
    /// Single-field filter
    pub fn new(
        field: impl Into<String>,
        value: impl Into<FieldValue>,
    ) -> Result<Self, RepositoryError> {
        let field = field.into();
        check_field_exists::<T>(&field)?;

        let mut parameters = BTreeMap::new();
        parameters.insert(field, value.into());

        Ok(Self {
            parameters,
            entity: PhantomData,
        })
    }

    /// Multi-field filter (logical AND). Every field is checked before any is kept.
    pub fn from_map<I, K, V>(params: I) -> Result<Self, RepositoryError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<FieldValue>,
    {
        let pairs: Vec<(String, FieldValue)> = params
            .into_iter()
            .map(|(field, value)| (field.into(), value.into()))
            .collect();

        for (field, _) in &pairs {
            check_field_exists::<T>(field)?;
        }

        Ok(Self {
            parameters: pairs.into_iter().collect(),
            entity: PhantomData,
        })
    }

    /// Add one more checked field to the conjunction
    pub fn and(
        mut self,
        field: impl Into<String>,
        value: impl Into<FieldValue>,
    ) -> Result<Self, RepositoryError> {
        let field = field.into();
        check_field_exists::<T>(&field)?;
        self.parameters.insert(field, value.into());
        Ok(self)
    }

    /// Copy of the field -> value mapping
    pub fn parameters(&self) -> BTreeMap<String, FieldValue> {
        self.parameters.clone()
    }

    pub fn len(&self) -> usize {
        self.parameters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parameters.is_empty()
    }

    /// True when every field of `entity` equals the expected value.
    ///
    /// A field that does not resolve on the entity counts as a mismatch.
    pub fn matches(&self, entity: &T) -> bool {
        self.parameters
            .iter()
            .all(|(field, expected)| entity.field_value(field).as_ref() == Some(expected))
    }
}

/// `None` criteria match everything
pub(crate) fn matches_criteria<T: Entity>(params: Option<&Params<T>>, entity: &T) -> bool {
    params.map_or(true, |p| p.matches(entity))
}

fn check_field_exists<T: Entity>(field: &str) -> Result<(), RepositoryError> {
    if T::has_field(field) {
        Ok(())
    } else {
        Err(RepositoryError::InvalidField {
            entity: T::NAME,
            field: field.to_string(),
        })
    }
}

impl<T: Entity> Clone for Params<T> {
    fn clone(&self) -> Self {
        Self {
            parameters: self.parameters.clone(),
            entity: PhantomData,
        }
    }
}

impl<T: Entity> fmt::Debug for Params<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Params")
            .field("entity", &T::NAME)
            .field("parameters", &self.parameters)
            .finish()
    }
}

impl<T: Entity> fmt::Display for Params<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Params{{")?;
        for (i, (field, value)) in self.parameters.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}={}", field, value)?;
        }
        write!(f, "}}")
    }
}
