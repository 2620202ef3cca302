//! Static field accessor tables for stored entities.
//!
//! Every entity type declares, once, the fields a filter may name and how to
//! read each one. Lookups follow the getter convention: a `Get` accessor for
//! a field wins over an `Is` accessor of the same name.

use serde::{de::DeserializeOwned, Serialize};
use std::fmt;
use uuid::Uuid;

/// A typed value read from an entity field or expected by a filter
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum FieldValue {
    Uuid(Uuid),
    Text(String),
    Integer(i64),
    Boolean(bool),
    /// Unit enum variant, compared by its wire name
    Variant(&'static str),
}

impl FieldValue {
    /// Short name of the value's kind, used in error messages
    pub fn kind(&self) -> &'static str {
        match self {
            FieldValue::Uuid(_) => "uuid",
            FieldValue::Text(_) => "text",
            FieldValue::Integer(_) => "integer",
            FieldValue::Boolean(_) => "boolean",
            FieldValue::Variant(_) => "variant",
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Uuid(id) => write!(f, "{}", id),
            FieldValue::Text(text) => write!(f, "{}", text),
            FieldValue::Integer(n) => write!(f, "{}", n),
            FieldValue::Boolean(b) => write!(f, "{}", b),
            FieldValue::Variant(name) => write!(f, "{}", name),
        }
    }
}

impl From<Uuid> for FieldValue {
    fn from(id: Uuid) -> Self {
        FieldValue::Uuid(id)
    }
}

impl From<String> for FieldValue {
    fn from(text: String) -> Self {
        FieldValue::Text(text)
    }
}

impl From<&str> for FieldValue {
    fn from(text: &str) -> Self {
        FieldValue::Text(text.to_string())
    }
}

impl From<i32> for FieldValue {
    fn from(n: i32) -> Self {
        FieldValue::Integer(i64::from(n))
    }
}

impl From<i64> for FieldValue {
    fn from(n: i64) -> Self {
        FieldValue::Integer(n)
    }
}

impl From<u32> for FieldValue {
    fn from(n: u32) -> Self {
        FieldValue::Integer(i64::from(n))
    }
}

impl From<bool> for FieldValue {
    fn from(b: bool) -> Self {
        FieldValue::Boolean(b)
    }
}

/// Naming convention of an accessor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessorStyle {
    /// Plain attribute read (`getX`)
    Get,
    /// Boolean predicate (`isX`), consulted only when no `Get` accessor matches
    Is,
}

/// One readable field of an entity type
pub struct Accessor<T> {
    pub field: &'static str,
    pub style: AccessorStyle,
    pub read: fn(&T) -> FieldValue,
}

impl<T> fmt::Debug for Accessor<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Accessor")
            .field("field", &self.field)
            .field("style", &self.style)
            .finish()
    }
}

/// A record persisted by a repository
pub trait Entity: Clone + Serialize + DeserializeOwned + Send + Sync + 'static {
    /// Type name used in logs and error messages
    const NAME: &'static str;

    /// Accessor table for this type, built once
    fn accessors() -> &'static [Accessor<Self>];

    /// Resolve a field name: `Get` style first, then `Is` style
    fn accessor(field: &str) -> Option<&'static Accessor<Self>> {
        let table = Self::accessors();
        table
            .iter()
            .find(|a| a.style == AccessorStyle::Get && a.field == field)
            .or_else(|| {
                table
                    .iter()
                    .find(|a| a.style == AccessorStyle::Is && a.field == field)
            })
    }

    /// Whether a filter may name `field`
    fn has_field(field: &str) -> bool {
        Self::accessor(field).is_some()
    }

    /// Read a field by name, `None` when it does not resolve
    fn field_value(&self, field: &str) -> Option<FieldValue> {
        Self::accessor(field).map(|accessor| (accessor.read)(self))
    }
}
