pub mod entity;
pub mod error;
pub mod params;
pub mod traits;

pub use entity::{Accessor, AccessorStyle, Entity, FieldValue};
pub use error::{AppError, RepositoryError, Result};
pub use params::Params;
pub use traits::Repository;
