use actix_web::{error::ResponseError, http::StatusCode, HttpResponse};
use std::path::PathBuf;

/// Application-wide Result type
pub type Result<T> = std::result::Result<T, AppError>;

/// Errors raised by filter construction and repository storage
#[derive(thiserror::Error, Debug)]
pub enum RepositoryError {
    /// A filter named a field that has no accessor on the entity type
    #[error("Field '{field}' does not exist on {entity}")]
    InvalidField { entity: &'static str, field: String },

    /// The entity exposes no readable `id` field
    #[error("{entity} must expose a readable 'id' field")]
    MissingIdentity { entity: &'static str },

    /// The entity's `id` field is not a UUID
    #[error("{entity} 'id' must be a UUID, found {found}")]
    WrongIdentityType {
        entity: &'static str,
        found: &'static str,
    },

    /// Reading or writing the mirror file failed
    #[error("Failed to access mirror file {}: {source}", path.display())]
    Persistence {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The mirror file could not be encoded or decoded
    #[error("Mirror file {} is not a valid {entity} collection: {source}", path.display())]
    Serialization {
        path: PathBuf,
        entity: &'static str,
        #[source]
        source: serde_json::Error,
    },

    /// A mirror entry is keyed by a different id than the entity it holds
    #[error("Mirror file {} stores {entity} under key {key} but its id is {found}", path.display())]
    MismatchedKey {
        path: PathBuf,
        entity: &'static str,
        key: uuid::Uuid,
        found: String,
    },
}

impl RepositoryError {
    /// True for failures of the mirror file rather than of the caller's input
    pub fn is_persistence_failure(&self) -> bool {
        matches!(
            self,
            RepositoryError::Persistence { .. }
                | RepositoryError::Serialization { .. }
                | RepositoryError::MismatchedKey { .. }
        )
    }
}

/// Main application error type
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    /// Validation errors for business rules
    #[error("Validation error: {0}")]
    Validation(String),

    /// Repository and filter errors
    #[error("Repository error: {0}")]
    Repository(#[from] RepositoryError),

    /// Resource not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Console output failures
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Internal server errors
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ResponseError for AppError {
    fn error_response(&self) -> HttpResponse {
        let status_code = self.status_code();
        let error_message = self.to_string();

        HttpResponse::build(status_code).json(serde_json::json!({
            "error": {
                "message": error_message,
                "code": status_code.as_u16(),
            }
        }))
    }

    fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::Repository(RepositoryError::InvalidField { .. }) => StatusCode::BAD_REQUEST,
            AppError::Repository(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Configuration(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Json(_) => StatusCode::BAD_REQUEST,
            AppError::Io(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<actix_web::error::BlockingError> for AppError {
    fn from(err: actix_web::error::BlockingError) -> Self {
        AppError::Internal(format!("Blocking task failed: {}", err))
    }
}

// Helper functions for common error scenarios
impl AppError {
    pub fn validation(msg: impl Into<String>) -> Self {
        AppError::Validation(msg.into())
    }

    pub fn not_found(resource: impl Into<String>) -> Self {
        AppError::NotFound(resource.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        AppError::Internal(msg.into())
    }
}
