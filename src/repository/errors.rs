use thiserror::Error;

use crate::domain::types::TypeConstraintError;

/// Errors surfaced by repository implementations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// The referenced row does not exist.
    #[error("not found")]
    NotFound,
    /// No connection to the store could be obtained.
    #[error("storage unavailable: {0}")]
    Unavailable(String),
    /// A stored row could not be turned back into a domain value.
    #[error("validation error: {0}")]
    ValidationError(String),
    /// Any other failure reported by the database.
    #[error("database error: {0}")]
    Database(diesel::result::Error),
}

impl From<diesel::result::Error> for RepositoryError {
    fn from(value: diesel::result::Error) -> Self {
        match value {
            diesel::result::Error::NotFound => Self::NotFound,
            other => Self::Database(other),
        }
    }
}

impl From<diesel::r2d2::PoolError> for RepositoryError {
    fn from(value: diesel::r2d2::PoolError) -> Self {
        Self::Unavailable(value.to_string())
    }
}

impl From<TypeConstraintError> for RepositoryError {
    fn from(value: TypeConstraintError) -> Self {
        Self::ValidationError(value.to_string())
    }
}

/// Convenient alias for repository results.
pub type RepositoryResult<T> = Result<T, RepositoryError>;
