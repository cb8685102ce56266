use thiserror::Error;

/// Generic error type used by service layer functions.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ServiceError {
    /// Input was missing a required field or carried an invalid value.
    #[error("validation failed: {0}")]
    Validation(String),
    /// An argument such as a recorder number or period tag is out of range.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    /// Requested resource was not found.
    #[error("not found")]
    NotFound,
    /// The store could not be reached.
    #[error("storage unavailable")]
    StorageUnavailable,
    /// An unexpected internal error occurred.
    #[error("internal error")]
    Internal,
}

/// Convenient alias for results returned from service functions.
pub type ServiceResult<T> = Result<T, ServiceError>;
