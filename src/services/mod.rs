use crate::repository::RepositoryError;

pub mod cameras;
pub mod errors;
pub mod export;
pub mod main;
pub mod occurrences;
pub mod reports;

pub use errors::{ServiceError, ServiceResult};

/// Logs a failed repository call and translates it for the caller.
fn repository_failure(action: &str, err: RepositoryError) -> ServiceError {
    match err {
        RepositoryError::NotFound => log::debug!("Failed to {action}: {err}"),
        _ => log::error!("Failed to {action}: {err}"),
    }
    err.into()
}
