//! Error conversion glue between the layers.
//!
//! The domain and repository layers must not depend on service or form error
//! types, so the translations into [`ServiceError`] live here.

use crate::domain::types::TypeConstraintError;
use crate::forms::cameras::CameraFormError;
use crate::forms::occurrences::OccurrenceFormError;
use crate::forms::reports::ReportParamsError;
use crate::repository::RepositoryError;
use crate::services::ServiceError;

impl From<RepositoryError> for ServiceError {
    fn from(val: RepositoryError) -> Self {
        match val {
            RepositoryError::NotFound => ServiceError::NotFound,
            RepositoryError::Unavailable(_) => ServiceError::StorageUnavailable,
            RepositoryError::ValidationError(_) | RepositoryError::Database(_) => {
                ServiceError::Internal
            }
        }
    }
}

impl From<TypeConstraintError> for ServiceError {
    fn from(val: TypeConstraintError) -> Self {
        ServiceError::Validation(val.to_string())
    }
}

impl From<OccurrenceFormError> for ServiceError {
    fn from(val: OccurrenceFormError) -> Self {
        ServiceError::Validation(val.to_string())
    }
}

impl From<CameraFormError> for ServiceError {
    fn from(val: CameraFormError) -> Self {
        match val {
            CameraFormError::Validation(_) => ServiceError::Validation(val.to_string()),
            CameraFormError::InvalidArgument(_) => ServiceError::InvalidArgument(val.to_string()),
        }
    }
}

impl From<ReportParamsError> for ServiceError {
    fn from(val: ReportParamsError) -> Self {
        ServiceError::InvalidArgument(val.to_string())
    }
}
