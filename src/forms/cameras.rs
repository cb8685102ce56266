use serde::Deserialize;
use thiserror::Error;
use validator::{Validate, ValidationErrors};

use crate::domain::camera::CameraUpdate;
use crate::domain::types::{CameraObservation, CameraStatus, RecorderNumber, TypeConstraintError};
use crate::forms::non_blank;
use crate::repository::CameraListQuery;

/// JSON body accepted when changing a camera's health.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct UpdateCameraForm {
    pub status: Option<String>,
    /// A blank value clears the note.
    #[validate(length(max = 1000))]
    pub observation: Option<String>,
}

#[derive(Debug, Error)]
pub enum CameraFormError {
    #[error("camera form validation failed: {0}")]
    Validation(String),
    #[error("invalid camera argument: {0}")]
    InvalidArgument(String),
}

impl From<ValidationErrors> for CameraFormError {
    fn from(value: ValidationErrors) -> Self {
        Self::Validation(value.to_string())
    }
}

impl From<TypeConstraintError> for CameraFormError {
    fn from(value: TypeConstraintError) -> Self {
        Self::InvalidArgument(value.to_string())
    }
}

impl TryFrom<UpdateCameraForm> for CameraUpdate {
    type Error = CameraFormError;

    fn try_from(value: UpdateCameraForm) -> Result<Self, Self::Error> {
        value.validate()?;

        Ok(Self {
            status: value.status.map(CameraStatus::try_from).transpose()?,
            observation: value.observation.map(|o| CameraObservation::new(o).ok()),
        })
    }
}

/// Query string of the camera listing.
#[derive(Debug, Default, Deserialize)]
pub struct CameraListParams {
    pub recorder: Option<i32>,
    pub status: Option<String>,
}

impl TryFrom<CameraListParams> for CameraListQuery {
    type Error = CameraFormError;

    fn try_from(value: CameraListParams) -> Result<Self, Self::Error> {
        let mut query = CameraListQuery::default();
        if let Some(recorder) = value.recorder {
            query = query.recorder(RecorderNumber::new(recorder)?);
        }
        if let Some(status) = non_blank(value.status.as_deref()) {
            query = query.status(CameraStatus::try_from(status)?);
        }
        Ok(query)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_label_or_name_for_status() {
        for status in ["Defective", "defeito"] {
            let form = UpdateCameraForm {
                status: Some(status.into()),
                observation: None,
            };
            let update = CameraUpdate::try_from(form).unwrap();
            assert_eq!(update.status, Some(CameraStatus::Defective));
            assert!(update.observation.is_none());
        }
    }

    #[test]
    fn unknown_status_is_invalid_argument() {
        let form = UpdateCameraForm {
            status: Some("Broken".into()),
            observation: None,
        };

        assert!(matches!(
            CameraUpdate::try_from(form),
            Err(CameraFormError::InvalidArgument(_))
        ));
    }

    #[test]
    fn blank_observation_clears_the_note() {
        let form = UpdateCameraForm {
            status: None,
            observation: Some("  ".into()),
        };

        let update = CameraUpdate::try_from(form).unwrap();

        assert_eq!(update.observation, Some(None));
    }

    #[test]
    fn list_params_check_recorder_range() {
        let params = CameraListParams {
            recorder: Some(12),
            status: None,
        };

        assert!(matches!(
            CameraListQuery::try_from(params),
            Err(CameraFormError::InvalidArgument(_))
        ));
    }
}
