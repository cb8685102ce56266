use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::camera::{Camera as DomainCamera, NewCamera as DomainNewCamera};
use crate::domain::types::{
    CameraId, CameraObservation, CameraSlot, CameraStatus, RecorderNumber, TypeConstraintError,
};

/// Diesel model representing a row in the `cameras` table.
#[derive(Debug, Clone, Identifiable, Queryable)]
#[diesel(table_name = crate::schema::cameras)]
pub struct Camera {
    pub id: String,
    pub recorder: i32,
    pub slot: i32,
    pub status: String,
    pub observation: Option<String>,
    pub updated_at: NaiveDateTime,
}

/// Insertable form of [`Camera`].
#[derive(Debug, Insertable)]
#[diesel(table_name = crate::schema::cameras)]
pub struct NewCamera {
    pub id: String,
    pub recorder: i32,
    pub slot: i32,
    pub status: &'static str,
    pub observation: Option<String>,
    pub updated_at: NaiveDateTime,
}

/// Changes applied by a partial camera update; `None` columns are skipped.
#[derive(Debug, AsChangeset)]
#[diesel(table_name = crate::schema::cameras)]
pub struct CameraChangeset {
    pub status: Option<&'static str>,
    pub observation: Option<Option<String>>,
    pub updated_at: NaiveDateTime,
}

impl TryFrom<Camera> for DomainCamera {
    type Error = TypeConstraintError;

    fn try_from(camera: Camera) -> Result<Self, Self::Error> {
        let recorder = RecorderNumber::new(camera.recorder)?;
        let slot = CameraSlot::new(camera.slot)?;
        let id = CameraId::new(&camera.id)?;
        if id != CameraId::from_position(recorder, slot) {
            return Err(TypeConstraintError::InvalidCameraId(camera.id));
        }

        Ok(Self {
            id,
            recorder,
            slot,
            status: CameraStatus::try_from(camera.status)?,
            observation: camera.observation.map(CameraObservation::new).transpose()?,
            updated_at: camera.updated_at,
        })
    }
}

impl From<&DomainNewCamera> for NewCamera {
    fn from(camera: &DomainNewCamera) -> Self {
        Self {
            id: camera.id.to_string(),
            recorder: camera.recorder.get(),
            slot: camera.slot.get(),
            status: camera.status.as_str(),
            observation: camera.observation.clone().map(CameraObservation::into_inner),
            updated_at: camera.updated_at,
        }
    }
}
