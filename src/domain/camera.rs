use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::types::{
    CameraId, CameraObservation, CameraSlot, CameraStatus, FLEET_SIZE, RecorderNumber,
};

/// A camera of the fixed fleet, addressed by its recorder and slot.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Camera {
    pub id: CameraId,
    pub recorder: RecorderNumber,
    pub slot: CameraSlot,
    pub status: CameraStatus,
    pub observation: Option<CameraObservation>,
    pub updated_at: NaiveDateTime,
}

/// Data required to insert a new [`Camera`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewCamera {
    pub id: CameraId,
    pub recorder: RecorderNumber,
    pub slot: CameraSlot,
    pub status: CameraStatus,
    pub observation: Option<CameraObservation>,
    pub updated_at: NaiveDateTime,
}

impl NewCamera {
    /// An online camera with no observation at `(recorder, slot)`.
    pub fn at(recorder: RecorderNumber, slot: CameraSlot, now: NaiveDateTime) -> Self {
        Self {
            id: CameraId::from_position(recorder, slot),
            recorder,
            slot,
            status: CameraStatus::Online,
            observation: None,
            updated_at: now,
        }
    }
}

impl From<NewCamera> for Camera {
    fn from(value: NewCamera) -> Self {
        Self {
            id: value.id,
            recorder: value.recorder,
            slot: value.slot,
            status: value.status,
            observation: value.observation,
            updated_at: value.updated_at,
        }
    }
}

/// Partial update of the mutable camera fields.
///
/// `observation: Some(None)` clears the note, `None` leaves it untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CameraUpdate {
    pub status: Option<CameraStatus>,
    pub observation: Option<Option<CameraObservation>>,
}

impl CameraUpdate {
    /// Applies the update to an in-memory camera, stamping `updated_at`.
    pub fn apply_to(&self, camera: &mut Camera, now: NaiveDateTime) {
        if let Some(status) = self.status {
            camera.status = status;
        }
        if let Some(observation) = &self.observation {
            camera.observation = observation.clone();
        }
        camera.updated_at = now;
    }
}

/// Every camera of the fleet in `(recorder, slot)` order, all online.
pub fn fleet(now: NaiveDateTime) -> Vec<NewCamera> {
    let mut cameras = Vec::with_capacity(FLEET_SIZE);
    for recorder in RecorderNumber::all() {
        for slot in CameraSlot::all() {
            cameras.push(NewCamera::at(recorder, slot, now));
        }
    }
    cameras
}
