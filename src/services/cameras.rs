use chrono::NaiveDateTime;

use crate::domain::camera::{Camera, CameraUpdate, fleet};
use crate::domain::stats::{self, CameraStats, RecorderSummary};
use crate::domain::types::{CameraId, RecorderNumber};
use crate::repository::{CameraListQuery, CameraReader, CameraWriter};

use super::{ServiceError, ServiceResult, repository_failure};

/// Seeds the registry with the full fleet unless it already holds cameras.
///
/// Returns how many cameras were created; `0` on every call after the first.
pub fn initialize_cameras<R>(repo: &R, now: NaiveDateTime) -> ServiceResult<usize>
where
    R: CameraWriter,
{
    let created = repo
        .initialize_cameras(&fleet(now))
        .map_err(|e| repository_failure("initialize cameras", e))?;

    if created > 0 {
        log::info!("Initialized camera registry with {created} cameras");
    }
    Ok(created)
}

pub fn show_cameras<R>(query: CameraListQuery, repo: &R) -> ServiceResult<Vec<Camera>>
where
    R: CameraReader,
{
    repo.list_cameras(query)
        .map_err(|e| repository_failure("list cameras", e))
}

/// Cameras of one recorder ordered by slot.
pub fn show_recorder<R>(recorder: i32, repo: &R) -> ServiceResult<Vec<Camera>>
where
    R: CameraReader,
{
    let recorder = RecorderNumber::new(recorder)
        .map_err(|e| ServiceError::InvalidArgument(e.to_string()))?;

    show_cameras(CameraListQuery::default().recorder(recorder), repo)
}

pub fn get_camera<R>(camera_id: &str, repo: &R) -> ServiceResult<Camera>
where
    R: CameraReader,
{
    // A malformed id cannot name a camera of the fleet.
    let Ok(camera_id) = CameraId::new(camera_id) else {
        return Err(ServiceError::NotFound);
    };

    match repo.get_camera_by_id(camera_id) {
        Ok(Some(camera)) => Ok(camera),
        Ok(None) => Err(ServiceError::NotFound),
        Err(e) => Err(repository_failure("load camera", e)),
    }
}

pub fn update_camera<R>(
    camera_id: &str,
    update: CameraUpdate,
    repo: &R,
    now: NaiveDateTime,
) -> ServiceResult<Camera>
where
    R: CameraWriter,
{
    let Ok(camera_id) = CameraId::new(camera_id) else {
        return Err(ServiceError::NotFound);
    };

    let camera = repo
        .update_camera(camera_id, &update, now)
        .map_err(|e| repository_failure("update camera", e))?;

    log::info!("Camera {} is now {}", camera.id, camera.status);
    Ok(camera)
}

pub fn camera_stats<R>(repo: &R) -> ServiceResult<CameraStats>
where
    R: CameraReader,
{
    let cameras = show_cameras(CameraListQuery::default(), repo)?;
    Ok(CameraStats::from_cameras(&cameras))
}

pub fn recorder_summaries<R>(repo: &R) -> ServiceResult<Vec<RecorderSummary>>
where
    R: CameraReader,
{
    let cameras = show_cameras(CameraListQuery::default(), repo)?;
    Ok(stats::recorder_summaries(&cameras))
}
