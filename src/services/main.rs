use crate::domain::stats::Dashboard;
use crate::repository::{CameraListQuery, CameraReader, OccurrenceListQuery, OccurrenceReader};

use super::{ServiceResult, repository_failure};

/// Core business logic for the operations dashboard.
///
/// Both collections are read afresh on every call, so the figures reflect
/// the latest camera and occurrence mutations.
pub fn show_dashboard<R>(repo: &R) -> ServiceResult<Dashboard>
where
    R: CameraReader + OccurrenceReader,
{
    let cameras = repo
        .list_cameras(CameraListQuery::default())
        .map_err(|e| repository_failure("list cameras", e))?;
    let occurrences = repo
        .list_occurrences(&OccurrenceListQuery::default())
        .map_err(|e| repository_failure("list occurrences", e))?;

    Ok(Dashboard::compute(&cameras, &occurrences))
}
