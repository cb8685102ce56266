use chrono::NaiveDateTime;

use crate::domain::occurrence::{Occurrence, OccurrenceDraft, OccurrenceUpdate};
use crate::domain::stats::OccurrenceStats;
use crate::domain::types::OccurrenceId;
use crate::repository::{OccurrenceListQuery, OccurrenceReader, OccurrenceWriter};

use super::{ServiceError, ServiceResult, repository_failure};

/// Occurrences matching every filter in `query`, newest first.
pub fn list_occurrences<R>(query: &OccurrenceListQuery, repo: &R) -> ServiceResult<Vec<Occurrence>>
where
    R: OccurrenceReader,
{
    repo.list_occurrences(query)
        .map_err(|e| repository_failure("list occurrences", e))
}

pub fn get_occurrence<R>(occurrence_id: &str, repo: &R) -> ServiceResult<Occurrence>
where
    R: OccurrenceReader,
{
    let Ok(occurrence_id) = OccurrenceId::new(occurrence_id) else {
        return Err(ServiceError::NotFound);
    };

    match repo.get_occurrence_by_id(&occurrence_id) {
        Ok(Some(occurrence)) => Ok(occurrence),
        Ok(None) => Err(ServiceError::NotFound),
        Err(e) => Err(repository_failure("load occurrence", e)),
    }
}

pub fn create_occurrence<R>(
    draft: OccurrenceDraft,
    repo: &R,
    now: NaiveDateTime,
) -> ServiceResult<Occurrence>
where
    R: OccurrenceWriter,
{
    let new_occurrence = draft.into_new_occurrence(now);
    let occurrence = repo
        .create_occurrence(&new_occurrence)
        .map_err(|e| repository_failure("create occurrence", e))?;

    log::info!(
        "Occurrence {} registered by {} at {}",
        occurrence.id,
        occurrence.operator,
        occurrence.location
    );
    Ok(occurrence)
}

pub fn update_occurrence<R>(
    occurrence_id: &str,
    update: OccurrenceUpdate,
    repo: &R,
    now: NaiveDateTime,
) -> ServiceResult<Occurrence>
where
    R: OccurrenceWriter,
{
    let Ok(occurrence_id) = OccurrenceId::new(occurrence_id) else {
        return Err(ServiceError::NotFound);
    };

    repo.update_occurrence(&occurrence_id, &update, now)
        .map_err(|e| repository_failure("update occurrence", e))
}

pub fn delete_occurrence<R>(occurrence_id: &str, repo: &R) -> ServiceResult<()>
where
    R: OccurrenceWriter,
{
    let Ok(occurrence_id) = OccurrenceId::new(occurrence_id) else {
        return Err(ServiceError::NotFound);
    };

    repo.delete_occurrence(&occurrence_id)
        .map_err(|e| repository_failure("delete occurrence", e))?;

    log::info!("Occurrence {occurrence_id} deleted");
    Ok(())
}

pub fn occurrence_stats<R>(repo: &R) -> ServiceResult<OccurrenceStats>
where
    R: OccurrenceReader,
{
    let occurrences = list_occurrences(&OccurrenceListQuery::default(), repo)?;
    Ok(OccurrenceStats::from_occurrences(&occurrences))
}
