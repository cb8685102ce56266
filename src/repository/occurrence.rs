use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::occurrence::{NewOccurrence, Occurrence, OccurrenceUpdate};
use crate::domain::types::OccurrenceId;
use crate::models::occurrence::{
    NewOccurrence as DbNewOccurrence, Occurrence as DbOccurrence, OccurrenceChangeset,
};
use crate::repository::{
    DieselRepository, OccurrenceListQuery, OccurrenceReader, OccurrenceWriter, RepositoryError,
    RepositoryResult,
};

impl OccurrenceReader for DieselRepository {
    fn list_occurrences(&self, query: &OccurrenceListQuery) -> RepositoryResult<Vec<Occurrence>> {
        use crate::schema::occurrences;

        let mut conn = self.conn()?;
        if query.match_nothing {
            return Ok(Vec::new());
        }

        let mut items = occurrences::table.into_boxed::<diesel::sqlite::Sqlite>();
        if let Some(occurrence_type) = query.occurrence_type {
            items = items.filter(occurrences::occurrence_type.eq(occurrence_type.as_str()));
        }
        if let Some(classification) = query.classification {
            items = items.filter(occurrences::classification.eq(classification.as_str()));
        }

        let items = items
            .order((occurrences::created_at.desc(), occurrences::id.desc()))
            .load::<DbOccurrence>(&mut conn)?
            .into_iter()
            .map(TryInto::try_into)
            .collect::<Result<Vec<Occurrence>, _>>()?;

        // SQLite LIKE only folds ASCII, so the text search runs here.
        Ok(query.apply(items))
    }

    fn get_occurrence_by_id(&self, id: &OccurrenceId) -> RepositoryResult<Option<Occurrence>> {
        use crate::schema::occurrences;

        let mut conn = self.conn()?;

        let occurrence = occurrences::table
            .filter(occurrences::id.eq(id.as_str()))
            .first::<DbOccurrence>(&mut conn)
            .optional()?;

        let occurrence = occurrence.map(TryInto::try_into).transpose()?;
        Ok(occurrence)
    }
}

impl OccurrenceWriter for DieselRepository {
    fn create_occurrence(&self, occurrence: &NewOccurrence) -> RepositoryResult<Occurrence> {
        use crate::schema::occurrences;

        let mut conn = self.conn()?;
        let row: DbNewOccurrence = occurrence.into();

        let stored = diesel::insert_into(occurrences::table)
            .values(&row)
            .get_result::<DbOccurrence>(&mut conn)?;

        Ok(stored.try_into()?)
    }

    fn update_occurrence(
        &self,
        id: &OccurrenceId,
        update: &OccurrenceUpdate,
        now: NaiveDateTime,
    ) -> RepositoryResult<Occurrence> {
        use crate::schema::occurrences;

        let mut conn = self.conn()?;
        let changes = OccurrenceChangeset::new(update, now);

        let stored = diesel::update(occurrences::table.filter(occurrences::id.eq(id.as_str())))
            .set(&changes)
            .get_result::<DbOccurrence>(&mut conn)?;

        Ok(stored.try_into()?)
    }

    fn delete_occurrence(&self, id: &OccurrenceId) -> RepositoryResult<()> {
        use crate::schema::occurrences;

        let mut conn = self.conn()?;

        let affected =
            diesel::delete(occurrences::table.filter(occurrences::id.eq(id.as_str())))
                .execute(&mut conn)?;

        if affected == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }
}
