use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use diesel::prelude::*;

use crate::domain::occurrence::{
    NewOccurrence as DomainNewOccurrence, Occurrence as DomainOccurrence, OccurrenceUpdate,
};
use crate::domain::types::{
    ActionTaken, AgenciesContacted, CameraReference, Classification, Location, OccurrenceId,
    OccurrenceType, Operator, Shift, TechnicalDescription, TypeConstraintError,
};

/// Diesel model representing a row in the `occurrences` table.
#[derive(Debug, Clone, Identifiable, Queryable)]
#[diesel(table_name = crate::schema::occurrences)]
pub struct Occurrence {
    pub id: String,
    pub registration_date: NaiveDate,
    pub occurrence_date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub location: String,
    pub camera: String,
    pub occurrence_type: String,
    pub classification: String,
    pub operator: String,
    pub shift: String,
    pub technical_description: String,
    pub action_taken: String,
    pub agencies_contacted: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Insertable form of [`Occurrence`] used for creating new rows.
#[derive(Insertable)]
#[diesel(table_name = crate::schema::occurrences)]
pub struct NewOccurrence<'a> {
    pub id: &'a str,
    pub registration_date: NaiveDate,
    pub occurrence_date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub location: &'a str,
    pub camera: &'a str,
    pub occurrence_type: &'static str,
    pub classification: &'static str,
    pub operator: &'static str,
    pub shift: &'static str,
    pub technical_description: &'a str,
    pub action_taken: &'a str,
    pub agencies_contacted: Option<&'a str>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Partial update of an occurrence row; `None` columns are left untouched.
#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::occurrences)]
pub struct OccurrenceChangeset<'a> {
    pub registration_date: Option<NaiveDate>,
    pub occurrence_date: Option<NaiveDate>,
    pub start_time: Option<NaiveTime>,
    pub end_time: Option<NaiveTime>,
    pub location: Option<&'a str>,
    pub camera: Option<&'a str>,
    pub occurrence_type: Option<&'static str>,
    pub classification: Option<&'static str>,
    pub operator: Option<&'static str>,
    pub shift: Option<&'static str>,
    pub technical_description: Option<&'a str>,
    pub action_taken: Option<&'a str>,
    pub agencies_contacted: Option<Option<&'a str>>,
    pub updated_at: NaiveDateTime,
}

impl<'a> OccurrenceChangeset<'a> {
    pub fn new(update: &'a OccurrenceUpdate, now: NaiveDateTime) -> Self {
        Self {
            registration_date: update.registration_date,
            occurrence_date: update.occurrence_date,
            start_time: update.start_time,
            end_time: update.end_time,
            location: update.location.as_ref().map(Location::as_str),
            camera: update.camera.as_ref().map(CameraReference::as_str),
            occurrence_type: update.occurrence_type.map(OccurrenceType::as_str),
            classification: update.classification.map(Classification::as_str),
            operator: update.operator.map(Operator::as_str),
            shift: update.shift.map(Shift::as_str),
            technical_description: update
                .technical_description
                .as_ref()
                .map(TechnicalDescription::as_str),
            action_taken: update.action_taken.as_ref().map(ActionTaken::as_str),
            agencies_contacted: update
                .agencies_contacted
                .as_ref()
                .map(|value| value.as_ref().map(AgenciesContacted::as_str)),
            updated_at: now,
        }
    }
}

impl TryFrom<Occurrence> for DomainOccurrence {
    type Error = TypeConstraintError;

    fn try_from(occurrence: Occurrence) -> Result<Self, Self::Error> {
        Ok(Self {
            id: OccurrenceId::new(occurrence.id)?,
            registration_date: occurrence.registration_date,
            occurrence_date: occurrence.occurrence_date,
            start_time: occurrence.start_time,
            end_time: occurrence.end_time,
            location: Location::new(occurrence.location)?,
            camera: CameraReference::new(occurrence.camera)?,
            occurrence_type: OccurrenceType::try_from(occurrence.occurrence_type)?,
            classification: Classification::try_from(occurrence.classification)?,
            operator: Operator::try_from(occurrence.operator)?,
            shift: Shift::try_from(occurrence.shift)?,
            technical_description: TechnicalDescription::new(occurrence.technical_description)?,
            action_taken: ActionTaken::new(occurrence.action_taken)?,
            agencies_contacted: occurrence
                .agencies_contacted
                .map(AgenciesContacted::new)
                .transpose()?,
            created_at: occurrence.created_at,
            updated_at: occurrence.updated_at,
        })
    }
}

impl<'a> From<&'a DomainNewOccurrence> for NewOccurrence<'a> {
    fn from(occurrence: &'a DomainNewOccurrence) -> Self {
        Self {
            id: occurrence.id.as_str(),
            registration_date: occurrence.registration_date,
            occurrence_date: occurrence.occurrence_date,
            start_time: occurrence.start_time,
            end_time: occurrence.end_time,
            location: occurrence.location.as_str(),
            camera: occurrence.camera.as_str(),
            occurrence_type: occurrence.occurrence_type.as_str(),
            classification: occurrence.classification.as_str(),
            operator: occurrence.operator.as_str(),
            shift: occurrence.shift.as_str(),
            technical_description: occurrence.technical_description.as_str(),
            action_taken: occurrence.action_taken.as_str(),
            agencies_contacted: occurrence
                .agencies_contacted
                .as_ref()
                .map(AgenciesContacted::as_str),
            created_at: occurrence.created_at,
            updated_at: occurrence.updated_at,
        }
    }
}
