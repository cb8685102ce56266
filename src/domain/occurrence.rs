use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::domain::types::{
    ActionTaken, AgenciesContacted, CameraReference, Classification, Location, OccurrenceId,
    OccurrenceType, Operator, Shift, TechnicalDescription,
};

/// An incident logged by an operator.
///
/// `camera` is free text and is not checked against the camera registry.
/// `end_time` may precede `start_time`; incidents crossing midnight are
/// recorded that way.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Occurrence {
    pub id: OccurrenceId,
    pub registration_date: NaiveDate,
    pub occurrence_date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub location: Location,
    pub camera: CameraReference,
    #[serde(rename = "type")]
    pub occurrence_type: OccurrenceType,
    pub classification: Classification,
    pub operator: Operator,
    pub shift: Shift,
    pub technical_description: TechnicalDescription,
    pub action_taken: ActionTaken,
    pub agencies_contacted: Option<AgenciesContacted>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Validated operator input for a new occurrence, before identity is assigned.
#[derive(Debug, Clone, PartialEq)]
pub struct OccurrenceDraft {
    pub registration_date: NaiveDate,
    pub occurrence_date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub location: Location,
    pub camera: CameraReference,
    pub occurrence_type: OccurrenceType,
    pub classification: Classification,
    pub operator: Operator,
    pub shift: Shift,
    pub technical_description: TechnicalDescription,
    pub action_taken: ActionTaken,
    pub agencies_contacted: Option<AgenciesContacted>,
}

impl OccurrenceDraft {
    /// Assigns a fresh id and creation timestamp.
    pub fn into_new_occurrence(self, now: NaiveDateTime) -> NewOccurrence {
        NewOccurrence {
            id: OccurrenceId::generate(),
            registration_date: self.registration_date,
            occurrence_date: self.occurrence_date,
            start_time: self.start_time,
            end_time: self.end_time,
            location: self.location,
            camera: self.camera,
            occurrence_type: self.occurrence_type,
            classification: self.classification,
            operator: self.operator,
            shift: self.shift,
            technical_description: self.technical_description,
            action_taken: self.action_taken,
            agencies_contacted: self.agencies_contacted,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Data required to insert a new [`Occurrence`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewOccurrence {
    pub id: OccurrenceId,
    pub registration_date: NaiveDate,
    pub occurrence_date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub location: Location,
    pub camera: CameraReference,
    pub occurrence_type: OccurrenceType,
    pub classification: Classification,
    pub operator: Operator,
    pub shift: Shift,
    pub technical_description: TechnicalDescription,
    pub action_taken: ActionTaken,
    pub agencies_contacted: Option<AgenciesContacted>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl From<NewOccurrence> for Occurrence {
    fn from(value: NewOccurrence) -> Self {
        Self {
            id: value.id,
            registration_date: value.registration_date,
            occurrence_date: value.occurrence_date,
            start_time: value.start_time,
            end_time: value.end_time,
            location: value.location,
            camera: value.camera,
            occurrence_type: value.occurrence_type,
            classification: value.classification,
            operator: value.operator,
            shift: value.shift,
            technical_description: value.technical_description,
            action_taken: value.action_taken,
            agencies_contacted: value.agencies_contacted,
            created_at: value.created_at,
            updated_at: value.updated_at,
        }
    }
}

/// Partial update of an occurrence. `None` leaves a field untouched.
///
/// Required text fields can only be replaced with non-empty values, which the
/// wrapper types already guarantee. `agencies_contacted: Some(None)` clears it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OccurrenceUpdate {
    pub registration_date: Option<NaiveDate>,
    pub occurrence_date: Option<NaiveDate>,
    pub start_time: Option<NaiveTime>,
    pub end_time: Option<NaiveTime>,
    pub location: Option<Location>,
    pub camera: Option<CameraReference>,
    pub occurrence_type: Option<OccurrenceType>,
    pub classification: Option<Classification>,
    pub operator: Option<Operator>,
    pub shift: Option<Shift>,
    pub technical_description: Option<TechnicalDescription>,
    pub action_taken: Option<ActionTaken>,
    pub agencies_contacted: Option<Option<AgenciesContacted>>,
}

impl OccurrenceUpdate {
    /// Merges the changed fields into `occurrence`, stamping `updated_at`.
    pub fn apply_to(&self, occurrence: &mut Occurrence, now: NaiveDateTime) {
        if let Some(value) = self.registration_date {
            occurrence.registration_date = value;
        }
        if let Some(value) = self.occurrence_date {
            occurrence.occurrence_date = value;
        }
        if let Some(value) = self.start_time {
            occurrence.start_time = value;
        }
        if let Some(value) = self.end_time {
            occurrence.end_time = value;
        }
        if let Some(value) = &self.location {
            occurrence.location = value.clone();
        }
        if let Some(value) = &self.camera {
            occurrence.camera = value.clone();
        }
        if let Some(value) = self.occurrence_type {
            occurrence.occurrence_type = value;
        }
        if let Some(value) = self.classification {
            occurrence.classification = value;
        }
        if let Some(value) = self.operator {
            occurrence.operator = value;
        }
        if let Some(value) = self.shift {
            occurrence.shift = value;
        }
        if let Some(value) = &self.technical_description {
            occurrence.technical_description = value.clone();
        }
        if let Some(value) = &self.action_taken {
            occurrence.action_taken = value.clone();
        }
        if let Some(value) = &self.agencies_contacted {
            occurrence.agencies_contacted = value.clone();
        }
        occurrence.updated_at = now;
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;
    use chrono::DateTime;

    pub fn at(secs: i64) -> NaiveDateTime {
        DateTime::from_timestamp(secs, 0).unwrap().naive_utc()
    }

    pub fn draft(location: &str, occurrence_type: OccurrenceType) -> OccurrenceDraft {
        OccurrenceDraft {
            registration_date: NaiveDate::from_ymd_opt(2026, 10, 15).unwrap(),
            occurrence_date: NaiveDate::from_ymd_opt(2026, 10, 15).unwrap(),
            start_time: NaiveTime::from_hms_opt(8, 0, 0).unwrap(),
            end_time: NaiveTime::from_hms_opt(8, 30, 0).unwrap(),
            location: Location::new(location).unwrap(),
            camera: CameraReference::new("NVR1-CAM01").unwrap(),
            occurrence_type,
            classification: Classification::InProgress,
            operator: Operator::Wagner,
            shift: Shift::Day,
            technical_description: TechnicalDescription::new("Person near the fence").unwrap(),
            action_taken: ActionTaken::new("Security team dispatched").unwrap(),
            agencies_contacted: None,
        }
    }

    pub fn occurrence(location: &str, occurrence_type: OccurrenceType) -> Occurrence {
        draft(location, occurrence_type)
            .into_new_occurrence(at(0))
            .into()
    }
}
