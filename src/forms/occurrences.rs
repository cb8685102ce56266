use serde::Deserialize;
use thiserror::Error;
use validator::{Validate, ValidationErrors};

use crate::domain::occurrence::{OccurrenceDraft, OccurrenceUpdate};
use crate::domain::types::{
    ActionTaken, AgenciesContacted, CameraReference, Classification, Location, OccurrenceType,
    Operator, Shift, TechnicalDescription, TypeConstraintError,
};
use crate::forms::{non_blank, parse_date, parse_time};
use crate::repository::{OccurrenceListQuery, SearchField};

/// JSON body accepted when registering an occurrence.
#[derive(Debug, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateOccurrenceForm {
    #[validate(required)]
    pub registration_date: Option<String>,
    #[validate(required)]
    pub occurrence_date: Option<String>,
    #[validate(required)]
    pub start_time: Option<String>,
    #[validate(required)]
    pub end_time: Option<String>,
    #[validate(required, length(max = 255))]
    pub location: Option<String>,
    #[validate(required, length(max = 255))]
    pub camera: Option<String>,
    #[serde(rename = "type")]
    #[validate(required)]
    pub occurrence_type: Option<String>,
    /// Defaults to in progress.
    pub classification: Option<String>,
    #[validate(required)]
    pub operator: Option<String>,
    /// Defaults to the day shift.
    pub shift: Option<String>,
    #[validate(required, length(max = 4000))]
    pub technical_description: Option<String>,
    #[validate(required, length(max = 4000))]
    pub action_taken: Option<String>,
    #[validate(length(max = 1000))]
    pub agencies_contacted: Option<String>,
}

#[derive(Debug, Error)]
pub enum OccurrenceFormError {
    #[error("occurrence form validation failed: {0}")]
    Validation(String),
    #[error("occurrence form contains invalid data: {0}")]
    TypeConstraint(String),
}

impl From<ValidationErrors> for OccurrenceFormError {
    fn from(value: ValidationErrors) -> Self {
        Self::Validation(value.to_string())
    }
}

impl From<TypeConstraintError> for OccurrenceFormError {
    fn from(value: TypeConstraintError) -> Self {
        Self::TypeConstraint(value.to_string())
    }
}

/// Blank agencies mean none were contacted.
fn agencies(value: Option<String>) -> Option<AgenciesContacted> {
    value.and_then(|v| AgenciesContacted::new(v).ok())
}

impl TryFrom<CreateOccurrenceForm> for OccurrenceDraft {
    type Error = OccurrenceFormError;

    fn try_from(value: CreateOccurrenceForm) -> Result<Self, Self::Error> {
        value.validate()?;

        // `validate` has checked every required field is present.
        let required = |field: Option<String>| field.unwrap_or_default();

        Ok(Self {
            registration_date: parse_date(&required(value.registration_date), "registrationDate")?,
            occurrence_date: parse_date(&required(value.occurrence_date), "occurrenceDate")?,
            start_time: parse_time(&required(value.start_time), "startTime")?,
            end_time: parse_time(&required(value.end_time), "endTime")?,
            location: Location::new(required(value.location))?,
            camera: CameraReference::new(required(value.camera))?,
            occurrence_type: OccurrenceType::try_from(required(value.occurrence_type))?,
            classification: non_blank(value.classification.as_deref())
                .map(Classification::try_from)
                .transpose()?
                .unwrap_or(Classification::InProgress),
            operator: Operator::try_from(required(value.operator))?,
            shift: non_blank(value.shift.as_deref())
                .map(Shift::try_from)
                .transpose()?
                .unwrap_or(Shift::Day),
            technical_description: TechnicalDescription::new(required(
                value.technical_description,
            ))?,
            action_taken: ActionTaken::new(required(value.action_taken))?,
            agencies_contacted: agencies(value.agencies_contacted),
        })
    }
}

/// JSON body accepted when editing an occurrence. Absent fields are kept.
///
/// Required text fields may be replaced but not blanked; an empty
/// `agenciesContacted` clears it.
#[derive(Debug, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateOccurrenceForm {
    pub registration_date: Option<String>,
    pub occurrence_date: Option<String>,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    #[validate(length(max = 255))]
    pub location: Option<String>,
    #[validate(length(max = 255))]
    pub camera: Option<String>,
    #[serde(rename = "type")]
    pub occurrence_type: Option<String>,
    pub classification: Option<String>,
    pub operator: Option<String>,
    pub shift: Option<String>,
    #[validate(length(max = 4000))]
    pub technical_description: Option<String>,
    #[validate(length(max = 4000))]
    pub action_taken: Option<String>,
    #[validate(length(max = 1000))]
    pub agencies_contacted: Option<String>,
}

impl TryFrom<UpdateOccurrenceForm> for OccurrenceUpdate {
    type Error = OccurrenceFormError;

    fn try_from(value: UpdateOccurrenceForm) -> Result<Self, Self::Error> {
        value.validate()?;

        Ok(Self {
            registration_date: value
                .registration_date
                .map(|v| parse_date(&v, "registrationDate"))
                .transpose()?,
            occurrence_date: value
                .occurrence_date
                .map(|v| parse_date(&v, "occurrenceDate"))
                .transpose()?,
            start_time: value
                .start_time
                .map(|v| parse_time(&v, "startTime"))
                .transpose()?,
            end_time: value
                .end_time
                .map(|v| parse_time(&v, "endTime"))
                .transpose()?,
            location: value.location.map(Location::new).transpose()?,
            camera: value.camera.map(CameraReference::new).transpose()?,
            occurrence_type: value
                .occurrence_type
                .map(OccurrenceType::try_from)
                .transpose()?,
            classification: value
                .classification
                .map(Classification::try_from)
                .transpose()?,
            operator: value.operator.map(Operator::try_from).transpose()?,
            shift: value.shift.map(Shift::try_from).transpose()?,
            technical_description: value
                .technical_description
                .map(TechnicalDescription::new)
                .transpose()?,
            action_taken: value.action_taken.map(ActionTaken::new).transpose()?,
            agencies_contacted: value.agencies_contacted.map(|v| agencies(Some(v))),
        })
    }
}

/// Query string of the occurrence listing.
///
/// `fields` is a comma separated list of `location`, `camera` and
/// `technical_description`; blank values impose no constraint.
#[derive(Debug, Default, Deserialize)]
pub struct OccurrenceListParams {
    pub search: Option<String>,
    pub fields: Option<String>,
    #[serde(rename = "type")]
    pub occurrence_type: Option<String>,
    pub classification: Option<String>,
}

impl TryFrom<OccurrenceListParams> for OccurrenceListQuery {
    type Error = OccurrenceFormError;

    /// Unknown `type` or `classification` values cannot match any stored
    /// occurrence, so they produce an empty listing rather than an error.
    fn try_from(value: OccurrenceListParams) -> Result<Self, Self::Error> {
        let mut query = OccurrenceListQuery::default();

        if let Some(search) = value.search {
            query = query.search(search);
        }
        if let Some(fields) = non_blank(value.fields.as_deref()) {
            let fields = fields
                .split(',')
                .filter(|f| !f.trim().is_empty())
                .map(SearchField::try_from)
                .collect::<Result<Vec<_>, _>>()?;
            query = query.search_in(fields);
        }
        if let Some(occurrence_type) = non_blank(value.occurrence_type.as_deref()) {
            query = match OccurrenceType::try_from(occurrence_type) {
                Ok(occurrence_type) => query.occurrence_type(occurrence_type),
                Err(_) => query.match_nothing(),
            };
        }
        if let Some(classification) = non_blank(value.classification.as_deref()) {
            query = match Classification::try_from(classification) {
                Ok(classification) => query.classification(classification),
                Err(_) => query.match_nothing(),
            };
        }

        Ok(query)
    }
}
