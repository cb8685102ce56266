use serde::Deserialize;
use thiserror::Error;

use crate::domain::period::ReportPeriod;
use crate::domain::types::TypeConstraintError;
use crate::forms::non_blank;
use crate::services::export::{DownloadError, DownloadFormat};

/// Query string of the report endpoints. Both values are optional.
#[derive(Debug, Default, Deserialize)]
pub struct ReportParams {
    pub period: Option<String>,
    pub format: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportPayload {
    pub period: ReportPeriod,
    pub format: DownloadFormat,
}

#[derive(Debug, Error)]
pub enum ReportParamsError {
    #[error("{0}")]
    Period(String),
    #[error("{0}")]
    Format(String),
}

impl From<TypeConstraintError> for ReportParamsError {
    fn from(value: TypeConstraintError) -> Self {
        Self::Period(value.to_string())
    }
}

impl From<DownloadError> for ReportParamsError {
    fn from(value: DownloadError) -> Self {
        Self::Format(value.to_string())
    }
}

impl TryFrom<ReportParams> for ReportPayload {
    type Error = ReportParamsError;

    fn try_from(value: ReportParams) -> Result<Self, Self::Error> {
        let period = non_blank(value.period.as_deref())
            .map(ReportPeriod::try_from)
            .transpose()?
            .unwrap_or_default();
        let format = non_blank(value.format.as_deref())
            .map(DownloadFormat::try_from)
            .transpose()?
            .unwrap_or(DownloadFormat::Csv);

        Ok(Self { period, format })
    }
}
