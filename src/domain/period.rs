//! Reporting periods relative to a reference date.

use chrono::{Datelike, Days, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

use crate::domain::occurrence::Occurrence;
use crate::domain::types::TypeConstraintError;

/// Window of occurrences included in a report.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ReportPeriod {
    Today,
    /// The reference date and the seven days before it. Future dates are not
    /// excluded.
    Week,
    /// The reference calendar month.
    Month,
    #[default]
    All,
}

impl ReportPeriod {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Today => "today",
            Self::Week => "week",
            Self::Month => "month",
            Self::All => "all",
        }
    }

    /// Display label used in the monitoring room.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Today => "Hoje",
            Self::Week => "Última Semana",
            Self::Month => "Mês Atual",
            Self::All => "Todos os Períodos",
        }
    }

    /// Whether an occurrence dated `date` falls inside the period.
    pub fn contains(self, date: NaiveDate, reference: NaiveDate) -> bool {
        match self {
            Self::Today => date == reference,
            Self::Week => reference
                .checked_sub_days(Days::new(7))
                .is_none_or(|start| date >= start),
            Self::Month => date.year() == reference.year() && date.month() == reference.month(),
            Self::All => true,
        }
    }
}

impl Display for ReportPeriod {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl TryFrom<&str> for ReportPeriod {
    type Error = TypeConstraintError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim().to_ascii_lowercase().as_str() {
            "today" => Ok(Self::Today),
            "week" => Ok(Self::Week),
            "month" => Ok(Self::Month),
            "all" => Ok(Self::All),
            other => Err(TypeConstraintError::InvalidValue(format!(
                "report period: {other}"
            ))),
        }
    }
}

/// Keeps the occurrences whose `occurrence_date` falls in `period`, in input
/// order.
pub fn filter_by_period(
    occurrences: Vec<Occurrence>,
    period: ReportPeriod,
    reference: NaiveDate,
) -> Vec<Occurrence> {
    occurrences
        .into_iter()
        .filter(|o| period.contains(o.occurrence_date, reference))
        .collect()
}
