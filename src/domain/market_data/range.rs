use super::Granularity;
use crate::domain::logging::LogComponent;
use chrono::{DateTime, Days, Months, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use strum::{AsRefStr, Display as StrumDisplay, EnumIter, EnumString};

/// Coarse time window picked in the UI.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, StrumDisplay, EnumIter, EnumString, AsRefStr,
    Serialize, Deserialize,
)]
pub enum RangeSelection {
    #[strum(serialize = "1D")]
    #[serde(rename = "1D")]
    OneDay,
    #[strum(serialize = "1W")]
    #[serde(rename = "1W")]
    OneWeek,
    #[default]
    #[strum(serialize = "1M")]
    #[serde(rename = "1M")]
    OneMonth,
    #[strum(serialize = "3M")]
    #[serde(rename = "3M")]
    ThreeMonths,
    #[strum(serialize = "1Y")]
    #[serde(rename = "1Y")]
    OneYear,
    #[strum(serialize = "5Y")]
    #[serde(rename = "5Y")]
    FiveYears,
}

impl RangeSelection {
    /// Parse a UI label; anything unrecognised means the widest window.
    pub fn from_label(label: &str) -> Self {
        match Self::from_str(label.trim()) {
            Ok(range) => range,
            Err(_) => {
                crate::log_debug!(
                    LogComponent::Domain("RangeResolver"),
                    "unknown range '{}', using 5Y policy",
                    label
                );
                Self::FiveYears
            }
        }
    }

    pub fn granularity(&self) -> Granularity {
        match self {
            Self::OneDay => Granularity::Minute,
            Self::OneWeek | Self::OneMonth | Self::ThreeMonths => Granularity::Day,
            Self::OneYear => Granularity::Week,
            Self::FiveYears => Granularity::Month,
        }
    }

    fn start_from(&self, today: NaiveDate) -> NaiveDate {
        let start = match self {
            Self::OneDay => Some(today),
            Self::OneWeek => today.checked_sub_days(Days::new(7)),
            Self::OneMonth => today.checked_sub_months(Months::new(1)),
            Self::ThreeMonths => today.checked_sub_months(Months::new(3)),
            Self::OneYear => today.checked_sub_months(Months::new(12)),
            Self::FiveYears => today.checked_sub_months(Months::new(60)),
        };
        start.unwrap_or(NaiveDate::MIN)
    }
}

/// Concrete backend query derived from a range selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ResolvedQuery {
    pub granularity: Granularity,
    pub from: NaiveDate,
    pub to: NaiveDate,
}

impl ResolvedQuery {
    pub fn from_param(&self) -> String {
        self.from.format("%Y-%m-%d").to_string()
    }

    pub fn to_param(&self) -> String {
        self.to.format("%Y-%m-%d").to_string()
    }
}

/// Map a range selection to a query at `now` (UTC calendar day).
pub fn resolve(range: RangeSelection, now: DateTime<Utc>) -> ResolvedQuery {
    let today = now.date_naive();
    ResolvedQuery { granularity: range.granularity(), from: range.start_from(today), to: today }
}

/// Same as [`resolve`] for a raw UI label.
pub fn resolve_label(label: &str, now: DateTime<Utc>) -> ResolvedQuery {
    resolve(RangeSelection::from_label(label), now)
}
