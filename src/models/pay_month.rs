//! Pay month model.
//!
//! This module contains the [`PayMonth`] type, the short month label that
//! attendance tallies, leave records and salary records are keyed by.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, Month, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::EngineError;

/// A calendar month used as the payroll granularity.
///
/// Serializes as the three-letter label ("Jan" .. "Dec"). Parsing accepts
/// abbreviations or full names in any case.
///
/// # Example
///
/// ```
/// use payroll_engine::models::PayMonth;
/// use chrono::NaiveDate;
///
/// let month: PayMonth = "mar".parse().unwrap();
/// assert_eq!(month.label(), "Mar");
///
/// let from_date = PayMonth::from_date(NaiveDate::from_ymd_opt(2024, 3, 18).unwrap());
/// assert_eq!(month, from_date);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PayMonth(Month);

impl PayMonth {
    /// Creates a pay month from a `chrono::Month`.
    pub fn new(month: Month) -> Self {
        Self(month)
    }

    /// Returns the month a date falls in.
    pub fn from_date(date: NaiveDate) -> Self {
        Self(Month::try_from(date.month() as u8).expect("NaiveDate month is in 1..=12"))
    }

    /// Returns the three-letter label, e.g. "Jan".
    pub fn label(&self) -> &'static str {
        &self.0.name()[..3]
    }

    /// Returns the underlying `chrono::Month`.
    pub fn month(&self) -> Month {
        self.0
    }
}

impl fmt::Display for PayMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for PayMonth {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<Month>()
            .map(Self)
            .map_err(|_| EngineError::InvalidInput {
                field: "month".to_string(),
                message: format!("'{}' is not a month label", s),
            })
    }
}

impl TryFrom<String> for PayMonth {
    type Error = EngineError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<PayMonth> for String {
    fn from(month: PayMonth) -> Self {
        month.label().to_string()
    }
}
