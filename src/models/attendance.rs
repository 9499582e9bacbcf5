//! Attendance models.
//!
//! Raw attendance marks and the per-employee monthly tallies derived from them.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::PayMonth;

/// A single attendance mark for an employee on a day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceEntry {
    /// The employee who attended.
    pub employee_id: String,
    /// The day attended.
    pub date: NaiveDate,
}

impl AttendanceEntry {
    /// Returns the pay month this entry counts towards.
    pub fn month(&self) -> PayMonth {
        PayMonth::from_date(self.date)
    }
}

/// Number of days an employee was present in a month.
///
/// # Example
///
/// ```
/// use payroll_engine::models::{AttendanceTally, PayMonth};
///
/// let tally = AttendanceTally {
///     employee_id: "4".to_string(),
///     month: "Jun".parse::<PayMonth>().unwrap(),
///     present_days: 25,
/// };
/// assert!(tally.is_full_month());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceTally {
    /// The employee the tally is for.
    pub employee_id: String,
    /// The month counted.
    pub month: PayMonth,
    /// Count of attendance marks in the month.
    pub present_days: u32,
}

impl AttendanceTally {
    /// Returns true when the employee attended exactly a full 25-day month.
    pub fn is_full_month(&self) -> bool {
        self.present_days == crate::calculation::FULL_MONTH_DAYS
    }
}
