//! Leave models.
//!
//! Leave taken by employees and the per-type allowance policy.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::PayMonth;

/// A block of leave taken by an employee.
///
/// # Example
///
/// ```
/// use payroll_engine::models::LeaveRecord;
/// use chrono::NaiveDate;
///
/// let leave = LeaveRecord {
///     employee_id: "3".to_string(),
///     leave_type: "casual".to_string(),
///     days_taken: 2,
///     leaving_date: NaiveDate::from_ymd_opt(2024, 4, 9).unwrap(),
/// };
/// assert_eq!(leave.month().label(), "Apr");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaveRecord {
    /// The employee on leave.
    pub employee_id: String,
    /// The leave type, resolved against the allowance table.
    pub leave_type: String,
    /// Number of days taken.
    pub days_taken: u32,
    /// The day the leave started.
    pub leaving_date: NaiveDate,
}

impl LeaveRecord {
    /// Returns the month the leave is counted in.
    pub fn month(&self) -> PayMonth {
        PayMonth::from_date(self.leaving_date)
    }
}

/// Maximum days allowed for a leave type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaveTypeAllowance {
    /// The leave type.
    pub leave_type: String,
    /// Days the policy permits.
    pub allowed_days: u32,
}
