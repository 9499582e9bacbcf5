//! Calculation logic for the Payroll Engine.
//!
//! This module contains the day rate and rounding rules, attendance
//! tallying, leave credit evaluation, and the monthly salary calculation
//! that combines them.

mod attendance_tally;
mod day_rate;
mod leave_credit;
mod salary;

pub use attendance_tally::tally_attendance;
pub use day_rate::{FULL_MONTH_DAYS, day_rate, pay_for, round_salary};
pub use leave_credit::{LeaveCreditResult, MonthContext, evaluate_leave};
pub use salary::{
    WARNING_MULTIPLE_LEAVE_MATCHES, WARNING_OVERTIME_REPLACED, WARNING_UNKNOWN_LEAVE_TYPE,
    compute_salary,
};
