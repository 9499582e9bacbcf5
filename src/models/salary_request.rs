//! Salary request model.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::PayMonth;

/// Caller inputs for a salary calculation.
///
/// `overtime_hours` is multiplied by the day rate as-is; it is a count of
/// extra attendance-equivalent units rather than clock hours.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalaryRequest {
    /// The employee to pay.
    pub employee_id: String,
    /// The month to pay for.
    pub month: PayMonth,
    /// Extra units paid at the day rate.
    #[serde(default)]
    pub overtime_hours: Decimal,
    /// Label copied onto the salary record.
    #[serde(rename = "type")]
    pub salary_type: String,
    /// Label copied onto the salary record.
    pub name: String,
}
