//! Employee model.
//!
//! This module defines the Employee struct as seen by the salary
//! calculator: an identifier and a monthly basic salary.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculation::day_rate;

/// Represents an employee whose salary is being calculated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    /// Unique identifier for the employee.
    pub id: String,
    /// The monthly basic salary.
    pub basic_salary: Decimal,
}

impl Employee {
    /// Returns the per-day rate: basic salary over a full 25-day month.
    ///
    /// # Examples
    ///
    /// ```
    /// use payroll_engine::models::Employee;
    /// use rust_decimal::Decimal;
    ///
    /// let employee = Employee {
    ///     id: "1".to_string(),
    ///     basic_salary: Decimal::from(25000),
    /// };
    /// assert_eq!(employee.day_rate(), Decimal::from(1000));
    /// ```
    pub fn day_rate(&self) -> Decimal {
        day_rate(self.basic_salary)
    }
}
