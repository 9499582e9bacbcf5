//! Calculation result models for the Payroll Engine.
//!
//! This module contains the [`SalaryCalculation`] type and its associated
//! structures: the persisted [`SalaryRecord`], the [`SalaryBasis`] naming the
//! rule that produced it, and the audit trace of every decision taken.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::PayMonth;

/// The rule that determined the payable days for a salary.
///
/// # Example
///
/// ```
/// use payroll_engine::models::SalaryBasis;
///
/// let basis = SalaryBasis::LeaveWithinAllowance;
/// assert_eq!(format!("{:?}", basis), "LeaveWithinAllowance");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SalaryBasis {
    /// Exactly 25 days present; leave is not consulted.
    FullAttendance,
    /// Partial attendance and no leave on file.
    NoLeaveRecords,
    /// Leave in the requested month, within the type's allowance.
    LeaveWithinAllowance,
    /// Leave in the requested month, over the type's allowance.
    LeaveExceedsAllowance,
    /// Leave on file but none of it in the requested month.
    LeaveOutsideMonth,
}

impl SalaryBasis {
    /// Returns the snake_case identifier used in audit output.
    pub fn as_str(&self) -> &'static str {
        match self {
            SalaryBasis::FullAttendance => "full_attendance",
            SalaryBasis::NoLeaveRecords => "no_leave_records",
            SalaryBasis::LeaveWithinAllowance => "leave_within_allowance",
            SalaryBasis::LeaveExceedsAllowance => "leave_exceeds_allowance",
            SalaryBasis::LeaveOutsideMonth => "leave_outside_month",
        }
    }
}

/// The salary artifact handed to the store.
///
/// # Example
///
/// ```
/// use payroll_engine::models::{PayMonth, SalaryRecord};
/// use rust_decimal::Decimal;
///
/// let record = SalaryRecord {
///     employee_id: "1".to_string(),
///     salary_type: "monthly".to_string(),
///     name: "Nimal Perera".to_string(),
///     month: "Jan".parse::<PayMonth>().unwrap(),
///     salary_amount: Decimal::from(25000),
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalaryRecord {
    /// The employee paid.
    pub employee_id: String,
    /// Caller-supplied salary type label.
    #[serde(rename = "type")]
    pub salary_type: String,
    /// Caller-supplied name label.
    pub name: String,
    /// The month paid for.
    pub month: PayMonth,
    /// The salary, rounded to a whole currency unit.
    pub salary_amount: Decimal,
}

/// A single step in the audit trace recording a calculation decision.
///
/// Each step captures the input, output, and reasoning for a rule application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditStep {
    /// The sequential step number.
    pub step_number: u32,
    /// The unique identifier of the rule that was applied.
    pub rule_id: String,
    /// The human-readable name of the rule.
    pub rule_name: String,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of the decision.
    pub reasoning: String,
}

/// A warning generated during calculation.
///
/// Warnings indicate potential issues that don't prevent calculation
/// but may require attention.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditWarning {
    /// A code identifying the type of warning.
    pub code: String,
    /// A human-readable description of the warning.
    pub message: String,
    /// The severity level (e.g., "low", "medium", "high").
    pub severity: String,
}

/// The complete audit trace for a calculation.
///
/// # Example
///
/// ```
/// use payroll_engine::models::AuditTrace;
///
/// let trace = AuditTrace {
///     steps: vec![],
///     warnings: vec![],
///     duration_us: 12,
/// };
/// assert!(!trace.has_warning("MULTIPLE_LEAVE_MATCHES"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditTrace {
    /// The sequence of calculation steps.
    pub steps: Vec<AuditStep>,
    /// Any warnings generated during calculation.
    pub warnings: Vec<AuditWarning>,
    /// The total calculation duration in microseconds.
    pub duration_us: u64,
}

impl AuditTrace {
    /// Returns true if a warning with the given code was raised.
    pub fn has_warning(&self, code: &str) -> bool {
        self.warnings.iter().any(|w| w.code == code)
    }
}

/// The complete result of a salary calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalaryCalculation {
    /// Unique identifier for this calculation.
    pub calculation_id: Uuid,
    /// When the calculation was performed.
    pub timestamp: DateTime<Utc>,
    /// The version of the engine that performed the calculation.
    pub engine_version: String,
    /// The rule that produced the salary.
    pub basis: SalaryBasis,
    /// The record to persist.
    pub record: SalaryRecord,
    /// Complete audit trace of calculation decisions.
    pub audit_trace: AuditTrace,
}
