//! Leave credit evaluation functionality.
//!
//! This module decides how a single leave record affects a partial-attendance
//! month. Leave in the requested month is credited as payable days, capped at
//! the leave type's allowance; leave in any other month earns no credit.

use rust_decimal::Decimal;
use tracing::debug;

use crate::error::EngineResult;
use crate::models::{AuditStep, LeaveRecord, PayMonth, SalaryBasis};

use super::day_rate::pay_for;

/// The attendance context a leave record is evaluated against.
#[derive(Debug, Clone, Copy)]
pub struct MonthContext {
    /// The month being paid.
    pub month: PayMonth,
    /// Days present in that month.
    pub present_days: u32,
    /// Caller-supplied overtime units.
    pub overtime_units: Decimal,
    /// The employee's day rate.
    pub day_rate: Decimal,
}

/// The result of evaluating one leave record, including the audit step.
#[derive(Debug, Clone)]
pub struct LeaveCreditResult {
    /// Which rule applied.
    pub basis: SalaryBasis,
    /// Days paid at the day rate.
    pub payable_days: Decimal,
    /// Units added on top of the payable days.
    pub extra_units: Decimal,
    /// Unrounded salary for this evaluation.
    pub amount: Decimal,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

impl LeaveCreditResult {
    /// Returns true if the leave fell in the month being paid.
    pub fn matches_month(&self) -> bool {
        self.basis != SalaryBasis::LeaveOutsideMonth
    }
}

/// Evaluates a leave record against the month being paid.
///
/// - Within allowance, same month: `present + days_taken` days plus overtime.
/// - Over allowance, same month: `present + allowed_days` days plus
///   `present_days` extra units in place of the overtime.
/// - Different month: `present` days plus overtime.
///
/// Fails with `InvalidInput` if the salary overflows.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::{evaluate_leave, MonthContext};
/// use payroll_engine::models::{LeaveRecord, SalaryBasis};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let leave = LeaveRecord {
///     employee_id: "1".to_string(),
///     leave_type: "casual".to_string(),
///     days_taken: 3,
///     leaving_date: NaiveDate::from_ymd_opt(2024, 1, 10).unwrap(),
/// };
/// let context = MonthContext {
///     month: "Jan".parse().unwrap(),
///     present_days: 20,
///     overtime_units: Decimal::from(2),
///     day_rate: Decimal::from(1000),
/// };
///
/// let result = evaluate_leave(&leave, 5, &context, 1).unwrap();
/// assert_eq!(result.basis, SalaryBasis::LeaveWithinAllowance);
/// assert_eq!(result.amount, Decimal::from(25000));
/// ```
pub fn evaluate_leave(
    leave: &LeaveRecord,
    allowed_days: u32,
    context: &MonthContext,
    step_number: u32,
) -> EngineResult<LeaveCreditResult> {
    let leave_month = leave.month();
    let in_month = leave_month == context.month;
    let present = Decimal::from(context.present_days);

    let (basis, payable_days, extra_units, reasoning) = if !in_month {
        (
            SalaryBasis::LeaveOutsideMonth,
            present,
            context.overtime_units,
            format!(
                "Leave taken in {} does not fall in {} - no leave credit",
                leave_month, context.month
            ),
        )
    } else if leave.days_taken <= allowed_days {
        (
            SalaryBasis::LeaveWithinAllowance,
            present + Decimal::from(leave.days_taken),
            context.overtime_units,
            format!(
                "{} of {} allowed {} days credited: {} + {} = {} days",
                leave.days_taken,
                allowed_days,
                leave.leave_type,
                context.present_days,
                leave.days_taken,
                present + Decimal::from(leave.days_taken)
            ),
        )
    } else {
        (
            SalaryBasis::LeaveExceedsAllowance,
            present + Decimal::from(allowed_days),
            present,
            format!(
                "{} {} days exceed allowance of {} - credited {} + {} = {} days, \
                 extra units set to present days ({})",
                leave.days_taken,
                leave.leave_type,
                allowed_days,
                context.present_days,
                allowed_days,
                present + Decimal::from(allowed_days),
                context.present_days
            ),
        )
    };

    let amount = pay_for(context.day_rate, payable_days, extra_units)?;

    debug!(
        employee_id = %leave.employee_id,
        leave_type = %leave.leave_type,
        basis = basis.as_str(),
        amount = %amount,
        "Evaluated leave record"
    );

    let audit_step = AuditStep {
        step_number,
        rule_id: "leave_credit".to_string(),
        rule_name: "Leave Credit".to_string(),
        input: serde_json::json!({
            "leave_type": leave.leave_type,
            "days_taken": leave.days_taken,
            "allowed_days": allowed_days,
            "leave_month": leave_month.label(),
            "requested_month": context.month.label(),
            "present_days": context.present_days,
            "overtime_units": context.overtime_units.normalize().to_string()
        }),
        output: serde_json::json!({
            "basis": basis.as_str(),
            "payable_days": payable_days.normalize().to_string(),
            "extra_units": extra_units.normalize().to_string(),
            "amount": amount.normalize().to_string()
        }),
        reasoning,
    };

    Ok(LeaveCreditResult {
        basis,
        payable_days,
        extra_units,
        amount,
        audit_step,
    })
}
