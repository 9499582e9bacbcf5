//! Day rate and rounding functionality.
//!
//! A salary month is a fixed 25 working days. Every pay figure is the day
//! rate multiplied by a number of days plus the day rate multiplied by a
//! number of extra units, rounded to a whole currency unit at the end.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::error::{EngineError, EngineResult};

/// Attendance days that make up a full salary month.
pub const FULL_MONTH_DAYS: u32 = 25;

/// Returns the per-day rate for a monthly basic salary.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::day_rate;
/// use rust_decimal::Decimal;
///
/// assert_eq!(day_rate(Decimal::from(30000)), Decimal::from(1200));
/// ```
pub fn day_rate(basic_salary: Decimal) -> Decimal {
    basic_salary / Decimal::from(FULL_MONTH_DAYS)
}

/// Returns `day_rate * days + day_rate * extra_units`, unrounded.
///
/// Fails with `InvalidInput` if the result does not fit in a `Decimal`.
pub fn pay_for(day_rate: Decimal, days: Decimal, extra_units: Decimal) -> EngineResult<Decimal> {
    let day_pay = day_rate
        .checked_mul(days)
        .ok_or_else(|| overflow("basic_salary", day_rate, days))?;
    let extra_pay = day_rate
        .checked_mul(extra_units)
        .ok_or_else(|| overflow("overtime_hours", day_rate, extra_units))?;

    day_pay
        .checked_add(extra_pay)
        .ok_or_else(|| EngineError::InvalidInput {
            field: "overtime_hours".to_string(),
            message: format!("salary of {} + {} is out of range", day_pay, extra_pay),
        })
}

fn overflow(field: &str, day_rate: Decimal, units: Decimal) -> EngineError {
    EngineError::InvalidInput {
        field: field.to_string(),
        message: format!("{} x {} is out of range", day_rate, units),
    }
}

/// Rounds a salary to the nearest whole unit, halves away from zero.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::round_salary;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// assert_eq!(round_salary(Decimal::from_str("1200.5").unwrap()), Decimal::from(1201));
/// assert_eq!(round_salary(Decimal::from_str("1200.49").unwrap()), Decimal::from(1200));
/// ```
pub fn round_salary(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
}
