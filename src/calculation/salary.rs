//! Monthly salary calculation.
//!
//! This module ties the attendance tally, day rate and leave credit rules
//! together into a single [`compute_salary`] pass that produces a rounded
//! [`SalaryRecord`] and a full audit trace.

use std::time::Instant;

use chrono::Utc;
use rust_decimal::Decimal;
use tracing::{info, warn};
use uuid::Uuid;

use crate::error::{EngineError, EngineResult};
use crate::models::{
    AuditStep, AuditTrace, AuditWarning, SalaryBasis, SalaryCalculation, SalaryRecord,
    SalaryRequest,
};
use crate::store::PayrollSources;

use super::day_rate::{FULL_MONTH_DAYS, pay_for, round_salary};
use super::leave_credit::{LeaveCreditResult, MonthContext, evaluate_leave};

/// Warning raised when leave over the allowance pays present days as extra units.
pub const WARNING_OVERTIME_REPLACED: &str = "OVERTIME_REPLACED_BY_PRESENT_DAYS";

/// Warning raised when more than one leave record falls in the paid month.
pub const WARNING_MULTIPLE_LEAVE_MATCHES: &str = "MULTIPLE_LEAVE_MATCHES";

/// Warning raised when a leave record's type has no allowance and is skipped.
pub const WARNING_UNKNOWN_LEAVE_TYPE: &str = "UNKNOWN_LEAVE_TYPE";

/// Computes an employee's salary for a month.
///
/// The attendance tally for the employee and month must exist, otherwise the
/// month is rejected with `InvalidMonthSelection`. A full 25-day month pays
/// `day_rate * 25 + day_rate * overtime`. A partial month pays present days
/// plus overtime, with leave in the paid month credited by
/// [`evaluate_leave`]. When several leave records fall in the paid month the
/// last one in the leave source's order decides the salary. Leave records
/// whose type has no configured allowance are skipped with an
/// `UNKNOWN_LEAVE_TYPE` warning; if every record is skipped the month is paid
/// as if there were no leave.
///
/// Nothing is persisted; see [`crate::service::SalaryService`] for that.
///
/// # Errors
///
/// - `InvalidInput` if `overtime_hours` is negative.
/// - `InvalidMonthSelection` if there is no attendance for the month.
/// - `EmployeeNotFound` if the employee directory has no such employee.
/// - `InvalidInput` if the salary does not fit in a `Decimal`.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::compute_salary;
/// use payroll_engine::models::{AttendanceTally, Employee, SalaryBasis, SalaryRequest};
/// use payroll_engine::store::PayrollSnapshot;
/// use rust_decimal::Decimal;
///
/// let snapshot = PayrollSnapshot::new()
///     .with_employees(vec![Employee { id: "1".into(), basic_salary: Decimal::from(25000) }])
///     .with_attendance(vec![AttendanceTally {
///         employee_id: "1".into(),
///         month: "Jan".parse().unwrap(),
///         present_days: 25,
///     }]);
///
/// let request = SalaryRequest {
///     employee_id: "1".into(),
///     month: "Jan".parse().unwrap(),
///     overtime_hours: Decimal::from(2),
///     salary_type: "monthly".into(),
///     name: "Nimal".into(),
/// };
///
/// let calculation = compute_salary(&request, &snapshot).unwrap();
/// assert_eq!(calculation.basis, SalaryBasis::FullAttendance);
/// assert_eq!(calculation.record.salary_amount, Decimal::from(27000));
/// ```
pub fn compute_salary<S>(request: &SalaryRequest, sources: &S) -> EngineResult<SalaryCalculation>
where
    S: PayrollSources + ?Sized,
{
    let start_time = Instant::now();
    let calculation_id = Uuid::new_v4();

    if request.overtime_hours < Decimal::ZERO {
        return Err(EngineError::InvalidInput {
            field: "overtime_hours".to_string(),
            message: format!("must not be negative, got {}", request.overtime_hours),
        });
    }

    let tally = sources
        .get_attendance_tally(&request.employee_id, request.month)
        .ok_or_else(|| {
            warn!(
                calculation_id = %calculation_id,
                employee_id = %request.employee_id,
                month = %request.month,
                "No attendance recorded for requested month"
            );
            EngineError::InvalidMonthSelection {
                employee_id: request.employee_id.clone(),
                month: request.month.to_string(),
            }
        })?;

    let employee = sources
        .get_employee(&request.employee_id)
        .ok_or_else(|| EngineError::EmployeeNotFound {
            employee_id: request.employee_id.clone(),
        })?;

    let mut steps: Vec<AuditStep> = Vec::new();
    let mut warnings: Vec<AuditWarning> = Vec::new();

    let day_rate = employee.day_rate();
    let present = Decimal::from(tally.present_days);
    let overtime = request.overtime_hours;

    steps.push(AuditStep {
        step_number: 1,
        rule_id: "day_rate".to_string(),
        rule_name: "Day Rate".to_string(),
        input: serde_json::json!({
            "basic_salary": employee.basic_salary.normalize().to_string(),
            "full_month_days": FULL_MONTH_DAYS
        }),
        output: serde_json::json!({
            "day_rate": day_rate.normalize().to_string()
        }),
        reasoning: format!(
            "${} / {} days = ${} per day",
            employee.basic_salary.normalize(),
            FULL_MONTH_DAYS,
            day_rate.normalize()
        ),
    });

    let full_month = tally.is_full_month();
    steps.push(AuditStep {
        step_number: 2,
        rule_id: "attendance".to_string(),
        rule_name: "Attendance".to_string(),
        input: serde_json::json!({
            "month": request.month.label(),
            "present_days": tally.present_days
        }),
        output: serde_json::json!({
            "full_month": full_month
        }),
        reasoning: if full_month {
            format!("{} days present - full month", tally.present_days)
        } else {
            format!(
                "{} of {} days present - checking leave",
                tally.present_days, FULL_MONTH_DAYS
            )
        },
    });

    let (basis, amount) = if full_month {
        (SalaryBasis::FullAttendance, pay_for(day_rate, present, overtime)?)
    } else {
        let leave_records = sources.get_leave_records(&request.employee_id);

        if leave_records.is_empty() {
            (SalaryBasis::NoLeaveRecords, pay_for(day_rate, present, overtime)?)
        } else {
            let context = MonthContext {
                month: request.month,
                present_days: tally.present_days,
                overtime_units: overtime,
                day_rate,
            };

            let mut selected: Option<LeaveCreditResult> = None;
            let mut matches = 0usize;
            let mut evaluated = 0usize;

            for leave in &leave_records {
                let Some(allowed_days) = sources.get_allowance(&leave.leave_type) else {
                    warn!(
                        calculation_id = %calculation_id,
                        employee_id = %request.employee_id,
                        leave_type = %leave.leave_type,
                        leaving_date = %leave.leaving_date,
                        "Skipping leave record with unknown leave type"
                    );
                    warnings.push(AuditWarning {
                        code: WARNING_UNKNOWN_LEAVE_TYPE.to_string(),
                        message: format!(
                            "{} leave on {} has no configured allowance and was skipped",
                            leave.leave_type, leave.leaving_date
                        ),
                        severity: "medium".to_string(),
                    });
                    continue;
                };

                evaluated += 1;
                let result =
                    evaluate_leave(leave, allowed_days, &context, steps.len() as u32 + 1)?;
                steps.push(result.audit_step.clone());

                if result.basis == SalaryBasis::LeaveExceedsAllowance {
                    warnings.push(AuditWarning {
                        code: WARNING_OVERTIME_REPLACED.to_string(),
                        message: format!(
                            "{} leave of {} days exceeds its allowance; {} present days \
                             were paid in place of {} overtime units",
                            leave.leave_type,
                            leave.days_taken,
                            tally.present_days,
                            overtime.normalize()
                        ),
                        severity: "medium".to_string(),
                    });
                }

                if result.matches_month() {
                    matches += 1;
                    selected = Some(result);
                }
            }

            if matches > 1 {
                warnings.push(AuditWarning {
                    code: WARNING_MULTIPLE_LEAVE_MATCHES.to_string(),
                    message: format!(
                        "{} leave records fall in {}; the last one decided the salary",
                        matches, request.month
                    ),
                    severity: "low".to_string(),
                });
            }

            match selected {
                Some(result) => (result.basis, result.amount),
                None if evaluated == 0 => (
                    SalaryBasis::NoLeaveRecords,
                    pay_for(day_rate, present, overtime)?,
                ),
                None => (
                    SalaryBasis::LeaveOutsideMonth,
                    pay_for(day_rate, present, overtime)?,
                ),
            }
        }
    };

    let salary_amount = round_salary(amount);
    steps.push(AuditStep {
        step_number: steps.len() as u32 + 1,
        rule_id: "rounding".to_string(),
        rule_name: "Rounding".to_string(),
        input: serde_json::json!({
            "basis": basis.as_str(),
            "amount": amount.normalize().to_string()
        }),
        output: serde_json::json!({
            "salary_amount": salary_amount.normalize().to_string()
        }),
        reasoning: format!(
            "${} rounded to ${}",
            amount.normalize(),
            salary_amount.normalize()
        ),
    });

    let record = SalaryRecord {
        employee_id: request.employee_id.clone(),
        salary_type: request.salary_type.clone(),
        name: request.name.clone(),
        month: request.month,
        salary_amount,
    };

    let duration = start_time.elapsed();
    info!(
        calculation_id = %calculation_id,
        employee_id = %record.employee_id,
        month = %record.month,
        basis = basis.as_str(),
        salary = %record.salary_amount,
        duration_us = duration.as_micros(),
        "Salary calculated"
    );

    Ok(SalaryCalculation {
        calculation_id,
        timestamp: Utc::now(),
        engine_version: env!("CARGO_PKG_VERSION").to_string(),
        basis,
        record,
        audit_trace: AuditTrace {
            steps,
            warnings,
            duration_us: duration.as_micros() as u64,
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AttendanceTally, Employee, LeaveRecord, LeaveTypeAllowance, PayMonth};
    use crate::store::PayrollSnapshot;
    use chrono::NaiveDate;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn month(label: &str) -> PayMonth {
        label.parse().unwrap()
    }

    fn create_snapshot(present_days: u32) -> PayrollSnapshot {
        PayrollSnapshot::new()
            .with_employees(vec![Employee {
                id: "1".to_string(),
                basic_salary: dec("25000"),
            }])
            .with_attendance(vec![AttendanceTally {
                employee_id: "1".to_string(),
                month: month("Mar"),
                present_days,
            }])
            .with_allowances(vec![
                LeaveTypeAllowance {
                    leave_type: "casual".to_string(),
                    allowed_days: 5,
                },
                LeaveTypeAllowance {
                    leave_type: "medical".to_string(),
                    allowed_days: 2,
                },
            ])
    }

    fn create_leave(leave_type: &str, days_taken: u32, month: u32) -> LeaveRecord {
        LeaveRecord {
            employee_id: "1".to_string(),
            leave_type: leave_type.to_string(),
            days_taken,
            leaving_date: NaiveDate::from_ymd_opt(2024, month, 11).unwrap(),
        }
    }

    fn create_request(overtime: &str) -> SalaryRequest {
        SalaryRequest {
            employee_id: "1".to_string(),
            month: month("Mar"),
            overtime_hours: dec(overtime),
            salary_type: "monthly".to_string(),
            name: "Nimal".to_string(),
        }
    }

    #[test]
    fn test_full_attendance_pays_month_plus_overtime() {
        let result = compute_salary(&create_request("3"), &create_snapshot(25)).unwrap();

        assert_eq!(result.basis, SalaryBasis::FullAttendance);
        assert_eq!(result.record.salary_amount, dec("28000"));
    }

    #[test]
    fn test_full_attendance_ignores_leave() {
        let snapshot = create_snapshot(25).with_leave_records(vec![create_leave("casual", 9, 3)]);
        let result = compute_salary(&create_request("0"), &snapshot).unwrap();

        assert_eq!(result.basis, SalaryBasis::FullAttendance);
        assert_eq!(result.record.salary_amount, dec("25000"));
        assert!(result.audit_trace.warnings.is_empty());
    }

    #[test]
    fn test_partial_attendance_without_leave() {
        let result = compute_salary(&create_request("1"), &create_snapshot(18)).unwrap();

        assert_eq!(result.basis, SalaryBasis::NoLeaveRecords);
        assert_eq!(result.record.salary_amount, dec("19000"));
    }

    #[test]
    fn test_leave_within_allowance_matches_worked_example() {
        let snapshot = create_snapshot(20).with_leave_records(vec![create_leave("casual", 3, 3)]);
        let result = compute_salary(&create_request("2"), &snapshot).unwrap();

        assert_eq!(result.basis, SalaryBasis::LeaveWithinAllowance);
        assert_eq!(result.record.salary_amount, dec("25000"));
    }

    #[test]
    fn test_leave_over_allowance_pays_present_days_instead_of_overtime() {
        let snapshot = create_snapshot(20).with_leave_records(vec![create_leave("medical", 4, 3)]);
        let result = compute_salary(&create_request("2"), &snapshot).unwrap();

        assert_eq!(result.basis, SalaryBasis::LeaveExceedsAllowance);
        // (20 + 2) days + 20 extra units
        assert_eq!(result.record.salary_amount, dec("42000"));
        assert!(result.audit_trace.has_warning(WARNING_OVERTIME_REPLACED));
    }

    #[test]
    fn test_leave_in_other_month_gives_no_credit() {
        let snapshot = create_snapshot(20).with_leave_records(vec![create_leave("casual", 3, 2)]);
        let result = compute_salary(&create_request("2"), &snapshot).unwrap();

        assert_eq!(result.basis, SalaryBasis::LeaveOutsideMonth);
        assert_eq!(result.record.salary_amount, dec("22000"));
    }

    #[test]
    fn test_last_matching_leave_wins() {
        let snapshot = create_snapshot(20).with_leave_records(vec![
            create_leave("casual", 3, 3),
            create_leave("casual", 1, 3),
            create_leave("casual", 4, 6),
        ]);
        let result = compute_salary(&create_request("0"), &snapshot).unwrap();

        assert_eq!(result.basis, SalaryBasis::LeaveWithinAllowance);
        assert_eq!(result.record.salary_amount, dec("21000"));
        assert!(result.audit_trace.has_warning(WARNING_MULTIPLE_LEAVE_MATCHES));
    }

    #[test]
    fn test_unknown_leave_type_in_other_month_is_skipped() {
        let snapshot = create_snapshot(20).with_leave_records(vec![
            LeaveRecord {
                employee_id: "1".to_string(),
                leave_type: "legacy".to_string(),
                days_taken: 4,
                leaving_date: NaiveDate::from_ymd_opt(2022, 7, 1).unwrap(),
            },
            create_leave("casual", 3, 3),
        ]);
        let result = compute_salary(&create_request("2"), &snapshot).unwrap();

        assert_eq!(result.basis, SalaryBasis::LeaveWithinAllowance);
        assert_eq!(result.record.salary_amount, dec("25000"));
        assert!(result.audit_trace.has_warning(WARNING_UNKNOWN_LEAVE_TYPE));
    }

    #[test]
    fn test_only_unknown_leave_types_pay_as_no_leave() {
        let snapshot =
            create_snapshot(20).with_leave_records(vec![create_leave("sabbatical", 3, 3)]);
        let result = compute_salary(&create_request("1"), &snapshot).unwrap();

        assert_eq!(result.basis, SalaryBasis::NoLeaveRecords);
        assert_eq!(result.record.salary_amount, dec("21000"));
        assert!(result.audit_trace.has_warning(WARNING_UNKNOWN_LEAVE_TYPE));
    }

    #[test]
    fn test_overflowing_salary_is_invalid_input() {
        let snapshot = PayrollSnapshot::new()
            .with_employees(vec![Employee {
                id: "1".to_string(),
                basic_salary: Decimal::MAX,
            }])
            .with_attendance(vec![AttendanceTally {
                employee_id: "1".to_string(),
                month: month("Mar"),
                present_days: 25,
            }]);
        let err = compute_salary(&create_request("1000"), &snapshot).unwrap_err();

        assert!(matches!(err, EngineError::InvalidInput { .. }));
    }

    #[test]
    fn test_missing_tally_is_invalid_month() {
        let mut request = create_request("0");
        request.month = month("Apr");
        let err = compute_salary(&request, &create_snapshot(20)).unwrap_err();

        assert!(matches!(err, EngineError::InvalidMonthSelection { .. }));
    }

    #[test]
    fn test_missing_employee_fails() {
        let snapshot = PayrollSnapshot::new().with_attendance(vec![AttendanceTally {
            employee_id: "1".to_string(),
            month: month("Mar"),
            present_days: 25,
        }]);
        let err = compute_salary(&create_request("0"), &snapshot).unwrap_err();

        assert!(matches!(err, EngineError::EmployeeNotFound { .. }));
    }

    #[test]
    fn test_negative_overtime_is_rejected() {
        let err = compute_salary(&create_request("-1"), &create_snapshot(25)).unwrap_err();

        assert!(matches!(
            err,
            EngineError::InvalidInput { ref field, .. } if field == "overtime_hours"
        ));
    }

    #[test]
    fn test_salary_is_rounded_half_up() {
        let snapshot = PayrollSnapshot::new()
            .with_employees(vec![Employee {
                id: "1".to_string(),
                basic_salary: dec("1012.5"),
            }])
            .with_attendance(vec![AttendanceTally {
                employee_id: "1".to_string(),
                month: month("Mar"),
                present_days: 25,
            }]);
        // day rate 40.5, 25 days = 1012.5, plus 0 overtime
        let result = compute_salary(&create_request("0"), &snapshot).unwrap();

        assert_eq!(result.record.salary_amount, dec("1013"));
    }

    #[test]
    fn test_record_carries_request_labels() {
        let result = compute_salary(&create_request("0"), &create_snapshot(25)).unwrap();

        assert_eq!(result.record.employee_id, "1");
        assert_eq!(result.record.salary_type, "monthly");
        assert_eq!(result.record.name, "Nimal");
        assert_eq!(result.record.month, month("Mar"));
    }

    #[test]
    fn test_audit_trace_steps_are_sequential() {
        let snapshot = create_snapshot(20).with_leave_records(vec![
            create_leave("casual", 3, 3),
            create_leave("medical", 1, 1),
        ]);
        let result = compute_salary(&create_request("0"), &snapshot).unwrap();
        let steps = &result.audit_trace.steps;

        let rule_ids: Vec<_> = steps.iter().map(|s| s.rule_id.as_str()).collect();
        assert_eq!(
            rule_ids,
            vec!["day_rate", "attendance", "leave_credit", "leave_credit", "rounding"]
        );
        for (index, step) in steps.iter().enumerate() {
            assert_eq!(step.step_number, index as u32 + 1);
        }
    }
}
