//! Core data models for the Payroll Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod attendance;
mod calculation_result;
mod employee;
mod leave;
mod pay_month;
mod salary_request;

pub use attendance::{AttendanceEntry, AttendanceTally};
pub use calculation_result::{
    AuditStep, AuditTrace, AuditWarning, SalaryBasis, SalaryCalculation, SalaryRecord,
};
pub use employee::Employee;
pub use leave::{LeaveRecord, LeaveTypeAllowance};
pub use pay_month::PayMonth;
pub use salary_request::SalaryRequest;
