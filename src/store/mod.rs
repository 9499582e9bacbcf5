//! Data access seams for the Payroll Engine.
//!
//! The calculator reads employees, attendance tallies, leave records and the
//! leave policy through the read traits below, and the service writes salary
//! records through [`SalaryStore`]. Database-backed implementations live with
//! the caller; this module ships in-memory ones.
//!
//! # Example
//!
//! ```
//! use payroll_engine::store::{EmployeeDirectory, PayrollSnapshot};
//! use payroll_engine::models::Employee;
//! use rust_decimal::Decimal;
//!
//! let snapshot = PayrollSnapshot::new().with_employees(vec![Employee {
//!     id: "1".to_string(),
//!     basic_salary: Decimal::from(25000),
//! }]);
//! assert!(snapshot.get_employee("1").is_some());
//! ```

mod memory;

pub use memory::{InMemorySalaryStore, PayrollSnapshot};

use uuid::Uuid;

use crate::error::EngineResult;
use crate::models::{AttendanceTally, Employee, LeaveRecord, PayMonth, SalaryRecord};

/// Looks up employees by id.
pub trait EmployeeDirectory {
    /// Returns the employee, if known.
    fn get_employee(&self, employee_id: &str) -> Option<Employee>;
}

/// Provides present-day counts per employee and month.
pub trait AttendanceSource {
    /// Returns the tally for the employee and month, if any attendance exists.
    fn get_attendance_tally(&self, employee_id: &str, month: PayMonth) -> Option<AttendanceTally>;
}

/// Provides leave taken by employees.
pub trait LeaveSource {
    /// Returns all leave records for the employee in their stored order.
    fn get_leave_records(&self, employee_id: &str) -> Vec<LeaveRecord>;
}

/// Resolves leave types to their allowed number of days.
pub trait LeavePolicy {
    /// Returns the allowed days for the leave type, if configured.
    fn get_allowance(&self, leave_type: &str) -> Option<u32>;
}

/// Everything the salary calculator reads.
pub trait PayrollSources: EmployeeDirectory + AttendanceSource + LeaveSource + LeavePolicy {}

impl<T> PayrollSources for T where T: EmployeeDirectory + AttendanceSource + LeaveSource + LeavePolicy
{}

/// Persists salary records. Saving always appends a new record.
pub trait SalaryStore {
    /// Appends a record and returns its new id.
    fn save(&mut self, record: SalaryRecord) -> EngineResult<Uuid>;

    /// Returns the record with the given id, if present.
    fn find_by_id(&self, id: Uuid) -> EngineResult<Option<SalaryRecord>>;

    /// Removes the record with the given id.
    ///
    /// Fails with `NotFound` if no such record exists.
    fn delete(&mut self, id: Uuid) -> EngineResult<()>;

    /// Returns every stored record with its id, oldest first.
    fn list(&self) -> EngineResult<Vec<(Uuid, SalaryRecord)>>;
}
