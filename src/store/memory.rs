//! In-memory implementations of the data access traits.

use std::collections::HashMap;

use uuid::Uuid;

use crate::calculation::tally_attendance;
use crate::error::{EngineError, EngineResult};
use crate::models::{
    AttendanceEntry, AttendanceTally, Employee, LeaveRecord, LeaveTypeAllowance, PayMonth,
    SalaryRecord,
};

use super::{AttendanceSource, EmployeeDirectory, LeavePolicy, LeaveSource, SalaryStore};

/// A point-in-time view of the payroll inputs, keyed for direct lookup.
///
/// Leave records keep the order they were added in, which decides which
/// record wins when several fall in the month being paid.
#[derive(Debug, Clone, Default)]
pub struct PayrollSnapshot {
    employees: HashMap<String, Employee>,
    tallies: HashMap<(String, PayMonth), AttendanceTally>,
    leave_records: HashMap<String, Vec<LeaveRecord>>,
    allowances: HashMap<String, u32>,
}

impl PayrollSnapshot {
    /// Creates an empty snapshot.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds employees, replacing any with the same id.
    pub fn with_employees(mut self, employees: impl IntoIterator<Item = Employee>) -> Self {
        for employee in employees {
            self.employees.insert(employee.id.clone(), employee);
        }
        self
    }

    /// Adds precomputed attendance tallies, replacing any for the same employee and month.
    pub fn with_attendance(mut self, tallies: impl IntoIterator<Item = AttendanceTally>) -> Self {
        for tally in tallies {
            self.tallies
                .insert((tally.employee_id.clone(), tally.month), tally);
        }
        self
    }

    /// Tallies raw attendance marks for a month and adds the results.
    pub fn with_attendance_entries(self, entries: &[AttendanceEntry], month: PayMonth) -> Self {
        self.with_attendance(tally_attendance(entries, month))
    }

    /// Appends leave records to each employee's list.
    pub fn with_leave_records(mut self, records: impl IntoIterator<Item = LeaveRecord>) -> Self {
        for record in records {
            self.leave_records
                .entry(record.employee_id.clone())
                .or_default()
                .push(record);
        }
        self
    }

    /// Adds leave-type allowances, replacing any for the same type.
    pub fn with_allowances(
        mut self,
        allowances: impl IntoIterator<Item = LeaveTypeAllowance>,
    ) -> Self {
        for allowance in allowances {
            self.allowances
                .insert(allowance.leave_type, allowance.allowed_days);
        }
        self
    }
}

impl EmployeeDirectory for PayrollSnapshot {
    fn get_employee(&self, employee_id: &str) -> Option<Employee> {
        self.employees.get(employee_id).cloned()
    }
}

impl AttendanceSource for PayrollSnapshot {
    fn get_attendance_tally(&self, employee_id: &str, month: PayMonth) -> Option<AttendanceTally> {
        self.tallies.get(&(employee_id.to_string(), month)).cloned()
    }
}

impl LeaveSource for PayrollSnapshot {
    fn get_leave_records(&self, employee_id: &str) -> Vec<LeaveRecord> {
        self.leave_records
            .get(employee_id)
            .cloned()
            .unwrap_or_default()
    }
}

impl LeavePolicy for PayrollSnapshot {
    fn get_allowance(&self, leave_type: &str) -> Option<u32> {
        self.allowances.get(leave_type).copied()
    }
}

/// An insertion-ordered salary record store.
#[derive(Debug, Clone, Default)]
pub struct InMemorySalaryStore {
    records: Vec<(Uuid, SalaryRecord)>,
}

impl InMemorySalaryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of stored records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true if nothing is stored.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl SalaryStore for InMemorySalaryStore {
    fn save(&mut self, record: SalaryRecord) -> EngineResult<Uuid> {
        let id = Uuid::new_v4();
        self.records.push((id, record));
        Ok(id)
    }

    fn find_by_id(&self, id: Uuid) -> EngineResult<Option<SalaryRecord>> {
        Ok(self
            .records
            .iter()
            .find(|(record_id, _)| *record_id == id)
            .map(|(_, record)| record.clone()))
    }

    fn delete(&mut self, id: Uuid) -> EngineResult<()> {
        let position = self
            .records
            .iter()
            .position(|(record_id, _)| *record_id == id)
            .ok_or(EngineError::NotFound { id })?;
        self.records.remove(position);
        Ok(())
    }

    fn list(&self) -> EngineResult<Vec<(Uuid, SalaryRecord)>> {
        Ok(self.records.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rust_decimal::Decimal;

    fn month(label: &str) -> PayMonth {
        label.parse().unwrap()
    }

    fn create_record(employee_id: &str, amount: i64) -> SalaryRecord {
        SalaryRecord {
            employee_id: employee_id.to_string(),
            salary_type: "monthly".to_string(),
            name: "Test".to_string(),
            month: month("Jan"),
            salary_amount: Decimal::from(amount),
        }
    }

    fn create_leave(leave_type: &str, day: u32) -> LeaveRecord {
        LeaveRecord {
            employee_id: "1".to_string(),
            leave_type: leave_type.to_string(),
            days_taken: 1,
            leaving_date: NaiveDate::from_ymd_opt(2024, 1, day).unwrap(),
        }
    }

    #[test]
    fn test_snapshot_tally_lookup_is_keyed_by_month() {
        let snapshot = PayrollSnapshot::new().with_attendance(vec![AttendanceTally {
            employee_id: "1".to_string(),
            month: month("Jan"),
            present_days: 22,
        }]);

        assert_eq!(
            snapshot
                .get_attendance_tally("1", month("Jan"))
                .unwrap()
                .present_days,
            22
        );
        assert!(snapshot.get_attendance_tally("1", month("Feb")).is_none());
        assert!(snapshot.get_attendance_tally("2", month("Jan")).is_none());
    }

    #[test]
    fn test_snapshot_tallies_attendance_entries() {
        let entries: Vec<_> = (1..=4)
            .map(|day| AttendanceEntry {
                employee_id: "1".to_string(),
                date: NaiveDate::from_ymd_opt(2024, 6, day).unwrap(),
            })
            .collect();
        let snapshot = PayrollSnapshot::new().with_attendance_entries(&entries, month("Jun"));

        assert_eq!(
            snapshot
                .get_attendance_tally("1", month("Jun"))
                .unwrap()
                .present_days,
            4
        );
    }

    #[test]
    fn test_snapshot_keeps_leave_order() {
        let snapshot = PayrollSnapshot::new()
            .with_leave_records(vec![create_leave("casual", 3), create_leave("medical", 9)])
            .with_leave_records(vec![create_leave("annual", 20)]);

        let types: Vec<_> = snapshot
            .get_leave_records("1")
            .into_iter()
            .map(|r| r.leave_type)
            .collect();
        assert_eq!(types, vec!["casual", "medical", "annual"]);
        assert!(snapshot.get_leave_records("2").is_empty());
    }

    #[test]
    fn test_snapshot_allowance_lookup() {
        let snapshot = PayrollSnapshot::new().with_allowances(vec![LeaveTypeAllowance {
            leave_type: "casual".to_string(),
            allowed_days: 7,
        }]);

        assert_eq!(snapshot.get_allowance("casual"), Some(7));
        assert_eq!(snapshot.get_allowance("sabbatical"), None);
    }

    #[test]
    fn test_store_save_then_find() {
        let mut store = InMemorySalaryStore::new();
        let id = store.save(create_record("1", 1000)).unwrap();

        assert_eq!(store.find_by_id(id).unwrap(), Some(create_record("1", 1000)));
        assert_eq!(store.find_by_id(Uuid::new_v4()).unwrap(), None);
    }

    #[test]
    fn test_store_save_appends() {
        let mut store = InMemorySalaryStore::new();
        let first = store.save(create_record("1", 1000)).unwrap();
        let second = store.save(create_record("1", 1000)).unwrap();

        assert_ne!(first, second);
        assert_eq!(store.len(), 2);
        let ids: Vec<_> = store.list().unwrap().into_iter().map(|(id, _)| id).collect();
        assert_eq!(ids, vec![first, second]);
    }

    #[test]
    fn test_store_delete_removes_record() {
        let mut store = InMemorySalaryStore::new();
        let id = store.save(create_record("1", 1000)).unwrap();

        store.delete(id).unwrap();
        assert!(store.is_empty());
    }

    #[test]
    fn test_store_delete_missing_is_not_found() {
        let mut store = InMemorySalaryStore::new();
        let missing = Uuid::new_v4();

        let err = store.delete(missing).unwrap_err();
        assert!(matches!(err, EngineError::NotFound { id } if id == missing));
    }
}
