//! Salary service.
//!
//! Runs salary calculations against the read sources and keeps the results
//! in a [`SalaryStore`].

use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::compute_salary;
use crate::error::{EngineError, EngineResult};
use crate::models::{SalaryCalculation, SalaryRecord, SalaryRequest};
use crate::store::{PayrollSources, SalaryStore};

/// Calculates and stores salary records.
///
/// # Example
///
/// ```
/// use payroll_engine::models::{AttendanceTally, Employee, SalaryRequest};
/// use payroll_engine::service::SalaryService;
/// use payroll_engine::store::{InMemorySalaryStore, PayrollSnapshot};
/// use rust_decimal::Decimal;
///
/// let snapshot = PayrollSnapshot::new()
///     .with_employees(vec![Employee { id: "1".into(), basic_salary: Decimal::from(25000) }])
///     .with_attendance(vec![AttendanceTally {
///         employee_id: "1".into(),
///         month: "Jan".parse().unwrap(),
///         present_days: 20,
///     }]);
///
/// let mut service = SalaryService::new(InMemorySalaryStore::new());
/// let request = SalaryRequest {
///     employee_id: "1".into(),
///     month: "Jan".parse().unwrap(),
///     overtime_hours: Decimal::ZERO,
///     salary_type: "monthly".into(),
///     name: "Nimal".into(),
/// };
///
/// let (id, _) = service.calculate_and_save(&request, &snapshot).unwrap();
/// service.delete_salary_record(id).unwrap();
/// assert!(service.list_salary_records().unwrap().is_empty());
/// ```
#[derive(Debug, Clone, Default)]
pub struct SalaryService<S> {
    store: S,
}

impl<S: SalaryStore> SalaryService<S> {
    /// Creates a service over the given store.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Returns the underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Computes the salary and appends the resulting record to the store.
    ///
    /// Nothing is stored if the calculation fails.
    pub fn calculate_and_save<D>(
        &mut self,
        request: &SalaryRequest,
        sources: &D,
    ) -> EngineResult<(Uuid, SalaryCalculation)>
    where
        D: PayrollSources + ?Sized,
    {
        let calculation = compute_salary(request, sources).inspect_err(|err| {
            warn!(
                employee_id = %request.employee_id,
                month = %request.month,
                error = %err,
                "Salary calculation failed"
            );
        })?;

        let id = self.store.save(calculation.record.clone())?;
        info!(
            record_id = %id,
            calculation_id = %calculation.calculation_id,
            employee_id = %calculation.record.employee_id,
            salary = %calculation.record.salary_amount,
            "Salary record saved"
        );

        Ok((id, calculation))
    }

    /// Deletes a salary record.
    ///
    /// Fails with `NotFound` if the record does not exist.
    pub fn delete_salary_record(&mut self, id: Uuid) -> EngineResult<()> {
        if self.store.find_by_id(id)?.is_none() {
            warn!(record_id = %id, "Salary record to delete not found");
            return Err(EngineError::NotFound { id });
        }

        self.store.delete(id)?;
        info!(record_id = %id, "Salary record deleted");
        Ok(())
    }

    /// Returns a salary record.
    ///
    /// Fails with `NotFound` if the record does not exist.
    pub fn find_salary_record(&self, id: Uuid) -> EngineResult<SalaryRecord> {
        self.store
            .find_by_id(id)?
            .ok_or(EngineError::NotFound { id })
    }

    /// Returns every salary record with its id, oldest first.
    pub fn list_salary_records(&self) -> EngineResult<Vec<(Uuid, SalaryRecord)>> {
        self.store.list()
    }
}
