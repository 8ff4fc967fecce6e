use crate::domain::ports::{EmployeeDirectoryRef, PaymentServiceRef};
use crate::error::Result;
use tracing::{debug, info};

/// Drives the monthly payment run.
///
/// `PayRoll` holds shared handles to its collaborators and no other state.
/// The collaborators may be shared with other consumers; the processor never
/// replaces them.
pub struct PayRoll {
    directory: EmployeeDirectoryRef,
    payments: PaymentServiceRef,
}

impl PayRoll {
    /// Creates a new `PayRoll`.
    ///
    /// # Arguments
    ///
    /// * `directory` - Where the employees to be paid come from.
    /// * `payments` - The service each payment is submitted to.
    pub fn new(directory: EmployeeDirectoryRef, payments: PaymentServiceRef) -> Self {
        Self {
            directory,
            payments,
        }
    }

    /// Pays every employee once and returns how many payments were made.
    ///
    /// The directory is queried exactly once, then one payment per employee
    /// is submitted in the order the directory returned them. The first
    /// collaborator error is returned as is; payments submitted before it are
    /// not rolled back and the remaining employees are not paid.
    pub fn run_monthly_payment(&self) -> Result<usize> {
        let employees = self.directory.get_all_employees()?;

        for employee in &employees {
            self.payments.make_payment(employee.id(), employee.salary())?;
            debug!(
                employee_id = employee.id(),
                amount = %employee.salary(),
                "payment submitted"
            );
        }

        info!(payments = employees.len(), "monthly payment run complete");
        Ok(employees.len())
    }
}
