use super::employee::{Employee, Salary};
use crate::error::Result;
use std::sync::Arc;

/// Source of the employees to be paid.
#[cfg_attr(test, mockall::automock)]
pub trait EmployeeDirectory: Send + Sync {
    /// Returns every employee, in the order they should be paid.
    fn get_all_employees(&self) -> Result<Vec<Employee>>;
}

/// Executes a bank payment for one employee.
#[cfg_attr(test, mockall::automock)]
pub trait PaymentService: Send + Sync {
    fn make_payment(&self, employee_id: &str, amount: Salary) -> Result<()>;
}

pub type EmployeeDirectoryRef = Arc<dyn EmployeeDirectory>;
pub type PaymentServiceRef = Arc<dyn PaymentService>;
