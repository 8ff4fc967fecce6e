use crate::domain::employee::{Employee, Salary};
use crate::domain::payment::Payment;
use crate::domain::ports::{EmployeeDirectory, PaymentService};
use crate::error::Result;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// An employee directory backed by a vector.
///
/// Every fetch returns a fresh copy of the employees in insertion order.
#[derive(Debug, Default, Clone)]
pub struct InMemoryEmployeeDirectory {
    employees: Vec<Employee>,
}

impl InMemoryEmployeeDirectory {
    /// Creates a new, empty directory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an employee after the ones already held.
    pub fn add(&mut self, employee: Employee) {
        self.employees.push(employee);
    }

    /// Returns how many employees the directory holds.
    pub fn len(&self) -> usize {
        self.employees.len()
    }

    /// Returns `true` if the directory holds no employees.
    pub fn is_empty(&self) -> bool {
        self.employees.is_empty()
    }
}

impl From<Vec<Employee>> for InMemoryEmployeeDirectory {
    fn from(employees: Vec<Employee>) -> Self {
        Self { employees }
    }
}

impl FromIterator<Employee> for InMemoryEmployeeDirectory {
    fn from_iter<I: IntoIterator<Item = Employee>>(iter: I) -> Self {
        Self {
            employees: iter.into_iter().collect(),
        }
    }
}

impl EmployeeDirectory for InMemoryEmployeeDirectory {
    fn get_all_employees(&self) -> Result<Vec<Employee>> {
        Ok(self.employees.clone())
    }
}

/// A payment service that records every payment instead of executing it.
///
/// Clones share the same ledger, so a test can keep one handle and hand
/// another to the code under test.
#[derive(Debug, Default, Clone)]
pub struct RecordingPaymentService {
    ledger: Arc<Mutex<Vec<Payment>>>,
}

impl RecordingPaymentService {
    /// Creates a new service with an empty ledger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a snapshot of the payments recorded so far, oldest first.
    pub fn payments(&self) -> Vec<Payment> {
        self.ledger().clone()
    }

    fn ledger(&self) -> MutexGuard<'_, Vec<Payment>> {
        // A panic while pushing cannot leave the vector half-written.
        self.ledger.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl PaymentService for RecordingPaymentService {
    fn make_payment(&self, employee_id: &str, amount: Salary) -> Result<()> {
        self.ledger().push(Payment::new(employee_id, amount));
        Ok(())
    }
}
