use super::employee::Salary;
use serde::Serialize;

/// A single payment as submitted to a payment service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Payment {
    pub employee_id: String,
    pub amount: Salary,
}

impl Payment {
    /// Creates the record of a payment of `amount` to `employee_id`.
    pub fn new(employee_id: impl Into<String>, amount: Salary) -> Self {
        Self {
            employee_id: employee_id.into(),
            amount,
        }
    }
}
