use serde::{Deserialize, Serialize};
use std::fmt;

/// A salary amount in the smallest currency unit.
///
/// Backed by an unsigned integer so a negative salary cannot be represented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Salary(u64);

impl Salary {
    /// Creates a salary of `amount` currency units.
    pub fn new(amount: u64) -> Self {
        Self(amount)
    }
}

impl fmt::Display for Salary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An employee on the payroll.
///
/// The `id` is the key payments are routed by. It is expected to be unique,
/// but nothing here enforces that.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Employee {
    name: String,
    id: String,
    salary: Salary,
}

impl Employee {
    /// Creates a new employee record.
    pub fn new(name: impl Into<String>, id: impl Into<String>, salary: Salary) -> Self {
        Self {
            name: name.into(),
            id: id.into(),
            salary,
        }
    }

    /// The employee's display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The identifier payments are routed by.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// The amount paid each month.
    pub fn salary(&self) -> Salary {
        self.salary
    }
}
