use crate::domain::employee::Employee;
use crate::error::{PayrollError, Result};
use std::io::Read;

/// Reads employees from a CSV source with a `name,id,salary` header.
///
/// This reader wraps `csv::Reader` and provides an iterator over `Result<Employee>`.
/// Surrounding whitespace in every field is trimmed.
pub struct EmployeeReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> EmployeeReader<R> {
    /// Creates a new `EmployeeReader` from any `Read` source (e.g., File, Stdin).
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(source);
        Self { reader }
    }

    /// Returns an iterator that lazily reads and deserializes employees.
    ///
    /// A malformed row yields an error for that row only; later rows are
    /// still read.
    pub fn employees(self) -> impl Iterator<Item = Result<Employee>> {
        self.reader
            .into_deserialize()
            .map(|result| result.map_err(PayrollError::from))
    }
}
