use payroll::domain::employee::{Employee, Salary};
use payroll::domain::ports::{EmployeeDirectory, PaymentService};
use payroll::error::{PayrollError, Result};
use std::fs::File;
use std::io::Error;
use std::path::Path;
use std::sync::{Arc, Mutex};

/// One observed collaborator call.
#[allow(dead_code)]
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Fetch,
    Pay(String, Salary),
}

/// Ordered log shared by every fake created from it.
#[allow(dead_code)]
#[derive(Debug, Default, Clone)]
pub struct CallLog(Arc<Mutex<Vec<Call>>>);

#[allow(dead_code)]
impl CallLog {
    pub fn calls(&self) -> Vec<Call> {
        self.0.lock().unwrap().clone()
    }

    pub fn fetches(&self) -> usize {
        self.calls().iter().filter(|c| **c == Call::Fetch).count()
    }

    fn push(&self, call: Call) {
        self.0.lock().unwrap().push(call);
    }
}

#[allow(dead_code)]
pub struct LoggingDirectory {
    pub employees: Vec<Employee>,
    pub log: CallLog,
}

impl EmployeeDirectory for LoggingDirectory {
    fn get_all_employees(&self) -> Result<Vec<Employee>> {
        self.log.push(Call::Fetch);
        Ok(self.employees.clone())
    }
}

/// Records payments and rejects the one addressed to `reject_id`, if any.
#[allow(dead_code)]
pub struct LoggingBank {
    pub log: CallLog,
    pub reject_id: Option<String>,
}

impl PaymentService for LoggingBank {
    fn make_payment(&self, employee_id: &str, amount: Salary) -> Result<()> {
        if self.reject_id.as_deref() == Some(employee_id) {
            return Err(PayrollError::Payment {
                employee_id: employee_id.to_string(),
                reason: "rejected by bank".to_string(),
            });
        }
        self.log.push(Call::Pay(employee_id.to_string(), amount));
        Ok(())
    }
}

#[allow(dead_code)]
pub fn employee(n: usize) -> Employee {
    Employee::new(
        format!("Test Employee{n}"),
        format!("ID{n}"),
        Salary::new(1000 * n as u64),
    )
}

#[allow(dead_code)]
pub fn generate_csv(path: &Path, rows: usize) -> std::result::Result<(), Error> {
    let file = File::create(path)?;
    let mut wtr = csv::WriterBuilder::new().from_writer(file);

    wtr.write_record(["name", "id", "salary"])?;

    for i in 1..=rows {
        wtr.write_record([
            format!("Test Employee{i}"),
            format!("ID{i}"),
            (1000 * i).to_string(),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}
