use thiserror::Error;

#[derive(Error, Debug)]
pub enum PayrollError {
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Employee directory error: {0}")]
    Directory(String),
    #[error("Payment to {employee_id} failed: {reason}")]
    Payment { employee_id: String, reason: String },
}

pub type Result<T> = std::result::Result<T, PayrollError>;
