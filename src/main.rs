use clap::Parser;
use miette::{IntoDiagnostic, Result};
use payroll::application::payroll::PayRoll;
use payroll::domain::ports::{EmployeeDirectoryRef, PaymentServiceRef};
use payroll::infrastructure::in_memory::{InMemoryEmployeeDirectory, RecordingPaymentService};
use payroll::interfaces::csv::employee_reader::EmployeeReader;
use payroll::interfaces::csv::payment_writer::PaymentWriter;
use payroll::logging;
use std::fs::File;
use std::io;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, warn};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Input employees CSV file (name,id,salary)
    input: PathBuf,

    /// Log every submitted payment
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init_cli_logger(cli.verbose);

    // Load employees, skipping rows that cannot be read
    let file = File::open(&cli.input).into_diagnostic()?;
    let reader = EmployeeReader::new(file);
    let directory: InMemoryEmployeeDirectory = reader
        .employees()
        .filter_map(|employee_result| match employee_result {
            Ok(employee) => Some(employee),
            Err(e) => {
                warn!("Error reading employee: {}", e);
                None
            }
        })
        .collect();

    info!(employees = directory.len(), "employees loaded");
    if directory.is_empty() {
        warn!("No employees to pay");
    }

    let bank = RecordingPaymentService::new();
    let directory: EmployeeDirectoryRef = Arc::new(directory);
    let payments: PaymentServiceRef = Arc::new(bank.clone());

    let payroll = PayRoll::new(directory, payments);
    payroll.run_monthly_payment().into_diagnostic()?;

    // Output the recorded payments
    let stdout = io::stdout();
    let mut writer = PaymentWriter::new(stdout.lock());
    writer.write_payments(&bank.payments()).into_diagnostic()?;

    Ok(())
}
