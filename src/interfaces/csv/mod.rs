//! CSV adapters: employees in, payments out.

pub mod employee_reader;
pub mod payment_writer;
