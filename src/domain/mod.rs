//! Domain layer: the employee and payment value types and the two
//! collaborator ports the payroll run depends on.

pub mod employee;
pub mod payment;
pub mod ports;
