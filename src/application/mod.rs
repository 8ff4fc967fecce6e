//! Application layer containing the payroll orchestration.
//!
//! `PayRoll` is the only component with behavior of its own: it drives one
//! monthly payment run against the collaborators injected into it.

pub mod payroll;
