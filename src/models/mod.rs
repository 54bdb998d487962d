//! Core data models for the Tip Pool Engine.
//!
//! This module contains the inputs to a weekly calculation, its result, and
//! the snapshot shape callers persist.

mod calculation_result;
mod employee;
mod hours;
mod payroll_week;

pub use calculation_result::{
    AuditStep, AuditTrace, AuditWarning, EmployeePayrollCalc, PayrollCalculation,
};
pub use employee::Employee;
pub(crate) use employee::{default_active, default_tip_rate_multiplier};
pub use hours::HoursInput;
pub use payroll_week::{PayrollStatus, PayrollWeek, week_bounds};
