//! Calculation result models for the Tip Pool Engine.
//!
//! This module contains the [`PayrollCalculation`] aggregate, the per-employee
//! [`EmployeePayrollCalc`] breakdown and the audit trace recording each
//! pool-level rule the engine applied.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A single step in the audit trace recording a calculation decision.
///
/// Each step captures the input, output, and reasoning for a rule application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditStep {
    /// The sequential step number.
    pub step_number: u32,
    /// The unique identifier of the rule that was applied.
    pub rule_id: String,
    /// The human-readable name of the rule.
    pub rule_name: String,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of the decision.
    pub reasoning: String,
}

/// A warning generated during calculation.
///
/// Warnings flag inputs that produced a result the operator should look at.
/// They never stop the calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditWarning {
    /// A code identifying the type of warning.
    pub code: String,
    /// A human-readable description of the warning.
    pub message: String,
    /// The severity level (e.g., "low", "medium", "high").
    pub severity: String,
}

/// The audit trace for a calculation.
///
/// Contains no timestamps or timings, so identical inputs always produce an
/// identical trace.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditTrace {
    /// The sequence of calculation steps.
    pub steps: Vec<AuditStep>,
    /// Any warnings generated during calculation.
    pub warnings: Vec<AuditWarning>,
}

impl AuditTrace {
    /// Returns true if a warning with the given code was raised.
    pub fn has_warning(&self, code: &str) -> bool {
        self.warnings.iter().any(|w| w.code == code)
    }
}

/// Pay breakdown for one employee for one week.
///
/// The `gusto_*` fields mirror what an operator keys into the external
/// payroll system, which computes wages itself from hours × rate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeePayrollCalc {
    /// The employee's id.
    pub employee_id: String,
    /// The employee's display name.
    pub employee_name: String,
    /// The employee's role label.
    pub role: String,
    /// Bar hours worked.
    pub bar_hours: Decimal,
    /// Coffee counter hours worked.
    pub coffee_hours: Decimal,
    /// Wedding/event hours worked.
    pub wedding_hours: Decimal,
    /// Labor hours worked.
    pub labor_hours: Decimal,
    /// The employee's base hourly wage.
    pub hourly_rate: Decimal,
    /// The employee's tip rate multiplier.
    pub tip_rate_multiplier: Decimal,
    /// Whether the employee is the coffee worker.
    pub is_coffee_worker: bool,
    /// Whether the employee's pay is reported entirely as tips.
    pub gusto_tips_only: bool,
    /// Share of the bar tip pool.
    pub tip_share: Decimal,
    /// Hourly wages for bar or coffee hours.
    pub base_wages: Decimal,
    /// Wedding wages plus the equal wedding tip split.
    pub wedding_pay: Decimal,
    /// The coffee tip pool, paid to the coffee worker.
    pub coffee_pay: Decimal,
    /// Amount added to bring the coffee worker up to the hourly floor.
    pub top_up_amount: Decimal,
    /// Hours to enter into the external payroll system.
    pub gusto_hours_entry: Decimal,
    /// Rate to enter alongside `gusto_hours_entry`.
    pub gusto_rate: Decimal,
    /// Wages the external system will compute; kept for reference.
    pub gusto_wages_entry: Decimal,
    /// Tip dollars to enter into the external payroll system.
    pub gusto_tips_entry: Decimal,
    /// Total compensation for the week.
    pub total_pay: Decimal,
}

/// The complete result of a weekly tip pool calculation.
///
/// Tip inputs are echoed unchanged. Monetary aggregates are rounded to cents,
/// tip rates to four decimal places.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollCalculation {
    /// Point-of-sale tip total (includes coffee and wedding tips).
    pub toast_tips: Decimal,
    /// Coffee counter tip total.
    pub coffee_tips: Decimal,
    /// Wedding/event tip total.
    pub wedding_tips: Decimal,
    /// Sum of all three tip inputs.
    pub total_pool: Decimal,
    /// Bar-only tips: toast tips net of coffee and wedding tips.
    pub bar_tip_pool: Decimal,
    /// Total bar hours across bar workers.
    pub total_bar_hours: Decimal,
    /// Bar pool divided by all bar hours.
    pub initial_tip_rate: Decimal,
    /// Pool dollars paid to reduced-rate workers at the initial rate.
    ///
    /// Serialized as `josh_deduction`, the name downstream consumers read.
    #[serde(rename = "josh_deduction", alias = "reduced_rate_deduction")]
    pub reduced_rate_deduction: Decimal,
    /// Bar pool after removing the reduced-rate deduction.
    pub adjusted_pool: Decimal,
    /// Bar hours after removing reduced-rate workers' hours.
    pub adjusted_hours: Decimal,
    /// Adjusted pool divided by adjusted hours; paid to standard bar workers.
    pub final_tip_rate: Decimal,
    /// Number of hours records with wedding hours.
    pub wedding_worker_count: u32,
    /// Equal share of wedding tips per wedding worker.
    pub wedding_tip_per_worker: Decimal,
    /// Per-employee breakdown in input order.
    pub employees: Vec<EmployeePayrollCalc>,
    /// Record of the pool-level rules applied.
    pub audit_trace: AuditTrace,
}

impl PayrollCalculation {
    /// Sum of `total_pay` across all employees.
    pub fn total_payout(&self) -> Decimal {
        self.employees.iter().map(|e| e.total_pay).sum()
    }

    /// Finds the breakdown for an employee by id.
    pub fn employee(&self, employee_id: &str) -> Option<&EmployeePayrollCalc> {
        self.employees.iter().find(|e| e.employee_id == employee_id)
    }
}
