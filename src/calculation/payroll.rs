//! The weekly payroll engine.
//!
//! Turns the week's tip totals, roster and hours into a per-employee pay
//! breakdown plus pool-level aggregates. The calculation is pure: no I/O, no
//! shared state, and no failure modes. Division by zero is defined as a zero
//! rate, unmatched hours records are skipped, and negative inputs flow
//! through the arithmetic unchanged.

use std::collections::HashMap;

use rust_decimal::Decimal;

use crate::config::PayPolicy;
use crate::models::{
    AuditStep, AuditTrace, AuditWarning, Employee, EmployeePayrollCalc, HoursInput,
    PayrollCalculation,
};

use super::coffee_guarantee::apply_coffee_guarantee;
use super::gusto_entries::{PayComponents, gusto_entries, total_pay};
use super::rounding::{round_money, round_rate};
use super::tip_pool::{TipPoolResult, derive_tip_pool, is_bar_worker};
use super::wedding_split::split_wedding_tips;

/// Warning code for an hours record with no matching employee.
pub const UNMATCHED_HOURS_WARNING: &str = "UNMATCHED_HOURS";

/// Warning code for more than one coffee worker receiving the coffee pool.
pub const MULTIPLE_COFFEE_WORKERS_WARNING: &str = "MULTIPLE_COFFEE_WORKERS";

/// Calculates weekly pay under a given [`PayPolicy`].
///
/// The engine holds nothing but the policy, so it can be shared freely
/// between threads and called any number of times.
#[derive(Debug, Clone, Default)]
pub struct PayrollEngine {
    policy: PayPolicy,
}

impl PayrollEngine {
    /// Creates an engine for the given policy.
    pub fn new(policy: PayPolicy) -> Self {
        Self { policy }
    }

    /// Returns the policy this engine applies.
    pub fn policy(&self) -> &PayPolicy {
        &self.policy
    }

    /// Calculates the week's payroll.
    ///
    /// `employees` is assumed to be pre-filtered to the active roster.
    /// Employees and hours are matched by id; the result lists employees with
    /// any non-zero hours, in the order of `hours`.
    ///
    /// # Examples
    ///
    /// ```
    /// use tip_pool_engine::calculation::PayrollEngine;
    /// use tip_pool_engine::config::PayPolicy;
    /// use tip_pool_engine::models::{Employee, HoursInput};
    /// use rust_decimal::Decimal;
    ///
    /// let employee = Employee {
    ///     id: "emp_001".to_string(),
    ///     name: "Sam".to_string(),
    ///     role: "bartender".to_string(),
    ///     hourly_rate: Decimal::new(15, 0),
    ///     tip_rate_multiplier: Decimal::ONE,
    ///     wedding_hourly_rate: None,
    ///     is_coffee_worker: false,
    ///     gusto_tips_only: false,
    ///     is_active: true,
    ///     notes: None,
    /// };
    /// let mut hours = HoursInput::new("emp_001");
    /// hours.bar_hours = Decimal::new(10, 0);
    ///
    /// let engine = PayrollEngine::new(PayPolicy::default());
    /// let calc = engine.calculate(Decimal::new(200, 0), Decimal::ZERO, Decimal::ZERO, &[employee], &[hours]);
    ///
    /// assert_eq!(calc.employees[0].tip_share, Decimal::new(200, 0));
    /// assert_eq!(calc.employees[0].total_pay, Decimal::new(350, 0));
    /// ```
    pub fn calculate(
        &self,
        toast_tips: Decimal,
        coffee_tips: Decimal,
        wedding_tips: Decimal,
        employees: &[Employee],
        hours: &[HoursInput],
    ) -> PayrollCalculation {
        let lookup: HashMap<&str, &Employee> =
            employees.iter().map(|e| (e.id.as_str(), e)).collect();

        let pool = derive_tip_pool(toast_tips, coffee_tips, wedding_tips, &lookup, hours, 1);
        let mut steps: Vec<AuditStep> = pool.audit_steps.clone();
        let mut warnings: Vec<AuditWarning> = pool.warnings.clone();

        let wedding = split_wedding_tips(wedding_tips, hours, next_step(&steps));
        steps.push(wedding.audit_step.clone());
        let wedding_tip_share = round_money(wedding.tip_per_worker);

        let mut results = Vec::with_capacity(hours.len());
        let mut coffee_workers_paid = 0usize;

        for h in hours {
            let Some(employee) = lookup.get(h.employee_id.as_str()) else {
                warnings.push(AuditWarning {
                    code: UNMATCHED_HOURS_WARNING.to_string(),
                    message: format!(
                        "Hours record for unknown employee '{}' was skipped",
                        h.employee_id
                    ),
                    severity: "medium".to_string(),
                });
                continue;
            };

            if !h.has_any_hours() {
                continue;
            }

            let (calc, coffee_step) = self.calculate_employee(
                employee,
                h,
                &pool,
                wedding_tip_share,
                coffee_tips,
                next_step(&steps),
            );

            if let Some(step) = coffee_step {
                coffee_workers_paid += 1;
                steps.push(step);
            }
            results.push(calc);
        }

        if coffee_workers_paid > 1 {
            warnings.push(AuditWarning {
                code: MULTIPLE_COFFEE_WORKERS_WARNING.to_string(),
                message: format!(
                    "{} coffee workers each received the full coffee pool of ${}",
                    coffee_workers_paid,
                    round_money(coffee_tips)
                ),
                severity: "high".to_string(),
            });
        }

        PayrollCalculation {
            toast_tips,
            coffee_tips,
            wedding_tips,
            total_pool: round_money(pool.total_pool),
            bar_tip_pool: round_money(pool.bar_tip_pool),
            total_bar_hours: pool.total_bar_hours,
            initial_tip_rate: round_rate(pool.initial_tip_rate),
            reduced_rate_deduction: round_money(pool.reduced_rate_deduction),
            adjusted_pool: round_money(pool.adjusted_pool),
            adjusted_hours: round_money(pool.adjusted_hours),
            final_tip_rate: round_rate(pool.final_tip_rate),
            wedding_worker_count: wedding.worker_count,
            wedding_tip_per_worker: wedding_tip_share,
            employees: results,
            audit_trace: AuditTrace { steps, warnings },
        }
    }

    /// Computes one employee's breakdown. Returns the coffee guarantee audit
    /// step when the employee was paid as the coffee worker.
    fn calculate_employee(
        &self,
        employee: &Employee,
        h: &HoursInput,
        pool: &TipPoolResult,
        wedding_tip_share: Decimal,
        coffee_tips: Decimal,
        step_number: u32,
    ) -> (EmployeePayrollCalc, Option<AuditStep>) {
        let mut components = PayComponents::default();
        let mut coffee_step = None;

        if is_bar_worker(employee, h) {
            // Tip shares read the unrounded rates
            components.tip_share = if employee.is_reduced_rate() {
                round_money(h.bar_hours * pool.initial_tip_rate * employee.tip_rate_multiplier)
            } else {
                round_money(h.bar_hours * pool.final_tip_rate)
            };
            components.base_wages = round_money(h.bar_hours * employee.hourly_rate);
        }

        if h.wedding_hours > Decimal::ZERO {
            let wedding_rate = employee.wedding_rate(self.policy.default_wedding_hourly_rate);
            let wedding_base = round_money(h.wedding_hours * wedding_rate);
            components.wedding_pay = round_money(wedding_base + wedding_tip_share);
        }

        if employee.is_coffee_worker && h.coffee_hours > Decimal::ZERO {
            let coffee = apply_coffee_guarantee(
                &employee.id,
                coffee_tips,
                h.coffee_hours,
                employee.hourly_rate,
                self.policy.coffee_minimum_hourly,
                step_number,
            );
            components.coffee_pay = coffee.coffee_pay;
            components.base_wages = coffee.base_wages;
            components.top_up_amount = coffee.top_up_amount;
            coffee_step = Some(coffee.audit_step);
        }

        let entries = gusto_entries(employee, h, &components, self.policy.gusto_labor_rate);
        let total = total_pay(employee, &components, &entries);

        let calc = EmployeePayrollCalc {
            employee_id: employee.id.clone(),
            employee_name: employee.name.clone(),
            role: employee.role.clone(),
            bar_hours: h.bar_hours,
            coffee_hours: h.coffee_hours,
            wedding_hours: h.wedding_hours,
            labor_hours: h.labor_hours,
            hourly_rate: employee.hourly_rate,
            tip_rate_multiplier: employee.tip_rate_multiplier,
            is_coffee_worker: employee.is_coffee_worker,
            gusto_tips_only: employee.gusto_tips_only,
            tip_share: components.tip_share,
            base_wages: components.base_wages,
            wedding_pay: components.wedding_pay,
            coffee_pay: components.coffee_pay,
            top_up_amount: components.top_up_amount,
            gusto_hours_entry: entries.hours_entry,
            gusto_rate: entries.rate,
            gusto_wages_entry: entries.wages_entry,
            gusto_tips_entry: entries.tips_entry,
            total_pay: total,
        };

        (calc, coffee_step)
    }
}

fn next_step(steps: &[AuditStep]) -> u32 {
    steps.last().map_or(1, |s| s.step_number + 1)
}

/// Calculates the week's payroll under the default [`PayPolicy`].
///
/// See [`PayrollEngine::calculate`].
pub fn calculate_payroll(
    toast_tips: Decimal,
    coffee_tips: Decimal,
    wedding_tips: Decimal,
    employees: &[Employee],
    hours: &[HoursInput],
) -> PayrollCalculation {
    PayrollEngine::default().calculate(toast_tips, coffee_tips, wedding_tips, employees, hours)
}
