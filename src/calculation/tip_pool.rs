//! Bar tip pool derivation.
//!
//! This module derives the bar-only tip pool and the two tip rates paid out of
//! it. Reduced-rate workers are paid at the initial rate and removed from the
//! pool, then the remainder is re-divided among the standard bar workers.

use std::collections::HashMap;

use rust_decimal::Decimal;

use crate::models::{AuditStep, AuditWarning, Employee, HoursInput};

use super::rounding::{round_money, round_rate};

/// Warning code raised when coffee and wedding tips exceed the toast total.
pub const NEGATIVE_BAR_POOL_WARNING: &str = "NEGATIVE_BAR_POOL";

/// Pool-level figures for the bar tip pool.
///
/// All amounts are unrounded. Per-employee tip shares are computed from
/// `initial_tip_rate` and `final_tip_rate` as held here; rounding happens
/// only when the figures are reported.
#[derive(Debug, Clone, PartialEq)]
pub struct TipPoolResult {
    /// Sum of toast, coffee and wedding tips.
    pub total_pool: Decimal,
    /// Toast tips net of coffee and wedding tips.
    pub bar_tip_pool: Decimal,
    /// Bar hours across all bar workers.
    pub total_bar_hours: Decimal,
    /// `bar_tip_pool / total_bar_hours`, or zero with no bar hours.
    pub initial_tip_rate: Decimal,
    /// Tip dollars paid to reduced-rate workers at the initial rate.
    pub reduced_rate_deduction: Decimal,
    /// Bar hours worked by reduced-rate workers.
    pub reduced_rate_hours: Decimal,
    /// `bar_tip_pool - reduced_rate_deduction`.
    pub adjusted_pool: Decimal,
    /// `total_bar_hours - reduced_rate_hours`.
    pub adjusted_hours: Decimal,
    /// `adjusted_pool / adjusted_hours`, or zero with no adjusted hours.
    pub final_tip_rate: Decimal,
    /// Audit steps for each rule applied.
    pub audit_steps: Vec<AuditStep>,
    /// Warnings raised while deriving the pool.
    pub warnings: Vec<AuditWarning>,
}

/// Returns true if the employee draws from the bar tip pool this week.
pub fn is_bar_worker(employee: &Employee, hours: &HoursInput) -> bool {
    hours.bar_hours > Decimal::ZERO && !employee.is_coffee_worker
}

/// Divides `numerator` by `denominator`, defining the result as zero when
/// the denominator is zero.
pub fn rate_or_zero(numerator: Decimal, denominator: Decimal) -> Decimal {
    if denominator.is_zero() {
        Decimal::ZERO
    } else {
        numerator / denominator
    }
}

/// Derives the bar tip pool, the initial and final tip rates, and the
/// reduced-rate carve-out.
///
/// Hours records whose employee is not in `employees` are ignored.
///
/// # Arguments
///
/// * `toast_tips` - Point-of-sale tip total, inclusive of coffee and wedding tips
/// * `coffee_tips` - Coffee counter tip total
/// * `wedding_tips` - Wedding/event tip total
/// * `employees` - Lookup of employees by id
/// * `hours` - The week's hours records
/// * `step_number` - The step number of the first audit step
///
/// # Examples
///
/// ```
/// use std::collections::HashMap;
/// use tip_pool_engine::calculation::derive_tip_pool;
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
/// hours.bar_hours = Decimal::new(20, 0);
///
/// let lookup = HashMap::from([(employee.id.as_str(), &employee)]);
/// let pool = derive_tip_pool(Decimal::new(500, 0), Decimal::new(100, 0), Decimal::ZERO, &lookup, &[hours], 1);
///
/// assert_eq!(pool.bar_tip_pool, Decimal::new(400, 0));
/// assert_eq!(pool.initial_tip_rate, Decimal::new(20, 0));
/// assert_eq!(pool.final_tip_rate, Decimal::new(20, 0));
/// ```
pub fn derive_tip_pool(
    toast_tips: Decimal,
    coffee_tips: Decimal,
    wedding_tips: Decimal,
    employees: &HashMap<&str, &Employee>,
    hours: &[HoursInput],
    step_number: u32,
) -> TipPoolResult {
    let mut audit_steps = Vec::with_capacity(5);
    let mut warnings = Vec::new();
    let mut step = step_number;

    // Toast already includes coffee and wedding tips
    let total_pool = toast_tips + coffee_tips + wedding_tips;
    let bar_tip_pool = toast_tips - coffee_tips - wedding_tips;

    audit_steps.push(AuditStep {
        step_number: step,
        rule_id: "bar_tip_pool".to_string(),
        rule_name: "Bar Tip Pool".to_string(),
        input: serde_json::json!({
            "toast_tips": toast_tips.normalize().to_string(),
            "coffee_tips": coffee_tips.normalize().to_string(),
            "wedding_tips": wedding_tips.normalize().to_string()
        }),
        output: serde_json::json!({
            "total_pool": round_money(total_pool).to_string(),
            "bar_tip_pool": round_money(bar_tip_pool).to_string()
        }),
        reasoning: format!(
            "${} toast - ${} coffee - ${} wedding = ${} bar pool",
            toast_tips.normalize(),
            coffee_tips.normalize(),
            wedding_tips.normalize(),
            bar_tip_pool.normalize()
        ),
    });
    step += 1;

    if bar_tip_pool < Decimal::ZERO {
        warnings.push(AuditWarning {
            code: NEGATIVE_BAR_POOL_WARNING.to_string(),
            message: format!(
                "Coffee and wedding tips exceed toast tips; bar pool is ${}",
                round_money(bar_tip_pool)
            ),
            severity: "high".to_string(),
        });
    }

    let bar_workers: Vec<(&Employee, &HoursInput)> = hours
        .iter()
        .filter_map(|h| {
            employees
                .get(h.employee_id.as_str())
                .map(|employee| (*employee, h))
        })
        .filter(|(employee, h)| is_bar_worker(employee, h))
        .collect();

    let total_bar_hours: Decimal = bar_workers.iter().map(|(_, h)| h.bar_hours).sum();
    let initial_tip_rate = rate_or_zero(bar_tip_pool, total_bar_hours);

    audit_steps.push(AuditStep {
        step_number: step,
        rule_id: "initial_tip_rate".to_string(),
        rule_name: "Initial Tip Rate".to_string(),
        input: serde_json::json!({
            "bar_tip_pool": bar_tip_pool.normalize().to_string(),
            "total_bar_hours": total_bar_hours.normalize().to_string(),
            "bar_workers": bar_workers.len()
        }),
        output: serde_json::json!({
            "initial_tip_rate": round_rate(initial_tip_rate).to_string()
        }),
        reasoning: if total_bar_hours.is_zero() {
            "No bar hours worked - initial tip rate is $0".to_string()
        } else {
            format!(
                "${} / {} hours = ${}/hr",
                bar_tip_pool.normalize(),
                total_bar_hours.normalize(),
                round_rate(initial_tip_rate).normalize()
            )
        },
    });
    step += 1;

    let mut reduced_rate_deduction = Decimal::ZERO;
    let mut reduced_rate_hours = Decimal::ZERO;
    let mut reduced_workers = Vec::new();

    for (employee, h) in bar_workers.iter().filter(|(e, _)| e.is_reduced_rate()) {
        let share = h.bar_hours * initial_tip_rate * employee.tip_rate_multiplier;
        reduced_rate_deduction += share;
        reduced_rate_hours += h.bar_hours;
        reduced_workers.push(serde_json::json!({
            "employee_id": employee.id,
            "bar_hours": h.bar_hours.normalize().to_string(),
            "tip_rate_multiplier": employee.tip_rate_multiplier.normalize().to_string(),
            "share": round_money(share).to_string()
        }));
    }

    let adjusted_pool = bar_tip_pool - reduced_rate_deduction;
    let adjusted_hours = total_bar_hours - reduced_rate_hours;

    audit_steps.push(AuditStep {
        step_number: step,
        rule_id: "reduced_rate_carve_out".to_string(),
        rule_name: "Reduced-Rate Carve-Out".to_string(),
        input: serde_json::json!({
            "initial_tip_rate": round_rate(initial_tip_rate).to_string(),
            "reduced_rate_workers": reduced_workers
        }),
        output: serde_json::json!({
            "reduced_rate_deduction": round_money(reduced_rate_deduction).to_string(),
            "adjusted_pool": round_money(adjusted_pool).to_string(),
            "adjusted_hours": round_money(adjusted_hours).to_string()
        }),
        reasoning: if reduced_rate_hours.is_zero() {
            "No reduced-rate workers - pool and hours unchanged".to_string()
        } else {
            format!(
                "${} paid at the initial rate for {} hours; ${} remains for {} hours",
                round_money(reduced_rate_deduction).normalize(),
                reduced_rate_hours.normalize(),
                round_money(adjusted_pool).normalize(),
                adjusted_hours.normalize()
            )
        },
    });
    step += 1;

    let final_tip_rate = rate_or_zero(adjusted_pool, adjusted_hours);

    audit_steps.push(AuditStep {
        step_number: step,
        rule_id: "final_tip_rate".to_string(),
        rule_name: "Final Tip Rate".to_string(),
        input: serde_json::json!({
            "adjusted_pool": adjusted_pool.normalize().to_string(),
            "adjusted_hours": adjusted_hours.normalize().to_string()
        }),
        output: serde_json::json!({
            "final_tip_rate": round_rate(final_tip_rate).to_string()
        }),
        reasoning: if adjusted_hours.is_zero() {
            "No standard bar hours - final tip rate is $0".to_string()
        } else {
            format!(
                "${} / {} hours = ${}/hr",
                round_money(adjusted_pool).normalize(),
                adjusted_hours.normalize(),
                round_rate(final_tip_rate).normalize()
            )
        },
    });

    TipPoolResult {
        total_pool,
        bar_tip_pool,
        total_bar_hours,
        initial_tip_rate,
        reduced_rate_deduction,
        reduced_rate_hours,
        adjusted_pool,
        adjusted_hours,
        final_tip_rate,
        audit_steps,
        warnings,
    }
}
