//! Coffee counter pay and the minimum hourly guarantee.
//!
//! The coffee worker receives the entire coffee tip pool. If base wages plus
//! those tips come to less than the policy floor per coffee hour, a top-up
//! brings the effective rate up to the floor.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::AuditStep;

use super::rounding::round_money;
use super::tip_pool::rate_or_zero;

/// The result of paying the coffee worker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoffeeGuaranteeResult {
    /// The coffee tip pool, rounded to cents.
    pub coffee_pay: Decimal,
    /// Coffee hours × hourly rate, rounded to cents.
    pub base_wages: Decimal,
    /// (base wages + coffee tips) / coffee hours, unrounded.
    pub effective_hourly: Decimal,
    /// Amount needed to reach the floor; zero when already at or above it.
    pub top_up_amount: Decimal,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Pays the coffee worker and applies the minimum hourly guarantee.
///
/// The guarantee is measured against base wages plus tips, not tips alone.
///
/// # Arguments
///
/// * `employee_id` - The coffee worker's id, recorded in the audit step
/// * `coffee_tips` - The week's coffee tip total
/// * `coffee_hours` - Hours the coffee worker worked
/// * `hourly_rate` - The coffee worker's base wage
/// * `minimum_hourly` - The effective hourly floor
/// * `step_number` - The step number for audit trail sequencing
///
/// # Examples
///
/// ```
/// use tip_pool_engine::calculation::apply_coffee_guarantee;
/// use rust_decimal::Decimal;
///
/// // $15/hr × 5h = $75, plus $10 tips = $17/hr, $3/hr short of $20
/// let result = apply_coffee_guarantee(
///     "emp_coffee",
///     Decimal::new(10, 0),
///     Decimal::new(5, 0),
///     Decimal::new(15, 0),
///     Decimal::new(20, 0),
///     1,
/// );
/// assert_eq!(result.base_wages, Decimal::new(75, 0));
/// assert_eq!(result.top_up_amount, Decimal::new(15, 0));
/// ```
pub fn apply_coffee_guarantee(
    employee_id: &str,
    coffee_tips: Decimal,
    coffee_hours: Decimal,
    hourly_rate: Decimal,
    minimum_hourly: Decimal,
    step_number: u32,
) -> CoffeeGuaranteeResult {
    let coffee_pay = round_money(coffee_tips);
    let base_wages = round_money(coffee_hours * hourly_rate);
    let effective_hourly = rate_or_zero(base_wages + coffee_tips, coffee_hours);

    let top_up_amount = if effective_hourly < minimum_hourly {
        round_money((minimum_hourly - effective_hourly) * coffee_hours)
    } else {
        Decimal::ZERO
    };

    let reasoning = if top_up_amount.is_zero() {
        format!(
            "(${} wages + ${} tips) / {} hours = ${}/hr, at or above ${}/hr floor",
            base_wages.normalize(),
            coffee_tips.normalize(),
            coffee_hours.normalize(),
            round_money(effective_hourly).normalize(),
            minimum_hourly.normalize()
        )
    } else {
        format!(
            "(${} wages + ${} tips) / {} hours = ${}/hr, topped up ${} to reach ${}/hr",
            base_wages.normalize(),
            coffee_tips.normalize(),
            coffee_hours.normalize(),
            round_money(effective_hourly).normalize(),
            top_up_amount.normalize(),
            minimum_hourly.normalize()
        )
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "coffee_minimum_guarantee".to_string(),
        rule_name: "Coffee Minimum Guarantee".to_string(),
        input: serde_json::json!({
            "employee_id": employee_id,
            "coffee_tips": coffee_tips.normalize().to_string(),
            "coffee_hours": coffee_hours.normalize().to_string(),
            "hourly_rate": hourly_rate.normalize().to_string(),
            "minimum_hourly": minimum_hourly.normalize().to_string()
        }),
        output: serde_json::json!({
            "base_wages": base_wages.to_string(),
            "effective_hourly": round_money(effective_hourly).to_string(),
            "top_up_amount": top_up_amount.to_string(),
            "top_up_applied": !top_up_amount.is_zero()
        }),
        reasoning,
    };

    CoffeeGuaranteeResult {
        coffee_pay,
        base_wages,
        effective_hourly,
        top_up_amount,
        audit_step,
    }
}
