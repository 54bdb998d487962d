//! External payroll system entries.
//!
//! The external payroll system computes wages itself from hours × rate, so
//! each employee gets an hours/rate pair to key in plus a tips dollar amount.
//! Which hours and which rate depends on the employee's flags.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{Employee, HoursInput};

use super::rounding::round_money;

/// Computed pay components an employee's external entries are built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PayComponents {
    /// Bar or coffee base wages.
    pub base_wages: Decimal,
    /// Bar tip share.
    pub tip_share: Decimal,
    /// Wedding wages plus wedding tips.
    pub wedding_pay: Decimal,
    /// Coffee tip pool.
    pub coffee_pay: Decimal,
    /// Coffee minimum top-up.
    pub top_up_amount: Decimal,
}

/// What an operator keys into the external payroll system for one employee.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GustoEntries {
    /// Hours to enter.
    pub hours_entry: Decimal,
    /// Rate to enter alongside the hours.
    pub rate: Decimal,
    /// Wages the external system will compute from hours × rate.
    pub wages_entry: Decimal,
    /// Tip dollars to enter.
    pub tips_entry: Decimal,
}

/// Builds the external payroll entries for an employee.
///
/// Branches, first match wins:
/// - `gusto_tips_only`: labor hours at the fixed labor rate; bar wages, bar
///   tips and wedding pay all reported as tips.
/// - `is_coffee_worker`: coffee hours at the hourly rate; wages include the
///   top-up; coffee pay reported as tips.
/// - otherwise: bar hours at the hourly rate; bar tips plus wedding pay
///   reported as tips.
///
/// # Examples
///
/// ```
/// use tip_pool_engine::calculation::{gusto_entries, PayComponents};
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
/// let components = PayComponents {
///     base_wages: Decimal::new(150, 0),
///     tip_share: Decimal::new(13750, 2),
///     ..PayComponents::default()
/// };
/// let entries = gusto_entries(&employee, &hours, &components, Decimal::new(22, 0));
/// assert_eq!(entries.hours_entry, Decimal::new(10, 0));
/// assert_eq!(entries.tips_entry, Decimal::new(13750, 2));
/// ```
pub fn gusto_entries(
    employee: &Employee,
    hours: &HoursInput,
    components: &PayComponents,
    labor_rate: Decimal,
) -> GustoEntries {
    if employee.gusto_tips_only {
        let bar_total = round_money(components.base_wages + components.tip_share);
        GustoEntries {
            hours_entry: hours.labor_hours,
            rate: labor_rate,
            wages_entry: round_money(hours.labor_hours * labor_rate),
            tips_entry: round_money(bar_total + components.wedding_pay),
        }
    } else if employee.is_coffee_worker {
        GustoEntries {
            hours_entry: hours.coffee_hours,
            rate: employee.hourly_rate,
            wages_entry: round_money(components.base_wages + components.top_up_amount),
            tips_entry: round_money(components.coffee_pay),
        }
    } else {
        GustoEntries {
            hours_entry: hours.bar_hours,
            rate: employee.hourly_rate,
            wages_entry: round_money(components.base_wages),
            tips_entry: round_money(components.tip_share + components.wedding_pay),
        }
    }
}

/// Total compensation for the week.
///
/// Tips-only employees are totalled from their external entries, since their
/// bar base wages are already folded into the tips entry.
pub fn total_pay(employee: &Employee, components: &PayComponents, entries: &GustoEntries) -> Decimal {
    if employee.gusto_tips_only {
        round_money(entries.wages_entry + entries.tips_entry)
    } else {
        round_money(
            components.base_wages
                + components.tip_share
                + components.wedding_pay
                + components.coffee_pay
                + components.top_up_amount,
        )
    }
}
