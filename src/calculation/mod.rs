//! Calculation logic for the Tip Pool Engine.
//!
//! This module contains the pieces of the weekly pay calculation: the bar tip
//! pool and its reduced-rate carve-out, the equal wedding tip split, the coffee
//! minimum guarantee, the external payroll entries, and the [`PayrollEngine`]
//! that runs them in order.

mod coffee_guarantee;
mod gusto_entries;
mod payroll;
mod rounding;
mod tip_pool;
mod validation;
mod wedding_split;

pub use coffee_guarantee::{CoffeeGuaranteeResult, apply_coffee_guarantee};
pub use gusto_entries::{GustoEntries, PayComponents, gusto_entries, total_pay};
pub use payroll::{
    MULTIPLE_COFFEE_WORKERS_WARNING, PayrollEngine, UNMATCHED_HOURS_WARNING, calculate_payroll,
};
pub use rounding::{MONEY_DP, RATE_DP, round_money, round_rate};
pub use tip_pool::{
    NEGATIVE_BAR_POOL_WARNING, TipPoolResult, derive_tip_pool, is_bar_worker, rate_or_zero,
};
pub use validation::validate_payroll_inputs;
pub use wedding_split::{WeddingSplitResult, split_wedding_tips};
