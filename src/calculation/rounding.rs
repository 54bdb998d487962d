//! Rounding helpers.
//!
//! Money and tip rates round at different precisions. Keep them as two
//! helpers: rates are multiplied by hours later, so collapsing both to cents
//! shifts totals at scale.

use rust_decimal::{Decimal, RoundingStrategy};

/// Decimal places for monetary amounts.
pub const MONEY_DP: u32 = 2;

/// Decimal places for reported tip rates.
pub const RATE_DP: u32 = 4;

/// Rounds a monetary amount to cents, half away from zero.
///
/// # Examples
///
/// ```
/// use tip_pool_engine::calculation::round_money;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// assert_eq!(round_money(Decimal::from_str("2.675").unwrap()), Decimal::from_str("2.68").unwrap());
/// assert_eq!(round_money(Decimal::from_str("-2.675").unwrap()), Decimal::from_str("-2.68").unwrap());
/// ```
pub fn round_money(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(MONEY_DP, RoundingStrategy::MidpointAwayFromZero)
}

/// Rounds a tip rate to four decimal places, half away from zero.
///
/// # Examples
///
/// ```
/// use tip_pool_engine::calculation::round_rate;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// assert_eq!(round_rate(Decimal::from_str("13.33335").unwrap()), Decimal::from_str("13.3334").unwrap());
/// ```
pub fn round_rate(rate: Decimal) -> Decimal {
    rate.round_dp_with_strategy(RATE_DP, RoundingStrategy::MidpointAwayFromZero)
}
