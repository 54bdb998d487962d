//! Input validation for payroll requests.
//!
//! The engine accepts any input and lets negative values flow through the
//! arithmetic. Callers that want to reject bad data up front run this pass
//! first. The upper bounds keep every intermediate sum, product and quotient
//! in the engine inside `Decimal` range.

use rust_decimal::Decimal;

use crate::error::{EngineError, EngineResult};
use crate::models::{Employee, HoursInput};

/// Largest accepted tip total for any single source: one trillion dollars.
pub const MAX_TIP_AMOUNT: Decimal = Decimal::from_parts(0xD4A5_1000, 0xE8, 0, false, 0);

/// Largest accepted hours in any one category: the hours in a week.
pub const MAX_WEEKLY_HOURS: Decimal = Decimal::from_parts(168, 0, 0, false, 0);

/// Smallest accepted non-zero hours value.
pub const MIN_NONZERO_HOURS: Decimal = Decimal::from_parts(1, 0, 0, false, 2);

/// Largest accepted hourly or wedding rate.
pub const MAX_HOURLY_RATE: Decimal = Decimal::from_parts(10_000, 0, 0, false, 0);

/// Largest accepted tip rate multiplier.
pub const MAX_TIP_RATE_MULTIPLIER: Decimal = Decimal::from_parts(10, 0, 0, false, 0);

/// Rejects negative or out-of-range tip totals, hours, and employee rates.
///
/// Tips must lie in `0..=MAX_TIP_AMOUNT`. Hours must be zero or lie in
/// `MIN_NONZERO_HOURS..=MAX_WEEKLY_HOURS`.
///
/// Returns the first problem found, checking tips, then employees, then
/// hours, each in input order.
///
/// # Examples
///
/// ```
/// use tip_pool_engine::calculation::validate_payroll_inputs;
/// use tip_pool_engine::error::EngineError;
/// use rust_decimal::Decimal;
///
/// let result = validate_payroll_inputs(Decimal::new(-5, 0), Decimal::ZERO, Decimal::ZERO, &[], &[]);
/// assert!(matches!(result, Err(EngineError::InvalidTips { .. })));
/// ```
pub fn validate_payroll_inputs(
    toast_tips: Decimal,
    coffee_tips: Decimal,
    wedding_tips: Decimal,
    employees: &[Employee],
    hours: &[HoursInput],
) -> EngineResult<()> {
    for (field, value) in [
        ("toast_tips", toast_tips),
        ("coffee_tips", coffee_tips),
        ("wedding_tips", wedding_tips),
    ] {
        if value < Decimal::ZERO {
            return Err(EngineError::InvalidTips {
                field: field.to_string(),
                message: format!("cannot be negative, got {}", value),
            });
        }
        if value > MAX_TIP_AMOUNT {
            return Err(EngineError::InvalidTips {
                field: field.to_string(),
                message: format!("cannot exceed {}, got {}", MAX_TIP_AMOUNT, value),
            });
        }
    }

    for employee in employees {
        validate_employee(employee)?;
    }

    for h in hours {
        validate_hours(h)?;
    }

    Ok(())
}

fn validate_employee(employee: &Employee) -> EngineResult<()> {
    let mut rates = vec![
        ("hourly_rate", employee.hourly_rate, MAX_HOURLY_RATE),
        (
            "tip_rate_multiplier",
            employee.tip_rate_multiplier,
            MAX_TIP_RATE_MULTIPLIER,
        ),
    ];
    if let Some(rate) = employee.wedding_hourly_rate {
        rates.push(("wedding_hourly_rate", rate, MAX_HOURLY_RATE));
    }

    for (field, value, max) in rates {
        if value < Decimal::ZERO {
            return Err(EngineError::InvalidEmployee {
                employee_id: employee.id.clone(),
                field: field.to_string(),
                message: format!("cannot be negative, got {}", value),
            });
        }
        if value > max {
            return Err(EngineError::InvalidEmployee {
                employee_id: employee.id.clone(),
                field: field.to_string(),
                message: format!("cannot exceed {}, got {}", max, value),
            });
        }
    }

    if employee.id.trim().is_empty() {
        return Err(EngineError::InvalidEmployee {
            employee_id: employee.id.clone(),
            field: "id".to_string(),
            message: "cannot be empty".to_string(),
        });
    }

    Ok(())
}

fn validate_hours(h: &HoursInput) -> EngineResult<()> {
    for (field, value) in [
        ("bar_hours", h.bar_hours),
        ("coffee_hours", h.coffee_hours),
        ("wedding_hours", h.wedding_hours),
        ("labor_hours", h.labor_hours),
    ] {
        if value < Decimal::ZERO {
            return Err(EngineError::InvalidHours {
                employee_id: h.employee_id.clone(),
                field: field.to_string(),
                message: format!("cannot be negative, got {}", value),
            });
        }
        if value > MAX_WEEKLY_HOURS {
            return Err(EngineError::InvalidHours {
                employee_id: h.employee_id.clone(),
                field: field.to_string(),
                message: format!("cannot exceed {} hours, got {}", MAX_WEEKLY_HOURS, value),
            });
        }
        if !value.is_zero() && value < MIN_NONZERO_HOURS {
            return Err(EngineError::InvalidHours {
                employee_id: h.employee_id.clone(),
                field: field.to_string(),
                message: format!("must be zero or at least {}, got {}", MIN_NONZERO_HOURS, value),
            });
        }
    }

    Ok(())
}
