//! Weekly hours input model.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Hours worked by one employee in one payroll week.
///
/// Coffee workers record their time in `coffee_hours`; everyone else uses
/// `bar_hours`. The engine gates on the employee's `is_coffee_worker` flag
/// rather than enforcing that only one of the two is set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HoursInput {
    /// The employee these hours belong to.
    pub employee_id: String,
    /// Hours worked behind the bar.
    #[serde(default)]
    pub bar_hours: Decimal,
    /// Hours worked at the coffee counter.
    #[serde(default)]
    pub coffee_hours: Decimal,
    /// Hours worked at weddings or other events.
    #[serde(default)]
    pub wedding_hours: Decimal,
    /// Non-service labor hours, paid at the external payroll labor rate.
    #[serde(default)]
    pub labor_hours: Decimal,
}

impl HoursInput {
    /// Creates an empty hours record for an employee.
    pub fn new(employee_id: impl Into<String>) -> Self {
        Self {
            employee_id: employee_id.into(),
            bar_hours: Decimal::ZERO,
            coffee_hours: Decimal::ZERO,
            wedding_hours: Decimal::ZERO,
            labor_hours: Decimal::ZERO,
        }
    }

    /// Returns true if any hours category is non-zero.
    ///
    /// # Examples
    ///
    /// ```
    /// use tip_pool_engine::models::HoursInput;
    /// use rust_decimal::Decimal;
    ///
    /// let mut hours = HoursInput::new("emp_001");
    /// assert!(!hours.has_any_hours());
    ///
    /// hours.labor_hours = Decimal::new(4, 0);
    /// assert!(hours.has_any_hours());
    /// ```
    pub fn has_any_hours(&self) -> bool {
        !(self.bar_hours.is_zero()
            && self.coffee_hours.is_zero()
            && self.wedding_hours.is_zero()
            && self.labor_hours.is_zero())
    }
}
