//! Employee model.
//!
//! Special pay rules are driven entirely by flags and numbers on a generic
//! employee record: a tip multiplier below 1 marks a reduced-rate bartender,
//! `is_coffee_worker` marks the coffee counter role and `gusto_tips_only`
//! marks a dual-role worker whose pay is reported entirely as tips.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

pub(crate) fn default_tip_rate_multiplier() -> Decimal {
    Decimal::ONE
}

pub(crate) fn default_active() -> bool {
    true
}

/// Represents a member of staff eligible for the weekly tip pool.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    /// Unique identifier for the employee.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Free-form role label (e.g. "bartender", "barista").
    pub role: String,
    /// Base hourly wage.
    pub hourly_rate: Decimal,
    /// Share of the standard tip rate this employee receives (1.0 = standard).
    #[serde(default = "default_tip_rate_multiplier")]
    pub tip_rate_multiplier: Decimal,
    /// Hourly rate for wedding/event work. Falls back to the policy default.
    #[serde(default)]
    pub wedding_hourly_rate: Option<Decimal>,
    /// Works the coffee counter and receives the coffee tip pool.
    #[serde(default)]
    pub is_coffee_worker: bool,
    /// Reports all compensation to the external payroll system as tips.
    #[serde(default)]
    pub gusto_tips_only: bool,
    /// Whether the employee is on the active roster.
    #[serde(default = "default_active")]
    pub is_active: bool,
    /// Optional free-text notes.
    #[serde(default)]
    pub notes: Option<String>,
}

impl Employee {
    /// Returns true if the employee takes a reduced share of the bar tip rate.
    ///
    /// # Examples
    ///
    /// ```
    /// use tip_pool_engine::models::Employee;
    /// use rust_decimal::Decimal;
    ///
    /// let employee = Employee {
    ///     id: "emp_001".to_string(),
    ///     name: "Sam".to_string(),
    ///     role: "bartender".to_string(),
    ///     hourly_rate: Decimal::new(1500, 2),
    ///     tip_rate_multiplier: Decimal::new(25, 2),
    ///     wedding_hourly_rate: None,
    ///     is_coffee_worker: false,
    ///     gusto_tips_only: false,
    ///     is_active: true,
    ///     notes: None,
    /// };
    /// assert!(employee.is_reduced_rate());
    /// ```
    pub fn is_reduced_rate(&self) -> bool {
        self.tip_rate_multiplier < Decimal::ONE
    }

    /// Returns the employee's wedding hourly rate, or `default` when unset.
    pub fn wedding_rate(&self, default: Decimal) -> Decimal {
        self.wedding_hourly_rate.unwrap_or(default)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn create_test_employee(multiplier: &str) -> Employee {
        Employee {
            id: "emp_001".to_string(),
            name: "Sam".to_string(),
            role: "bartender".to_string(),
            hourly_rate: dec("15.00"),
            tip_rate_multiplier: dec(multiplier),
            wedding_hourly_rate: None,
            is_coffee_worker: false,
            gusto_tips_only: false,
            is_active: true,
            notes: None,
        }
    }

    #[test]
    fn test_deserialize_minimal_employee_applies_defaults() {
        let json = r#"{
            "id": "emp_001",
            "name": "Sam",
            "role": "bartender",
            "hourly_rate": "15.00"
        }"#;

        let employee: Employee = serde_json::from_str(json).unwrap();
        assert_eq!(employee.id, "emp_001");
        assert_eq!(employee.hourly_rate, dec("15.00"));
        assert_eq!(employee.tip_rate_multiplier, Decimal::ONE);
        assert_eq!(employee.wedding_hourly_rate, None);
        assert!(!employee.is_coffee_worker);
        assert!(!employee.gusto_tips_only);
        assert!(employee.is_active);
        assert!(employee.notes.is_none());
    }

    #[test]
    fn test_deserialize_coffee_worker() {
        let json = r#"{
            "id": "emp_002",
            "name": "Robin",
            "role": "barista",
            "hourly_rate": "15.00",
            "is_coffee_worker": true,
            "notes": "mornings only"
        }"#;

        let employee: Employee = serde_json::from_str(json).unwrap();
        assert!(employee.is_coffee_worker);
        assert_eq!(employee.notes.as_deref(), Some("mornings only"));
    }

    #[test]
    fn test_serialize_employee_round_trip() {
        let employee = create_test_employee("1.0");
        let json = serde_json::to_string(&employee).unwrap();
        let deserialized: Employee = serde_json::from_str(&json).unwrap();
        assert_eq!(employee, deserialized);
    }

    #[test]
    fn test_is_reduced_rate_below_one() {
        assert!(create_test_employee("0.25").is_reduced_rate());
    }

    #[test]
    fn test_is_reduced_rate_false_at_one() {
        assert!(!create_test_employee("1.0").is_reduced_rate());
        assert!(!create_test_employee("1.00").is_reduced_rate());
    }

    #[test]
    fn test_wedding_rate_falls_back_to_default() {
        let employee = create_test_employee("1.0");
        assert_eq!(employee.wedding_rate(dec("30")), dec("30"));
    }

    #[test]
    fn test_wedding_rate_uses_override() {
        let mut employee = create_test_employee("1.0");
        employee.wedding_hourly_rate = Some(dec("35.00"));
        assert_eq!(employee.wedding_rate(dec("30")), dec("35.00"));
    }
}
