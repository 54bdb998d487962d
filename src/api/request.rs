//! Request types for the Tip Pool Engine API.
//!
//! This module defines the JSON request structures for the `/calculate` and
//! `/payroll-weeks` endpoints.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{Employee, HoursInput};

/// Request body for the `/calculate` endpoint.
///
/// Contains the week's tip totals, the roster, and the hours worked.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculationRequest {
    /// Total tips recorded by the point-of-sale system.
    pub toast_tips: Decimal,
    /// Tips from the coffee counter.
    #[serde(default)]
    pub coffee_tips: Decimal,
    /// Tips from weddings and events.
    #[serde(default)]
    pub wedding_tips: Decimal,
    /// The roster. Inactive employees are ignored.
    pub employees: Vec<EmployeeRequest>,
    /// Hours worked during the week, one record per employee.
    pub hours: Vec<HoursRequest>,
}

/// Request body for the `/payroll-weeks` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PayrollWeekRequest {
    /// First day of the payroll week.
    pub week_start_date: NaiveDate,
    /// Last day of the payroll week. Defaults to the Sunday of the start week.
    #[serde(default)]
    pub week_end_date: Option<NaiveDate>,
    /// Total tips recorded by the point-of-sale system.
    pub toast_tips: Decimal,
    /// Tips from the coffee counter.
    #[serde(default)]
    pub coffee_tips: Decimal,
    /// Tips from weddings and events.
    #[serde(default)]
    pub wedding_tips: Decimal,
    /// The roster. Inactive employees are ignored.
    pub employees: Vec<EmployeeRequest>,
    /// Hours worked during the week.
    pub hours: Vec<HoursRequest>,
}

impl PayrollWeekRequest {
    /// Splits off the calculation part of the request.
    pub fn calculation(&self) -> CalculationRequest {
        CalculationRequest {
            toast_tips: self.toast_tips,
            coffee_tips: self.coffee_tips,
            wedding_tips: self.wedding_tips,
            employees: self.employees.clone(),
            hours: self.hours.clone(),
        }
    }
}

/// Employee information in a calculation request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeeRequest {
    /// Unique identifier for the employee.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Free-form role label.
    #[serde(default)]
    pub role: String,
    /// Base hourly wage.
    pub hourly_rate: Decimal,
    /// Share of the standard tip rate (1.0 = standard).
    #[serde(default = "crate::models::default_tip_rate_multiplier")]
    pub tip_rate_multiplier: Decimal,
    /// Optional wedding hourly rate override.
    #[serde(default)]
    pub wedding_hourly_rate: Option<Decimal>,
    /// Works the coffee counter.
    #[serde(default)]
    pub is_coffee_worker: bool,
    /// Reports all compensation as tips.
    #[serde(default)]
    pub gusto_tips_only: bool,
    /// Whether the employee is on the active roster.
    #[serde(default = "crate::models::default_active")]
    pub is_active: bool,
    /// Optional free-text notes.
    #[serde(default)]
    pub notes: Option<String>,
}

/// Hours information in a calculation request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HoursRequest {
    /// The employee these hours belong to.
    pub employee_id: String,
    /// Hours worked behind the bar.
    #[serde(default)]
    pub bar_hours: Decimal,
    /// Hours worked at the coffee counter.
    #[serde(default)]
    pub coffee_hours: Decimal,
    /// Hours worked at weddings or events.
    #[serde(default)]
    pub wedding_hours: Decimal,
    /// Non-service labor hours.
    #[serde(default)]
    pub labor_hours: Decimal,
}

impl From<EmployeeRequest> for Employee {
    fn from(req: EmployeeRequest) -> Self {
        Employee {
            id: req.id,
            name: req.name,
            role: req.role,
            hourly_rate: req.hourly_rate,
            tip_rate_multiplier: req.tip_rate_multiplier,
            wedding_hourly_rate: req.wedding_hourly_rate,
            is_coffee_worker: req.is_coffee_worker,
            gusto_tips_only: req.gusto_tips_only,
            is_active: req.is_active,
            notes: req.notes,
        }
    }
}

impl From<HoursRequest> for HoursInput {
    fn from(req: HoursRequest) -> Self {
        HoursInput {
            employee_id: req.employee_id,
            bar_hours: req.bar_hours,
            coffee_hours: req.coffee_hours,
            wedding_hours: req.wedding_hours,
            labor_hours: req.labor_hours,
        }
    }
}
