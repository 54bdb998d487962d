//! Configuration types for the tip pool.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from the YAML policy file.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Metadata about the venue the policy applies to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VenueMetadata {
    /// The venue's display name.
    pub name: String,
    /// ISO currency code for all amounts (e.g. "USD").
    pub currency: String,
}

impl Default for VenueMetadata {
    fn default() -> Self {
        Self {
            name: "Default Venue".to_string(),
            currency: "USD".to_string(),
        }
    }
}

/// The fixed constants of the pay calculation.
///
/// The defaults are the house rules; loading a different policy file changes
/// the numbers but never the shape of the calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayPolicy {
    /// Effective hourly floor (base + tips) for the coffee worker.
    #[serde(default = "PayPolicy::default_coffee_minimum_hourly")]
    pub coffee_minimum_hourly: Decimal,
    /// Rate keyed into the external payroll system for labor hours of
    /// tips-only employees.
    #[serde(default = "PayPolicy::default_gusto_labor_rate")]
    pub gusto_labor_rate: Decimal,
    /// Wedding hourly rate used when an employee has none set.
    #[serde(default = "PayPolicy::default_wedding_hourly_rate")]
    pub default_wedding_hourly_rate: Decimal,
}

impl PayPolicy {
    fn default_coffee_minimum_hourly() -> Decimal {
        Decimal::new(2000, 2)
    }

    fn default_gusto_labor_rate() -> Decimal {
        Decimal::new(2200, 2)
    }

    fn default_wedding_hourly_rate() -> Decimal {
        Decimal::new(3000, 2)
    }
}

impl Default for PayPolicy {
    fn default() -> Self {
        Self {
            coffee_minimum_hourly: Self::default_coffee_minimum_hourly(),
            gusto_labor_rate: Self::default_gusto_labor_rate(),
            default_wedding_hourly_rate: Self::default_wedding_hourly_rate(),
        }
    }
}

/// Structure of `policy.yaml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PolicyConfig {
    /// Venue metadata.
    #[serde(default)]
    pub venue: VenueMetadata,
    /// Pay policy constants.
    #[serde(default)]
    pub policy: PayPolicy,
}
