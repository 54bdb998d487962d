//! Payroll week snapshot model.
//!
//! A [`PayrollWeek`] is the shape a caller persists once a calculation has been
//! reviewed. The calculation inside is never recomputed; the only permitted
//! change is moving the week from draft to final.

use chrono::{DateTime, Datelike, Days, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{EngineError, EngineResult};

use super::PayrollCalculation;

/// Lifecycle status of a payroll week.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PayrollStatus {
    /// Calculated but still open for review.
    Draft,
    /// Reviewed and locked.
    Final,
}

/// Returns the Monday-to-Sunday week containing `date`.
///
/// # Example
///
/// ```
/// use tip_pool_engine::models::week_bounds;
/// use chrono::NaiveDate;
///
/// // Thursday 2026-03-12
/// let (start, end) = week_bounds(NaiveDate::from_ymd_opt(2026, 3, 12).unwrap());
/// assert_eq!(start, NaiveDate::from_ymd_opt(2026, 3, 9).unwrap());
/// assert_eq!(end, NaiveDate::from_ymd_opt(2026, 3, 15).unwrap());
/// ```
pub fn week_bounds(date: NaiveDate) -> (NaiveDate, NaiveDate) {
    let offset = u64::from(date.weekday().num_days_from_monday());
    let monday = date - Days::new(offset);
    (monday, monday + Days::new(6))
}

/// A stored weekly payroll: the week's dates plus its calculation snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollWeek {
    /// Unique identifier for this payroll week.
    pub id: Uuid,
    /// First day of the week (inclusive).
    pub week_start_date: NaiveDate,
    /// Last day of the week (inclusive).
    pub week_end_date: NaiveDate,
    /// Draft or final.
    pub status: PayrollStatus,
    /// When the snapshot was created.
    pub created_at: DateTime<Utc>,
    /// When the snapshot last changed status.
    pub updated_at: DateTime<Utc>,
    /// The version of the engine that produced the calculation.
    pub engine_version: String,
    /// The calculation snapshot.
    pub calculation: PayrollCalculation,
}

impl PayrollWeek {
    /// Creates a draft payroll week around a finished calculation.
    ///
    /// Returns [`EngineError::InvalidWeek`] if `week_end_date` is before
    /// `week_start_date`.
    pub fn draft(
        week_start_date: NaiveDate,
        week_end_date: NaiveDate,
        calculation: PayrollCalculation,
    ) -> EngineResult<Self> {
        if week_end_date < week_start_date {
            return Err(EngineError::InvalidWeek {
                start: week_start_date,
                end: week_end_date,
            });
        }

        let now = Utc::now();
        Ok(Self {
            id: Uuid::new_v4(),
            week_start_date,
            week_end_date,
            status: PayrollStatus::Draft,
            created_at: now,
            updated_at: now,
            engine_version: env!("CARGO_PKG_VERSION").to_string(),
            calculation,
        })
    }

    /// Locks the payroll week.
    ///
    /// Returns [`EngineError::PayrollFinalized`] if it is already final.
    pub fn finalize(&mut self) -> EngineResult<()> {
        if self.is_final() {
            return Err(EngineError::PayrollFinalized {
                payroll_id: self.id.to_string(),
            });
        }
        self.status = PayrollStatus::Final;
        self.updated_at = Utc::now();
        Ok(())
    }

    /// Returns true once the week has been finalized.
    pub fn is_final(&self) -> bool {
        self.status == PayrollStatus::Final
    }

    /// Checks if a date falls within the week, inclusive of both ends.
    pub fn contains_date(&self, date: NaiveDate) -> bool {
        date >= self.week_start_date && date <= self.week_end_date
    }
}
