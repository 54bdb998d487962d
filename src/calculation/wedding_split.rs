//! Wedding tip split.
//!
//! Wedding tips are split equally per worker regardless of hours worked.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{AuditStep, HoursInput};

use super::rounding::round_money;
use super::tip_pool::rate_or_zero;

/// The result of splitting wedding tips.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeddingSplitResult {
    /// Hours records with any wedding hours.
    pub worker_count: u32,
    /// Unrounded equal share per worker.
    pub tip_per_worker: Decimal,
    /// The audit step recording this split.
    pub audit_step: AuditStep,
}

/// Splits wedding tips equally among every hours record with wedding hours.
///
/// Every such record counts, matched to an employee or not.
///
/// # Examples
///
/// ```
/// use tip_pool_engine::calculation::split_wedding_tips;
/// use tip_pool_engine::models::HoursInput;
/// use rust_decimal::Decimal;
///
/// let hours: Vec<HoursInput> = ["a", "b", "c"]
///     .iter()
///     .map(|id| {
///         let mut h = HoursInput::new(*id);
///         h.wedding_hours = Decimal::new(5, 0);
///         h
///     })
///     .collect();
///
/// let result = split_wedding_tips(Decimal::new(300, 0), &hours, 1);
/// assert_eq!(result.worker_count, 3);
/// assert_eq!(result.tip_per_worker, Decimal::new(100, 0));
/// ```
pub fn split_wedding_tips(
    wedding_tips: Decimal,
    hours: &[HoursInput],
    step_number: u32,
) -> WeddingSplitResult {
    let worker_count = hours
        .iter()
        .filter(|h| h.wedding_hours > Decimal::ZERO)
        .count() as u32;
    let tip_per_worker = rate_or_zero(wedding_tips, Decimal::from(worker_count));

    let reasoning = if worker_count == 0 {
        "No wedding hours worked - wedding tips not split".to_string()
    } else {
        format!(
            "${} / {} workers = ${} each",
            wedding_tips.normalize(),
            worker_count,
            round_money(tip_per_worker).normalize()
        )
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "wedding_tip_split".to_string(),
        rule_name: "Wedding Tip Split".to_string(),
        input: serde_json::json!({
            "wedding_tips": wedding_tips.normalize().to_string(),
            "wedding_worker_count": worker_count
        }),
        output: serde_json::json!({
            "wedding_tip_per_worker": round_money(tip_per_worker).to_string()
        }),
        reasoning,
    };

    WeddingSplitResult {
        worker_count,
        tip_per_worker,
        audit_step,
    }
}
