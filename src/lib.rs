//! Tip Pool Engine for a multi-venue hospitality business
//!
//! This crate calculates a week's pay for bar, coffee and wedding staff: it
//! pools the week's tips, carves out reduced-rate workers, splits wedding tips
//! equally, guarantees the coffee worker a minimum hourly rate, and produces
//! the hours/rate/tips entries an operator keys into the external payroll
//! system.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
