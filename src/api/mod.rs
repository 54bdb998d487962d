//! HTTP API module for the Tip Pool Engine.
//!
//! This module provides the REST API endpoints for calculating a week's
//! payroll, creating draft payroll week snapshots, and reading the active
//! pay policy.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{CalculationRequest, EmployeeRequest, HoursRequest, PayrollWeekRequest};
pub use response::{ApiError, ApiErrorResponse, PolicyResponse};
pub use state::AppState;
