//! HTTP request handlers for the Tip Pool Engine API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{PayrollEngine, validate_payroll_inputs};
use crate::error::EngineResult;
use crate::models::{Employee, HoursInput, PayrollCalculation, PayrollWeek, week_bounds};

use super::request::{CalculationRequest, PayrollWeekRequest};
use super::response::{ApiError, ApiErrorResponse, PolicyResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/calculate", post(calculate_handler))
        .route("/payroll-weeks", post(payroll_week_handler))
        .route("/policy", get(policy_handler))
        .with_state(state)
}

/// Handler for POST /calculate endpoint.
///
/// Accepts the week's tips, roster and hours and returns the payroll breakdown.
async fn calculate_handler(
    State(state): State<AppState>,
    payload: Result<Json<CalculationRequest>, JsonRejection>,
) -> Response {
    // Generate correlation ID for request tracking
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing calculation request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(rejection, correlation_id),
    };

    let start_time = Instant::now();
    match run_calculation(state.engine(), request) {
        Ok(result) => {
            info!(
                correlation_id = %correlation_id,
                employee_count = result.employees.len(),
                total_pay = %result.total_payout(),
                warnings = result.audit_trace.warnings.len(),
                duration_us = start_time.elapsed().as_micros(),
                "Calculation completed successfully"
            );
            json_response(StatusCode::OK, result)
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Calculation rejected"
            );
            error_response(err.into())
        }
    }
}

/// Handler for POST /payroll-weeks endpoint.
///
/// Runs the calculation and wraps it in a draft payroll week snapshot.
async fn payroll_week_handler(
    State(state): State<AppState>,
    payload: Result<Json<PayrollWeekRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing payroll week request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(rejection, correlation_id),
    };

    let week_start = request.week_start_date;
    let week_end = request
        .week_end_date
        .unwrap_or_else(|| week_bounds(week_start).1);

    let result = run_calculation(state.engine(), request.calculation())
        .and_then(|calculation| PayrollWeek::draft(week_start, week_end, calculation));

    match result {
        Ok(week) => {
            info!(
                correlation_id = %correlation_id,
                payroll_id = %week.id,
                week_start = %week.week_start_date,
                week_end = %week.week_end_date,
                total_pay = %week.calculation.total_payout(),
                "Draft payroll week created"
            );
            json_response(StatusCode::CREATED, week)
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Payroll week rejected"
            );
            error_response(err.into())
        }
    }
}

/// Handler for GET /policy endpoint.
async fn policy_handler(State(state): State<AppState>) -> Json<PolicyResponse> {
    let config = state.config();
    Json(PolicyResponse {
        venue: config.venue().clone(),
        policy: config.policy().clone(),
        engine_version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Drops inactive employees, validates the inputs and runs the engine.
fn run_calculation(
    engine: &PayrollEngine,
    request: CalculationRequest,
) -> EngineResult<PayrollCalculation> {
    let employees: Vec<Employee> = request
        .employees
        .into_iter()
        .map(Employee::from)
        .filter(|e| e.is_active)
        .collect();
    let hours: Vec<HoursInput> = request.hours.into_iter().map(Into::into).collect();

    validate_payroll_inputs(
        request.toast_tips,
        request.coffee_tips,
        request.wedding_tips,
        &employees,
        &hours,
    )?;

    Ok(engine.calculate(
        request.toast_tips,
        request.coffee_tips,
        request.wedding_tips,
        &employees,
        &hours,
    ))
}

fn rejection_response(rejection: JsonRejection, correlation_id: Uuid) -> Response {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            // The body text carries serde's detailed error
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") {
                ApiError::validation_error(body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    };

    error_response(ApiErrorResponse {
        status: StatusCode::BAD_REQUEST,
        error,
    })
}

fn json_response<T: serde::Serialize>(status: StatusCode, body: T) -> Response {
    (
        status,
        [(header::CONTENT_TYPE, "application/json")],
        Json(body),
    )
        .into_response()
}

fn error_response(api_error: ApiErrorResponse) -> Response {
    json_response(api_error.status, api_error.error)
}
