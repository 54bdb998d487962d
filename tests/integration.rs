//! Comprehensive integration tests for the Tip Pool Engine.
//!
//! This test suite drives the HTTP API and covers:
//! - Bar tip pool derivation
//! - Reduced-rate carve-out
//! - Coffee minimum guarantee
//! - Wedding tip split
//! - Tips-only external payroll entries
//! - A full mixed-roster week
//! - Payroll week snapshots and the policy endpoint
//! - Error cases

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use rust_decimal::Decimal;
use serde_json::{json, Value};
use std::str::FromStr;
use tower::ServiceExt;

use tip_pool_engine::api::{create_router, AppState};
use tip_pool_engine::config::ConfigLoader;

// =============================================================================
// Test Helpers
// =============================================================================

fn create_test_state() -> AppState {
    let config = ConfigLoader::load("./config/default").expect("Failed to load config");
    AppState::new(config)
}

fn create_router_for_test() -> Router {
    create_router(create_test_state())
}

fn decimal(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

/// Normalize decimal string by removing trailing zeros after decimal point
fn normalize_decimal(s: &str) -> String {
    Decimal::from_str(s).unwrap().normalize().to_string()
}

async fn post_json(router: Router, uri: &str, body: Value) -> (StatusCode, Value) {
    let response = router
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header("Content-Type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: Value = serde_json::from_slice(&body_bytes).unwrap();

    (status, json)
}

async fn post_calculate(router: Router, body: Value) -> (StatusCode, Value) {
    post_json(router, "/calculate", body).await
}

fn create_request(toast: &str, coffee: &str, wedding: &str, employees: Vec<Value>, hours: Vec<Value>) -> Value {
    json!({
        "toast_tips": toast,
        "coffee_tips": coffee,
        "wedding_tips": wedding,
        "employees": employees,
        "hours": hours
    })
}

fn bartender(id: &str, rate: &str) -> Value {
    json!({
        "id": id,
        "name": format!("Bartender {}", id),
        "role": "bartender",
        "hourly_rate": rate
    })
}

fn reduced_rate_bartender(id: &str, multiplier: &str) -> Value {
    json!({
        "id": id,
        "name": format!("Reduced {}", id),
        "role": "bartender",
        "hourly_rate": "15.00",
        "tip_rate_multiplier": multiplier
    })
}

fn coffee_worker(id: &str, rate: &str) -> Value {
    json!({
        "id": id,
        "name": format!("Barista {}", id),
        "role": "barista",
        "hourly_rate": rate,
        "is_coffee_worker": true
    })
}

fn tips_only_worker(id: &str) -> Value {
    json!({
        "id": id,
        "name": format!("Dual role {}", id),
        "role": "bartender",
        "hourly_rate": "15.00",
        "gusto_tips_only": true
    })
}

fn hours(id: &str, bar: &str, coffee: &str, wedding: &str, labor: &str) -> Value {
    json!({
        "employee_id": id,
        "bar_hours": bar,
        "coffee_hours": coffee,
        "wedding_hours": wedding,
        "labor_hours": labor
    })
}

fn find_employee<'a>(result: &'a Value, id: &str) -> &'a Value {
    result["employees"]
        .as_array()
        .unwrap()
        .iter()
        .find(|e| e["employee_id"] == id)
        .unwrap_or_else(|| panic!("employee {} not in result", id))
}

fn assert_decimal_field(value: &Value, field: &str, expected: &str) {
    let actual = value[field]
        .as_str()
        .unwrap_or_else(|| panic!("field {} missing or not a string", field));
    assert_eq!(
        normalize_decimal(actual),
        normalize_decimal(expected),
        "Expected {} {}, got {}",
        field,
        expected,
        actual
    );
}

fn has_warning(result: &Value, code: &str) -> bool {
    result["audit_trace"]["warnings"]
        .as_array()
        .unwrap()
        .iter()
        .any(|w| w["code"] == code)
}

// =============================================================================
// SECTION 1: Bar Tip Pool
// =============================================================================

#[tokio::test]
async fn test_bar_pool_split_by_hours() {
    let router = create_router_for_test();
    let request = create_request(
        "500.00",
        "0",
        "0",
        vec![bartender("a", "15.00"), bartender("b", "15.00")],
        vec![hours("a", "15", "0", "0", "0"), hours("b", "5", "0", "0", "0")],
    );

    let (status, result) = post_calculate(router, request).await;

    assert_eq!(status, StatusCode::OK);
    assert_decimal_field(&result, "bar_tip_pool", "500.00");
    assert_decimal_field(&result, "final_tip_rate", "25");
    assert_decimal_field(find_employee(&result, "a"), "tip_share", "375.00");
    assert_decimal_field(find_employee(&result, "b"), "tip_share", "125.00");
}

#[tokio::test]
async fn test_bar_pool_excludes_coffee_and_wedding_tips() {
    let router = create_router_for_test();
    let request = create_request(
        "1000.00",
        "100.00",
        "200.00",
        vec![bartender("a", "15.00")],
        vec![hours("a", "20", "0", "0", "0")],
    );

    let (_, result) = post_calculate(router, request).await;

    assert_decimal_field(&result, "total_pool", "1300.00");
    assert_decimal_field(&result, "bar_tip_pool", "700.00");
    assert_decimal_field(find_employee(&result, "a"), "tip_share", "700.00");
}

#[tokio::test]
async fn test_negative_bar_pool_warns_and_flows_through() {
    let router = create_router_for_test();
    let request = create_request(
        "100.00",
        "150.00",
        "0",
        vec![bartender("a", "15.00")],
        vec![hours("a", "10", "0", "0", "0")],
    );

    let (status, result) = post_calculate(router, request).await;

    assert_eq!(status, StatusCode::OK);
    assert_decimal_field(&result, "bar_tip_pool", "-50.00");
    assert_decimal_field(find_employee(&result, "a"), "tip_share", "-50.00");
    assert!(has_warning(&result, "NEGATIVE_BAR_POOL"));
}

#[tokio::test]
async fn test_no_bar_hours_gives_zero_rates() {
    let router = create_router_for_test();
    let request = create_request(
        "300.00",
        "0",
        "0",
        vec![bartender("a", "15.00")],
        vec![hours("a", "0", "0", "0", "4")],
    );

    let (status, result) = post_calculate(router, request).await;

    assert_eq!(status, StatusCode::OK);
    assert_decimal_field(&result, "total_bar_hours", "0");
    assert_decimal_field(&result, "initial_tip_rate", "0");
    assert_decimal_field(&result, "final_tip_rate", "0");
}

// =============================================================================
// SECTION 2: Reduced-Rate Carve-Out
// =============================================================================

#[tokio::test]
async fn test_reduced_rate_carve_out() {
    // 300 / 30h = 10.00; reduced worker takes 10h × 10 × 0.25 = 25;
    // remaining 275 over 20h = 13.75
    let router = create_router_for_test();
    let request = create_request(
        "300.00",
        "0",
        "0",
        vec![
            reduced_rate_bartender("r", "0.25"),
            bartender("a", "15.00"),
            bartender("b", "15.00"),
        ],
        vec![
            hours("r", "10", "0", "0", "0"),
            hours("a", "12", "0", "0", "0"),
            hours("b", "8", "0", "0", "0"),
        ],
    );

    let (_, result) = post_calculate(router, request).await;

    assert_decimal_field(&result, "initial_tip_rate", "10.0000");
    assert_decimal_field(&result, "josh_deduction", "25.00");
    assert_decimal_field(&result, "adjusted_pool", "275.00");
    assert_decimal_field(&result, "adjusted_hours", "20");
    assert_decimal_field(&result, "final_tip_rate", "13.75");
    assert_decimal_field(find_employee(&result, "r"), "tip_share", "25.00");
    assert_decimal_field(find_employee(&result, "a"), "tip_share", "165.00");
    assert_decimal_field(find_employee(&result, "b"), "tip_share", "110.00");
}

#[tokio::test]
async fn test_only_reduced_rate_workers() {
    let router = create_router_for_test();
    let request = create_request(
        "200.00",
        "0",
        "0",
        vec![reduced_rate_bartender("r", "0.5")],
        vec![hours("r", "10", "0", "0", "0")],
    );

    let (status, result) = post_calculate(router, request).await;

    assert_eq!(status, StatusCode::OK);
    assert_decimal_field(&result, "final_tip_rate", "0");
    assert_decimal_field(find_employee(&result, "r"), "tip_share", "100.00");
}

// =============================================================================
// SECTION 3: Coffee Minimum Guarantee
// =============================================================================

#[tokio::test]
async fn test_coffee_worker_above_floor() {
    let router = create_router_for_test();
    let request = create_request(
        "50.00",
        "50.00",
        "0",
        vec![coffee_worker("c", "15.00")],
        vec![hours("c", "0", "5", "0", "0")],
    );

    let (_, result) = post_calculate(router, request).await;
    let coffee = find_employee(&result, "c");

    assert_decimal_field(coffee, "coffee_pay", "50.00");
    assert_decimal_field(coffee, "top_up_amount", "0");
    assert_decimal_field(coffee, "total_pay", "125.00");
}

#[tokio::test]
async fn test_coffee_worker_topped_up() {
    // 20h × $14 = $280 + $40 tips = $16/hr, $4/hr short of $20
    let router = create_router_for_test();
    let request = create_request(
        "40.00",
        "40.00",
        "0",
        vec![coffee_worker("c", "14.00")],
        vec![hours("c", "0", "20", "0", "0")],
    );

    let (_, result) = post_calculate(router, request).await;
    let coffee = find_employee(&result, "c");

    assert_decimal_field(coffee, "base_wages", "280.00");
    assert_decimal_field(coffee, "top_up_amount", "80.00");
    assert_decimal_field(coffee, "gusto_hours_entry", "20");
    assert_decimal_field(coffee, "gusto_rate", "14.00");
    assert_decimal_field(coffee, "gusto_wages_entry", "360.00");
    assert_decimal_field(coffee, "gusto_tips_entry", "40.00");
    assert_decimal_field(coffee, "total_pay", "400.00");
}

#[tokio::test]
async fn test_multiple_coffee_workers_warn() {
    let router = create_router_for_test();
    let request = create_request(
        "60.00",
        "60.00",
        "0",
        vec![coffee_worker("c1", "15.00"), coffee_worker("c2", "15.00")],
        vec![hours("c1", "0", "4", "0", "0"), hours("c2", "0", "4", "0", "0")],
    );

    let (_, result) = post_calculate(router, request).await;

    assert!(has_warning(&result, "MULTIPLE_COFFEE_WORKERS"));
}

// =============================================================================
// SECTION 4: Wedding Tips
// =============================================================================

#[tokio::test]
async fn test_wedding_tips_split_equally() {
    let router = create_router_for_test();
    let request = create_request(
        "300.00",
        "0",
        "300.00",
        vec![bartender("a", "15.00"), bartender("b", "15.00"), bartender("c", "15.00")],
        vec![
            hours("a", "0", "0", "2", "0"),
            hours("b", "0", "0", "4", "0"),
            hours("c", "0", "0", "8", "0"),
        ],
    );

    let (_, result) = post_calculate(router, request).await;

    assert_eq!(result["wedding_worker_count"], 3);
    assert_decimal_field(&result, "wedding_tip_per_worker", "100.00");
    assert_decimal_field(find_employee(&result, "a"), "wedding_pay", "160.00");
    assert_decimal_field(find_employee(&result, "c"), "wedding_pay", "340.00");
}

#[tokio::test]
async fn test_wedding_custom_rate() {
    let router = create_router_for_test();
    let mut employee = bartender("a", "15.00");
    employee["wedding_hourly_rate"] = json!("35.00");
    let request = create_request(
        "50.00",
        "0",
        "50.00",
        vec![employee],
        vec![hours("a", "0", "0", "4", "0")],
    );

    let (_, result) = post_calculate(router, request).await;

    assert_decimal_field(find_employee(&result, "a"), "wedding_pay", "190.00");
}

// =============================================================================
// SECTION 5: Tips-Only External Payroll Entries
// =============================================================================

#[tokio::test]
async fn test_tips_only_entries() {
    let router = create_router_for_test();
    let request = create_request(
        "200.00",
        "0",
        "0",
        vec![tips_only_worker("d")],
        vec![hours("d", "10", "0", "0", "6")],
    );

    let (_, result) = post_calculate(router, request).await;
    let dual = find_employee(&result, "d");

    assert_decimal_field(dual, "gusto_hours_entry", "6");
    assert_decimal_field(dual, "gusto_rate", "22.00");
    assert_decimal_field(dual, "gusto_wages_entry", "132.00");
    assert_decimal_field(dual, "gusto_tips_entry", "350.00");
    assert_decimal_field(dual, "total_pay", "482.00");
}

// =============================================================================
// SECTION 6: Full Week
// =============================================================================

#[tokio::test]
async fn test_full_mixed_roster_week() {
    // Bar pool 2000 - 150 - 400 = 1450 over 58h = 25.00/hr.
    // Reduced worker: 10h × 25 × 0.25 = 62.50.
    // Final: 1387.50 / 48h = 28.90625/hr.
    let router = create_router_for_test();
    let request = create_request(
        "2000.00",
        "150.00",
        "400.00",
        vec![
            reduced_rate_bartender("josh", "0.25"),
            bartender("alex", "15.00"),
            bartender("blair", "16.00"),
            coffee_worker("casey", "14.00"),
            tips_only_worker("drew"),
        ],
        vec![
            hours("josh", "10", "0", "0", "0"),
            hours("alex", "22", "0", "5", "0"),
            hours("blair", "18", "0", "0", "0"),
            hours("casey", "0", "20", "0", "0"),
            hours("drew", "8", "0", "5", "10"),
        ],
    );

    let (status, result) = post_calculate(router, request).await;

    assert_eq!(status, StatusCode::OK);
    assert_decimal_field(&result, "total_pool", "2550.00");
    assert_decimal_field(&result, "bar_tip_pool", "1450.00");
    assert_decimal_field(&result, "total_bar_hours", "58");
    assert_decimal_field(&result, "initial_tip_rate", "25.0000");
    assert_decimal_field(&result, "josh_deduction", "62.50");
    assert_decimal_field(&result, "adjusted_pool", "1387.50");
    assert_decimal_field(&result, "final_tip_rate", "28.9063");
    assert_eq!(result["wedding_worker_count"], 2);
    assert_decimal_field(&result, "wedding_tip_per_worker", "200.00");

    let alex = find_employee(&result, "alex");
    assert_decimal_field(alex, "tip_share", "635.94");
    assert_decimal_field(alex, "wedding_pay", "350.00");
    assert_decimal_field(alex, "gusto_tips_entry", "985.94");
    assert_decimal_field(alex, "total_pay", "1315.94");

    assert_decimal_field(find_employee(&result, "blair"), "tip_share", "520.31");
    assert_decimal_field(find_employee(&result, "josh"), "total_pay", "212.50");
    assert_decimal_field(find_employee(&result, "casey"), "total_pay", "430.00");

    let drew = find_employee(&result, "drew");
    assert_decimal_field(drew, "tip_share", "231.25");
    assert_decimal_field(drew, "gusto_wages_entry", "220.00");
    assert_decimal_field(drew, "gusto_tips_entry", "701.25");
    assert_decimal_field(drew, "total_pay", "921.25");

    let tips: Decimal = result["employees"]
        .as_array()
        .unwrap()
        .iter()
        .map(|e| decimal(e["tip_share"].as_str().unwrap()))
        .sum();
    assert_eq!(tips, decimal("1450.00"));
}

#[tokio::test]
async fn test_zero_hours_and_inactive_employees_omitted() {
    let router = create_router_for_test();
    let mut inactive = bartender("gone", "15.00");
    inactive["is_active"] = json!(false);
    let request = create_request(
        "100.00",
        "0",
        "0",
        vec![bartender("a", "15.00"), bartender("idle", "15.00"), inactive],
        vec![
            hours("a", "10", "0", "0", "0"),
            hours("idle", "0", "0", "0", "0"),
            hours("gone", "5", "0", "0", "0"),
        ],
    );

    let (_, result) = post_calculate(router, request).await;
    let employees = result["employees"].as_array().unwrap();

    assert_eq!(employees.len(), 1);
    assert_eq!(employees[0]["employee_id"], "a");
    assert!(has_warning(&result, "UNMATCHED_HOURS"));
}

#[tokio::test]
async fn test_same_request_same_response() {
    let request = create_request(
        "812.47",
        "35.10",
        "90.00",
        vec![
            reduced_rate_bartender("r", "0.25"),
            bartender("a", "15.00"),
            coffee_worker("c", "14.00"),
        ],
        vec![
            hours("r", "7.5", "0", "0", "0"),
            hours("a", "13.25", "0", "3", "0"),
            hours("c", "0", "11", "0", "0"),
        ],
    );

    let (_, first) = post_calculate(create_router_for_test(), request.clone()).await;
    let (_, second) = post_calculate(create_router_for_test(), request).await;

    assert_eq!(first, second);
}

// =============================================================================
// SECTION 7: Payroll Weeks and Policy
// =============================================================================

#[tokio::test]
async fn test_create_payroll_week_with_explicit_end() {
    let router = create_router_for_test();
    let mut request = create_request(
        "200.00",
        "0",
        "0",
        vec![bartender("a", "15.00")],
        vec![hours("a", "10", "0", "0", "0")],
    );
    request["week_start_date"] = json!("2026-03-09");
    request["week_end_date"] = json!("2026-03-15");

    let (status, week) = post_json(router, "/payroll-weeks", request).await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(week["status"], "draft");
    assert_eq!(week["week_start_date"], "2026-03-09");
    assert_eq!(week["week_end_date"], "2026-03-15");
    assert!(week["id"].as_str().is_some());
    assert_decimal_field(&week["calculation"], "bar_tip_pool", "200.00");
}

#[tokio::test]
async fn test_payroll_week_missing_start_date() {
    let router = create_router_for_test();
    let request = create_request("200.00", "0", "0", vec![], vec![]);

    let (status, error) = post_json(router, "/payroll-weeks", request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_policy_endpoint() {
    let router = create_router_for_test();

    let response = router
        .oneshot(
            Request::builder()
                .method("GET")
                .uri("/policy")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let policy: Value = serde_json::from_slice(&body).unwrap();

    assert_decimal_field(&policy["policy"], "coffee_minimum_hourly", "20");
    assert_decimal_field(&policy["policy"], "gusto_labor_rate", "22");
    assert_decimal_field(&policy["policy"], "default_wedding_hourly_rate", "30");
}

// =============================================================================
// SECTION 8: Error Cases
// =============================================================================

#[tokio::test]
async fn test_error_malformed_json() {
    let router = create_router_for_test();

    let response = router
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/calculate")
                .header("Content-Type", "application/json")
                .body(Body::from("{invalid json"))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let error: Value = serde_json::from_slice(&body).unwrap();

    assert_eq!(error["code"], "MALFORMED_JSON");
}

#[tokio::test]
async fn test_error_missing_hours_array() {
    let router = create_router_for_test();
    let body = json!({
        "toast_tips": "100.00",
        "employees": []
    });

    let (status, error) = post_calculate(router, body).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(error["message"].as_str().unwrap().contains("missing field"));
}

#[tokio::test]
async fn test_error_negative_tips() {
    let router = create_router_for_test();
    let request = create_request("-10.00", "0", "0", vec![], vec![]);

    let (status, error) = post_calculate(router, request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["code"], "INVALID_TIPS");
}

#[tokio::test]
async fn test_error_negative_multiplier() {
    let router = create_router_for_test();
    let request = create_request(
        "100.00",
        "0",
        "0",
        vec![reduced_rate_bartender("r", "-0.5")],
        vec![hours("r", "10", "0", "0", "0")],
    );

    let (status, error) = post_calculate(router, request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["code"], "INVALID_EMPLOYEE");
}

#[tokio::test]
async fn test_error_oversized_tip() {
    let router = create_router_for_test();
    let request = create_request(
        "50000000000000000000000000000",
        "0",
        "0",
        vec![bartender("a", "15.00")],
        vec![hours("a", "10", "0", "0", "0")],
    );

    let (status, error) = post_calculate(router, request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["code"], "INVALID_TIPS");
}

#[tokio::test]
async fn test_error_tiny_nonzero_hours() {
    let router = create_router_for_test();
    let request = create_request(
        "100.00",
        "0",
        "0",
        vec![bartender("a", "15.00")],
        vec![hours("a", "0.0000000000000000000000000001", "0", "0", "0")],
    );

    let (status, error) = post_calculate(router, request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["code"], "INVALID_HOURS");
}

#[tokio::test]
async fn test_error_wrong_type_is_malformed() {
    let router = create_router_for_test();
    let body = json!({
        "toast_tips": "100.00",
        "employees": "not a list",
        "hours": []
    });

    let (status, error) = post_calculate(router, body).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["code"], "MALFORMED_JSON");
}
