//! Integration tests for the Severance Engine HTTP API.
//!
//! This test suite covers:
//! - Dismissal without cause, resignation and mutual agreement scenarios
//! - Notice extension by completed years and its cap
//! - Half-month proration and zero-length service boundaries
//! - The raw calculator form endpoint
//! - Error cases

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use rust_decimal::Decimal;
use serde_json::{Value, json};
use std::str::FromStr;
use tower::ServiceExt;

use severance_engine::api::{AppState, create_router};
use severance_engine::config::ConfigLoader;

// =============================================================================
// Test Helpers
// =============================================================================

fn create_test_state() -> AppState {
    let config = ConfigLoader::load("./config/clt").expect("Failed to load config");
    AppState::new(config)
}

fn create_router_for_test() -> Router {
    create_router(create_test_state())
}

fn decimal(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

async fn post(router: Router, uri: &str, body: Value) -> (StatusCode, Value) {
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

async fn post_calculate(body: Value) -> (StatusCode, Value) {
    post(create_router_for_test(), "/calculate", body).await
}

fn create_request(
    termination_type: &str,
    base_salary: &str,
    start_date: &str,
    end_date: &str,
    fund_balance: &str,
) -> Value {
    json!({
        "termination_type": termination_type,
        "compensation": { "base_salary": base_salary },
        "start_date": start_date,
        "end_date": end_date,
        "accrued_vacation_days": 0,
        "severance_fund_balance": fund_balance
    })
}

/// Returns the amount of the line of `kind`, if the result has one.
fn line_amount(response: &Value, kind: &str) -> Option<Decimal> {
    response["result"]["lines"]
        .as_array()
        .unwrap()
        .iter()
        .find(|line| line["kind"] == kind)
        .map(|line| decimal(line["amount"].as_str().unwrap()))
}

fn assert_line_rounded(response: &Value, kind: &str, expected: &str) {
    let actual = line_amount(response, kind)
        .unwrap_or_else(|| panic!("Expected a {} line", kind))
        .round_dp(2);
    assert_eq!(
        actual,
        decimal(expected),
        "Expected {} to be {}, got {}",
        kind,
        expected,
        actual
    );
}

fn total(response: &Value) -> Decimal {
    decimal(response["result"]["total"].as_str().unwrap())
}

fn statement_labels(response: &Value) -> Vec<String> {
    response["statement"]["lines"]
        .as_array()
        .unwrap()
        .iter()
        .map(|line| line["label"].as_str().unwrap().to_string())
        .collect()
}

// =============================================================================
// SECTION 1: Dismissal Without Cause
// =============================================================================

#[tokio::test]
async fn test_one_year_dismissal_reference_scenario() {
    // 3000 salary, exactly one year, 2880 fund balance
    // Notice: 33 days = 3300; penalty 40% = 1152; deposit 8% = 240
    let (status, response) = post_calculate(create_request(
        "without_cause",
        "3000",
        "2023-01-10",
        "2024-01-10",
        "2880",
    ))
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(line_amount(&response, "notice_indemnity"), Some(decimal("3300")));
    assert_eq!(line_amount(&response, "fund_penalty"), Some(decimal("1152")));
    assert_eq!(line_amount(&response, "monthly_fund_deposit"), Some(decimal("240")));
    assert_eq!(total(&response), decimal("4692"));

    assert_eq!(
        statement_labels(&response),
        vec!["Aviso Prévio Indenizado", "Multa FGTS (40%)", "FGTS do Mês (8%)"]
    );
    assert_eq!(response["statement"]["total"], "R$\u{a0}4.692,00");
}

#[tokio::test]
async fn test_dismissal_with_integrated_salary_and_vacation() {
    let body = json!({
        "termination_type": "without_cause",
        "compensation": {
            "base_salary": "3000",
            "average_overtime_pay": "500",
            "average_commissions": "800",
            "other_allowances": "400"
        },
        "start_date": "2019-03-01",
        "end_date": "2024-08-20",
        "accrued_vacation_days": 30,
        "severance_fund_balance": "15000"
    });

    let (status, response) = post_calculate(body).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(decimal(response["result"]["integrated_salary"].as_str().unwrap()), decimal("4700"));
    assert_line_rounded(&response, "salary_balance", "2976.67");
    assert_line_rounded(&response, "notice_indemnity", "7050.00");
    assert_line_rounded(&response, "proportional_thirteenth", "2350.00");
    assert_line_rounded(&response, "proportional_vacation", "3133.33");
    assert_line_rounded(&response, "accrued_vacation", "6266.67");
    assert_line_rounded(&response, "fund_penalty", "6000.00");
    assert_line_rounded(&response, "monthly_fund_deposit", "376.00");
    assert_eq!(response["statement"]["total"], "R$\u{a0}28.152,67");
}

#[tokio::test]
async fn test_notice_extension_is_capped_at_ninety_days() {
    // 25 completed years: 30 + min(75, 60) = 90 days
    let (status, response) = post_calculate(create_request(
        "without_cause",
        "3000",
        "1999-01-10",
        "2024-01-10",
        "0",
    ))
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(line_amount(&response, "notice_indemnity"), Some(decimal("9000")));
}

#[tokio::test]
async fn test_partial_year_does_not_extend_notice() {
    // 11 months, 30 days: no completed year
    let (status, response) = post_calculate(create_request(
        "without_cause",
        "3000",
        "2023-01-10",
        "2024-01-09",
        "0",
    ))
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(response["result"]["span"]["total_months"], 11);
    assert_eq!(line_amount(&response, "notice_indemnity"), Some(decimal("3000")));
}

// =============================================================================
// SECTION 2: Employee Resignation
// =============================================================================

#[tokio::test]
async fn test_resignation_has_no_employer_lines() {
    let (status, response) = post_calculate(create_request(
        "employee_resignation",
        "3000",
        "2020-03-01",
        "2024-06-20",
        "20000",
    ))
    .await;

    assert_eq!(status, StatusCode::OK);
    assert!(line_amount(&response, "notice_indemnity").is_none());
    assert!(line_amount(&response, "fund_penalty").is_none());
    assert!(line_amount(&response, "monthly_fund_deposit").is_none());

    // 4 years, 3 months, 19 days: balance 1900, 4 months of 13th 1000,
    // vacation 1000 + 1/3
    assert_line_rounded(&response, "salary_balance", "1900.00");
    assert_line_rounded(&response, "proportional_thirteenth", "1000.00");
    assert_line_rounded(&response, "proportional_vacation", "1333.33");
    assert_eq!(total(&response).round_dp(2), decimal("4233.33"));
}

#[tokio::test]
async fn test_resignation_accepts_form_code() {
    let (status, response) = post_calculate(create_request(
        "pedidoDemissao",
        "3000",
        "2023-01-10",
        "2024-01-10",
        "0",
    ))
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(response["result"]["termination_type"], "employee_resignation");
    assert_eq!(total(&response), Decimal::ZERO);
    assert!(statement_labels(&response).is_empty());
}

// =============================================================================
// SECTION 3: Mutual Agreement
// =============================================================================

#[tokio::test]
async fn test_mutual_agreement_halves_notice_and_penalty() {
    let (status, response) = post_calculate(create_request(
        "mutual_agreement",
        "3000",
        "2014-01-10",
        "2024-01-10",
        "10000",
    ))
    .await;

    assert_eq!(status, StatusCode::OK);
    // Half a salary regardless of the 10 completed years
    assert_eq!(line_amount(&response, "notice_indemnity"), Some(decimal("1500")));
    assert_eq!(line_amount(&response, "fund_penalty"), Some(decimal("2000")));
    assert_eq!(line_amount(&response, "monthly_fund_deposit"), Some(decimal("240")));
    assert_eq!(
        statement_labels(&response),
        vec!["Aviso Prévio (50%)", "Multa FGTS (20%)", "FGTS do Mês (8%)"]
    );
}

// =============================================================================
// SECTION 4: Boundaries
// =============================================================================

#[tokio::test]
async fn test_zero_length_service() {
    let (status, response) = post_calculate(create_request(
        "without_cause",
        "3000",
        "2024-03-04",
        "2024-03-04",
        "0",
    ))
    .await;

    assert_eq!(status, StatusCode::OK);
    let span = &response["result"]["span"];
    assert_eq!((span["years"].as_i64(), span["months"].as_i64(), span["days"].as_i64()), (Some(0), Some(0), Some(0)));
    assert_eq!(line_amount(&response, "salary_balance"), Some(Decimal::ZERO));
    assert_eq!(
        statement_labels(&response),
        vec!["Aviso Prévio Indenizado", "FGTS do Mês (8%)"]
    );
}

#[tokio::test]
async fn test_exact_half_month_rounds_up() {
    let (status, response) = post_calculate(create_request(
        "employee_resignation",
        "1200",
        "2024-01-01",
        "2024-03-16",
        "0",
    ))
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(response["result"]["span"]["days"], 15);
    assert_eq!(line_amount(&response, "proportional_thirteenth"), Some(decimal("300")));
}

#[tokio::test]
async fn test_fourteen_days_do_not_round_up() {
    let (status, response) = post_calculate(create_request(
        "employee_resignation",
        "1200",
        "2024-01-01",
        "2024-03-15",
        "0",
    ))
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(line_amount(&response, "proportional_thirteenth"), Some(decimal("200")));
}

#[tokio::test]
async fn test_negative_day_balance_is_reported() {
    let (status, response) = post_calculate(create_request(
        "employee_resignation",
        "3000",
        "2023-01-31",
        "2023-03-01",
        "0",
    ))
    .await;

    assert_eq!(status, StatusCode::OK);
    let warnings = response["result"]["audit_trace"]["warnings"].as_array().unwrap();
    assert_eq!(warnings.len(), 1);
    assert_eq!(warnings[0]["code"], "NEGATIVE_DAY_BALANCE");
    assert!(!statement_labels(&response).contains(&"Saldo de Salário".to_string()));
}

// =============================================================================
// SECTION 5: Calculator Form
// =============================================================================

#[tokio::test]
async fn test_form_matches_typed_request() {
    let form = json!({
        "termination_type": "semJustaCausa",
        "salary": "3000",
        "average_overtime_pay": "",
        "start_date": "2023-01-10",
        "end_date": "2024-01-10",
        "accrued_vacation_days": "",
        "severance_fund_balance": "2.880,00"
    });

    let (status, response) = post(create_router_for_test(), "/calculate/form", form).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(total(&response), decimal("4692"));
}

#[tokio::test]
async fn test_form_with_blank_end_date_is_rejected() {
    let form = json!({
        "termination_type": "acordo",
        "salary": "3000",
        "start_date": "2023-01-10",
        "end_date": ""
    });

    let (status, error) = post(create_router_for_test(), "/calculate/form", form).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["code"], "INVALID_DATE_RANGE");
}

// =============================================================================
// SECTION 6: Error Cases
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
async fn test_error_missing_base_salary() {
    let body = json!({
        "termination_type": "without_cause",
        "compensation": {},
        "start_date": "2023-01-10",
        "end_date": "2024-01-10"
    });

    let (status, error) = post_calculate(body).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["code"], "VALIDATION_ERROR");
    assert!(error["message"].as_str().unwrap().contains("missing field"));
}

#[tokio::test]
async fn test_error_zero_salary() {
    let (status, error) =
        post_calculate(create_request("without_cause", "0", "2023-01-10", "2024-01-10", "0")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["code"], "INVALID_SALARY");
}

#[tokio::test]
async fn test_error_end_before_start() {
    let (status, error) =
        post_calculate(create_request("without_cause", "3000", "2024-01-10", "2024-01-09", "0"))
            .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["code"], "INVALID_DATE_RANGE");
}

#[tokio::test]
async fn test_error_missing_dates() {
    let body = json!({
        "termination_type": "without_cause",
        "compensation": { "base_salary": "3000" }
    });

    let (status, error) = post_calculate(body).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["code"], "INVALID_DATE_RANGE");
}

#[tokio::test]
async fn test_error_vacation_days_out_of_range() {
    let mut body = create_request("without_cause", "3000", "2023-01-10", "2024-01-10", "0");
    body["accrued_vacation_days"] = json!(31);

    let (status, error) = post_calculate(body).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["code"], "INVALID_VACATION_DAYS");
}

#[tokio::test]
async fn test_error_negative_fund_balance() {
    let (status, error) =
        post_calculate(create_request("without_cause", "3000", "2023-01-10", "2024-01-10", "-1"))
            .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["code"], "INVALID_MONETARY_FIELD");
    assert_eq!(error["details"], "severance_fund_balance");
}

#[tokio::test]
async fn test_error_unknown_termination_type() {
    let (status, error) =
        post_calculate(create_request("with_cause", "3000", "2023-01-10", "2024-01-10", "0")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["code"], "INVALID_TERMINATION_TYPE");
}
