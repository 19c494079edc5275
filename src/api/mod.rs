use axum::{
    Router,
    extract::{Json, rejection::JsonRejection},
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde::Serialize;
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tracing::info;

use crate::core::{AnalysisResult, FinancialInput, compute_audit};
use crate::error::AppError;

const MAX_AGE: u32 = 120;
/// Upper bound on any single amount. Keeps sums and compounding finite.
const MAX_AMOUNT: f64 = 1e12;

#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: String,
}

#[derive(Debug, Serialize)]
struct HealthResponse {
    status: &'static str,
}

pub fn router() -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route("/api/audit", post(audit_handler))
        .route("/api/generateFinancialInsights", post(audit_handler))
        .fallback(not_found_handler)
}

pub async fn run_http_server(addr: SocketAddr) -> std::io::Result<()> {
    let listener = TcpListener::bind(addr).await?;
    info!(%addr, "wealth audit API listening");
    axum::serve(listener, router()).await
}

async fn health_handler() -> Response {
    json_response(StatusCode::OK, HealthResponse { status: "ok" })
}

async fn not_found_handler() -> Response {
    error_response(StatusCode::NOT_FOUND, "Not found")
}

async fn audit_handler(
    payload: Result<Json<FinancialInput>, JsonRejection>,
) -> Result<Response, AppError> {
    let Json(mut input) = payload.map_err(|rejection| {
        AppError::InvalidInput(format!("Invalid audit payload: {}", rejection.body_text()))
    })?;
    validate_input(&mut input).map_err(AppError::InvalidInput)?;

    let result = compute_audit(&input);
    log_audit(&result);
    Ok(json_response(StatusCode::OK, result))
}

/// Records the outcome of an audit without any of the household's answers.
pub fn log_audit(result: &AnalysisResult) {
    info!(
        headline = %result.headline,
        triggered = result.compliance.triggered_alert_ids.len(),
        presented = ?result.compliance.presented_alert_ids,
        "audit completed"
    );
}

/// Boundary checks applied before the engine runs. Normalizes the state code
/// in place.
pub fn validate_input(input: &mut FinancialInput) -> Result<(), String> {
    let currency_fields = [
        ("annualBaseIncome", input.annual_base_income),
        ("annualVariableComp", input.annual_variable_comp),
        ("lastYearTotalComp", input.last_year_total_comp),
        ("equityGrantValue", input.equity_grant_value),
        ("monthlyTakeHome", input.monthly_take_home),
        ("monthlySpending", input.monthly_spending),
        ("netWorth", input.net_worth),
        ("retirementBalance", input.retirement_balance),
        ("cashHoldings", input.cash_holdings),
        ("monthlyHousingPayment", input.monthly_housing_payment),
        ("mortgageBalance", input.mortgage_balance),
        ("homeValue", input.home_value),
    ];
    for (name, value) in currency_fields {
        if !(0.0..=MAX_AMOUNT).contains(&value) {
            return Err(format!("{name} must be between 0 and {MAX_AMOUNT}"));
        }
    }

    if input.age > MAX_AGE {
        return Err(format!("age must be <= {MAX_AGE}"));
    }

    let state = input.state.trim().to_ascii_uppercase();
    let two_letters = state.len() == 2 && state.bytes().all(|b| b.is_ascii_alphabetic());
    if !state.is_empty() && !two_letters {
        return Err("state must be a two-letter code".to_string());
    }
    input.state = state;

    Ok(())
}

pub(crate) fn json_response<T: Serialize>(status: StatusCode, body: T) -> Response {
    let mut response = (status, Json(body)).into_response();
    response
        .headers_mut()
        .insert(header::CACHE_CONTROL, HeaderValue::from_static("no-store"));
    response
}

pub(crate) fn error_response(status: StatusCode, msg: impl Into<String>) -> Response {
    json_response(status, ErrorResponse { error: msg.into() })
}
