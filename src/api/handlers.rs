//! HTTP request handlers for the Paycheck Engine API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::IntoResponse,
    routing::post,
};
use chrono::Utc;
use rust_decimal::Decimal;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{calculate_weekly_pay, project_scenario};
use crate::error::{EngineError, EngineResult};
use crate::models::{
    AuditStep, AuditTrace, AuditWarning, CalculationResult, PaySettings, PeriodTotals,
    ScenarioProjection, WeekInput, WeekPay,
};

use super::request::CalculationRequest;
use super::response::{ApiError, ApiErrorResponse};
use super::state::AppState;

/// The number of weeks in a pay period.
const WEEKS_PER_PAY_PERIOD: usize = 2;

/// The maximum number of days in a week.
const MAX_DAYS_PER_WEEK: u32 = 7;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/calculate", post(calculate_handler))
        .with_state(state)
}

/// Handler for POST /calculate endpoint.
///
/// Accepts a calculation request and returns the calculated pay result.
async fn calculate_handler(
    State(state): State<AppState>,
    payload: Result<Json<CalculationRequest>, JsonRejection>,
) -> impl IntoResponse {
    // Generate correlation ID for request tracking
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing calculation request");

    // Handle JSON parsing errors
    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            let error = match rejection {
                JsonRejection::JsonDataError(err) => {
                    // Get the body text which contains the detailed error from serde
                    let body_text = err.body_text();
                    warn!(
                        correlation_id = %correlation_id,
                        error = %body_text,
                        "JSON data error"
                    );
                    // Check if it's a missing field error
                    if body_text.contains("missing field") {
                        ApiError::new("VALIDATION_ERROR", body_text)
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
                JsonRejection::MissingJsonContentType(_) => ApiError::new(
                    "MISSING_CONTENT_TYPE",
                    "Content-Type must be application/json",
                ),
                _ => ApiError::malformed_json("Failed to parse request body"),
            };
            return (
                StatusCode::BAD_REQUEST,
                [(header::CONTENT_TYPE, "application/json")],
                Json(error),
            )
                .into_response();
        }
    };

    // A pay period is always two weeks
    if request.weeks.len() != WEEKS_PER_PAY_PERIOD {
        warn!(
            correlation_id = %correlation_id,
            weeks = request.weeks.len(),
            "Wrong number of weeks"
        );
        let error = ApiError::validation_error(format!(
            "A pay period must contain exactly {} weeks, got {}",
            WEEKS_PER_PAY_PERIOD,
            request.weeks.len()
        ));
        return (
            StatusCode::BAD_REQUEST,
            [(header::CONTENT_TYPE, "application/json")],
            Json(error),
        )
            .into_response();
    }

    // Resolve settings against configured defaults and convert to domain types
    let config = state.config();
    let settings = request.settings.resolve(config.defaults());
    let weeks: Vec<WeekInput> = request.weeks.into_iter().map(Into::into).collect();

    // Constrain ranges before invoking the core, which does not validate them
    if let Err(err) = validate_inputs(&settings, &weeks) {
        warn!(
            correlation_id = %correlation_id,
            error = %err,
            "Request validation failed"
        );
        let api_error: ApiErrorResponse = err.into();
        return (
            api_error.status,
            [(header::CONTENT_TYPE, "application/json")],
            Json(api_error.error),
        )
            .into_response();
    }

    // Perform the calculation
    let start_time = Instant::now();
    match perform_calculation(&settings, &weeks, config.config()) {
        Ok(result) => {
            let duration = start_time.elapsed();
            info!(
                correlation_id = %correlation_id,
                taxable_gross = %result.totals.taxable_gross,
                after_tax = %result.totals.after_tax,
                duration_us = duration.as_micros(),
                "Calculation completed successfully"
            );
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "application/json")],
                Json(result),
            )
                .into_response()
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Calculation failed"
            );
            let api_error: ApiErrorResponse = err.into();
            (
                api_error.status,
                [(header::CONTENT_TYPE, "application/json")],
                Json(api_error.error),
            )
                .into_response()
        }
    }
}

/// Validates the ranges the core calculation assumes.
fn validate_inputs(settings: &PaySettings, weeks: &[WeekInput]) -> EngineResult<()> {
    if settings.base_weekly < Decimal::ZERO {
        return Err(EngineError::InvalidSettings {
            field: "base_weekly".to_string(),
            message: "must be non-negative".to_string(),
        });
    }
    if settings.site_bonus_per_day < Decimal::ZERO {
        return Err(EngineError::InvalidSettings {
            field: "site_bonus_per_day".to_string(),
            message: "must be non-negative".to_string(),
        });
    }
    if settings.tax_rate < Decimal::ZERO || settings.tax_rate > Decimal::ONE {
        return Err(EngineError::InvalidSettings {
            field: "tax_rate".to_string(),
            message: "must be a fraction between 0 and 1".to_string(),
        });
    }

    for (index, week) in weeks.iter().enumerate() {
        if week.hours < Decimal::ZERO {
            return Err(EngineError::InvalidWeek {
                index,
                message: "hours must be non-negative".to_string(),
            });
        }
        if week.days > MAX_DAYS_PER_WEEK {
            return Err(EngineError::InvalidWeek {
                index,
                message: format!("days must be between 0 and {}", MAX_DAYS_PER_WEEK),
            });
        }
        if week.per_diem_choices.len() != week.days as usize {
            return Err(EngineError::InvalidWeek {
                index,
                message: format!(
                    "expected {} per diem choices for {} days, got {}",
                    week.days,
                    week.days,
                    week.per_diem_choices.len()
                ),
            });
        }
    }

    Ok(())
}

/// Performs the pay-period calculation and the monthly projection.
fn perform_calculation(
    settings: &PaySettings,
    weeks: &[WeekInput],
    config: &crate::config::PayConfig,
) -> EngineResult<CalculationResult> {
    let start_time = Instant::now();
    let mut all_audit_steps: Vec<AuditStep> = Vec::new();
    let all_warnings: Vec<AuditWarning> = Vec::new();
    let mut step_number: u32 = 1;

    // Calculate each pay-period week
    let mut week_pays: Vec<WeekPay> = Vec::with_capacity(weeks.len());
    for week in weeks {
        let outcome = calculate_weekly_pay(week, settings, config, step_number)?;
        step_number += outcome.audit_steps.len() as u32;
        all_audit_steps.extend(outcome.audit_steps);
        week_pays.push(outcome.pay);
    }

    // Combine the period totals
    let totals = PeriodTotals {
        taxable_gross: week_pays.iter().map(|w| w.taxable_gross).sum(),
        per_diem: week_pays.iter().map(|w| w.per_diem).sum(),
        after_tax: week_pays.iter().map(|w| w.after_tax).sum(),
    };

    // Project the configured monthly scenarios, in display order
    let mut monthly_projection: Vec<ScenarioProjection> = Vec::new();
    for scenario in config.scenarios() {
        let outcome = project_scenario(scenario, settings, config, step_number)?;
        step_number += outcome.audit_steps.len() as u32;
        all_audit_steps.extend(outcome.audit_steps);
        monthly_projection.push(outcome.projection);
    }

    let duration_us = start_time.elapsed().as_micros() as u64;

    Ok(CalculationResult {
        calculation_id: Uuid::new_v4(),
        timestamp: Utc::now(),
        engine_version: env!("CARGO_PKG_VERSION").to_string(),
        weeks: week_pays,
        totals,
        monthly_projection,
        audit_trace: AuditTrace {
            steps: all_audit_steps,
            warnings: all_warnings,
            duration_us,
        },
    })
}
