//! HTTP request handlers for the salary engine API.
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
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{build_salary_report, entry_total, resolved_rate};
use crate::models::{ExpenseRecord, WorkLogEntry};

use super::request::{EntryTotalRequest, ReportRequest};
use super::response::{ApiError, EntryTotalResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/report", post(report_handler))
        .route("/entry-total", post(entry_total_handler))
        .with_state(state)
}

/// Turns a JSON extraction rejection into the API error body.
fn rejection_to_error(correlation_id: Uuid, rejection: JsonRejection) -> ApiError {
    match rejection {
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
        JsonRejection::MissingJsonContentType(_) => ApiError::new(
            "MISSING_CONTENT_TYPE",
            "Content-Type must be application/json",
        ),
        _ => ApiError::malformed_json("Failed to parse request body"),
    }
}

/// Handler for POST /report endpoint.
///
/// Accepts a subject's work-log entries and expenses and returns the full
/// salary report. Entries referencing unknown categories or unconfigured
/// rates contribute zero; they never fail the request.
async fn report_handler(
    State(state): State<AppState>,
    payload: Result<Json<ReportRequest>, JsonRejection>,
) -> impl IntoResponse {
    // Generate correlation ID for request tracking
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing report request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            let error = rejection_to_error(correlation_id, rejection);
            return (
                StatusCode::BAD_REQUEST,
                [(header::CONTENT_TYPE, "application/json")],
                Json(error),
            )
                .into_response();
        }
    };

    let subject_id = request.subject_id;
    let entries: Vec<WorkLogEntry> = request
        .entries
        .into_iter()
        .map(|e| e.into_entry(&subject_id))
        .collect();
    let expenses: Vec<ExpenseRecord> = request
        .expenses
        .into_iter()
        .map(|e| e.into_expense(&subject_id))
        .collect();

    let config = state.config();
    let rates = config.rate_table_for(&subject_id);

    let start_time = Instant::now();
    let report = build_salary_report(
        &subject_id,
        &entries,
        &expenses,
        config.catalog(),
        &rates,
    );
    let duration = start_time.elapsed();

    info!(
        correlation_id = %correlation_id,
        subject_id = %subject_id,
        entries_count = entries.len(),
        expenses_count = expenses.len(),
        salary_total = %report.totals.salary_total,
        net_amount = %report.totals.net_amount,
        duration_us = duration.as_micros(),
        "Report computed successfully"
    );

    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(report),
    )
        .into_response()
}

/// Handler for POST /entry-total endpoint.
///
/// Computes the total for a single entry, a spot-check wrapper over the
/// same calculator the report uses.
async fn entry_total_handler(
    State(state): State<AppState>,
    payload: Result<Json<EntryTotalRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            let error = rejection_to_error(correlation_id, rejection);
            return (
                StatusCode::BAD_REQUEST,
                [(header::CONTENT_TYPE, "application/json")],
                Json(error),
            )
                .into_response();
        }
    };

    let entry = request.entry.into_entry(&request.subject_id);
    let config = state.config();
    let rates = config.rate_table_for(&request.subject_id);

    let response = EntryTotalResponse {
        rate: resolved_rate(&entry, config.catalog(), &rates),
        total: entry_total(&entry, config.catalog(), &rates),
        entry_id: entry.id,
    };

    info!(
        correlation_id = %correlation_id,
        subject_id = %request.subject_id,
        entry_id = %response.entry_id,
        total = %response.total,
        "Entry total computed"
    );

    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(response),
    )
        .into_response()
}
