//! HTTP request handlers for the payroll engine API.
//!
//! This module contains the handler functions for all operator commands.

use axum::{
    Json, Router,
    extract::{Path, Query, State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde::Deserialize;
use tracing::{error, info, warn};
use uuid::Uuid;

use crate::batch::{bulk_transition, generate_batch};
use crate::error::PayrollError;
use crate::lifecycle::{TransitionRequest, apply_transition};
use crate::models::PayPeriod;

use super::request::{BulkTransitionBody, GenerateBatchBody, TransitionBody};
use super::response::{ApiError, ApiErrorResponse, PayrollRecordView};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/payroll/batches", post(generate_batch_handler))
        .route("/payroll/records", get(list_records_handler))
        .route("/payroll/records/transitions", post(bulk_transition_handler))
        .route("/payroll/records/:id", get(get_record_handler))
        .route("/payroll/records/:id/transition", post(transition_handler))
        .with_state(state)
}

/// Maps a JSON extraction rejection to an error response, preserving the
/// detailed serde message for data errors.
fn json_rejection_response(correlation_id: Uuid, rejection: JsonRejection) -> Response {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
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
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    };
    (
        StatusCode::BAD_REQUEST,
        [(header::CONTENT_TYPE, "application/json")],
        Json(error),
    )
        .into_response()
}

/// Maps an engine error to its HTTP response, logging the programming-defect
/// class at error level.
fn engine_error_response(correlation_id: Uuid, error: PayrollError) -> Response {
    match &error {
        PayrollError::InvalidEarnings { message } => {
            error!(
                correlation_id = %correlation_id,
                error = %message,
                "Structurally invalid monetary value reached the API boundary"
            );
        }
        other => {
            warn!(correlation_id = %correlation_id, error = %other, "Request failed");
        }
    }
    let response: ApiErrorResponse = error.into();
    response.into_response()
}

/// Handler for `POST /payroll/batches`.
///
/// Runs batch generation for a period and returns the batch report. The
/// per-employee fan-out is CPU-bound, so it runs on the blocking pool.
async fn generate_batch_handler(
    State(state): State<AppState>,
    payload: Result<Json<GenerateBatchBody>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing batch generation request");

    let body = match payload {
        Ok(Json(body)) => body,
        Err(rejection) => return json_rejection_response(correlation_id, rejection),
    };

    let (request, inputs) = match body.into_parts() {
        Ok(parts) => parts,
        Err(err) => return engine_error_response(correlation_id, err),
    };

    let config = state.config_handle();
    let store = state.store_handle();
    let employee_count = inputs.len();

    let joined = tokio::task::spawn_blocking(move || {
        generate_batch(store.as_ref(), &config, &request, inputs)
    })
    .await;

    let result = match joined {
        Ok(result) => result,
        Err(join_error) => {
            error!(correlation_id = %correlation_id, error = %join_error, "Batch task failed");
            return ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::new("INTERNAL_ERROR", "Batch generation task failed"),
            }
            .into_response();
        }
    };

    match result {
        Ok(run) => {
            info!(
                correlation_id = %correlation_id,
                period = %run.period,
                employees = employee_count,
                generated = run.generated.len(),
                skipped = run.skipped.len(),
                failed = run.failed.len(),
                "Batch generation request completed"
            );
            (StatusCode::OK, Json(run)).into_response()
        }
        Err(err) => engine_error_response(correlation_id, err),
    }
}

/// Handler for `POST /payroll/records/{id}/transition`.
///
/// Applies one lifecycle transition to one record. The version check on
/// update serializes concurrent transitions against the same record.
async fn transition_handler(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    payload: Result<Json<TransitionBody>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();

    let body = match payload {
        Ok(Json(body)) => body,
        Err(rejection) => return json_rejection_response(correlation_id, rejection),
    };
    let request: TransitionRequest = body.into();

    info!(
        correlation_id = %correlation_id,
        record_id = %id,
        target_status = %request.target,
        "Processing transition request"
    );

    let outcome = (|| {
        let mut record = state.store().get(id)?;
        apply_transition(&mut record, &request)?;
        state.store().update(record)
    })();

    match outcome {
        Ok(updated) => {
            info!(
                correlation_id = %correlation_id,
                record_id = %id,
                status = %updated.status,
                "Transition applied"
            );
            (StatusCode::OK, Json(PayrollRecordView::from(updated))).into_response()
        }
        Err(err) => engine_error_response(correlation_id, err),
    }
}

/// Handler for `POST /payroll/records/transitions`.
///
/// Applies one transition to a set of records with per-record outcomes.
/// Partial failure is an expected result, not an error, so the response is
/// always 200 with the outcome report.
async fn bulk_transition_handler(
    State(state): State<AppState>,
    payload: Result<Json<BulkTransitionBody>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();

    let body = match payload {
        Ok(Json(body)) => body,
        Err(rejection) => return json_rejection_response(correlation_id, rejection),
    };

    let request: TransitionRequest = body.transition.into();
    info!(
        correlation_id = %correlation_id,
        records = body.record_ids.len(),
        target_status = %request.target,
        "Processing bulk transition request"
    );

    let outcome = bulk_transition(state.store(), &body.record_ids, &request);
    (StatusCode::OK, Json(outcome)).into_response()
}

/// Handler for `GET /payroll/records/{id}`.
async fn get_record_handler(State(state): State<AppState>, Path(id): Path<Uuid>) -> Response {
    let correlation_id = Uuid::new_v4();
    match state.store().get(id) {
        Ok(record) => {
            (StatusCode::OK, Json(PayrollRecordView::from(record))).into_response()
        }
        Err(err) => engine_error_response(correlation_id, err),
    }
}

/// Query parameters for the record listing.
#[derive(Debug, Deserialize)]
struct ListQuery {
    year: i32,
    month: u32,
}

/// Handler for `GET /payroll/records?year=&month=`.
async fn list_records_handler(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let period = match PayPeriod::new(query.year, query.month) {
        Ok(period) => period,
        Err(err) => return engine_error_response(correlation_id, err),
    };

    let views: Vec<PayrollRecordView> = state
        .store()
        .list_period(period)
        .into_iter()
        .map(PayrollRecordView::from)
        .collect();

    (StatusCode::OK, Json(views)).into_response()
}
