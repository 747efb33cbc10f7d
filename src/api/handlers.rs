//! HTTP request handlers for the Benefit Eligibility Engine API.
//!
//! This module contains the handler functions for all API endpoints.

use axum::{
    Json, Router,
    body::Bytes,
    extract::{
        Query, State,
        rejection::{JsonRejection, QueryRejection},
    },
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::post,
};
use chrono::NaiveDate;
use tracing::{info, warn};
use uuid::Uuid;

use crate::eligibility::classify_batch;
use crate::error::EngineResult;
use crate::models::{ClassificationReport, RawTable};
use crate::tabular::{DEFAULT_EXPORT_FILE_NAME, read_csv, to_csv_bytes};

use super::request::{ClassificationRequest, CsvClassificationQuery};
use super::response::{ApiError, ApiErrorResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/classify", post(classify_handler))
        .route("/classify/csv", post(classify_csv_handler))
        .with_state(state)
}

/// Handler for POST /classify.
///
/// Accepts JSON rows and returns the classification report as JSON.
async fn classify_handler(
    State(state): State<AppState>,
    payload: Result<Json<ClassificationRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing classification request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
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
            return ApiErrorResponse::new(StatusCode::BAD_REQUEST, error).into_response();
        }
    };

    let Some(reference_date) = state.reference_date(request.reference_date) else {
        warn!(correlation_id = %correlation_id, "No reference date supplied or configured");
        return ApiErrorResponse::new(StatusCode::BAD_REQUEST, ApiError::missing_reference_date())
            .into_response();
    };

    match run_classification(correlation_id, request.into_table(), reference_date) {
        Ok(report) => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, "application/json")],
            Json(report),
        )
            .into_response(),
        Err(err) => ApiErrorResponse::from(err).into_response(),
    }
}

/// Handler for POST /classify/csv.
///
/// Accepts a CSV roster body and returns the retained rows as a CSV download.
async fn classify_csv_handler(
    State(state): State<AppState>,
    query: Result<Query<CsvClassificationQuery>, QueryRejection>,
    body: Bytes,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(
        correlation_id = %correlation_id,
        body_bytes = body.len(),
        "Processing CSV classification request"
    );

    let query = match query {
        Ok(Query(query)) => query,
        Err(rejection) => {
            warn!(
                correlation_id = %correlation_id,
                error = %rejection.body_text(),
                "Query string rejected"
            );
            return ApiErrorResponse::new(
                StatusCode::BAD_REQUEST,
                ApiError::invalid_query(rejection.body_text()),
            )
            .into_response();
        }
    };

    let Some(reference_date) = state.reference_date(query.reference_date) else {
        warn!(correlation_id = %correlation_id, "No reference date supplied or configured");
        return ApiErrorResponse::new(StatusCode::BAD_REQUEST, ApiError::missing_reference_date())
            .into_response();
    };

    let exported = read_csv(body.as_ref(), "request body")
        .and_then(|table| run_classification(correlation_id, table, reference_date))
        .and_then(|report| to_csv_bytes(&report.records));

    match exported {
        Ok(csv) => (
            StatusCode::OK,
            [
                (header::CONTENT_TYPE, "text/csv; charset=utf-8".to_string()),
                (
                    header::CONTENT_DISPOSITION,
                    format!("attachment; filename=\"{}\"", DEFAULT_EXPORT_FILE_NAME),
                ),
            ],
            csv,
        )
            .into_response(),
        Err(err) => ApiErrorResponse::from(err).into_response(),
    }
}

/// Runs the batch and logs the outcome under the request's correlation id.
fn run_classification(
    correlation_id: Uuid,
    table: RawTable,
    reference_date: NaiveDate,
) -> EngineResult<ClassificationReport> {
    match classify_batch(table, reference_date) {
        Ok(report) => {
            info!(
                correlation_id = %correlation_id,
                run_id = %report.run_id,
                reference_date = %reference_date,
                rows = report.summary.total,
                retained = report.summary.retained(),
                "Classification request completed"
            );
            Ok(report)
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Classification failed"
            );
            Err(err)
        }
    }
}
