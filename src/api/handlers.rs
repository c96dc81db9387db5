//! HTTP request handlers for the rate engine API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::post,
};
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::PpmEstimateRequest;
use crate::error::EngineResult;
use crate::models::Pounds;

use super::request::{PpmEstimateBody, SitEstimateRequest};
use super::response::{ApiError, ApiErrorResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/estimates/sit", post(sit_estimate_handler))
        .route("/estimates/ppm", post(ppm_estimate_handler))
        .with_state(state)
}

/// Handler for POST /estimates/sit.
///
/// Computes destination SIT for the weight and days, then applies the
/// route's SIT discount.
async fn sit_estimate_handler(
    State(state): State<AppState>,
    payload: Result<Json<SitEstimateRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing SIT estimate request");

    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let start_time = Instant::now();
    let result = state.engine().sit_estimate(
        request.origin_zip,
        request.destination_zip,
        Pounds(request.weight_estimate),
        request.planned_move_date,
        request.days_in_storage,
    );
    respond(correlation_id, start_time, result)
}

/// Handler for POST /estimates/ppm.
///
/// Computes the itemized PPM estimate, gross and net of discounts.
async fn ppm_estimate_handler(
    State(state): State<AppState>,
    payload: Result<Json<PpmEstimateBody>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing PPM estimate request");

    let request: PpmEstimateRequest = match payload {
        Ok(Json(body)) => body.into(),
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let start_time = Instant::now();
    let result = state.engine().estimate_ppm(&request);
    respond(correlation_id, start_time, result)
}

fn respond<T: Serialize>(
    correlation_id: Uuid,
    start_time: Instant,
    result: EngineResult<T>,
) -> Response {
    match result {
        Ok(body) => {
            info!(
                correlation_id = %correlation_id,
                duration_us = start_time.elapsed().as_micros(),
                "Estimate completed successfully"
            );
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "application/json")],
                Json(body),
            )
                .into_response()
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Estimate failed"
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

fn rejection_response(correlation_id: Uuid, rejection: JsonRejection) -> Response {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
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

    (
        StatusCode::BAD_REQUEST,
        [(header::CONTENT_TYPE, "application/json")],
        Json(error),
    )
        .into_response()
}
