//! HTTP request handlers for the forecast API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{
        Path, State,
        rejection::{JsonRejection, PathRejection},
    },
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use chrono::Utc;
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{classify, compute_forecast};
use crate::error::EngineError;
use crate::history::{load_year, save_report};
use crate::models::{ForecastPeriod, ForecastReport};

use super::request::ForecastRequest;
use super::response::{ApiError, ApiErrorResponse, SeasonResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/forecast", post(forecast_handler))
        .route("/history", post(save_history_handler))
        .route(
            "/history/:key",
            get(history_year_handler).delete(delete_history_handler),
        )
        .route("/seasons/:month", get(season_handler))
        .with_state(state)
}

fn json_response<T: Serialize>(status: StatusCode, body: T) -> Response {
    (
        status,
        [(header::CONTENT_TYPE, "application/json")],
        Json(body),
    )
        .into_response()
}

fn error_response(err: EngineError) -> Response {
    let api_error: ApiErrorResponse = err.into();
    json_response(api_error.status, api_error.error)
}

/// Maps a JSON extraction failure to a 400 response.
fn rejection_response(correlation_id: Uuid, rejection: JsonRejection) -> Response {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            // The body text carries serde's detailed message
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
    json_response(StatusCode::BAD_REQUEST, error)
}

/// Maps a path parameter that fails to parse to a 400 response.
fn path_rejection_response(correlation_id: Uuid, rejection: PathRejection) -> Response {
    let body_text = rejection.body_text();
    warn!(
        correlation_id = %correlation_id,
        error = %body_text,
        "Path parameter error"
    );
    json_response(
        StatusCode::BAD_REQUEST,
        ApiError::with_details("INVALID_PATH", "Invalid path parameter", body_text),
    )
}

/// Handler for POST /forecast endpoint.
///
/// Accepts a forecast request and returns the computed report.
async fn forecast_handler(
    State(state): State<AppState>,
    payload: Result<Json<ForecastRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing forecast request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let config = state.config();
    let options = request.options(config);
    let input = request.input(config);

    let start_time = Instant::now();
    match compute_forecast(&input, &options) {
        Ok(report) => {
            info!(
                correlation_id = %correlation_id,
                period = %report.period,
                locations = report.locations.len(),
                grand_total = report.grand_total.total,
                missing_standards = report.diagnostics.missing_standards.len(),
                duration_us = start_time.elapsed().as_micros(),
                "Forecast completed successfully"
            );
            json_response(StatusCode::OK, report)
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Forecast failed"
            );
            error_response(err)
        }
    }
}

/// Handler for POST /history endpoint.
///
/// Saves every location of a computed report as a history snapshot.
async fn save_history_handler(
    State(state): State<AppState>,
    payload: Result<Json<ForecastReport>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing history save request");

    let report = match payload {
        Ok(Json(report)) => report,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    if let Err(err) = report.period.validate() {
        warn!(correlation_id = %correlation_id, error = %err, "Invalid report period");
        return error_response(err);
    }

    match save_report(state.history(), &report, Utc::now()) {
        Ok(saved) => json_response(StatusCode::CREATED, saved),
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "History save failed");
            error_response(err)
        }
    }
}

/// Handler for GET /history/:year endpoint.
async fn history_year_handler(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let year = match path {
        Ok(Path(year)) => year,
        Err(rejection) => return path_rejection_response(correlation_id, rejection),
    };
    info!(correlation_id = %correlation_id, year, "Loading forecast history");

    match load_year(state.history(), year) {
        Ok(history) => json_response(StatusCode::OK, history),
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "History load failed");
            error_response(err)
        }
    }
}

/// Handler for DELETE /history/:id endpoint.
async fn delete_history_handler(
    State(state): State<AppState>,
    path: Result<Path<Uuid>, PathRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let id = match path {
        Ok(Path(id)) => id,
        Err(rejection) => return path_rejection_response(correlation_id, rejection),
    };
    info!(correlation_id = %correlation_id, snapshot_id = %id, "Deleting forecast snapshot");

    match state.history().delete(id) {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "History delete failed");
            error_response(err)
        }
    }
}

/// Handler for GET /seasons/:month endpoint.
async fn season_handler(path: Result<Path<u32>, PathRejection>) -> Response {
    let month = match path {
        Ok(Path(month)) => month,
        Err(rejection) => return path_rejection_response(Uuid::new_v4(), rejection),
    };
    if let Err(err) = ForecastPeriod::new(1, month) {
        return error_response(err);
    }
    json_response(
        StatusCode::OK,
        SeasonResponse {
            month,
            season: classify(month),
        },
    )
}
