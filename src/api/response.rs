//! Response types for the forecast API.
//!
//! This module defines the error response structures and error handling
//! for the HTTP API.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::calculation::SeasonCategory;
use crate::error::EngineError;

/// Response body for `GET /seasons/:month`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeasonResponse {
    /// The queried month.
    pub month: u32,
    /// Its season category.
    pub season: SeasonCategory,
}

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a validation error response.
    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", message)
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        let message = error.to_string();
        let (status, error) = match error {
            EngineError::ConfigNotFound { .. } | EngineError::ConfigParseError { .. } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ApiError::with_details("CONFIG_ERROR", "Configuration error", message),
            ),
            EngineError::InvalidMonth { .. } => (
                StatusCode::BAD_REQUEST,
                ApiError::new("INVALID_MONTH", message),
            ),
            EngineError::InvalidPercentage { .. } => (
                StatusCode::BAD_REQUEST,
                ApiError::with_details(
                    "INVALID_PERCENTAGE",
                    message,
                    "Help percentages must be between 0 and 100",
                ),
            ),
            EngineError::InvalidActivityRatio { .. } => (
                StatusCode::BAD_REQUEST,
                ApiError::with_details(
                    "INVALID_ACTIVITY_RATIO",
                    message,
                    "Activity ratios must be between 0 and 1 in steps of 0.05",
                ),
            ),
            EngineError::InvalidWorkingDays { .. } => (
                StatusCode::BAD_REQUEST,
                ApiError::new("INVALID_WORKING_DAYS", message),
            ),
            EngineError::DeductionExceedsLimit { .. } => (
                StatusCode::UNPROCESSABLE_ENTITY,
                ApiError::with_details(
                    "DEDUCTION_EXCEEDS_LIMIT",
                    message,
                    "Reduce the employee's help deductions or change the overflow policy",
                ),
            ),
            EngineError::IncompatibleOptions { .. } => (
                StatusCode::BAD_REQUEST,
                ApiError::new("INCOMPATIBLE_OPTIONS", message),
            ),
            EngineError::SnapshotNotFound { .. } => (
                StatusCode::NOT_FOUND,
                ApiError::new("SNAPSHOT_NOT_FOUND", message),
            ),
            EngineError::HistoryUnavailable { .. } => (
                StatusCode::SERVICE_UNAVAILABLE,
                ApiError::new("HISTORY_UNAVAILABLE", message),
            ),
            EngineError::CalculationError { .. } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ApiError::with_details("CALCULATION_ERROR", "Calculation failed", message),
            ),
        };
        ApiErrorResponse { status, error }
    }
}
