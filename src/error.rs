use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;
use uuid::Uuid;

/// A stored record could not be turned into its typed form.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("entry {entry_id}: malformed created_at timestamp {raw:?}")]
    Timestamp { entry_id: Uuid, raw: String },
    #[error("invalid {field} value {raw:?}")]
    InvalidValue { field: &'static str, raw: String },
}

/// An invariant on a food entry or profile edit was violated.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ValidationError {
    #[error("food name must not be empty")]
    EmptyFoodName,
    #[error("{field} must be a non-negative number, got {value}")]
    NegativeNutrient { field: &'static str, value: f64 },
    #[error("confidence score must be within [0, 1], got {0}")]
    ConfidenceOutOfRange(f64),
    #[error("{field} must be a positive finite number when present")]
    NonPositiveMetric { field: &'static str },
}

/// Failure reported by the record store adapter.
#[derive(Debug, Error)]
#[error("record store: {0}")]
pub struct StoreError(#[from] pub anyhow::Error);

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error("timestamp formatting failed: {0}")]
    Timestamp(#[from] time::error::Format),
    #[error("{0} not found")]
    NotFound(&'static str),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Parse(_) | AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Store(_) | AppError::Timestamp(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        }
        (status, self.to_string()).into_response()
    }
}
