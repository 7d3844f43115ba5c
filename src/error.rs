use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::constants::API_NAME;
use crate::repository::StoreError;

/// A failed gateway operation. Store failures name the operation and keep
/// the typed store error that caused them.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Add hospital failed")]
    Create(#[source] StoreError),

    #[error("Fetch failed")]
    Fetch(#[source] StoreError),

    #[error("Update failed")]
    Update(#[source] StoreError),

    #[error("Invalid request body")]
    InvalidBody(#[from] JsonRejection),
}

impl AppError {
    fn log_tag(&self) -> &'static str {
        match self {
            AppError::Create(_) => "ADD ERROR",
            AppError::Fetch(_) => "FETCH ERROR",
            AppError::Update(_) => "UPDATE ERROR",
            AppError::InvalidBody(_) => "BODY ERROR",
        }
    }

    pub fn store_error(&self) -> Option<&StoreError> {
        match self {
            AppError::Create(e) | AppError::Fetch(e) | AppError::Update(e) => Some(e),
            AppError::InvalidBody(_) => None,
        }
    }

    /// Store failures surface as 500 and the `kind` field tells them apart.
    /// Only an id that cannot be addressed, or a body that is not a JSON
    /// object, is the caller's fault.
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::InvalidBody(rejection) => rejection.status(),
            _ => match self.store_error() {
                Some(StoreError::InvalidKey(_)) => StatusCode::BAD_REQUEST,
                _ => StatusCode::INTERNAL_SERVER_ERROR,
            },
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        let body = match &self {
            AppError::InvalidBody(rejection) => {
                tracing::warn!("{} {}: {}", API_NAME, self.log_tag(), rejection.body_text());
                json!({
                    "error": self.to_string(),
                    "kind": "invalid_body",
                    "details": rejection.body_text(),
                })
            }
            AppError::Create(e) => {
                log_store_error(self.log_tag(), e);
                json!({
                    "error": self.to_string(),
                    "kind": e.kind(),
                    "details": e.details(),
                })
            }
            AppError::Fetch(e) | AppError::Update(e) => {
                log_store_error(self.log_tag(), e);
                json!({
                    "error": self.to_string(),
                    "kind": e.kind(),
                })
            }
        };

        (status, Json(body)).into_response()
    }
}

fn log_store_error(tag: &str, error: &StoreError) {
    match error {
        StoreError::Rejected { .. } | StoreError::InvalidKey(_) => {
            tracing::warn!("{} {}: {}", API_NAME, tag, error)
        }
        _ => tracing::error!("{} {}: {}", API_NAME, tag, error),
    }
}
