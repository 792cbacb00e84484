use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use enhancer_core::{StorageError, StoreError};
use thiserror::Error;
use tracing::error;

use crate::model::ErrorResponse;

pub type Result<T> = std::result::Result<T, AppError>;

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error("stored URL for key {0} is not a valid redirect target")]
    InvalidRedirectTarget(String),
    #[error("route not found")]
    RouteNotFound,
}

impl AppError {
    fn is_client_error(&self) -> bool {
        match self {
            AppError::Store(err) => err.is_client_error(),
            AppError::RouteNotFound => true,
            AppError::InvalidRedirectTarget(_) => false,
        }
    }

    fn status(&self) -> StatusCode {
        match self {
            AppError::Store(StoreError::Validation(_)) => StatusCode::BAD_REQUEST,
            AppError::Store(StoreError::NotFound(_)) | AppError::RouteNotFound => {
                StatusCode::NOT_FOUND
            }
            AppError::Store(StoreError::KeySpaceExhausted { .. })
            | AppError::Store(StoreError::Storage(StorageError::Unavailable(_))) => {
                StatusCode::SERVICE_UNAVAILABLE
            }
            AppError::Store(StoreError::Storage(StorageError::Conflict(_)))
            | AppError::InvalidRedirectTarget(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        if !self.is_client_error() {
            error!(error = %self, status = status.as_u16(), "request failed");
        }

        let body = ErrorResponse {
            error: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}
