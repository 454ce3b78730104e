//! HTTP-facing error type.
//!
//! Handlers return [`AppError`]; this is the only place where core error kinds
//! are turned into status codes and bodies.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

use crate::application::services::MappingError;

/// JSON error body: `{"message": "..."}`.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub message: String,
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Rejected input or failed write, reported as 422 with a message.
    #[error("{message}")]
    Unprocessable { message: String },

    /// Unknown, expired, consumed or unreadable short link, reported as a bare 404.
    #[error("Not Found")]
    NotFound,
}

impl AppError {
    pub fn unprocessable(message: impl Into<String>) -> Self {
        Self::Unprocessable {
            message: message.into(),
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Unprocessable { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::NotFound => StatusCode::NOT_FOUND,
        }
    }
}

impl From<MappingError> for AppError {
    fn from(err: MappingError) -> Self {
        match err {
            MappingError::InvalidDuration(_) => AppError::unprocessable("Invalid duration"),
            MappingError::StoreWrite(_) | MappingError::StoreRead(_) => {
                AppError::unprocessable("Failed to save entry")
            }
            MappingError::EncodeFailed(_) => AppError::unprocessable("Failed to marshal data"),
            MappingError::NotFound | MappingError::DecodeFailed(_) => AppError::NotFound,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        match self {
            AppError::Unprocessable { message } => {
                (status, Json(ErrorBody { message })).into_response()
            }
            AppError::NotFound => (status, "404 page not found\n").into_response(),
        }
    }
}
