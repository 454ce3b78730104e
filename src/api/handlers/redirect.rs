//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    http::{HeaderValue, StatusCode, header, header::InvalidHeaderValue},
    response::{IntoResponse, Response},
};
use std::fmt::Write;
use tracing::{debug, error};

use crate::application::services::MappingError;
use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short identifier to its destination.
///
/// # Endpoint
///
/// `GET /{short}`
///
/// Single-use links are deleted on the first successful redirect.
///
/// # Errors
///
/// Returns 404 Not Found if the identifier is unknown, expired, already
/// consumed, or its stored entry cannot be read. Store failures are logged
/// and also answered with 404.
pub async fn redirect_handler(
    Path(short): Path<String>,
    State(state): State<AppState>,
) -> Result<Response, AppError> {
    if short.is_empty() {
        return Err(AppError::NotFound);
    }

    let destination = match state.resolver.resolve(&short).await {
        Ok(destination) => destination,
        Err(MappingError::NotFound) => {
            debug!("Short link {} not found", short);
            return Err(AppError::NotFound);
        }
        Err(e) => {
            error!("Failed to resolve {}: {}", short, e);
            return Err(AppError::NotFound);
        }
    };

    let location = location_header(&destination).map_err(|e| {
        error!("Destination of {} is not a valid Location: {}", short, e);
        AppError::NotFound
    })?;

    Ok((StatusCode::TEMPORARY_REDIRECT, [(header::LOCATION, location)]).into_response())
}

/// Fallback for `/` and any path without a route.
pub async fn not_found_handler() -> AppError {
    AppError::NotFound
}

/// Destinations are stored unvalidated; control bytes are percent-encoded
/// so any stored URL still fits in a header.
fn location_header(destination: &str) -> Result<HeaderValue, InvalidHeaderValue> {
    let mut location = String::with_capacity(destination.len());
    for c in destination.chars() {
        if c.is_ascii_control() {
            let _ = write!(location, "%{:02X}", c as u8);
        } else {
            location.push(c);
        }
    }

    HeaderValue::from_str(&location)
}
