//! Handler for link creation endpoint.

use axum::{
    Json,
    body::Bytes,
    extract::State,
    http::{HeaderMap, StatusCode, Uri},
};
use tracing::warn;

use crate::api::dto::shorten::{ShortenRequest, ShortenResponse};
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::request_origin::public_origin;

/// Creates a short link.
///
/// # Endpoint
///
/// `POST /api`
///
/// # Request Body
///
/// ```json
/// { "url": "https://example.com", "duration": "single" }
/// ```
///
/// `duration` is one of `single`, `day` or `hour`. The body is parsed as JSON
/// whatever the `Content-Type` says.
///
/// # Response
///
/// `201 Created`
///
/// ```json
/// { "short_url": "http://s.example.com/aB3dE9x" }
/// ```
///
/// # Errors
///
/// Returns 422 with `{"message": ...}` if the body is not JSON, `url` or
/// `duration` is missing, the duration is unknown, or the store write fails.
pub async fn shorten_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    uri: Uri,
    body: Bytes,
) -> Result<(StatusCode, Json<ShortenResponse>), AppError> {
    let request: ShortenRequest = serde_json::from_slice(&body).map_err(|e| {
        warn!("Rejected shorten request body: {}", e);
        AppError::unprocessable("Unprocessable Entity")
    })?;

    let url = request
        .url
        .filter(|url| !url.is_empty())
        .ok_or_else(|| AppError::unprocessable("Missing url"))?;

    let duration = request
        .duration
        .ok_or_else(|| AppError::unprocessable("Missing duration"))?;

    let origin = public_origin(&headers, &uri, &state.short_urls)?;

    let id = state.allocator.allocate(&url, &duration).await.map_err(|e| {
        warn!("Failed to create short link: {}", e);
        AppError::from(e)
    })?;

    Ok((
        StatusCode::CREATED,
        Json(ShortenResponse {
            short_url: format!("{}/{}", origin, id),
        }),
    ))
}
