//! API route configuration.

use crate::api::handlers::shorten_handler;
use crate::state::AppState;
use axum::{Router, routing::post};

/// API routes, nested under `/api`.
///
/// # Endpoints
///
/// - `POST /` - Create a short link
pub fn api_routes() -> Router<AppState> {
    Router::new().route("/", post(shorten_handler))
}
