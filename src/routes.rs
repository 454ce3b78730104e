//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `POST /api`     - Create a short link
//! - `GET  /health`  - Store health check
//! - `GET  /{short}` - Short link redirect
//! - anything else   - 404
//!
//! # Middleware
//!
//! - **CORS** - Configured origins, `GET`/`POST`/`OPTIONS`, `Content-Type`
//! - **Tracing** - Structured request/response logging

use crate::api;
use crate::api::handlers::{health_handler, not_found_handler, redirect_handler};
use crate::api::middleware::{cors, tracing};
use crate::state::AppState;
use axum::Router;
use axum::routing::get;
use tower::ServiceBuilder;

/// Constructs the application router with all routes and middleware.
///
/// # Arguments
///
/// - `state` - shared application state injected into all handlers
/// - `cors_origins` - allowed origins; a trailing `*` matches by prefix
pub fn app_router(state: AppState, cors_origins: &[String]) -> Router {
    Router::new()
        .nest("/api", api::routes::api_routes())
        .route("/health", get(health_handler))
        .route("/{short}", get(redirect_handler))
        .fallback(not_found_handler)
        .with_state(state)
        .layer(
            ServiceBuilder::new()
                .layer(tracing::layer())
                .layer(cors::layer(cors_origins)),
        )
}
