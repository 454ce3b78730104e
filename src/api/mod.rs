//! HTTP request handling layer.
//!
//! Translates HTTP requests into mapping operations and formats their results
//! as JSON bodies or redirects.
//!
//! # Modules
//!
//! - [`dto`] - Request/response serialization
//! - [`handlers`] - HTTP request handlers
//! - [`middleware`] - CORS and tracing
//! - [`routes`] - Route configuration

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
