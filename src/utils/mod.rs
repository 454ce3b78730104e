//! Utility functions for identifier generation and request handling.
//!
//! - [`code_generator`] - Short identifier generation
//! - [`request_origin`] - Public scheme and host of a request

pub mod code_generator;
pub mod request_origin;
