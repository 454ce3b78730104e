//! Application layer services implementing the shortening logic.
//!
//! Services consume the store and generator traits and expose the two core
//! operations to HTTP handlers and the admin CLI.
//!
//! # Available Services
//!
//! - [`services::allocator::MappingAllocator`] - Identifier allocation and mapping creation
//! - [`services::resolver::MappingResolver`] - Lookup with single-use consumption

pub mod services;
