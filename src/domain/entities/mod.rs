//! Core domain entities.
//!
//! - [`MappingEntry`] - Destination URL and single-use flag stored per short identifier

pub mod mapping;

pub use mapping::MappingEntry;
