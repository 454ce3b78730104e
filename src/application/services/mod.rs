//! Mapping services for the application layer.

pub mod allocator;
pub mod error;
pub mod resolver;

pub use allocator::MappingAllocator;
pub use error::MappingError;
pub use resolver::MappingResolver;
