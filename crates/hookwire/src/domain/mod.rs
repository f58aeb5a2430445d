//! Domain Layer
//!
//! Event payloads, webhook records and their tags.
//! Nothing in here performs I/O.

pub mod entities;
pub mod errors;
pub mod value_objects;

#[cfg(any(test, feature = "fixtures"))]
pub mod fixtures;

// Re-exports for convenience
pub use entities::*;
pub use errors::*;
pub use value_objects::*;
