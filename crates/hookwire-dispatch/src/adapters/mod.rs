//! Infrastructure Adapters
//!
//! Implementations of hookwire ports for external systems.

pub mod http;

// Re-exports
pub use http::HttpDeliverer;
