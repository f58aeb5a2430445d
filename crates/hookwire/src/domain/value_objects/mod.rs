//! Value Objects
//!
//! Immutable tags carried by events and webhook records.

mod actions;
mod hook_event_type;
mod hook_type;

pub use actions::*;
pub use hook_event_type::*;
pub use hook_type::*;
