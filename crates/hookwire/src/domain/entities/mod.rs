//! Domain Entities
//!
//! Event payloads consumed read-only by the conversion layer,
//! plus the stored webhook record.
//! - Repository / User / Commit: shared building blocks
//! - Issue / Comment / PullRequest / Release: subjects of events
//! - Payloads: one struct per event shape, wrapped by `EventPayload`
//! - Webhook: per-hook configuration owned by the settings store

mod issue;
mod payloads;
mod pull_request;
mod release;
mod repository;
mod webhook;

pub use issue::*;
pub use payloads::*;
pub use pull_request::*;
pub use release::*;
pub use repository::*;
pub use webhook::*;
