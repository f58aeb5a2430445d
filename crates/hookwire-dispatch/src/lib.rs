//! Hookwire Dispatch
//!
//! Wires integrations to webhook records: picks the integration for a hook,
//! converts the event, serializes and signs the result, and hands it to a
//! `HookDeliverer`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use hookwire_dispatch::{dispatch, HttpDeliverer};
//!
//! let deliverer = HttpDeliverer::new()?;
//! let response = dispatch(&deliverer, &webhook, "push", &payload).await?;
//! ```

pub mod adapters;
mod dispatcher;
mod errors;
mod payload;

pub use adapters::HttpDeliverer;
pub use dispatcher::{dispatch, prepare_delivery, sign_payload};
pub use errors::DispatchError;
pub use payload::{build_payload, HookPayload};
