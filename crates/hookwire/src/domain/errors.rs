//! Domain Errors
//!
//! Error types for conversion and delivery.

use thiserror::Error;

use crate::domain::value_objects::HookEventType;

/// Errors raised while converting an event into a target payload
///
/// A suppressed notification is not an error; see `Conversion::Suppressed`.
#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("{context} meta json: {source}")]
    MetaJson {
        context: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("Unroutable event type: {0}")]
    UnroutableEvent(String),

    #[error("Payload mismatch: {event} event cannot carry a {payload} payload")]
    PayloadMismatch {
        event: HookEventType,
        payload: &'static str,
    },

    #[error("Failed to serialize payload: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ConvertError {
    pub fn meta_json(context: &'static str, source: serde_json::Error) -> Self {
        Self::MetaJson { context, source }
    }
}

/// Errors raised by delivery implementations
#[derive(Debug, Error)]
pub enum DeliveryError {
    #[error("Delivery client error: {0}")]
    Client(String),

    #[error("Delivery transport error: {0}")]
    Transport(String),
}
