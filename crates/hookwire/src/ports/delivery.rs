//! Webhook Delivery Port
//!
//! Abstract interface for posting a prepared request to a receiver.
//! Retries and queueing belong to the caller.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::errors::DeliveryError;
use crate::domain::value_objects::HookEventType;

/// Webhook delivery interface
///
/// # Example
///
/// ```rust,ignore
/// use hookwire::ports::HookDeliverer;
///
/// struct HttpDeliverer { /* reqwest client */ }
///
/// #[async_trait]
/// impl HookDeliverer for HttpDeliverer {
///     async fn deliver(&self, request: &HookRequest) -> Result<HookResponse, DeliveryError> {
///         // POST request.body to request.url
///     }
/// }
/// ```
#[async_trait]
pub trait HookDeliverer: Send + Sync {
    /// Deliver one request, once
    async fn deliver(&self, request: &HookRequest) -> Result<HookResponse, DeliveryError>;
}

/// Serialized payload ready to be posted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HookRequest {
    /// Unique ID for this delivery
    pub delivery_id: Uuid,
    pub hook_id: Uuid,
    pub url: String,
    pub event: HookEventType,
    /// Indented JSON body
    pub body: Vec<u8>,
    /// `sha256=<hex>` HMAC of the body, when the hook has a secret
    pub signature: Option<String>,
}

/// What the receiver answered
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HookResponse {
    pub status_code: u16,
    pub body: String,
}

impl HookResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status_code)
    }
}

/// Configuration for delivery behavior
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DeliveryConfig {
    /// Per-request timeout (milliseconds)
    pub timeout_ms: u64,
    /// User-Agent header value
    pub user_agent: String,
}

impl Default for DeliveryConfig {
    fn default() -> Self {
        Self {
            timeout_ms: 30000,
            user_agent: "Hookwire-Webhook/1.0".to_string(),
        }
    }
}
