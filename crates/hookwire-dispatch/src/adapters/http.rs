//! HTTP Delivery Implementation
//!
//! Posts prepared requests to receivers using reqwest. One attempt per
//! call; retries belong to the caller.

use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tracing::debug;

use hookwire::{DeliveryConfig, DeliveryError, HookDeliverer, HookRequest, HookResponse};

/// HTTP implementation of HookDeliverer
pub struct HttpDeliverer {
    client: Client,
    config: DeliveryConfig,
}

impl HttpDeliverer {
    pub fn new() -> Result<Self, DeliveryError> {
        Self::with_config(DeliveryConfig::default())
    }

    pub fn with_config(config: DeliveryConfig) -> Result<Self, DeliveryError> {
        let client = Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .user_agent(&config.user_agent)
            .build()
            .map_err(|e| DeliveryError::Client(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self { client, config })
    }

    pub fn config(&self) -> &DeliveryConfig {
        &self.config
    }
}

#[async_trait]
impl HookDeliverer for HttpDeliverer {
    async fn deliver(&self, request: &HookRequest) -> Result<HookResponse, DeliveryError> {
        debug!(
            hook_id = %request.hook_id,
            delivery_id = %request.delivery_id,
            event = %request.event,
            url = %request.url,
            "Delivering webhook"
        );

        let mut builder = self
            .client
            .post(&request.url)
            .header("Content-Type", "application/json")
            .header("X-Hookwire-Delivery", request.delivery_id.to_string())
            .header("X-Hookwire-Event", request.event.event_name())
            .header("X-Hookwire-Event-Type", request.event.as_str());

        if let Some(signature) = &request.signature {
            builder = builder.header("X-Hookwire-Signature", signature);
        }

        let response = builder
            .body(request.body.clone())
            .send()
            .await
            .map_err(|e| DeliveryError::Transport(e.to_string()))?;

        let status_code = response.status().as_u16();
        let body = response.text().await.unwrap_or_default();

        Ok(HookResponse { status_code, body })
    }
}
