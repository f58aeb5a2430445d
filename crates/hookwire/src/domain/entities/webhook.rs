//! Webhook - Stored configuration of one outbound hook
//!
//! Owned by the settings store and loaded fresh for every dispatch.
//! The conversion layer only reads it.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::value_objects::{HookEventType, HookType};

/// Webhook registration for a repository
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Webhook {
    pub id: Uuid,
    pub repo_id: i64,
    /// Integration the hook delivers to
    pub hook_type: HookType,
    /// Endpoint the request is posted to
    pub url: String,
    /// Secret for HMAC-SHA256 signature (optional)
    pub secret: Option<String>,
    /// Integration-specific settings as a raw JSON blob
    #[serde(default)]
    pub meta: String,
    /// Event types this hook subscribes to; empty means all
    #[serde(default)]
    pub events: Vec<HookEventType>,
    pub is_active: bool,
}

impl Webhook {
    /// Create an active hook subscribed to every event
    pub fn new(repo_id: i64, hook_type: HookType, url: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            repo_id,
            hook_type,
            url: url.into(),
            secret: None,
            meta: String::new(),
            events: Vec::new(),
            is_active: true,
        }
    }

    pub fn with_secret(mut self, secret: impl Into<String>) -> Self {
        self.secret = Some(secret.into());
        self
    }

    pub fn with_meta(mut self, meta: impl Into<String>) -> Self {
        self.meta = meta.into();
        self
    }

    pub fn with_events(mut self, events: Vec<HookEventType>) -> Self {
        self.events = events;
        self
    }

    /// Check if this hook should receive a given event type
    pub fn should_receive(&self, event: HookEventType) -> bool {
        if !self.is_active {
            return false;
        }
        self.events.is_empty() || self.events.contains(&event)
    }
}
