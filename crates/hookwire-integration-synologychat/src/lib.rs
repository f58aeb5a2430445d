//! Synology Chat Integration for Hookwire
//!
//! Converts repository events into Synology Chat incoming-webhook payloads.
//! Only push events are rendered; every other event is suppressed.
//!
//! # Usage
//!
//! ```rust,ignore
//! use hookwire_integration_synologychat::get_synology_chat_payload;
//!
//! let outcome = get_synology_chat_payload(&payload, HookEventType::Push, &webhook.meta)?;
//! ```

mod config;
mod payload;

pub use config::{get_synology_chat_hook, SynologyChatMeta};
pub use payload::{get_synology_chat_payload, SynologyChatPayload, SynologyChatRepository};
