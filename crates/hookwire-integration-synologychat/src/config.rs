//! Synology Chat metadata

use hookwire::{DiagnosticSink, Webhook};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Settings stored in the webhook's meta blob
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SynologyChatMeta {
    /// Incoming-webhook URL of the chat channel
    #[serde(rename = "synologychat_url")]
    pub synology_chat_url: String,
}

/// Read the Synology Chat settings of `hook` for display
///
/// Malformed meta is reported to `sink` and yields the default settings;
/// an empty meta is treated as "not configured" and reported nowhere.
pub fn get_synology_chat_hook(hook: &Webhook, sink: &dyn DiagnosticSink) -> SynologyChatMeta {
    if hook.meta.trim().is_empty() {
        debug!(hook_id = %hook.id, "Webhook has no meta");
        return SynologyChatMeta::default();
    }

    match serde_json::from_str(&hook.meta) {
        Ok(meta) => meta,
        Err(e) => {
            sink.metadata_decode_failed(hook.id, hook.hook_type, &e);
            SynologyChatMeta::default()
        }
    }
}
