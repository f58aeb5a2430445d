//! Integration registry
//!
//! The closed set of integrations, one variant per `HookType`.

use hookwire::{ConvertResult, EventPayload, HookEventType, HookType, Payloader};
use hookwire_integration_synologychat::{get_synology_chat_payload, SynologyChatPayload};
use serde::Serialize;

/// Target payload of any supported integration
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum HookPayload {
    SynologyChat(SynologyChatPayload),
}

impl Payloader for HookPayload {}

/// Convert `payload` for a hook of type `hook_type` configured with `meta`
pub fn build_payload(
    hook_type: HookType,
    payload: &EventPayload,
    event: HookEventType,
    meta: &str,
) -> ConvertResult<HookPayload> {
    match hook_type {
        HookType::SynologyChat => Ok(get_synology_chat_payload(payload, event, meta)?
            .map(HookPayload::SynologyChat)),
    }
}
