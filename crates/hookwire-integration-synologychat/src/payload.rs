//! Synology Chat payload and convertor

use hookwire::{
    convert_payloader, Conversion, ConvertError, ConvertResult, EventPayload, HookEventType,
    PayloadConvertor, Payloader, PushPayload,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::SynologyChatMeta;

/// Body posted to a Synology Chat incoming webhook
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SynologyChatPayload {
    pub repository: SynologyChatRepository,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SynologyChatRepository {
    pub url: String,
}

impl Payloader for SynologyChatPayload {}

impl PayloadConvertor for SynologyChatPayload {
    type Payload = SynologyChatPayload;

    fn push(&self, _p: &PushPayload) -> ConvertResult<Self::Payload> {
        Ok(Conversion::Notify(self.clone()))
    }
}

/// Convert `payload` for a Synology Chat hook configured with `meta`
///
/// Unlike `get_synology_chat_hook`, malformed meta is an error here: a
/// delivery cannot proceed without its destination.
pub fn get_synology_chat_payload(
    payload: &EventPayload,
    event: HookEventType,
    meta: &str,
) -> ConvertResult<SynologyChatPayload> {
    let meta: SynologyChatMeta = serde_json::from_str(meta)
        .map_err(|e| ConvertError::meta_json("GetSynologyChatPayload", e))?;

    let mut convertor = SynologyChatPayload::default();
    convertor.repository.url = meta.synology_chat_url;

    debug!(event = %event, payload = payload.kind(), "Converting Synology Chat payload");
    convert_payloader(&convertor, payload, event)
}
