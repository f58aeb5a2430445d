//! Delivery preparation
//!
//! Turns a webhook record and an event into a signed `HookRequest`, or
//! nothing when the hook is not interested or the integration suppresses
//! the event.

use hmac::{Hmac, Mac};
use hookwire::{
    EventPayload, HookDeliverer, HookEventType, HookRequest, HookResponse, Payloader, Webhook,
};
use sha2::Sha256;
use tracing::{debug, warn};
use uuid::Uuid;

use crate::errors::DispatchError;
use crate::payload::build_payload;

type HmacSha256 = Hmac<Sha256>;

/// Prepare the request `hook` should receive for `event_name`
///
/// Returns `Ok(None)` when the hook is inactive, not subscribed, or the
/// integration suppresses the event. Unknown event names are an error.
pub fn prepare_delivery(
    hook: &Webhook,
    event_name: &str,
    payload: &EventPayload,
) -> Result<Option<HookRequest>, DispatchError> {
    let event: HookEventType = event_name.parse()?;

    if !hook.should_receive(event) {
        debug!(hook_id = %hook.id, event = %event, "Webhook not subscribed to event");
        return Ok(None);
    }

    let outcome = build_payload(hook.hook_type, payload, event, &hook.meta).inspect_err(|e| {
        warn!(
            hook_id = %hook.id,
            hook_type = %hook.hook_type,
            event = %event,
            error = %e,
            "Failed to convert payload"
        )
    })?;

    let Some(target) = outcome.into_payload() else {
        debug!(
            hook_id = %hook.id,
            hook_type = %hook.hook_type,
            event = %event,
            "Notification suppressed"
        );
        return Ok(None);
    };

    let body = target.json_payload()?;
    let signature = match &hook.secret {
        Some(secret) => Some(sign_payload(secret, &body)?),
        None => None,
    };

    Ok(Some(HookRequest {
        delivery_id: Uuid::new_v4(),
        hook_id: hook.id,
        url: hook.url.clone(),
        event,
        body,
        signature,
    }))
}

/// Prepare and deliver in one step
///
/// A non-2xx answer is returned as-is; retry policy belongs to the caller.
pub async fn dispatch(
    deliverer: &dyn HookDeliverer,
    hook: &Webhook,
    event_name: &str,
    payload: &EventPayload,
) -> Result<Option<HookResponse>, DispatchError> {
    let Some(request) = prepare_delivery(hook, event_name, payload)? else {
        return Ok(None);
    };

    let response = deliverer.deliver(&request).await?;
    if !response.is_success() {
        warn!(
            hook_id = %hook.id,
            delivery_id = %request.delivery_id,
            status_code = response.status_code,
            "Webhook receiver rejected delivery"
        );
    }

    Ok(Some(response))
}

/// HMAC-SHA256 of `payload`, hex-encoded with a `sha256=` prefix
pub fn sign_payload(secret: &str, payload: &[u8]) -> Result<String, DispatchError> {
    let mut mac = HmacSha256::new_from_slice(secret.as_bytes())
        .map_err(|e| DispatchError::Signing(e.to_string()))?;
    mac.update(payload);
    let bytes = mac.finalize().into_bytes();

    Ok(format!("sha256={}", hex::encode(bytes)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use hookwire::domain::fixtures;
    use hookwire::{ConvertError, DeliveryError, HookType};
    use std::sync::Mutex;

    const META: &str = r#"{"synologychat_url":"https://chat.example/hook/abc"}"#;

    fn hook() -> Webhook {
        Webhook::new(1, HookType::SynologyChat, "https://chat.example/webapi").with_meta(META)
    }

    fn push() -> EventPayload {
        fixtures::push_test_payload().into()
    }

    /// Records requests and answers with a fixed status
    struct RecordingDeliverer {
        status_code: u16,
        requests: Mutex<Vec<HookRequest>>,
    }

    impl RecordingDeliverer {
        fn new(status_code: u16) -> Self {
            Self {
                status_code,
                requests: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl HookDeliverer for RecordingDeliverer {
        async fn deliver(&self, request: &HookRequest) -> Result<HookResponse, DeliveryError> {
            self.requests.lock().unwrap().push(request.clone());
            Ok(HookResponse {
                status_code: self.status_code,
                body: String::new(),
            })
        }
    }

    #[test]
    fn test_sign_payload() {
        let signature = sign_payload("test-secret", b"test payload").unwrap();

        assert!(signature.starts_with("sha256="));
        assert_eq!(signature.len(), 7 + 64); // "sha256=" + 64 hex chars
        assert_eq!(signature, sign_payload("test-secret", b"test payload").unwrap());
        assert_ne!(signature, sign_payload("other-secret", b"test payload").unwrap());
    }

    #[test]
    fn test_prepare_push() {
        let hook = hook();
        let request = prepare_delivery(&hook, "push", &push()).unwrap().unwrap();

        assert_eq!(request.hook_id, hook.id);
        assert_eq!(request.url, "https://chat.example/webapi");
        assert_eq!(request.event, HookEventType::Push);
        assert!(request.signature.is_none());

        let body: serde_json::Value = serde_json::from_slice(&request.body).unwrap();
        assert_eq!(
            body,
            serde_json::json!({"repository": {"url": "https://chat.example/hook/abc"}})
        );
    }

    #[test]
    fn test_prepare_signs_with_secret() {
        let hook = hook().with_secret("s3cret");
        let request = prepare_delivery(&hook, "push", &push()).unwrap().unwrap();

        assert_eq!(
            request.signature,
            Some(sign_payload("s3cret", &request.body).unwrap())
        );
    }

    #[test]
    fn test_prepare_suppressed_event() {
        let payload = fixtures::issue_test_payload().into();
        assert!(prepare_delivery(&hook(), "issues", &payload).unwrap().is_none());
    }

    #[test]
    fn test_prepare_skips_unsubscribed_and_inactive_hooks() {
        let unsubscribed = hook().with_events(vec![HookEventType::Release]);
        assert!(prepare_delivery(&unsubscribed, "push", &push()).unwrap().is_none());

        let mut inactive = hook();
        inactive.is_active = false;
        assert!(prepare_delivery(&inactive, "push", &push()).unwrap().is_none());
    }

    #[test]
    fn test_prepare_unknown_event_is_unroutable() {
        let err = prepare_delivery(&hook(), "wiki", &push()).unwrap_err();
        assert!(matches!(
            err,
            DispatchError::Convert(ConvertError::UnroutableEvent(ref name)) if name == "wiki"
        ));
    }

    #[test]
    fn test_prepare_malformed_meta_is_an_error() {
        let _ = tracing_subscriber::fmt().with_test_writer().try_init();

        let hook = hook().with_meta("{not json");
        let err = prepare_delivery(&hook, "push", &push()).unwrap_err();

        assert!(err.to_string().starts_with("GetSynologyChatPayload meta json: "));
    }

    #[test]
    fn test_prepare_in_parallel() {
        let hook = hook();
        let payload = push();

        let bodies: Vec<Vec<u8>> = std::thread::scope(|s| {
            let handles: Vec<_> = (0..8)
                .map(|_| s.spawn(|| prepare_delivery(&hook, "push", &payload)))
                .collect();
            handles
                .into_iter()
                .map(|h| h.join().unwrap().unwrap().unwrap().body)
                .collect()
        });

        assert!(bodies.windows(2).all(|pair| pair[0] == pair[1]));
    }

    #[tokio::test]
    async fn test_dispatch_delivers_push() {
        let deliverer = RecordingDeliverer::new(200);
        let hook = hook();

        let response = dispatch(&deliverer, &hook, "push", &push()).await.unwrap();

        assert_eq!(response.map(|r| r.status_code), Some(200));
        let requests = deliverer.requests.into_inner().unwrap();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].hook_id, hook.id);
    }

    #[tokio::test]
    async fn test_dispatch_skips_suppressed_event() {
        let deliverer = RecordingDeliverer::new(200);
        let payload = fixtures::release_test_payload().into();

        let response = dispatch(&deliverer, &hook(), "release", &payload).await.unwrap();

        assert!(response.is_none());
        assert!(deliverer.requests.into_inner().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_dispatch_returns_rejection() {
        let deliverer = RecordingDeliverer::new(500);

        let response = dispatch(&deliverer, &hook(), "push", &push()).await.unwrap().unwrap();

        assert!(!response.is_success());
    }
}
