//! Payload Serialization Port
//!
//! Renders payloads as the indented JSON documents sent to receivers.

use serde::Serialize;

use crate::domain::entities::{
    CreatePayload, DeletePayload, EventPayload, ForkPayload, IssueCommentPayload, IssuePayload,
    PullRequestPayload, PushPayload, ReleasePayload, RepositoryPayload,
};
use crate::domain::errors::ConvertError;

/// A payload that can be delivered to a webhook receiver
pub trait Payloader: Serialize {
    /// Serialize as JSON indented by two spaces
    ///
    /// Never mutates the payload. There is no empty-but-ok result:
    /// failure is always reported as `ConvertError::Serialization`.
    fn json_payload(&self) -> Result<Vec<u8>, ConvertError> {
        Ok(serde_json::to_vec_pretty(self)?)
    }
}

impl Payloader for EventPayload {}
impl Payloader for CreatePayload {}
impl Payloader for DeletePayload {}
impl Payloader for ForkPayload {}
impl Payloader for PushPayload {}
impl Payloader for IssuePayload {}
impl Payloader for IssueCommentPayload {}
impl Payloader for PullRequestPayload {}
impl Payloader for RepositoryPayload {}
impl Payloader for ReleasePayload {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::fixtures;
    use std::collections::HashMap;

    #[derive(Serialize)]
    struct TupleKeyed {
        // serde_json rejects non-string map keys
        counts: HashMap<(i32, i32), i32>,
    }

    impl Payloader for TupleKeyed {}

    #[test]
    fn test_json_payload_is_indented() {
        let payload = EventPayload::from(fixtures::push_test_payload());
        let json = payload.json_payload().unwrap();
        let text = String::from_utf8(json).unwrap();

        assert!(text.starts_with("{\n  \"ref\": \"refs/heads/test\""));
        assert!(text.contains("\n    \"html_url\": \"https://example.test/o/r\""));
    }

    #[test]
    fn test_json_payload_is_deterministic() {
        let payload = fixtures::release_test_payload();
        assert_eq!(payload.json_payload().unwrap(), payload.json_payload().unwrap());
    }

    #[test]
    fn test_json_payload_reports_encoding_failure() {
        let payload = TupleKeyed {
            counts: HashMap::from([((1, 2), 3)]),
        };

        let err = payload.json_payload().unwrap_err();
        assert!(matches!(err, ConvertError::Serialization(_)));
    }
}
