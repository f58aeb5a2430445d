//! Payload Convertor Port
//!
//! Every target integration implements `PayloadConvertor`: one method per
//! event kind, each either producing the integration's payload or
//! suppressing the notification. `convert_payloader` is the shared router
//! from event type to method.

use crate::domain::entities::{
    CreatePayload, DeletePayload, EventPayload, ForkPayload, IssueCommentPayload, IssuePayload,
    PullRequestPayload, PushPayload, ReleasePayload, RepositoryPayload,
};
use crate::domain::errors::ConvertError;
use crate::domain::value_objects::{ConvertorMethod, HookEventType};
use crate::ports::payloader::Payloader;

/// Outcome of a successful conversion
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Conversion<P> {
    /// Send this payload
    Notify(P),
    /// The integration sends nothing for this event
    Suppressed,
}

impl<P> Conversion<P> {
    pub fn map<Q, F: FnOnce(P) -> Q>(self, f: F) -> Conversion<Q> {
        match self {
            Self::Notify(payload) => Conversion::Notify(f(payload)),
            Self::Suppressed => Conversion::Suppressed,
        }
    }

    pub fn into_payload(self) -> Option<P> {
        match self {
            Self::Notify(payload) => Some(payload),
            Self::Suppressed => None,
        }
    }

    pub fn as_payload(&self) -> Option<&P> {
        match self {
            Self::Notify(payload) => Some(payload),
            Self::Suppressed => None,
        }
    }

    pub fn is_suppressed(&self) -> bool {
        matches!(self, Self::Suppressed)
    }
}

pub type ConvertResult<P> = Result<Conversion<P>, ConvertError>;

/// Per-integration conversion of events into target payloads
///
/// Every method defaults to `Conversion::Suppressed`; an integration
/// overrides exactly the events it renders. Returning an error aborts the
/// current delivery attempt only.
///
/// # Example
///
/// ```rust,ignore
/// use hookwire::ports::{Conversion, ConvertResult, PayloadConvertor};
///
/// impl PayloadConvertor for ChatPayload {
///     type Payload = ChatPayload;
///
///     fn push(&self, _p: &PushPayload) -> ConvertResult<ChatPayload> {
///         Ok(Conversion::Notify(self.clone()))
///     }
/// }
/// ```
pub trait PayloadConvertor {
    type Payload: Payloader;

    fn create(&self, _p: &CreatePayload) -> ConvertResult<Self::Payload> {
        Ok(Conversion::Suppressed)
    }

    fn delete(&self, _p: &DeletePayload) -> ConvertResult<Self::Payload> {
        Ok(Conversion::Suppressed)
    }

    fn fork(&self, _p: &ForkPayload) -> ConvertResult<Self::Payload> {
        Ok(Conversion::Suppressed)
    }

    fn push(&self, _p: &PushPayload) -> ConvertResult<Self::Payload> {
        Ok(Conversion::Suppressed)
    }

    fn issue(&self, _p: &IssuePayload) -> ConvertResult<Self::Payload> {
        Ok(Conversion::Suppressed)
    }

    fn issue_comment(&self, _p: &IssueCommentPayload) -> ConvertResult<Self::Payload> {
        Ok(Conversion::Suppressed)
    }

    fn pull_request(&self, _p: &PullRequestPayload) -> ConvertResult<Self::Payload> {
        Ok(Conversion::Suppressed)
    }

    /// `event` is the specific review event (approved, rejected, comment)
    fn review(
        &self,
        _p: &PullRequestPayload,
        _event: HookEventType,
    ) -> ConvertResult<Self::Payload> {
        Ok(Conversion::Suppressed)
    }

    fn repository(&self, _p: &RepositoryPayload) -> ConvertResult<Self::Payload> {
        Ok(Conversion::Suppressed)
    }

    fn release(&self, _p: &ReleasePayload) -> ConvertResult<Self::Payload> {
        Ok(Conversion::Suppressed)
    }
}

/// Route `payload` to the convertor method for `event`
///
/// Routing follows `HookEventType::convertor_method`. A payload whose shape
/// does not fit the routed method is a `PayloadMismatch`, never a
/// suppression.
pub fn convert_payloader<C>(
    convertor: &C,
    payload: &EventPayload,
    event: HookEventType,
) -> ConvertResult<C::Payload>
where
    C: PayloadConvertor + ?Sized,
{
    match (event.convertor_method(), payload) {
        (ConvertorMethod::Create, EventPayload::Create(p)) => convertor.create(p),
        (ConvertorMethod::Delete, EventPayload::Delete(p)) => convertor.delete(p),
        (ConvertorMethod::Fork, EventPayload::Fork(p)) => convertor.fork(p),
        (ConvertorMethod::Push, EventPayload::Push(p)) => convertor.push(p),
        (ConvertorMethod::Issue, EventPayload::Issue(p)) => convertor.issue(p),
        (ConvertorMethod::IssueComment, EventPayload::IssueComment(p)) => {
            convertor.issue_comment(p)
        }
        (ConvertorMethod::PullRequest, EventPayload::PullRequest(p)) => convertor.pull_request(p),
        (ConvertorMethod::Review, EventPayload::PullRequest(p)) => convertor.review(p, event),
        (ConvertorMethod::Repository, EventPayload::Repository(p)) => convertor.repository(p),
        (ConvertorMethod::Release, EventPayload::Release(p)) => convertor.release(p),
        (_, payload) => Err(ConvertError::PayloadMismatch {
            event,
            payload: payload.kind(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::fixtures;
    use serde::Serialize;
    use std::cell::RefCell;

    #[derive(Debug, Clone, PartialEq, Serialize)]
    struct Marker(&'static str);

    impl Payloader for Marker {}

    /// Records every method invoked and notifies with the method name
    #[derive(Default)]
    struct Recorder {
        calls: RefCell<Vec<(ConvertorMethod, Option<HookEventType>)>>,
    }

    impl Recorder {
        fn hit(
            &self,
            method: ConvertorMethod,
            event: Option<HookEventType>,
        ) -> ConvertResult<Marker> {
            self.calls.borrow_mut().push((method, event));
            Ok(Conversion::Notify(Marker("hit")))
        }
    }

    impl PayloadConvertor for Recorder {
        type Payload = Marker;

        fn create(&self, _p: &CreatePayload) -> ConvertResult<Marker> {
            self.hit(ConvertorMethod::Create, None)
        }
        fn delete(&self, _p: &DeletePayload) -> ConvertResult<Marker> {
            self.hit(ConvertorMethod::Delete, None)
        }
        fn fork(&self, _p: &ForkPayload) -> ConvertResult<Marker> {
            self.hit(ConvertorMethod::Fork, None)
        }
        fn push(&self, _p: &PushPayload) -> ConvertResult<Marker> {
            self.hit(ConvertorMethod::Push, None)
        }
        fn issue(&self, _p: &IssuePayload) -> ConvertResult<Marker> {
            self.hit(ConvertorMethod::Issue, None)
        }
        fn issue_comment(&self, _p: &IssueCommentPayload) -> ConvertResult<Marker> {
            self.hit(ConvertorMethod::IssueComment, None)
        }
        fn pull_request(&self, _p: &PullRequestPayload) -> ConvertResult<Marker> {
            self.hit(ConvertorMethod::PullRequest, None)
        }
        fn review(&self, _p: &PullRequestPayload, event: HookEventType) -> ConvertResult<Marker> {
            self.hit(ConvertorMethod::Review, Some(event))
        }
        fn repository(&self, _p: &RepositoryPayload) -> ConvertResult<Marker> {
            self.hit(ConvertorMethod::Repository, None)
        }
        fn release(&self, _p: &ReleasePayload) -> ConvertResult<Marker> {
            self.hit(ConvertorMethod::Release, None)
        }
    }

    /// Implements nothing, so every method falls back to the default
    struct Silent;

    impl PayloadConvertor for Silent {
        type Payload = Marker;
    }

    #[test]
    fn test_every_event_hits_exactly_one_method() {
        for event in HookEventType::ALL {
            let recorder = Recorder::default();
            let outcome =
                convert_payloader(&recorder, &fixtures::payload_for(event), event).unwrap();

            assert_eq!(outcome, Conversion::Notify(Marker("hit")));
            let calls = recorder.calls.into_inner();
            assert_eq!(calls.len(), 1, "{event} invoked {calls:?}");
            assert_eq!(calls[0].0, event.convertor_method());
        }
    }

    #[test]
    fn test_review_receives_specific_event() {
        let recorder = Recorder::default();
        let event = HookEventType::PullRequestReviewRejected;
        convert_payloader(&recorder, &fixtures::payload_for(event), event).unwrap();

        assert_eq!(
            recorder.calls.into_inner(),
            vec![(ConvertorMethod::Review, Some(event))]
        );
    }

    #[test]
    fn test_default_methods_suppress() {
        for event in HookEventType::ALL {
            let outcome =
                convert_payloader(&Silent, &fixtures::payload_for(event), event).unwrap();
            assert!(outcome.is_suppressed(), "{event} was not suppressed");
        }
    }

    #[test]
    fn test_payload_mismatch_is_an_error() {
        let recorder = Recorder::default();
        let payload = EventPayload::from(fixtures::issue_test_payload());

        let err = convert_payloader(&recorder, &payload, HookEventType::Push).unwrap_err();

        assert!(matches!(
            err,
            ConvertError::PayloadMismatch {
                event: HookEventType::Push,
                payload: "issue"
            }
        ));
        assert!(recorder.calls.into_inner().is_empty());
    }

    #[test]
    fn test_conversion_helpers() {
        let notify = Conversion::Notify(2).map(|n| n * 2);
        assert_eq!(notify.as_payload(), Some(&4));
        assert_eq!(notify.into_payload(), Some(4));

        let suppressed: Conversion<i32> = Conversion::Suppressed;
        assert!(suppressed.map(|n| n + 1).is_suppressed());
    }
}
