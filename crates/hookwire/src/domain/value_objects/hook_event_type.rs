//! HookEventType - Which repository event occurred
//!
//! Also holds the routing table from event type to convertor method.

use serde::{Deserialize, Serialize};

use crate::domain::errors::ConvertError;

/// Event type tag supplied by the event source
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum HookEventType {
    Create,
    Delete,
    Fork,
    Push,
    Issues,
    IssueAssign,
    IssueLabel,
    IssueMilestone,
    IssueComment,
    PullRequest,
    PullRequestAssign,
    PullRequestLabel,
    PullRequestMilestone,
    PullRequestComment,
    PullRequestReviewApproved,
    PullRequestReviewRejected,
    PullRequestReviewComment,
    PullRequestSync,
    Repository,
    Release,
}

/// Convertor method an event type is routed to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConvertorMethod {
    Create,
    Delete,
    Fork,
    Push,
    Issue,
    IssueComment,
    PullRequest,
    Review,
    Repository,
    Release,
}

impl HookEventType {
    pub const ALL: [HookEventType; 20] = [
        Self::Create,
        Self::Delete,
        Self::Fork,
        Self::Push,
        Self::Issues,
        Self::IssueAssign,
        Self::IssueLabel,
        Self::IssueMilestone,
        Self::IssueComment,
        Self::PullRequest,
        Self::PullRequestAssign,
        Self::PullRequestLabel,
        Self::PullRequestMilestone,
        Self::PullRequestComment,
        Self::PullRequestReviewApproved,
        Self::PullRequestReviewRejected,
        Self::PullRequestReviewComment,
        Self::PullRequestSync,
        Self::Repository,
        Self::Release,
    ];

    /// The convertor method handling this event type
    pub fn convertor_method(self) -> ConvertorMethod {
        match self {
            Self::Create => ConvertorMethod::Create,
            Self::Delete => ConvertorMethod::Delete,
            Self::Fork => ConvertorMethod::Fork,
            Self::Push => ConvertorMethod::Push,
            Self::Issues | Self::IssueAssign | Self::IssueLabel | Self::IssueMilestone => {
                ConvertorMethod::Issue
            }
            Self::IssueComment | Self::PullRequestComment => ConvertorMethod::IssueComment,
            Self::PullRequest
            | Self::PullRequestAssign
            | Self::PullRequestLabel
            | Self::PullRequestMilestone
            | Self::PullRequestSync => ConvertorMethod::PullRequest,
            Self::PullRequestReviewApproved
            | Self::PullRequestReviewRejected
            | Self::PullRequestReviewComment => ConvertorMethod::Review,
            Self::Repository => ConvertorMethod::Repository,
            Self::Release => ConvertorMethod::Release,
        }
    }

    /// Coarse event family sent to receivers in the event header
    pub fn event_name(self) -> &'static str {
        match self {
            Self::Create => "create",
            Self::Delete => "delete",
            Self::Fork => "fork",
            Self::Push => "push",
            Self::Issues | Self::IssueAssign | Self::IssueLabel | Self::IssueMilestone => "issues",
            Self::PullRequest
            | Self::PullRequestAssign
            | Self::PullRequestLabel
            | Self::PullRequestMilestone
            | Self::PullRequestSync => "pull_request",
            Self::IssueComment | Self::PullRequestComment => "issue_comment",
            Self::PullRequestReviewApproved => "pull_request_approved",
            Self::PullRequestReviewRejected => "pull_request_rejected",
            Self::PullRequestReviewComment => "pull_request_comment",
            Self::Repository => "repository",
            Self::Release => "release",
        }
    }

    /// Stored wire name
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Create => "create",
            Self::Delete => "delete",
            Self::Fork => "fork",
            Self::Push => "push",
            Self::Issues => "issues",
            Self::IssueAssign => "issue_assign",
            Self::IssueLabel => "issue_label",
            Self::IssueMilestone => "issue_milestone",
            Self::IssueComment => "issue_comment",
            Self::PullRequest => "pull_request",
            Self::PullRequestAssign => "pull_request_assign",
            Self::PullRequestLabel => "pull_request_label",
            Self::PullRequestMilestone => "pull_request_milestone",
            Self::PullRequestComment => "pull_request_comment",
            Self::PullRequestReviewApproved => "pull_request_review_approved",
            Self::PullRequestReviewRejected => "pull_request_review_rejected",
            Self::PullRequestReviewComment => "pull_request_review_comment",
            Self::PullRequestSync => "pull_request_sync",
            Self::Repository => "repository",
            Self::Release => "release",
        }
    }
}

impl std::fmt::Display for HookEventType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for HookEventType {
    type Err = ConvertError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|event| event.as_str() == s)
            .ok_or_else(|| ConvertError::UnroutableEvent(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_every_event_routes_to_a_method() {
        let methods: HashSet<ConvertorMethod> = HookEventType::ALL
            .iter()
            .map(|event| event.convertor_method())
            .collect();

        // Every convertor method is reachable from at least one event type
        assert_eq!(methods.len(), 10);
    }

    #[test]
    fn test_wire_names_round_trip() {
        for event in HookEventType::ALL {
            let parsed: HookEventType = event.to_string().parse().unwrap();
            assert_eq!(parsed, event);

            let json = serde_json::to_string(&event).unwrap();
            assert_eq!(json, format!("\"{}\"", event.as_str()));
        }
    }

    #[test]
    fn test_unknown_event_is_unroutable() {
        let err = "wiki".parse::<HookEventType>().unwrap_err();
        assert!(matches!(err, ConvertError::UnroutableEvent(ref name) if name == "wiki"));
    }

    #[test]
    fn test_review_routing() {
        assert_eq!(
            HookEventType::PullRequestReviewApproved.convertor_method(),
            ConvertorMethod::Review
        );
        assert_eq!(
            HookEventType::PullRequestComment.convertor_method(),
            ConvertorMethod::IssueComment
        );
        assert_eq!(
            HookEventType::PullRequestReviewRejected.event_name(),
            "pull_request_rejected"
        );
    }
}
