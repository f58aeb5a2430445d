//! Event Payloads
//!
//! One struct per event shape as emitted by the platform. The conversion
//! layer only ever reads them.

use serde::{Deserialize, Serialize};

use crate::domain::entities::{
    ChangesPayload, Comment, Issue, PayloadCommit, PullRequest, Release, Repository,
    ReviewPayload, User,
};
use crate::domain::value_objects::{
    HookIssueAction, HookIssueCommentAction, HookReleaseAction, HookRepoAction,
};

/// A branch or tag was created
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatePayload {
    pub sha: String,
    #[serde(rename = "ref")]
    pub ref_name: String,
    pub ref_type: String,
    pub repository: Repository,
    pub sender: User,
}

/// A branch or tag was deleted
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeletePayload {
    #[serde(rename = "ref")]
    pub ref_name: String,
    pub ref_type: String,
    pub pusher_type: String,
    pub repository: Repository,
    pub sender: User,
}

/// A repository was forked into `forkee`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForkPayload {
    pub forkee: Repository,
    pub repository: Repository,
    pub sender: User,
}

/// Commits were pushed to a ref
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PushPayload {
    #[serde(rename = "ref")]
    pub ref_name: String,
    pub before: String,
    pub after: String,
    pub compare_url: String,
    #[serde(default)]
    pub commits: Vec<PayloadCommit>,
    #[serde(default)]
    pub total_commits: usize,
    #[serde(default)]
    pub head_commit: Option<PayloadCommit>,
    pub repository: Repository,
    pub pusher: User,
    pub sender: User,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssuePayload {
    pub action: HookIssueAction,
    #[serde(rename = "number")]
    pub index: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub changes: Option<ChangesPayload>,
    pub issue: Issue,
    pub repository: Repository,
    pub sender: User,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssueCommentPayload {
    pub action: HookIssueCommentAction,
    pub issue: Issue,
    pub comment: Comment,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub changes: Option<ChangesPayload>,
    pub repository: Repository,
    pub sender: User,
    /// Set when the comment belongs to a pull request
    #[serde(default)]
    pub is_pull: bool,
}

/// Pull request opened, updated or reviewed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PullRequestPayload {
    pub action: HookIssueAction,
    #[serde(rename = "number")]
    pub index: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub changes: Option<ChangesPayload>,
    pub pull_request: PullRequest,
    pub repository: Repository,
    pub sender: User,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub review: Option<ReviewPayload>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepositoryPayload {
    pub action: HookRepoAction,
    pub repository: Repository,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub organization: Option<User>,
    pub sender: User,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReleasePayload {
    pub action: HookReleaseAction,
    pub release: Release,
    pub repository: Repository,
    pub sender: User,
}

/// Any event payload, tagged by shape
///
/// Serializes as the inner payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum EventPayload {
    Create(CreatePayload),
    Delete(DeletePayload),
    Fork(ForkPayload),
    Push(PushPayload),
    Issue(IssuePayload),
    IssueComment(IssueCommentPayload),
    PullRequest(PullRequestPayload),
    Repository(RepositoryPayload),
    Release(ReleasePayload),
}

impl EventPayload {
    /// Name of the payload shape, for diagnostics
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Create(_) => "create",
            Self::Delete(_) => "delete",
            Self::Fork(_) => "fork",
            Self::Push(_) => "push",
            Self::Issue(_) => "issue",
            Self::IssueComment(_) => "issue_comment",
            Self::PullRequest(_) => "pull_request",
            Self::Repository(_) => "repository",
            Self::Release(_) => "release",
        }
    }

    /// Repository the event happened in
    pub fn repository(&self) -> &Repository {
        match self {
            Self::Create(p) => &p.repository,
            Self::Delete(p) => &p.repository,
            Self::Fork(p) => &p.repository,
            Self::Push(p) => &p.repository,
            Self::Issue(p) => &p.repository,
            Self::IssueComment(p) => &p.repository,
            Self::PullRequest(p) => &p.repository,
            Self::Repository(p) => &p.repository,
            Self::Release(p) => &p.repository,
        }
    }
}

macro_rules! impl_from_payload {
    ($($variant:ident => $ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for EventPayload {
                fn from(payload: $ty) -> Self {
                    Self::$variant(payload)
                }
            }
        )*
    };
}

impl_from_payload! {
    Create => CreatePayload,
    Delete => DeletePayload,
    Fork => ForkPayload,
    Push => PushPayload,
    Issue => IssuePayload,
    IssueComment => IssueCommentPayload,
    PullRequest => PullRequestPayload,
    Repository => RepositoryPayload,
    Release => ReleasePayload,
}
