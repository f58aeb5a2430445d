//! Action verbs carried by issue, comment, repository and release events

use serde::{Deserialize, Serialize};

/// What happened to an issue or pull request
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum HookIssueAction {
    #[default]
    Opened,
    Closed,
    Reopened,
    Edited,
    Assigned,
    #[serde(rename = "unassigned")]
    UnAssigned,
    LabelUpdated,
    LabelCleared,
    Synchronized,
    Milestoned,
    Demilestoned,
    Reviewed,
}

/// What happened to a comment
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum HookIssueCommentAction {
    #[default]
    Created,
    Edited,
    Deleted,
}

/// What happened to a repository
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum HookRepoAction {
    #[default]
    Created,
    Deleted,
}

/// What happened to a release
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum HookReleaseAction {
    #[default]
    Published,
    Updated,
    Deleted,
}
