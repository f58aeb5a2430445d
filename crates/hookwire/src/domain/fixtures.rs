//! Test Fixtures
//!
//! Sample event payloads for convertor tests. Compiled for this crate's
//! tests and for downstream crates enabling the `fixtures` feature.

use chrono::{DateTime, TimeZone, Utc};

use crate::domain::entities::*;
use crate::domain::value_objects::*;

pub const BASE_URL: &str = "https://example.test";

fn timestamp() -> DateTime<Utc> {
    Utc.timestamp_opt(1_489_413_131, 0).unwrap()
}

pub fn test_user() -> User {
    User {
        full_name: "user1".to_string(),
        email: "user1@example.test".to_string(),
        avatar_url: format!("{}/avatars/1", BASE_URL),
        ..User::new(1, "user1")
    }
}

/// `o/r`, served at `https://example.test/o/r`
pub fn test_repo() -> Repository {
    Repository::new(1, User::new(2, "o"), "r", BASE_URL)
}

fn test_label() -> Label {
    Label {
        id: 1,
        name: "Bug".to_string(),
        color: "ff0000".to_string(),
        description: String::new(),
    }
}

pub fn test_commit() -> PayloadCommit {
    let author = PayloadUser {
        name: "user1".to_string(),
        email: "user1@example.test".to_string(),
        username: "user1".to_string(),
    };
    PayloadCommit {
        id: "2020558fe2e34debb818a514715839cabd25e778".to_string(),
        message: "commit message".to_string(),
        url: format!(
            "{}/o/r/commit/2020558fe2e34debb818a514715839cabd25e778",
            BASE_URL
        ),
        committer: author.clone(),
        author,
        timestamp: timestamp(),
        added: Vec::new(),
        removed: Vec::new(),
        modified: vec!["README.md".to_string()],
    }
}

fn test_issue() -> Issue {
    Issue {
        id: 2,
        url: format!("{}/api/v1/repos/o/r/issues/2", BASE_URL),
        html_url: format!("{}/o/r/issues/2", BASE_URL),
        number: 2,
        user: test_user(),
        title: "crash".to_string(),
        body: "issue body".to_string(),
        labels: vec![test_label()],
        state: "open".to_string(),
        comments: 1,
        created_at: timestamp(),
        updated_at: timestamp(),
    }
}

fn test_comment(html_url: String) -> Comment {
    Comment {
        id: 4,
        html_url,
        pull_request_url: String::new(),
        issue_url: String::new(),
        user: test_user(),
        body: "more info needed".to_string(),
        created_at: timestamp(),
        updated_at: timestamp(),
    }
}

fn test_pull_request() -> PullRequest {
    PullRequest {
        id: 12,
        url: format!("{}/o/r/pulls/12", BASE_URL),
        number: 12,
        user: test_user(),
        title: "Fix bug".to_string(),
        body: "fixes bug #2".to_string(),
        labels: Vec::new(),
        state: "open".to_string(),
        html_url: format!("{}/o/r/pulls/12", BASE_URL),
        diff_url: format!("{}/o/r/pulls/12.diff", BASE_URL),
        mergeable: true,
        merged: false,
        head: PrBranchInfo {
            label: "fix".to_string(),
            ref_name: "refs/pull/12/head".to_string(),
            sha: "2020558fe2e34debb818a514715839cabd25e777".to_string(),
            repo_id: 1,
            repo: None,
        },
        base: PrBranchInfo {
            label: "main".to_string(),
            ref_name: "main".to_string(),
            sha: "2020558fe2e34debb818a514715839cabd25e776".to_string(),
            repo_id: 1,
            repo: None,
        },
        created_at: timestamp(),
        updated_at: timestamp(),
    }
}

pub fn create_test_payload() -> CreatePayload {
    CreatePayload {
        sha: "2020558fe2e34debb818a514715839cabd25e777".to_string(),
        ref_name: "refs/heads/test".to_string(),
        ref_type: "branch".to_string(),
        repository: test_repo(),
        sender: test_user(),
    }
}

pub fn delete_test_payload() -> DeletePayload {
    DeletePayload {
        ref_name: "refs/heads/test".to_string(),
        ref_type: "branch".to_string(),
        pusher_type: "user".to_string(),
        repository: test_repo(),
        sender: test_user(),
    }
}

pub fn fork_test_payload() -> ForkPayload {
    ForkPayload {
        forkee: test_repo(),
        repository: Repository::new(3, test_user(), "r", BASE_URL),
        sender: test_user(),
    }
}

pub fn push_test_payload() -> PushPayload {
    let commit = test_commit();
    PushPayload {
        ref_name: "refs/heads/test".to_string(),
        before: "2020558fe2e34debb818a514715839cabd25e777".to_string(),
        after: "2020558fe2e34debb818a514715839cabd25e778".to_string(),
        compare_url: format!("{}/o/r/compare/2020558...2020558", BASE_URL),
        commits: vec![commit.clone(), commit.clone()],
        total_commits: 2,
        head_commit: Some(commit),
        repository: test_repo(),
        pusher: test_user(),
        sender: test_user(),
    }
}

pub fn issue_test_payload() -> IssuePayload {
    IssuePayload {
        action: HookIssueAction::Opened,
        index: 2,
        changes: None,
        issue: test_issue(),
        repository: test_repo(),
        sender: test_user(),
    }
}

pub fn issue_comment_test_payload() -> IssueCommentPayload {
    IssueCommentPayload {
        action: HookIssueCommentAction::Created,
        issue: test_issue(),
        comment: test_comment(format!("{}/o/r/issues/2#issuecomment-4", BASE_URL)),
        changes: None,
        repository: test_repo(),
        sender: test_user(),
        is_pull: false,
    }
}

pub fn pull_request_comment_test_payload() -> IssueCommentPayload {
    IssueCommentPayload {
        comment: test_comment(format!("{}/o/r/pulls/12#issuecomment-4", BASE_URL)),
        is_pull: true,
        ..issue_comment_test_payload()
    }
}

pub fn pull_request_test_payload() -> PullRequestPayload {
    PullRequestPayload {
        action: HookIssueAction::Opened,
        index: 12,
        changes: None,
        pull_request: test_pull_request(),
        repository: test_repo(),
        sender: test_user(),
        review: None,
    }
}

pub fn repository_test_payload() -> RepositoryPayload {
    RepositoryPayload {
        action: HookRepoAction::Created,
        repository: test_repo(),
        organization: None,
        sender: test_user(),
    }
}

pub fn release_test_payload() -> ReleasePayload {
    ReleasePayload {
        action: HookReleaseAction::Published,
        release: Release {
            id: 1,
            tag_name: "v1.0".to_string(),
            target: "main".to_string(),
            title: "Release v1.0".to_string(),
            note: "Note of first stable release".to_string(),
            url: format!("{}/api/v1/repos/o/r/releases/1", BASE_URL),
            html_url: format!("{}/o/r/releases/tag/v1.0", BASE_URL),
            tarball_url: format!("{}/o/r/archive/v1.0.tar.gz", BASE_URL),
            zipball_url: format!("{}/o/r/archive/v1.0.zip", BASE_URL),
            draft: false,
            prerelease: false,
            created_at: timestamp(),
            publisher: test_user(),
        },
        repository: test_repo(),
        sender: test_user(),
    }
}

/// One payload per event type, shaped the way the router expects
pub fn payload_for(event: HookEventType) -> EventPayload {
    match event.convertor_method() {
        ConvertorMethod::Create => create_test_payload().into(),
        ConvertorMethod::Delete => delete_test_payload().into(),
        ConvertorMethod::Fork => fork_test_payload().into(),
        ConvertorMethod::Push => push_test_payload().into(),
        ConvertorMethod::Issue => issue_test_payload().into(),
        ConvertorMethod::IssueComment if event == HookEventType::PullRequestComment => {
            pull_request_comment_test_payload().into()
        }
        ConvertorMethod::IssueComment => issue_comment_test_payload().into(),
        ConvertorMethod::PullRequest => pull_request_test_payload().into(),
        ConvertorMethod::Review => {
            let mut payload = pull_request_test_payload();
            payload.action = HookIssueAction::Reviewed;
            payload.review = Some(ReviewPayload {
                review_type: event.event_name().to_string(),
                content: "good job".to_string(),
            });
            payload.into()
        }
        ConvertorMethod::Repository => repository_test_payload().into(),
        ConvertorMethod::Release => release_test_payload().into(),
    }
}
