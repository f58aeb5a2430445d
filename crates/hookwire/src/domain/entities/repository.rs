//! Repository, user and commit types shared by every event

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Platform account that owns a repository or triggered an event
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub login: String,
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub avatar_url: String,
    /// Deprecated alias of `login`, still sent to receivers
    #[serde(default)]
    pub username: String,
}

/// Repository an event happened in
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Repository {
    pub id: i64,
    pub owner: User,
    pub name: String,
    pub full_name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub private: bool,
    #[serde(default)]
    pub fork: bool,
    pub html_url: String,
    #[serde(default)]
    pub ssh_url: String,
    #[serde(default)]
    pub clone_url: String,
    #[serde(default)]
    pub default_branch: String,
}

/// Author or committer recorded on a pushed commit
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayloadUser {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub username: String,
}

/// Commit carried by a push event
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayloadCommit {
    pub id: String,
    pub message: String,
    pub url: String,
    pub author: PayloadUser,
    pub committer: PayloadUser,
    pub timestamp: DateTime<Utc>,
    #[serde(default)]
    pub added: Vec<String>,
    #[serde(default)]
    pub removed: Vec<String>,
    #[serde(default)]
    pub modified: Vec<String>,
}

impl Repository {
    /// Repository owned by `owner` with URLs derived from `base_url`
    pub fn new(id: i64, owner: User, name: impl Into<String>, base_url: &str) -> Self {
        let name = name.into();
        let full_name = format!("{}/{}", owner.login, name);
        let html_url = format!("{}/{}", base_url.trim_end_matches('/'), full_name);
        Self {
            id,
            clone_url: format!("{}.git", html_url),
            owner,
            name,
            full_name,
            html_url,
            ..Default::default()
        }
    }
}

impl User {
    pub fn new(id: i64, login: impl Into<String>) -> Self {
        let login = login.into();
        Self {
            id,
            username: login.clone(),
            login,
            ..Default::default()
        }
    }
}
