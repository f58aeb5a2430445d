//! Release type

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::entities::User;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Release {
    pub id: i64,
    pub tag_name: String,
    #[serde(rename = "target_commitish")]
    pub target: String,
    #[serde(rename = "name")]
    pub title: String,
    #[serde(rename = "body", default)]
    pub note: String,
    pub url: String,
    pub html_url: String,
    #[serde(default)]
    pub tarball_url: String,
    #[serde(default)]
    pub zipball_url: String,
    #[serde(default)]
    pub draft: bool,
    #[serde(default)]
    pub prerelease: bool,
    pub created_at: DateTime<Utc>,
    #[serde(rename = "author")]
    pub publisher: User,
}
