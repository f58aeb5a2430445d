//! HookType - Target integration of a webhook

use serde::{Deserialize, Serialize};

/// Integration a webhook delivers to
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum HookType {
    SynologyChat,
}

impl std::fmt::Display for HookType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HookType::SynologyChat => write!(f, "synologychat"),
        }
    }
}

impl std::str::FromStr for HookType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "synologychat" => Ok(HookType::SynologyChat),
            _ => Err(format!("Unknown hook type: {}", s)),
        }
    }
}
