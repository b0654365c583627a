//! Commit snapshot types consumed by the row formatters.
//!
//! A [`Commit`] is an immutable record handed over by the hosting application
//! before each render pass. Nothing in this crate mutates it.
//!
//! # Public API
//! - [`Commit`]: A single commit as displayed in the commit list
//! - [`CommitStatus`]: Type-safe commit status used for sha coloring
//! - [`SHORT_SHA_LEN`]: Number of hash characters shown in the list

use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of leading hash characters used for the short identifier
pub const SHORT_SHA_LEN: usize = 8;

/// Commit status as reported by the host's git layer
///
/// Unknown status strings map to [`CommitStatus::None`] instead of failing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CommitStatus {
    /// Local commit not yet on the upstream
    Unpushed,
    /// Commit exists on the upstream branch
    Pushed,
    /// Commit is reachable from the main branch
    Merged,
    /// Commit is part of an in-progress interactive rebase
    Rebasing,
    /// Commit comes from the reflog
    Reflog,
    #[default]
    #[serde(other)]
    None,
}

impl CommitStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            CommitStatus::Unpushed => "unpushed",
            CommitStatus::Pushed => "pushed",
            CommitStatus::Merged => "merged",
            CommitStatus::Rebasing => "rebasing",
            CommitStatus::Reflog => "reflog",
            CommitStatus::None => "none",
        }
    }
}

impl fmt::Display for CommitStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl From<&str> for CommitStatus {
    fn from(status: &str) -> Self {
        match status {
            "unpushed" => CommitStatus::Unpushed,
            "pushed" => CommitStatus::Pushed,
            "merged" => CommitStatus::Merged,
            "rebasing" => CommitStatus::Rebasing,
            "reflog" => CommitStatus::Reflog,
            _ => CommitStatus::None,
        }
    }
}

impl From<String> for CommitStatus {
    fn from(status: String) -> Self {
        CommitStatus::from(status.as_str())
    }
}

/// One entry of the commit list
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Commit {
    /// Full commit hash
    pub sha: String,
    /// Commit subject line
    pub name: String,
    pub author: String,
    /// Author timestamp, seconds since the epoch
    pub unix_timestamp: i64,
    #[serde(default)]
    pub status: CommitStatus,
    /// Interactive rebase action ("pick", "drop", ...)
    #[serde(default)]
    pub action: Option<String>,
    /// Single extra label shown in the full description layout
    #[serde(default)]
    pub extra_info: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl Commit {
    pub fn new(
        sha: impl Into<String>,
        name: impl Into<String>,
        author: impl Into<String>,
        unix_timestamp: i64,
    ) -> Self {
        Self {
            sha: sha.into(),
            name: name.into(),
            author: author.into(),
            unix_timestamp,
            ..Default::default()
        }
    }

    /// Short identifier: the first [`SHORT_SHA_LEN`] characters of the hash,
    /// or the whole hash when it is shorter
    pub fn short_sha(&self) -> &str {
        match self.sha.char_indices().nth(SHORT_SHA_LEN) {
            Some((end, _)) => &self.sha[..end],
            None => &self.sha,
        }
    }

    /// Rebase action, with an empty label treated as absent
    pub fn action(&self) -> Option<&str> {
        self.action.as_deref().filter(|a| !a.is_empty())
    }

    /// Extra info label, with an empty label treated as absent
    pub fn extra_info(&self) -> Option<&str> {
        self.extra_info.as_deref().filter(|e| !e.is_empty())
    }
}
