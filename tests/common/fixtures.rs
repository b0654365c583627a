//! Commit fixtures and snapshot files for integration tests

#![allow(dead_code)]

use git_commit_rows::{Commit, CommitStatus};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub const UNPUSHED_SHA: &str = "1111111111111111111111111111111111111111";
pub const PUSHED_SHA: &str = "2222222222222222222222222222222222222222";
pub const MERGED_SHA: &str = "3333333333333333333333333333333333333333";

/// A commit snapshot written to a temporary directory. The TempDir must be
/// kept alive for the duration of the test.
pub struct SnapshotFile {
    pub temp_dir: TempDir,
    pub path: PathBuf,
}

impl SnapshotFile {
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn dir(&self) -> &Path {
        self.temp_dir.path()
    }
}

pub fn commit(sha: &str, name: &str, author: &str, status: CommitStatus) -> Commit {
    let mut commit = Commit::new(sha, name, author, 1_600_000_000);
    commit.status = status;
    commit
}

/// Three commits with distinct statuses, newest first
pub fn sample_commits() -> Vec<Commit> {
    vec![
        commit(UNPUSHED_SHA, "Add feature", "Jane Doe", CommitStatus::Unpushed),
        commit(PUSHED_SHA, "Fix bug", "John Smith", CommitStatus::Pushed),
        commit(MERGED_SHA, "Initial commit", "Jane Doe", CommitStatus::Merged),
    ]
}

/// Writes `commits` as a JSON array into a fresh temporary directory
pub fn write_snapshot(commits: &[Commit]) -> anyhow::Result<SnapshotFile> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("commits.json");
    std::fs::write(&path, serde_json::to_string_pretty(commits)?)?;
    Ok(SnapshotFile { temp_dir, path })
}

/// Writes a config file next to the snapshot and returns its path
pub fn write_config(snapshot: &SnapshotFile, content: &str) -> anyhow::Result<PathBuf> {
    let path = snapshot.dir().join("config.json");
    std::fs::write(&path, content)?;
    Ok(path)
}
