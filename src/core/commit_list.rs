//! Commit list formatting, the entry point used by the rendering layer.
//!
//! [`format_commit_list`] turns a snapshot of commits into one [`CommitRow`]
//! per commit, in input order. The call is pure and synchronous: the caller
//! owns the snapshot and must not mutate it while a render pass runs.

use crate::core::{
    commit::Commit,
    commit_row::{full_description_row, template_row, ShaHighlight},
    commit_template::CommitTemplate,
    row::CommitRow,
};
use std::collections::HashSet;

/// Per-call rendering inputs
#[derive(Debug, Default)]
pub struct CommitListContext<'a> {
    /// Use the fixed four column layout instead of the template
    pub full_description: bool,
    /// Hashes of commits marked as copied
    pub cherry_picked: Option<&'a HashSet<String>>,
    /// Hash of the commit currently selected for diffing
    pub diff_target: Option<&'a str>,
    /// Pipe-delimited column template
    pub commit_template: &'a str,
}

impl CommitListContext<'_> {
    fn highlight_for(&self, commit: &Commit) -> ShaHighlight {
        // An empty hash never matches anything
        if commit.sha.is_empty() {
            return ShaHighlight::default();
        }

        ShaHighlight {
            is_diffed: self.diff_target == Some(commit.sha.as_str()),
            is_cherry_picked: self
                .cherry_picked
                .is_some_and(|set| set.contains(&commit.sha)),
        }
    }
}

/// Format every commit of the list into a row
pub fn format_commit_list(commits: &[Commit], context: &CommitListContext) -> Vec<CommitRow> {
    if commits.is_empty() {
        return Vec::new();
    }

    let rows: Vec<CommitRow> = if context.full_description {
        commits
            .iter()
            .map(|commit| full_description_row(commit, context.highlight_for(commit)))
            .collect()
    } else {
        let template = CommitTemplate::parse(context.commit_template);
        commits
            .iter()
            .map(|commit| template_row(commit, &template, context.highlight_for(commit)))
            .collect()
    };

    log::debug!(
        "Formatted {} commit rows (full_description={})",
        rows.len(),
        context.full_description
    );
    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{colors::StyleToken, commit::CommitStatus};

    fn commit(sha: &str, status: CommitStatus) -> Commit {
        let mut commit = Commit::new(sha, format!("subject {sha}"), "Jane Doe", 1_600_000_000);
        commit.status = status;
        commit
    }

    fn sample_commits() -> Vec<Commit> {
        vec![
            commit("aaaaaaaaaaaa", CommitStatus::Unpushed),
            commit("bbbbbbbbbbbb", CommitStatus::Pushed),
            commit("cccccccccccc", CommitStatus::Merged),
        ]
    }

    fn sha_style(row: &CommitRow) -> StyleToken {
        row.columns[0].segments[0].style
    }

    #[test]
    fn test_empty_list() {
        let rows = format_commit_list(&[], &CommitListContext::default());
        assert!(rows.is_empty());
    }

    #[test]
    fn test_one_row_per_commit_in_order() {
        let commits = sample_commits();
        for full_description in [false, true] {
            let context = CommitListContext {
                full_description,
                commit_template: "author|bogus",
                ..Default::default()
            };
            let rows = format_commit_list(&commits, &context);
            assert_eq!(rows.len(), commits.len());
        }

        let rows = format_commit_list(&commits, &CommitListContext::default());
        let shas: Vec<String> = rows.iter().map(|r| r.columns[0].plain()).collect();
        assert_eq!(shas, vec!["aaaaaaaa", "bbbbbbbb", "cccccccc"]);
    }

    #[test]
    fn test_column_counts_per_layout() {
        let commits = sample_commits();

        let full = CommitListContext {
            full_description: true,
            commit_template: "message",
            ..Default::default()
        };
        assert!(format_commit_list(&commits, &full).iter().all(|r| r.len() == 4));

        let template = CommitListContext {
            commit_template: "short-sha|author|bogus|message",
            ..Default::default()
        };
        assert!(format_commit_list(&commits, &template).iter().all(|r| r.len() == 3));

        let garbled = CommitListContext {
            commit_template: "bogus|also-bogus",
            ..Default::default()
        };
        assert!(format_commit_list(&commits, &garbled).iter().all(|r| r.len() == 2));
    }

    #[test]
    fn test_diff_target_and_cherry_picks() {
        let commits = sample_commits();
        let cherry_picked: HashSet<String> = ["aaaaaaaaaaaa", "bbbbbbbbbbbb"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        let context = CommitListContext {
            cherry_picked: Some(&cherry_picked),
            diff_target: Some("aaaaaaaaaaaa"),
            ..Default::default()
        };

        let rows = format_commit_list(&commits, &context);
        assert_eq!(sha_style(&rows[0]), StyleToken::Diffed);
        assert_eq!(sha_style(&rows[1]), StyleToken::Copied);
        assert_eq!(sha_style(&rows[2]), StyleToken::Green);
    }

    #[test]
    fn test_empty_sha_never_matches() {
        let commits = vec![commit("", CommitStatus::Unpushed)];
        let cherry_picked: HashSet<String> = [String::new()].into_iter().collect();
        let context = CommitListContext {
            full_description: true,
            cherry_picked: Some(&cherry_picked),
            diff_target: Some(""),
            ..Default::default()
        };

        let rows = format_commit_list(&commits, &context);
        assert_eq!(sha_style(&rows[0]), StyleToken::Red);
    }
}
