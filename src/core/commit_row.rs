//! Per-commit row formatting.
//!
//! Two layouts are supported:
//! - **Full description**: fixed four columns (sha, action or date, author,
//!   message) that ignore the commit template.
//! - **Template**: one column per key of the parsed [`CommitTemplate`], with
//!   the rebase action label prepended to whichever column comes first.
//!
//! Both layouts share the sha color priority from [`resolve_sha_style`] and
//! the author truncation from [`truncate_with_ellipsis`].

use crate::core::{
    colors::{action_style, resolve_sha_style, StyleToken},
    commit::Commit,
    commit_template::{ColumnKey, CommitTemplate},
    row::{Column, CommitRow, StyledSegment},
    text::{truncate_with_ellipsis, unix_to_date, with_padding},
};

/// Maximum author width in cells, ellipsis included
pub const AUTHOR_MAX_WIDTH: usize = 17;

/// Width the action label is padded to in the template layout
pub const ACTION_LABEL_WIDTH: usize = 7;

/// How the sha of a commit should be highlighted for this render pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ShaHighlight {
    pub is_diffed: bool,
    pub is_cherry_picked: bool,
}

fn sha_column(commit: &Commit, highlight: ShaHighlight) -> Column {
    let style = resolve_sha_style(
        commit.status,
        highlight.is_diffed,
        highlight.is_cherry_picked,
    );
    Column::styled(commit.short_sha(), style)
}

fn author_column(commit: &Commit) -> Column {
    Column::styled(
        truncate_with_ellipsis(&commit.author, AUTHOR_MAX_WIDTH),
        StyleToken::Yellow,
    )
}

/// Bold magenta label followed by a separating space
fn tag_prefix(label: &str) -> [StyledSegment; 2] {
    [
        StyledSegment::new(label, StyleToken::BoldMagenta),
        StyledSegment::plain(" "),
    ]
}

/// Fixed four column layout used when the full description is shown
pub fn full_description_row(commit: &Commit, highlight: ShaHighlight) -> CommitRow {
    let mut message = Column::new();

    let second = match commit.action() {
        Some(action) => Column::styled(action, action_style(action)),
        None => {
            if let Some(extra_info) = commit.extra_info() {
                message.segments.extend(tag_prefix(extra_info));
            }
            Column::styled(unix_to_date(commit.unix_timestamp), StyleToken::Blue)
        }
    };
    message.push(StyledSegment::plain(commit.name.as_str()));

    CommitRow::new(vec![
        sha_column(commit, highlight),
        second,
        author_column(commit),
        message,
    ])
}

/// Template driven layout: one column per key, in template order
pub fn template_row(
    commit: &Commit,
    template: &CommitTemplate,
    highlight: ShaHighlight,
) -> CommitRow {
    let action = commit.action();

    // The action label replaces the tag prefix on the message
    let tags = if action.is_none() && !commit.tags.is_empty() {
        Some(commit.tags.join(" "))
    } else {
        None
    };

    let mut columns: Vec<Column> = template
        .columns()
        .iter()
        .map(|key| match key {
            ColumnKey::ShortSha => sha_column(commit, highlight),
            ColumnKey::Message => {
                let mut message = Column::new();
                if let Some(tags) = &tags {
                    message.segments.extend(tag_prefix(tags));
                }
                message.push(StyledSegment::plain(commit.name.as_str()));
                message
            }
            ColumnKey::Author => author_column(commit),
        })
        .collect();

    if let (Some(action), Some(first)) = (action, columns.first_mut()) {
        first.prepend([
            StyledSegment::new(
                with_padding(action, ACTION_LABEL_WIDTH),
                action_style(action),
            ),
            StyledSegment::plain(" "),
        ]);
    }

    CommitRow::new(columns)
}
