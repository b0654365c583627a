//! Git Commit Rows - commit list row formatting for terminal git tools.
//!
//! Given a snapshot of commits and a few rendering flags, this library produces
//! one row of styled text segments per commit, ready for a fixed-width table
//! renderer. It does no drawing and no git plumbing of its own.
//!
//! # Public API
//! The main public interface is re-exported from the [`core`] module:
//! - [`format_commit_list`] and [`CommitListContext`] for whole lists
//! - Row layouts, color resolution and template parsing
//! - Configuration loading and error types

pub mod commands;
pub mod core;

// Re-export the core public API for external users
pub use crate::core::{
    action_style,
    // List formatting
    format_commit_list,
    full_description_row,
    resolve_sha_style,
    strip_ansi_codes,
    template_row,
    truncate_with_ellipsis,

    Column,
    ColumnKey,
    // Commit snapshot
    Commit,
    CommitListContext,
    CommitRow,
    // Error handling
    CommitRowsError,
    CommitStatus,
    // Template parsing
    CommitTemplate,
    CommitTemplateParser,
    // Configuration
    FormatterConfig,
    Result,
    ShaHighlight,
    StyleToken,
    StyledSegment,
};
