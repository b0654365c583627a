//! Core functionality for git-commit-rows.
//!
//! This module holds the commit list formatting core (colors, template
//! parsing, row layouts, list formatting) together with the configuration,
//! error and output pieces used by the command line tool.

pub mod colors;
pub mod commit;
pub mod commit_list;
pub mod commit_row;
pub mod commit_template;
pub mod config;
pub mod dirs;
pub mod error;
pub mod output;
pub mod row;
pub mod text;

// === Error handling ===
pub use error::{CommitRowsError, Result};

// === Commit snapshot ===
pub use commit::{Commit, CommitStatus, SHORT_SHA_LEN};

// === Color system ===
// Single source of truth for sha and action colors
pub use colors::{action_style, resolve_sha_style, StyleToken};

// === Commit template ===
// Parser for "short-sha|author|message" style column templates
pub use commit_template::{ColumnKey, CommitTemplate, CommitTemplateParser, DEFAULT_COLUMNS};

// === Row formatting ===
pub use commit_row::{
    full_description_row, template_row, ShaHighlight, ACTION_LABEL_WIDTH, AUTHOR_MAX_WIDTH,
};
pub use row::{Column, CommitRow, StyledSegment};

// === List formatting ===
// Entry point used by the rendering layer
pub use commit_list::{format_commit_list, CommitListContext};

// === Text helpers ===
pub use text::{strip_ansi_codes, truncate_with_ellipsis, unix_to_date, with_padding};

// === Configuration ===
pub use config::FormatterConfig;

// === Output formatting ===
pub use output::{print_error, write_rows};
