//! Color resolution for commit list rows.
//!
//! Every color decision the formatters make goes through this module, so the
//! priority rules live in one place and both layouts agree on them.
//!
//! # Public API
//! - [`StyleToken`]: Opaque display style handed to the rendering layer
//! - [`resolve_sha_style`]: Style of the short sha column
//! - [`action_style`]: Style of an interactive rebase action label
//!
//! # Color Scheme
//! - **Diffed**: Magenta, overrides everything else
//! - **Copied**: Cyan on blue, overrides the status color
//! - **Unpushed**: Red
//! - **Pushed**: Yellow
//! - **Merged**: Green
//! - **Rebasing/Reflog**: Blue

use crate::core::commit::CommitStatus;
use colored::*;
use serde::{Deserialize, Serialize};

/// Display style of a text segment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum StyleToken {
    /// Default terminal text style
    #[default]
    Default,
    Red,
    Yellow,
    Green,
    Blue,
    Cyan,
    Magenta,
    BoldMagenta,
    /// Commit currently selected for diffing
    Diffed,
    /// Commit marked as cherry-picked
    Copied,
}

impl StyleToken {
    /// Apply the style to a piece of text
    pub fn apply(self, text: &str) -> ColoredString {
        match self {
            StyleToken::Default => text.normal(),
            StyleToken::Red => text.red(),
            StyleToken::Yellow => text.yellow(),
            StyleToken::Green => text.green(),
            StyleToken::Blue => text.blue(),
            StyleToken::Cyan => text.cyan(),
            StyleToken::Magenta => text.magenta(),
            StyleToken::BoldMagenta => text.magenta().bold(),
            StyleToken::Diffed => text.magenta(),
            // Background pads copied commits out horizontally in the table
            StyleToken::Copied => text.cyan().on_blue(),
        }
    }
}

/// Style for the short sha column.
///
/// Being the diff target wins over being cherry-picked, which wins over the
/// commit status. The rebase action never affects the sha color; it is
/// colored separately through [`action_style`].
pub fn resolve_sha_style(
    status: CommitStatus,
    is_diffed: bool,
    is_cherry_picked: bool,
) -> StyleToken {
    if is_diffed {
        return StyleToken::Diffed;
    }
    if is_cherry_picked {
        return StyleToken::Copied;
    }
    status_style(status)
}

fn status_style(status: CommitStatus) -> StyleToken {
    match status {
        CommitStatus::Unpushed => StyleToken::Red,
        CommitStatus::Pushed => StyleToken::Yellow,
        CommitStatus::Merged => StyleToken::Green,
        CommitStatus::Rebasing | CommitStatus::Reflog => StyleToken::Blue,
        CommitStatus::None => StyleToken::Default,
    }
}

/// Style for an interactive rebase action label
pub fn action_style(action: &str) -> StyleToken {
    match action {
        "pick" => StyleToken::Cyan,
        "drop" => StyleToken::Red,
        "edit" => StyleToken::Green,
        "fixup" => StyleToken::Magenta,
        _ => StyleToken::Yellow,
    }
}
