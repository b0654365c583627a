//! Parsing of the user-configurable commit column template.
//!
//! The template is a pipe-delimited list of column keys such as
//! `"short-sha|author|message"`. Parsing never fails: unknown tokens are
//! dropped, and a template with no usable keys falls back to
//! `short-sha|message`.
//!
//! # Public API
//! - [`ColumnKey`]: One recognized column
//! - [`CommitTemplate`]: Parsed, never-empty list of columns
//! - [`CommitTemplateParser`]: Parser with the fallback rule

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Separator between keys in a template string
pub const TEMPLATE_SEPARATOR: char = '|';

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ColumnKey {
    ShortSha,
    Message,
    Author,
}

impl ColumnKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            ColumnKey::ShortSha => "short-sha",
            ColumnKey::Message => "message",
            ColumnKey::Author => "author",
        }
    }
}

impl fmt::Display for ColumnKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Error for a token that is not a column key. Only used through [`FromStr`];
/// the template parser drops such tokens silently.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownColumnKey(pub String);

impl FromStr for ColumnKey {
    type Err = UnknownColumnKey;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        match token {
            "short-sha" => Ok(ColumnKey::ShortSha),
            "message" => Ok(ColumnKey::Message),
            "author" => Ok(ColumnKey::Author),
            _ => Err(UnknownColumnKey(token.to_string())),
        }
    }
}

/// Columns used when a template yields no recognized keys
pub const DEFAULT_COLUMNS: [ColumnKey; 2] = [ColumnKey::ShortSha, ColumnKey::Message];

/// Parsed commit template. Always holds at least one column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitTemplate {
    columns: Vec<ColumnKey>,
}

impl CommitTemplate {
    pub fn parse(template: &str) -> Self {
        Self {
            columns: CommitTemplateParser::parse(template),
        }
    }

    pub fn columns(&self) -> &[ColumnKey] {
        &self.columns
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

impl Default for CommitTemplate {
    fn default() -> Self {
        Self {
            columns: DEFAULT_COLUMNS.to_vec(),
        }
    }
}

impl fmt::Display for CommitTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let keys: Vec<&str> = self.columns.iter().map(ColumnKey::as_str).collect();
        write!(f, "{}", keys.join("|"))
    }
}

pub struct CommitTemplateParser;

impl CommitTemplateParser {
    /// Split `template` on `|` and keep the recognized keys in input order.
    /// Repeated keys are kept. Falls back to [`DEFAULT_COLUMNS`] when nothing
    /// is recognized.
    pub fn parse(template: &str) -> Vec<ColumnKey> {
        let mut columns = Vec::new();

        for token in template.split(TEMPLATE_SEPARATOR) {
            match token.parse::<ColumnKey>() {
                Ok(key) => columns.push(key),
                Err(UnknownColumnKey(token)) => {
                    if !token.is_empty() {
                        log::debug!("Ignoring unknown commit template key: {token:?}");
                    }
                }
            }
        }

        if columns.is_empty() {
            return DEFAULT_COLUMNS.to_vec();
        }
        columns
    }
}
