//! Styled output types produced by the commit row formatters.
//!
//! A [`CommitRow`] is an ordered list of [`Column`]s, and each column is an
//! ordered list of [`StyledSegment`]s. The table renderer decides widths and
//! drawing; these types only carry text and style tokens.

use crate::core::colors::StyleToken;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StyledSegment {
    pub text: String,
    pub style: StyleToken,
}

impl StyledSegment {
    pub fn new(text: impl Into<String>, style: StyleToken) -> Self {
        Self {
            text: text.into(),
            style,
        }
    }

    /// Segment in the default text style
    pub fn plain(text: impl Into<String>) -> Self {
        Self::new(text, StyleToken::Default)
    }
}

/// One table cell
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    pub segments: Vec<StyledSegment>,
}

impl Column {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn styled(text: impl Into<String>, style: StyleToken) -> Self {
        Self {
            segments: vec![StyledSegment::new(text, style)],
        }
    }

    pub fn push(&mut self, segment: StyledSegment) {
        self.segments.push(segment);
    }

    /// Insert segments in front of the existing ones, keeping their order
    pub fn prepend(&mut self, segments: impl IntoIterator<Item = StyledSegment>) {
        let tail = std::mem::take(&mut self.segments);
        self.segments.extend(segments);
        self.segments.extend(tail);
    }

    /// Column text without styling
    pub fn plain(&self) -> String {
        self.segments.iter().map(|s| s.text.as_str()).collect()
    }

    /// Column text with ANSI colors applied
    pub fn render(&self) -> String {
        let mut result = String::with_capacity(self.plain().len() + 32);
        for segment in &self.segments {
            result.push_str(&segment.style.apply(&segment.text).to_string());
        }
        result
    }
}

/// Formatted row for a single commit
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommitRow {
    pub columns: Vec<Column>,
}

impl CommitRow {
    pub fn new(columns: Vec<Column>) -> Self {
        Self { columns }
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    pub fn plain_columns(&self) -> Vec<String> {
        self.columns.iter().map(Column::plain).collect()
    }

    /// Join the columns into a single line with `separator` between them
    pub fn to_line(&self, separator: &str, colored: bool) -> String {
        let cells: Vec<String> = self
            .columns
            .iter()
            .map(|c| if colored { c.render() } else { c.plain() })
            .collect();
        cells.join(separator)
    }
}
