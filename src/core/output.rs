//! Output helpers for the bundled command line tool.
//!
//! # Colors
//! - "✕ Error:" prefix in red
//! - Messages in white

use crate::core::row::CommitRow;
use colored::*;
use std::io::Write;

/// Separator printed between the columns of a row
pub const COLUMN_SEPARATOR: &str = " ";

/// Formats and prints an error message with consistent styling
///
/// # Format
/// ```text
///
/// ✕ Error: <message>
///
/// ```
pub fn print_error(message: &str) {
    eprintln!("\n{} {}\n", "✕ Error:".red(), message.white());
}

/// Write one line per row, columns joined by [`COLUMN_SEPARATOR`]
pub fn write_rows<W: Write>(out: &mut W, rows: &[CommitRow], colored: bool) -> std::io::Result<()> {
    for row in rows {
        writeln!(out, "{}", row.to_line(COLUMN_SEPARATOR, colored))?;
    }
    Ok(())
}
