//! Common assertion helpers for command output validation

#![allow(dead_code)]

use predicates::prelude::*;

/// Creates a predicate that checks for the CLI error prefix
pub fn has_error() -> impl Predicate<str> {
    predicates::str::contains("Error:")
}

/// Creates a predicate that checks a short sha is printed
pub fn has_short_sha(sha: &str) -> impl Predicate<str> {
    predicates::str::contains(sha[..8].to_string())
}

/// Creates a predicate that checks for a complete output line
pub fn has_line(line: &str) -> impl Predicate<str> {
    predicates::str::contains(format!("{line}\n"))
}
