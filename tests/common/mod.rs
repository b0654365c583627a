//! Shared test utilities for git-commit-rows integration tests
//!
//! Provides commit fixtures, snapshot files on disk, and output predicates.

pub mod assertions;
pub mod fixtures;
