//! Common assertion helpers for test output validation
//!
//! Provides predicates for validating the status string printed by gitmux.

#![allow(dead_code)]

use predicates::prelude::*;

/// Creates a predicate that checks for git repository error messages
pub fn not_in_git_repo() -> impl Predicate<str> {
    predicates::str::contains("Not in a git repository")
}

/// Creates a predicate that checks the status string ends with the reset sequence
pub fn ends_with_reset() -> impl Predicate<str> {
    predicates::str::ends_with("#[norange default]")
}

/// Creates a predicate that checks for a flag symbol followed by its count
pub fn has_flag(symbol: &str, count: usize) -> impl Predicate<str> {
    predicates::str::contains(format!("{}{}", symbol, count))
}
