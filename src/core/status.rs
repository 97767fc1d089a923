//! Git working tree status snapshot.
//!
//! [`Status`] is the immutable record handed to the formatters. It is produced
//! by [`GitRepo::status`](crate::core::git::GitRepo::status) and never mutated
//! afterwards.
//!
//! # Public API
//! - [`Status`]: Counters, branch names and flags describing the working tree
//! - [`State`]: Special git operation in progress, if any

use serde::{Deserialize, Serialize};
use std::fmt;

/// Special git operation in progress.
///
/// Only one operation can be in progress at a time, so a single value is
/// enough to describe the repository.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum State {
    /// No special operation in progress
    #[default]
    Default,
    /// `git rebase` in progress
    Rebasing,
    /// `git am` in progress
    Am,
    /// `git am` or `git rebase` in progress (git can't tell which)
    AmRebase,
    /// `git merge` in progress
    Merging,
    /// `git cherry-pick` in progress
    CherryPicking,
    /// `git revert` in progress
    Reverting,
    /// `git bisect` in progress
    Bisecting,
}

impl State {
    /// Bracketed label shown in place of the branch symbol, trailing space included.
    ///
    /// Returns `None` for [`State::Default`], which has no label.
    pub fn label(&self) -> Option<&'static str> {
        match self {
            State::Default => None,
            State::Rebasing => Some("[rebase] "),
            State::Am => Some("[am] "),
            State::AmRebase => Some("[am-rebase] "),
            State::Merging => Some("[merge] "),
            State::CherryPicking => Some("[cherry-pick] "),
            State::Reverting => Some("[revert] "),
            State::Bisecting => Some("[bisect] "),
        }
    }

    /// Map the repository state reported by git2
    pub fn from_git2(state: git2::RepositoryState) -> Self {
        use git2::RepositoryState as Rs;
        match state {
            Rs::Clean => State::Default,
            Rs::Merge => State::Merging,
            Rs::Revert | Rs::RevertSequence => State::Reverting,
            Rs::CherryPick | Rs::CherryPickSequence => State::CherryPicking,
            Rs::Bisect => State::Bisecting,
            Rs::Rebase | Rs::RebaseInteractive | Rs::RebaseMerge => State::Rebasing,
            Rs::ApplyMailbox => State::Am,
            Rs::ApplyMailboxOrRebase => State::AmRebase,
        }
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            State::Default => "default",
            State::Rebasing => "rebasing",
            State::Am => "am",
            State::AmRebase => "am-rebase",
            State::Merging => "merging",
            State::CherryPicking => "cherry-picking",
            State::Reverting => "reverting",
            State::Bisecting => "bisecting",
        };
        f.write_str(name)
    }
}

/// Snapshot of a git working tree.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Status {
    /// Name of the checked out branch, empty when detached
    pub local_branch: String,
    /// Upstream of the local branch (e.g. `origin/main`), empty if none
    pub remote_branch: String,
    /// Commit id of HEAD
    pub head: String,

    pub is_detached: bool,
    /// Repository has no commits yet
    pub is_initial: bool,
    pub is_clean: bool,

    pub state: State,

    pub ahead_count: usize,
    pub behind_count: usize,

    pub num_staged: usize,
    pub num_conflicts: usize,
    pub num_modified: usize,
    pub num_untracked: usize,
    pub num_stashed: usize,

    /// Inserted lines in the working tree
    pub insertions: usize,
    /// Deleted lines in the working tree
    pub deletions: usize,
}
