//! Git repository access and status collection.
//!
//! This module provides [`GitRepo`], a thin wrapper around `git2` that collects
//! everything the formatters need into a single [`Status`] snapshot.
//!
//! # Public API
//! - [`GitRepo`]: Open a repository and read its [`Status`]
//!
//! # Counting rules
//! - **Conflicts**: entries flagged as conflicted, and nothing else
//! - **Staged**: entries with any index change
//! - **Modified**: entries with a worktree modification, deletion, rename or type change
//! - **Untracked**: new worktree entries; untracked directories count once
//! - **Insertions/deletions**: line stats of the index to worktree diff

use crate::core::{
    error::{GitmuxError, Result},
    status::{State, Status},
};
use git2::{BranchType, DiffOptions, ErrorCode, Repository, StatusOptions};
use std::path::Path;

const INDEX_CHANGES: git2::Status = git2::Status::INDEX_NEW
    .union(git2::Status::INDEX_MODIFIED)
    .union(git2::Status::INDEX_DELETED)
    .union(git2::Status::INDEX_RENAMED)
    .union(git2::Status::INDEX_TYPECHANGE);

const WORKTREE_CHANGES: git2::Status = git2::Status::WT_MODIFIED
    .union(git2::Status::WT_DELETED)
    .union(git2::Status::WT_RENAMED)
    .union(git2::Status::WT_TYPECHANGE);

pub struct GitRepo {
    repo: Repository,
}

/// Entry counts of the working tree
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
struct EntryCounts {
    staged: usize,
    conflicts: usize,
    modified: usize,
    untracked: usize,
}

impl GitRepo {
    /// Open the repository containing `path`
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let repo = Repository::discover(path).map_err(|e| match e.code() {
            ErrorCode::NotFound => GitmuxError::NotInGitRepo,
            _ => GitmuxError::Git(e),
        })?;
        Ok(GitRepo { repo })
    }

    /// Collect a status snapshot of the repository.
    ///
    /// Takes `&mut self` because walking the stash list requires it.
    pub fn status(&mut self) -> Result<Status> {
        let mut st = Status {
            state: State::from_git2(self.repo.state()),
            ..Default::default()
        };

        self.read_head(&mut st)?;

        if !st.is_initial && !st.is_detached {
            self.read_upstream(&mut st)?;
        }

        let counts = self.count_entries()?;
        st.num_staged = counts.staged;
        st.num_conflicts = counts.conflicts;
        st.num_modified = counts.modified;
        st.num_untracked = counts.untracked;
        st.is_clean = counts == EntryCounts::default();

        st.num_stashed = self.count_stashes()?;

        let (insertions, deletions) = self.diff_stats()?;
        st.insertions = insertions;
        st.deletions = deletions;

        log::debug!("Collected status: {st:?}");
        Ok(st)
    }

    /// Branch name, HEAD commit and detached/initial flags
    fn read_head(&self, st: &mut Status) -> Result<()> {
        let head = match self.repo.head() {
            Ok(head) => head,
            Err(e) if e.code() == ErrorCode::UnbornBranch || e.code() == ErrorCode::NotFound => {
                st.is_initial = true;
                st.local_branch = self.unborn_branch_name()?;
                return Ok(());
            }
            Err(e) => return Err(e.into()),
        };

        if let Some(oid) = head.target() {
            st.head = oid.to_string();
        }

        st.is_detached = self.repo.head_detached()?;
        if !st.is_detached {
            st.local_branch = head.shorthand().unwrap_or_default().to_string();
        }

        Ok(())
    }

    /// Name of the branch HEAD points to when it has no commit yet
    fn unborn_branch_name(&self) -> Result<String> {
        let head = self.repo.find_reference("HEAD")?;
        let target = head.symbolic_target().unwrap_or_default();
        Ok(target
            .strip_prefix("refs/heads/")
            .unwrap_or(target)
            .to_string())
    }

    /// Upstream branch name and ahead/behind counts. Missing upstream is not an error.
    fn read_upstream(&self, st: &mut Status) -> Result<()> {
        let local = match self.repo.find_branch(&st.local_branch, BranchType::Local) {
            Ok(branch) => branch,
            Err(_) => return Ok(()),
        };

        let upstream = match local.upstream() {
            Ok(upstream) => upstream,
            Err(e) if e.code() == ErrorCode::NotFound => return Ok(()),
            Err(e) => return Err(e.into()),
        };

        st.remote_branch = upstream.name()?.unwrap_or_default().to_string();

        let (Some(local_oid), Some(upstream_oid)) = (local.get().target(), upstream.get().target())
        else {
            return Ok(());
        };

        let (ahead, behind) = self.repo.graph_ahead_behind(local_oid, upstream_oid)?;
        st.ahead_count = ahead;
        st.behind_count = behind;
        Ok(())
    }

    fn count_entries(&self) -> Result<EntryCounts> {
        let mut opts = StatusOptions::new();
        opts.include_untracked(true);
        opts.recurse_untracked_dirs(false);
        opts.include_ignored(false);

        let statuses = self.repo.statuses(Some(&mut opts))?;
        let mut counts = EntryCounts::default();

        for entry in statuses.iter() {
            let flags = entry.status();

            if flags.is_conflicted() {
                counts.conflicts += 1;
                continue;
            }
            if flags.intersects(INDEX_CHANGES) {
                counts.staged += 1;
            }
            if flags.intersects(WORKTREE_CHANGES) {
                counts.modified += 1;
            }
            if flags.is_wt_new() {
                counts.untracked += 1;
            }
        }

        Ok(counts)
    }

    fn count_stashes(&mut self) -> Result<usize> {
        let mut count = 0;
        let walked = self.repo.stash_foreach(|_, _, _| {
            count += 1;
            true
        });
        match walked {
            Ok(()) => Ok(count),
            // no stash reference yet
            Err(e) if e.code() == ErrorCode::NotFound => Ok(0),
            Err(e) => Err(e.into()),
        }
    }

    /// Inserted and deleted lines between the index and the working tree
    fn diff_stats(&self) -> Result<(usize, usize)> {
        let mut opts = DiffOptions::new();
        let diff = self.repo.diff_index_to_workdir(None, Some(&mut opts))?;
        let stats = diff.stats()?;
        Ok((stats.insertions(), stats.deletions()))
    }
}
