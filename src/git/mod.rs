//! Git operations abstraction layer
//!
//! The bump workflow needs three things from version control: the root of
//! the working tree, the status of a single file, and the textual diff of a
//! single file. They are expressed by the [Repository] trait so the workflow
//! can run against a real repository or a mock.
//!
//! - [repository::Git2Repository]: implementation backed by the `git2` crate
//! - [mock::MockRepository]: in-memory implementation for tests
//!
//! [repository::find_repo_root] is the plain ancestor walk used to decide
//! whether a directory is inside a repository at all.

pub mod mock;
pub mod repository;

pub use mock::MockRepository;
pub use repository::{find_repo_root, Git2Repository};

use crate::error::Result;
use std::path::Path;

/// Version-control state of one file
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FileStatus {
    /// A change is recorded in the index
    pub staged: bool,
    /// A tracked file differs from the index
    pub unstaged: bool,
    /// The file is not tracked at all
    pub untracked: bool,
}

impl FileStatus {
    /// Clean, tracked file
    pub fn clean() -> Self {
        FileStatus::default()
    }

    /// Whether an uncommitted change (staged or unstaged) already exists.
    ///
    /// Untracked files have nothing pending: there is no committed version
    /// to compare against.
    pub fn is_pending(&self) -> bool {
        self.staged || self.unstaged
    }
}

/// Version-control operations used by the bump workflow
///
/// Paths passed to [Repository::status] and [Repository::diff] are relative
/// to [Repository::root] and use `/` as separator.
pub trait Repository {
    /// Top directory of the working tree
    fn root(&self) -> &Path;

    /// Report the working-tree and index status of a file
    ///
    /// # Returns
    /// * `Ok(FileStatus)` - status of the file (clean when git knows nothing about it)
    /// * `Err` - If the status cannot be computed
    fn status(&self, rel_path: &str) -> Result<FileStatus>;

    /// Produce the unstaged diff of a file in patch format
    ///
    /// Equivalent to `git diff -- <rel_path>`. Returns an empty string when
    /// there is no difference (including untracked files).
    fn diff(&self, rel_path: &str) -> Result<String>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pending_policy() {
        assert!(!FileStatus::clean().is_pending());
        assert!(FileStatus {
            staged: true,
            ..Default::default()
        }
        .is_pending());
        assert!(FileStatus {
            unstaged: true,
            ..Default::default()
        }
        .is_pending());
        assert!(!FileStatus {
            untracked: true,
            ..Default::default()
        }
        .is_pending());
    }
}
