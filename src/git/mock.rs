use crate::error::Result;
use crate::git::{FileStatus, Repository};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Mock repository for testing without actual git operations
pub struct MockRepository {
    root: PathBuf,
    statuses: HashMap<String, FileStatus>,
    diffs: HashMap<String, String>,
}

impl MockRepository {
    /// Create a mock repository rooted at `root` where every file is clean
    pub fn new(root: impl Into<PathBuf>) -> Self {
        MockRepository {
            root: root.into(),
            statuses: HashMap::new(),
            diffs: HashMap::new(),
        }
    }

    /// Set the status reported for a repo-relative path
    pub fn set_status(&mut self, rel_path: impl Into<String>, status: FileStatus) {
        self.statuses.insert(rel_path.into(), status);
    }

    /// Set the diff text reported for a repo-relative path
    pub fn set_diff(&mut self, rel_path: impl Into<String>, diff: impl Into<String>) {
        self.diffs.insert(rel_path.into(), diff.into());
    }
}

impl Repository for MockRepository {
    fn root(&self) -> &Path {
        &self.root
    }

    fn status(&self, rel_path: &str) -> Result<FileStatus> {
        Ok(self.statuses.get(rel_path).copied().unwrap_or_default())
    }

    fn diff(&self, rel_path: &str) -> Result<String> {
        Ok(self.diffs.get(rel_path).cloned().unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_repository_defaults() {
        let repo = MockRepository::new("/work");
        assert_eq!(repo.root(), Path::new("/work"));
        assert_eq!(repo.status("version.py").unwrap(), FileStatus::clean());
        assert!(repo.diff("version.py").unwrap().is_empty());
    }

    #[test]
    fn test_mock_repository_configured() {
        let mut repo = MockRepository::new("/work");
        repo.set_status(
            "pkg/version.py",
            FileStatus {
                staged: true,
                ..Default::default()
            },
        );
        repo.set_diff("pkg/version.py", "-1.0.0\n+1.0.1\n");

        assert!(repo.status("pkg/version.py").unwrap().is_pending());
        assert_eq!(repo.diff("pkg/version.py").unwrap(), "-1.0.0\n+1.0.1\n");
    }
}
