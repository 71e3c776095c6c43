use crate::error::{GitrError, Result};
use crate::git::FileStatus;
use git2::{DiffFormat, DiffOptions, ErrorCode, Repository as Git2Repo, Status};
use std::path::{Path, PathBuf};

/// Find the nearest ancestor of `start` (inclusive) holding a `.git` entry.
///
/// `.git` may be a directory or, for worktrees and submodules, a file.
pub fn find_repo_root(start: &Path) -> Result<PathBuf> {
    let mut dir = Some(start);
    while let Some(candidate) = dir {
        if candidate.join(".git").exists() {
            return Ok(candidate.to_path_buf());
        }
        dir = candidate.parent();
    }

    Err(GitrError::not_a_repository(start.display().to_string()))
}

/// Wrapper around git2::Repository with our trait interface
pub struct Git2Repository {
    repo: Git2Repo,
    root: PathBuf,
}

impl Git2Repository {
    /// Open the repository whose working tree is rooted at `root`
    pub fn open<P: AsRef<Path>>(root: P) -> Result<Self> {
        let repo = Git2Repo::open(root.as_ref())?;
        Self::from_git2(repo)
    }

    /// Locate the repository containing `start` and open it
    pub fn discover<P: AsRef<Path>>(start: P) -> Result<Self> {
        let root = find_repo_root(start.as_ref())?;
        Self::open(root)
    }

    /// Create from existing git2::Repository
    pub fn from_git2(repo: Git2Repo) -> Result<Self> {
        let root = repo
            .workdir()
            .ok_or_else(|| GitrError::not_a_repository(repo.path().display().to_string()))?
            .to_path_buf();

        Ok(Git2Repository { repo, root })
    }
}

fn file_status(status: Status) -> FileStatus {
    FileStatus {
        staged: status.intersects(
            Status::INDEX_NEW
                | Status::INDEX_MODIFIED
                | Status::INDEX_DELETED
                | Status::INDEX_RENAMED
                | Status::INDEX_TYPECHANGE,
        ),
        unstaged: status.intersects(
            Status::WT_MODIFIED | Status::WT_DELETED | Status::WT_RENAMED | Status::WT_TYPECHANGE,
        ),
        untracked: status.contains(Status::WT_NEW),
    }
}

impl super::Repository for Git2Repository {
    fn root(&self) -> &Path {
        &self.root
    }

    fn status(&self, rel_path: &str) -> Result<FileStatus> {
        match self.repo.status_file(Path::new(rel_path)) {
            Ok(status) => Ok(file_status(status)),
            Err(e) if e.code() == ErrorCode::NotFound => Ok(FileStatus::clean()),
            Err(e) => Err(e.into()),
        }
    }

    fn diff(&self, rel_path: &str) -> Result<String> {
        let mut opts = DiffOptions::new();
        opts.pathspec(rel_path).disable_pathspec_match(true);

        let diff = self.repo.diff_index_to_workdir(None, Some(&mut opts))?;

        let mut text = String::new();
        diff.print(DiffFormat::Patch, |_delta, _hunk, line| {
            if let origin @ ('+' | '-' | ' ') = line.origin() {
                text.push(origin);
            }
            text.push_str(&String::from_utf8_lossy(line.content()));
            true
        })?;

        Ok(text)
    }
}
