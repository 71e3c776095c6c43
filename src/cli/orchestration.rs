//! Version bump workflow orchestration
//!
//! Ties the pieces of `gitr bv` together: repository lookup, target
//! resolution, the pending-change guard, version extraction and increment,
//! the file rewrite and the diff. The invocation directory is always passed
//! in explicitly; nothing here changes the process working directory.

use std::fs;
use std::path::Path;

use crate::boundary::BoundaryWarning;
use crate::config::BumpConfig;
use crate::domain::{BumpKind, Version};
use crate::error::{GitrError, Result};
use crate::git::{find_repo_root, Git2Repository, Repository};
use crate::target::{display_path, resolve_target, Resolution, ResolvedTarget};
use crate::ui;
use crate::version_file::{extract_version, read_contents, write_version};

/// Arguments for the bump workflow
///
/// Mirrors the `bv` CLI arguments after validation, so the workflow can be
/// called programmatically without depending on clap.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BumpWorkflowArgs {
    /// Explicit target path, relative to the invocation directory
    pub path: Option<String>,

    /// Which component to bump
    pub kind: BumpKind,

    /// Skip the diff
    pub quiet: bool,

    /// Trace each step on stderr
    pub debug: bool,
}

/// Result of a successful bump workflow
#[derive(Debug, Clone, PartialEq)]
pub enum BumpOutcome {
    /// A baseline `0.0.0` file was written; there is nothing to diff
    Bootstrapped { target: String },

    /// An existing version was bumped
    Bumped {
        target: String,
        old: Version,
        new: Version,
        /// `None` in quiet mode
        diff: Option<String>,
    },
}

fn trace(args: &BumpWorkflowArgs, message: impl AsRef<str>) {
    if args.debug {
        ui::display_debug(message.as_ref());
    }
}

/// Path of `target` relative to the repository root, with `/` separators
fn repo_relative(root: &Path, target: &ResolvedTarget) -> Result<String> {
    let outside = || GitrError::not_a_repository(target.display.clone());
    let root = root.canonicalize().map_err(|_| outside())?;
    let path = target.path.canonicalize()?;
    let rel = path.strip_prefix(&root).map_err(|_| outside())?;
    Ok(display_path(rel))
}

fn write_baseline(target: &ResolvedTarget, template: &str) -> Result<BumpOutcome> {
    if let Some(parent) = target.path.parent() {
        fs::create_dir_all(parent)?;
    }
    write_version(&target.path, &Version::new(0, 0, 0), None, template)?;
    Ok(BumpOutcome::Bootstrapped {
        target: target.display.clone(),
    })
}

/// Main bump workflow
///
/// Locates the repository containing `cwd`, opens it with git2 and runs
/// [bump_in_repo].
///
/// # Returns
/// * `Err(NotARepository)` - `cwd` has no ancestor with a `.git` entry
/// * Otherwise whatever [bump_in_repo] returns
pub fn run_bump_workflow(
    args: &BumpWorkflowArgs,
    config: &BumpConfig,
    cwd: &Path,
) -> Result<BumpOutcome> {
    let name = args.path.as_deref().unwrap_or(&config.default_target);

    let root = find_repo_root(cwd).map_err(|_| GitrError::not_a_repository(name))?;
    trace(args, format!("repository root: {}", root.display()));

    let repo = Git2Repository::open(&root)?;
    bump_in_repo(&repo, args, config, cwd)
}

/// Bump the version of the target inside an already opened repository.
///
/// Steps:
/// 1. Resolve the target (explicit path, default name, or tree search)
/// 2. Write a baseline for a bootstrap path or an empty file
/// 3. Refuse when the target already has a staged or unstaged change
/// 4. Extract the current version, bump it and rewrite the file
/// 5. Collect the diff unless quiet
pub fn bump_in_repo<R: Repository>(
    repo: &R,
    args: &BumpWorkflowArgs,
    config: &BumpConfig,
    cwd: &Path,
) -> Result<BumpOutcome> {
    let target = match resolve_target(cwd, args.path.as_deref(), &config.default_target)? {
        Resolution::Bootstrap(target) => {
            trace(args, format!("creating {}", target.path.display()));
            return write_baseline(&target, &config.template);
        }
        Resolution::Existing(target) => target,
    };
    trace(args, format!("target: {}", target.path.display()));

    let rel = repo_relative(repo.root(), &target)?;
    let status = repo.status(&rel)?;
    trace(args, format!("status of {}: {:?}", rel, status));
    if status.is_pending() {
        return Err(GitrError::AlreadyBumped { target: rel });
    }

    let content = read_contents(&target.path)?;
    if content.is_empty() {
        trace(args, "target is empty, writing baseline");
        return write_baseline(&target, &config.template);
    }

    let old = extract_version(&content, &target.display)?;
    let new = old.bump(args.kind)?;
    trace(args, format!("{} bump: {} -> {}", args.kind, old, new));

    write_version(&target.path, &new, Some(&old), &config.template)?;

    let diff = if args.quiet {
        None
    } else {
        Some(repo.diff(&rel)?)
    };

    Ok(BumpOutcome::Bumped {
        target: target.display,
        old,
        new,
        diff,
    })
}

/// Print what a finished workflow has to say
pub fn report_outcome(outcome: &BumpOutcome, quiet: bool) {
    if quiet {
        return;
    }
    match outcome {
        BumpOutcome::Bootstrapped { target } => {
            ui::display_boundary_warning(&BoundaryWarning::NotTracked {
                target: target.clone(),
            });
        }
        BumpOutcome::Bumped {
            diff: Some(diff), ..
        } if !diff.is_empty() => ui::display_diff(diff),
        BumpOutcome::Bumped { target, .. } => {
            ui::display_boundary_warning(&BoundaryWarning::EmptyDiff {
                target: target.clone(),
            });
        }
    }
}
