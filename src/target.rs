//! Deciding which file `bv` operates on.

use ignore::WalkBuilder;
use std::ffi::OsStr;
use std::path::{Component, Path, PathBuf};

use crate::error::{GitrError, Result};

/// A file the bump workflow will read or create
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedTarget {
    /// Path as shown to the user, relative to the invocation directory
    pub display: String,
    /// Path used for I/O
    pub path: PathBuf,
}

/// Outcome of target resolution
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// An existing file to bump
    Existing(ResolvedTarget),
    /// A path with directories that does not exist yet; it gets a baseline version
    Bootstrap(ResolvedTarget),
}

/// Render a relative path with `/` separators regardless of platform
pub fn display_path(rel: &Path) -> String {
    rel.components()
        .filter_map(|c| match c {
            Component::Normal(part) => Some(part.to_string_lossy().into_owned()),
            Component::ParentDir => Some("..".to_string()),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("/")
}

fn has_separator(name: &str) -> bool {
    name.contains('/') || name.contains(std::path::MAIN_SEPARATOR)
}

/// Every file called `name` below `dir`, sorted by path.
///
/// `.git` directories are not descended into. Ignore files are not honoured:
/// a version file is found even when it is git-ignored.
pub fn find_files_named(dir: &Path, name: &str) -> Vec<PathBuf> {
    let walker = WalkBuilder::new(dir)
        .standard_filters(false)
        .filter_entry(|entry| entry.file_name() != OsStr::new(".git"))
        .build();

    let mut found: Vec<PathBuf> = walker
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_some_and(|ft| ft.is_file()))
        .filter(|entry| entry.file_name() == OsStr::new(name))
        .map(|entry| entry.into_path())
        .collect();

    found.sort();
    found
}

/// Resolve the target file for a bump.
///
/// # Arguments
/// * `cwd` - Directory the command was invoked from
/// * `explicit` - Path given on the command line, if any
/// * `default_name` - File name used when no path is given
///
/// # Returns
/// * `Ok(Resolution::Existing)` - The named file exists, directly or somewhere below `cwd`
/// * `Ok(Resolution::Bootstrap)` - An explicit path with directories that does not exist
/// * `Err(TargetNotFound)` - A bare name that is nowhere in the tree
pub fn resolve_target(cwd: &Path, explicit: Option<&str>, default_name: &str) -> Result<Resolution> {
    let name = explicit.unwrap_or(default_name);
    let direct = cwd.join(name);

    if direct.is_file() {
        return Ok(Resolution::Existing(ResolvedTarget {
            display: name.to_string(),
            path: direct,
        }));
    }

    if explicit.is_some() && has_separator(name) {
        return Ok(Resolution::Bootstrap(ResolvedTarget {
            display: name.to_string(),
            path: direct,
        }));
    }

    let first = find_files_named(cwd, name).into_iter().next();
    match first {
        Some(path) => {
            let display = path
                .strip_prefix(cwd)
                .map(display_path)
                .unwrap_or_else(|_| path.display().to_string());
            Ok(Resolution::Existing(ResolvedTarget { display, path }))
        }
        None => Err(GitrError::TargetNotFound {
            target: name.to_string(),
        }),
    }
}
