//! Reading and rewriting the version token inside a text file.
//!
//! The file can hold anything; only the first dotted numeric token
//! (`N.N.N` with an optional `.x` build suffix) is treated as the version.
//! Rewrites replace that token and keep every other byte as it was.

use regex::Regex;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use std::sync::LazyLock;

use crate::domain::Version;
use crate::error::{GitrError, Result};

/// Line written into a fresh or empty version file
pub const DEFAULT_TEMPLATE: &str = "__version__ = '{version}'\n";

const VERSION_PATTERN: &str = r"\d+\.\d+\.\d+(?:\.\w+)?";

static VERSION_RE: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new(VERSION_PATTERN).ok());

/// Render the canonical version line from a template containing `{version}`
pub fn render_line(template: &str, version: &Version) -> String {
    template.replace("{version}", &version.to_string())
}

/// Read a file, treating a missing file as empty
pub fn read_contents(path: &Path) -> Result<String> {
    match fs::read_to_string(path) {
        Ok(content) => Ok(content),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(String::new()),
        Err(e) => Err(e.into()),
    }
}

/// Find the first dotted version token in `content`.
///
/// `target` only names the file in the error message.
pub fn find_version_token<'a>(content: &'a str, target: &str) -> Result<&'a str> {
    VERSION_RE
        .as_ref()
        .and_then(|re| re.find(content))
        .map(|m| m.as_str())
        .ok_or_else(|| GitrError::NoVersionFound {
            target: target.to_string(),
            content: content.to_string(),
        })
}

/// Extract and parse the current version held in `content`
pub fn extract_version(content: &str, target: &str) -> Result<Version> {
    let token = find_version_token(content, target)?;
    let parts: Vec<&str> = token.split('.').collect();
    Version::from_components(&parts)
}

fn is_word(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Replace every occurrence of `old` that stands on its own as a version.
///
/// An occurrence embedded in a longer dotted number (`11.2.3`, `1.2.3.4`
/// when looking for `1.2.3`) is left alone. Returns `None` when nothing was
/// replaced.
pub fn replace_version(content: &str, old: &str, new: &str) -> Option<String> {
    let mut out = String::with_capacity(content.len());
    let mut last = 0;
    let mut replaced = false;

    for (start, _) in content.match_indices(old) {
        let end = start + old.len();
        let before = &content[..start];
        let after = &content[end..];

        let mut back = before.chars().rev();
        let leading_ok = match back.next() {
            Some(c) if c.is_ascii_digit() => false,
            Some('.') => !back.next().is_some_and(|c| c.is_ascii_digit()),
            _ => true,
        };

        let mut fwd = after.chars();
        let trailing_ok = match fwd.next() {
            Some(c) if c.is_ascii_digit() => false,
            Some('.') => !fwd.next().is_some_and(is_word),
            _ => true,
        };

        if leading_ok && trailing_ok {
            out.push_str(&content[last..start]);
            out.push_str(new);
            last = end;
            replaced = true;
        }
    }

    if !replaced {
        return None;
    }
    out.push_str(&content[last..]);
    Some(out)
}

/// Write `new` into the file at `path`.
///
/// With no `old` version the file must be empty (or missing) and receives
/// the rendered `template` line. With an `old` version every standalone
/// occurrence of it is replaced. Nothing is written unless the new content
/// could be computed.
pub fn write_version(
    path: &Path,
    new: &Version,
    old: Option<&Version>,
    template: &str,
) -> Result<()> {
    let content = read_contents(path)?;
    let new_str = new.to_string();

    let updated = match old {
        None if content.is_empty() => render_line(template, new),
        None => {
            return Err(GitrError::AmbiguousRewriteTarget {
                version: new_str,
                content,
            })
        }
        Some(old) => {
            let old_str = old.to_string();
            if content.is_empty() {
                return Err(GitrError::EmptyFileOnUpdate { version: old_str });
            }
            match replace_version(&content, &old_str, &new_str) {
                Some(updated) => updated,
                None => {
                    return Err(GitrError::OldVersionNotFound {
                        version: old_str,
                        content,
                    })
                }
            }
        }
    };

    fs::write(path, updated)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_extract_from_python_line() {
        let v = extract_version("__version__ = '2.7.3'\n", "version.py").unwrap();
        assert_eq!(v, Version::new(2, 7, 3));
    }

    #[test]
    fn test_extract_four_components() {
        let v = extract_version("VERSION=\"1.2.3.4\"", "Makefile").unwrap();
        assert_eq!(v, Version::with_build(1, 2, 3, 4));
    }

    #[test]
    fn test_extract_first_match_wins() {
        let content = "# requires 3.8.0\nversion = '0.4.1'\n";
        let v = extract_version(content, "setup.py").unwrap();
        assert_eq!(v, Version::new(3, 8, 0));
    }

    #[test]
    fn test_extract_with_prefix() {
        let v = extract_version("tag v10.0.7", "NOTES").unwrap();
        assert_eq!(v, Version::new(10, 0, 7));
    }

    #[test]
    fn test_extract_no_version() {
        let err = extract_version("version = 'one.two'", "version.py").unwrap_err();
        assert_eq!(
            err.to_string(),
            "No version found in version.py ['version = 'one.two'']"
        );
    }

    #[test]
    fn test_replace_all_occurrences() {
        let content = "a = '1.2.3'\nb = \"1.2.3\"\n";
        let out = replace_version(content, "1.2.3", "1.2.4").unwrap();
        assert_eq!(out, "a = '1.2.4'\nb = \"1.2.4\"\n");
    }

    #[test]
    fn test_replace_skips_embedded_tokens() {
        let content = "dep 11.2.3 and 1.2.3.9 but own 1.2.3.";
        let out = replace_version(content, "1.2.3", "2.0.0").unwrap();
        assert_eq!(out, "dep 11.2.3 and 1.2.3.9 but own 2.0.0.");
    }

    #[test]
    fn test_replace_missing_returns_none() {
        assert!(replace_version("11.2.3", "1.2.3", "1.2.4").is_none());
        assert!(replace_version("nothing", "1.2.3", "1.2.4").is_none());
    }

    #[test]
    fn test_write_into_empty_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("version.py");
        fs::write(&path, "").unwrap();

        write_version(&path, &Version::new(9, 8, 7), None, DEFAULT_TEMPLATE).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "__version__ = '9.8.7'\n");
    }

    #[test]
    fn test_write_into_missing_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("version.py");

        write_version(&path, &Version::new(9, 8, 7), None, DEFAULT_TEMPLATE).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "__version__ = '9.8.7'\n");
    }

    #[test]
    fn test_write_fresh_into_non_empty_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("version.py");
        let prose = "The quick brown fox and all that";
        fs::write(&path, prose).unwrap();

        let err = write_version(&path, &Version::new(9, 8, 7), None, DEFAULT_TEMPLATE)
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "Don't know where to put '9.8.7' in 'The quick brown fox and all that'"
        );
        assert_eq!(fs::read_to_string(&path).unwrap(), prose);
    }

    #[test]
    fn test_update_empty_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("version.py");
        fs::write(&path, "").unwrap();

        let old = Version::new(9, 8, 6);
        let err = write_version(&path, &Version::new(9, 8, 7), Some(&old), DEFAULT_TEMPLATE)
            .unwrap_err();
        assert_eq!(err.to_string(), "Can't update '9.8.6' in an empty file");
    }

    #[test]
    fn test_update_non_standard_expression() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("fooble-de-bar");
        fs::write(&path, "\"7.3.2.32\" is the version\n").unwrap();

        let old = Version::with_build(7, 3, 2, 32);
        let new = Version::with_build(7, 3, 2, 33);
        write_version(&path, &new, Some(&old), DEFAULT_TEMPLATE).unwrap();
        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "\"7.3.2.33\" is the version\n"
        );
    }

    #[test]
    fn test_update_old_not_present() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("fooble-de-bar");
        fs::write(&path, "\"sizzle\" is the version").unwrap();

        let old = Version::with_build(7, 3, 2, 32);
        let new = Version::with_build(7, 3, 2, 33);
        let err = write_version(&path, &new, Some(&old), DEFAULT_TEMPLATE).unwrap_err();
        assert_eq!(
            err.to_string(),
            "'7.3.2.32' not found in '\"sizzle\" is the version'"
        );
        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "\"sizzle\" is the version"
        );
    }

    #[test]
    fn test_update_zero_padded_version() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("version.py");
        fs::write(&path, "__version__ = '2024.01.5'\n").unwrap();

        let old = extract_version(&read_contents(&path).unwrap(), "version.py").unwrap();
        assert_eq!(old.to_string(), "2024.01.5");
        let new = old.bump(crate::domain::BumpKind::Patch).unwrap();
        write_version(&path, &new, Some(&old), DEFAULT_TEMPLATE).unwrap();
        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "__version__ = '2024.01.6'\n"
        );
    }

    #[test]
    fn test_custom_template() {
        let line = render_line("VERSION = \"{version}\"\n", &Version::new(0, 0, 0));
        assert_eq!(line, "VERSION = \"0.0.0\"\n");
    }
}
