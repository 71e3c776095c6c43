use crate::domain::BumpKind;
use crate::error::{GitrError, Result};
use std::fmt;

/// Dotted version token: `major.minor.patch` with an optional fourth build component
///
/// Every component keeps the text it was read with, so `2024.01.5` prints
/// back exactly as found and numbers of any width are accepted. The build
/// component may be non-numeric (`1.2.3.dev`); it only has to be numeric
/// when a build bump increments it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Version {
    pub major: String,
    pub minor: String,
    pub patch: String,
    pub build: Option<String>,
}

fn is_number(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

/// Add one to a decimal digit string of any length.
///
/// Leading zeros are dropped from the result (`"09"` gives `"10"`).
fn add_one(digits: &str) -> String {
    let trimmed = digits.trim_start_matches('0');
    let mut out: Vec<u8> = trimmed.bytes().collect();
    let mut carry = true;
    for b in out.iter_mut().rev() {
        if *b == b'9' {
            *b = b'0';
        } else {
            *b += 1;
            carry = false;
            break;
        }
    }
    if carry {
        out.insert(0, b'1');
    }
    String::from_utf8_lossy(&out).into_owned()
}

impl Version {
    /// Create a three-component version
    pub fn new(major: u64, minor: u64, patch: u64) -> Self {
        Version {
            major: major.to_string(),
            minor: minor.to_string(),
            patch: patch.to_string(),
            build: None,
        }
    }

    /// Create a four-component version
    pub fn with_build(major: u64, minor: u64, patch: u64, build: u64) -> Self {
        Version {
            build: Some(build.to_string()),
            ..Version::new(major, minor, patch)
        }
    }

    /// Parse a dotted version string (e.g. "7.19.23" or "7.19.23.4")
    pub fn parse(dotted: &str) -> Result<Self> {
        let parts: Vec<&str> = dotted.split('.').collect();
        Self::from_components(&parts)
    }

    /// Build a version from its dotted components.
    ///
    /// Exactly three or four components are accepted and the first three
    /// must be non-negative integers.
    pub fn from_components(parts: &[&str]) -> Result<Self> {
        let unrecognized = || GitrError::unrecognized(parts.join("."));

        if parts.len() != 3 && parts.len() != 4 {
            return Err(unrecognized());
        }
        if !parts[..3].iter().all(|p| is_number(p)) {
            return Err(unrecognized());
        }

        let build = match parts.get(3) {
            Some(b) if b.is_empty() => return Err(unrecognized()),
            Some(b) => Some(b.to_string()),
            None => None,
        };

        Ok(Version {
            major: parts[0].to_string(),
            minor: parts[1].to_string(),
            patch: parts[2].to_string(),
            build,
        })
    }

    /// Bump the version according to bump kind.
    ///
    /// Major, minor and patch bumps always produce three components. A build
    /// bump appends `1` to a three-component version or increments the
    /// fourth component. Components left alone keep their text.
    pub fn bump(&self, kind: BumpKind) -> Result<Self> {
        let three = |major: String, minor: String, patch: String| Version {
            major,
            minor,
            patch,
            build: None,
        };

        let bumped = match kind {
            BumpKind::Major => three(add_one(&self.major), "0".into(), "0".into()),
            BumpKind::Minor => three(self.major.clone(), add_one(&self.minor), "0".into()),
            BumpKind::Patch => three(self.major.clone(), self.minor.clone(), add_one(&self.patch)),
            BumpKind::Build => {
                let build = match &self.build {
                    None => "1".to_string(),
                    Some(b) if is_number(b) => add_one(b),
                    Some(_) => return Err(GitrError::unrecognized(self.to_string())),
                };
                Version {
                    build: Some(build),
                    ..self.clone()
                }
            }
        };
        Ok(bumped)
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)?;
        if let Some(build) = &self.build {
            write!(f, ".{}", build)?;
        }
        Ok(())
    }
}

/// Compute the next version from raw dotted components
pub fn increment(parts: &[&str], kind: BumpKind) -> Result<Version> {
    Version::from_components(parts)?.bump(kind)
}
