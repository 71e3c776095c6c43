use crate::error::{GitrError, Result};
use std::fmt;

/// Which component of a version a bump increments
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BumpKind {
    Major,
    Minor,
    Patch,
    #[default]
    Build,
}

impl BumpKind {
    /// Every pair of selectors that cannot be combined, in the order they are checked.
    pub fn conflicting_pairs() -> [(BumpKind, BumpKind); 6] {
        use BumpKind::*;
        [
            (Major, Minor),
            (Major, Patch),
            (Major, Build),
            (Minor, Patch),
            (Minor, Build),
            (Patch, Build),
        ]
    }

    /// Command-line flag that selects this kind
    pub fn flag(&self) -> &'static str {
        match self {
            BumpKind::Major => "--major",
            BumpKind::Minor => "--minor",
            BumpKind::Patch => "--patch",
            BumpKind::Build => "--build",
        }
    }

    /// Build a bump kind from the four selector flags.
    ///
    /// No flag set means [`BumpKind::Build`]. When more than one is set the
    /// first conflicting pair (in [`BumpKind::conflicting_pairs`] order) is
    /// reported.
    pub fn from_flags(major: bool, minor: bool, patch: bool, build: bool) -> Result<Self> {
        let selected = |kind: BumpKind| match kind {
            BumpKind::Major => major,
            BumpKind::Minor => minor,
            BumpKind::Patch => patch,
            BumpKind::Build => build,
        };

        for (a, b) in Self::conflicting_pairs() {
            if selected(a) && selected(b) {
                return Err(GitrError::MutuallyExclusiveFlags {
                    first: a.flag(),
                    second: b.flag(),
                });
            }
        }

        Ok(if major {
            BumpKind::Major
        } else if minor {
            BumpKind::Minor
        } else if patch {
            BumpKind::Patch
        } else {
            BumpKind::Build
        })
    }
}

impl fmt::Display for BumpKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            BumpKind::Major => "major",
            BumpKind::Minor => "minor",
            BumpKind::Patch => "patch",
            BumpKind::Build => "build",
        };
        f.write_str(name)
    }
}
