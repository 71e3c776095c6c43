use std::fmt;

/// Non-fatal conditions at the edges of the bump workflow.
/// These are reported to the user but do not change the exit status.
#[derive(Debug, Clone, PartialEq)]
pub enum BoundaryWarning {
    /// A baseline version file was just created, so git has nothing to diff
    NotTracked { target: String },
    /// The bump succeeded but git reports no difference (the file is untracked)
    EmptyDiff { target: String },
}

impl fmt::Display for BoundaryWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoundaryWarning::NotTracked { target } | BoundaryWarning::EmptyDiff { target } => {
                write!(f, "{} is not in git -- no diff available", target)
            }
        }
    }
}
