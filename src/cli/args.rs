//! Command-line argument definitions

use clap::{ArgGroup, Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "gitr",
    about = "A collection of helpers for managing git repositories"
)]
pub struct Cli {
    #[arg(short, long, global = true, help = "Custom configuration file path")]
    pub config: Option<String>,

    #[arg(short, long, global = true, help = "Trace each step on stderr")]
    pub debug: bool,

    #[arg(short = 'V', long, help = "Print version information")]
    pub version: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Bump the version recorded in <path> (default: version.py)
    Bv(BvArgs),

    /// Report how far back a commitish is and how old it is
    Depth {
        /// Which object in the commit chain to check
        commitish: String,
    },

    /// Suggest the next step based on the state of the repository
    Dunn,

    /// Report duplicate function names in .py files
    Dupl,

    /// Report merge conflicts
    Flix {
        /// Which file to examine for conflicts
        target: Option<String>,
    },

    /// Manage git hooks
    Hook(HookArgs),

    /// Report functions with no docstring in .py files
    Nodoc,
}

/// Arguments of `gitr bv`.
///
/// The bump selectors are plain booleans; combining them is rejected by
/// [`crate::domain::BumpKind::from_flags`] so the error names both flags.
#[derive(Args, Debug, Clone, PartialEq, Default)]
pub struct BvArgs {
    #[arg(short, long, help = "Do not print the resulting diff")]
    pub quiet: bool,

    #[arg(long, help = "Bump the major component")]
    pub major: bool,

    #[arg(long, help = "Bump the minor component")]
    pub minor: bool,

    #[arg(long, help = "Bump the patch component")]
    pub patch: bool,

    #[arg(long, help = "Bump the build component (default)")]
    pub build: bool,

    /// Path of the file holding the version
    pub path: Option<String>,
}

#[derive(Args, Debug, Clone, PartialEq)]
#[command(group(
    ArgGroup::new("action")
        .required(true)
        .args(["list", "show", "add", "rm"])
))]
pub struct HookArgs {
    #[arg(long, help = "List git hooks available to install")]
    pub list: bool,

    #[arg(long, help = "List installed git hooks")]
    pub show: bool,

    #[arg(long, value_name = "HOOKNAME", help = "Add a hook by name")]
    pub add: Option<String>,

    #[arg(long, value_name = "HOOKNAME", help = "Remove a hook by name")]
    pub rm: Option<String>,
}

/// What `gitr hook` was asked to do
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HookAction {
    List,
    Show,
    Add(String),
    Remove(String),
}

impl HookArgs {
    pub fn action(&self) -> HookAction {
        if let Some(name) = &self.add {
            HookAction::Add(name.clone())
        } else if let Some(name) = &self.rm {
            HookAction::Remove(name.clone())
        } else if self.show {
            HookAction::Show
        } else {
            HookAction::List
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_bv_flags_and_path() {
        let cli = Cli::try_parse_from(["gitr", "bv", "--minor", "-q", "foo/bar/setup.py"]).unwrap();
        let Some(Command::Bv(args)) = cli.command else {
            panic!("expected bv");
        };
        assert!(args.minor);
        assert!(args.quiet);
        assert!(!args.major);
        assert_eq!(args.path.as_deref(), Some("foo/bar/setup.py"));
    }

    #[test]
    fn test_conflicting_bump_flags_still_parse() {
        let cli = Cli::try_parse_from(["gitr", "bv", "--major", "--minor"]).unwrap();
        let Some(Command::Bv(args)) = cli.command else {
            panic!("expected bv");
        };
        assert!(args.major && args.minor);
    }

    #[test]
    fn test_global_debug_after_subcommand() {
        let cli = Cli::try_parse_from(["gitr", "dunn", "-d"]).unwrap();
        assert!(cli.debug);
        assert_eq!(cli.command, Some(Command::Dunn));
    }

    #[test]
    fn test_depth_requires_commitish() {
        assert!(Cli::try_parse_from(["gitr", "depth"]).is_err());
        let cli = Cli::try_parse_from(["gitr", "depth", "HEAD~3"]).unwrap();
        assert_eq!(
            cli.command,
            Some(Command::Depth {
                commitish: "HEAD~3".to_string()
            })
        );
    }

    #[test]
    fn test_hook_actions() {
        assert!(Cli::try_parse_from(["gitr", "hook"]).is_err());
        assert!(Cli::try_parse_from(["gitr", "hook", "--list", "--show"]).is_err());

        let cli = Cli::try_parse_from(["gitr", "hook", "--add", "pre-commit"]).unwrap();
        let Some(Command::Hook(args)) = cli.command else {
            panic!("expected hook");
        };
        assert_eq!(args.action(), HookAction::Add("pre-commit".to_string()));

        let cli = Cli::try_parse_from(["gitr", "hook", "--show"]).unwrap();
        let Some(Command::Hook(args)) = cli.command else {
            panic!("expected hook");
        };
        assert_eq!(args.action(), HookAction::Show);
    }
}
