//! Subcommands that only announce themselves for now.

use crate::cli::args::HookAction;

pub fn depth_message(_commitish: &str) -> &'static [&'static str] {
    &["Coming soon: report the number steps back to a given commit"]
}

pub fn dunn_message() -> &'static [&'static str] {
    &[
        "Git'r Dunn: I dunno, maybe do a commit?",
        "This is a temporary test entrypoint. It will become a plugin",
        "Coming soon - an oracle to suggest the next step given the state",
        "of the repository",
    ]
}

pub fn dupl_message() -> &'static [&'static str] {
    &["Coming soon: duplicate function detector"]
}

pub fn flix_message(_target: Option<&str>) -> &'static [&'static str] {
    &["Coming soon: conflict reporter"]
}

pub fn hook_message(_action: &HookAction) -> &'static [&'static str] {
    &["Coming soon: hook management"]
}

pub fn nodoc_message() -> &'static [&'static str] {
    &["Coming soon: find and report functions with no docstring"]
}
