//! CLI argument parsing and command dispatch

pub mod args;
pub mod orchestration;
pub mod stubs;

pub use args::{BvArgs, Cli, Command, HookAction, HookArgs};

use clap::CommandFactory;
use std::path::Path;

use crate::config::load_config;
use crate::domain::BumpKind;
use crate::error::Result;
use crate::ui;
use orchestration::{report_outcome, run_bump_workflow, BumpWorkflowArgs};

fn run_bv(args: &BvArgs, config_path: Option<&str>, debug: bool, cwd: &Path) -> Result<()> {
    // Conflicting selectors are rejected before any file is read.
    let kind = BumpKind::from_flags(args.major, args.minor, args.patch, args.build)?;
    let config = load_config(config_path, cwd)?;

    let workflow = BumpWorkflowArgs {
        path: args.path.clone(),
        kind,
        quiet: args.quiet || config.bump.quiet,
        debug,
    };
    let outcome = run_bump_workflow(&workflow, &config.bump, cwd)?;
    report_outcome(&outcome, workflow.quiet);
    Ok(())
}

/// Dispatch the parsed command line
///
/// With no subcommand the help text is printed.
pub fn run(cli: &Cli, cwd: &Path) -> Result<()> {
    let Some(command) = &cli.command else {
        Cli::command().print_help()?;
        return Ok(());
    };

    let placeholder = match command {
        Command::Bv(args) => return run_bv(args, cli.config.as_deref(), cli.debug, cwd),
        Command::Depth { commitish } => stubs::depth_message(commitish),
        Command::Dunn => stubs::dunn_message(),
        Command::Dupl => stubs::dupl_message(),
        Command::Flix { target } => stubs::flix_message(target.as_deref()),
        Command::Hook(args) => stubs::hook_message(&args.action()),
        Command::Nodoc => stubs::nodoc_message(),
    };
    ui::display_placeholder(placeholder);
    Ok(())
}
