//! Pure formatting functions for UI output.
//!
//! Every message gitr prints goes through here. Styling comes from
//! `console`, which drops colours when the stream is not a terminal.

use console::style;

use crate::boundary::BoundaryWarning;

/// Format and print an error message in red.
pub fn display_error(message: &str) {
    eprintln!("{} {}", style("ERROR:").red(), message);
}

/// Print a trace line for `--debug` runs.
pub fn display_debug(message: &str) {
    eprintln!("{} {}", style("debug:").dim(), style(message).dim());
}

/// Display a boundary warning to the user.
///
/// Shows a yellow warning icon followed by the warning message.
pub fn display_boundary_warning(warning: &BoundaryWarning) {
    eprintln!("{} {}", style("⚠ WARNING:").yellow(), warning);
}

/// Colour a unified diff the way `git diff` does.
pub fn format_diff(diff: &str) -> String {
    diff.lines()
        .map(|line| {
            if line.starts_with("+++") || line.starts_with("---") {
                style(line).bold().to_string()
            } else if line.starts_with('+') {
                style(line).green().to_string()
            } else if line.starts_with('-') {
                style(line).red().to_string()
            } else if line.starts_with("@@") {
                style(line).cyan().to_string()
            } else {
                line.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Print a diff to stdout.
pub fn display_diff(diff: &str) {
    println!("{}", format_diff(diff));
}

/// Print placeholder text for a subcommand that has no implementation yet.
pub fn display_placeholder(lines: &[&str]) {
    for line in lines {
        println!("{}", line);
    }
}
