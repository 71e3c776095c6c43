use anyhow::{Context, Result};
use clap::Parser;

use gitr::cli::{self, Cli};
use gitr::ui;

fn main() -> Result<()> {
    let args = Cli::parse();

    if args.version {
        println!("gitr {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    let cwd = std::env::current_dir().context("Cannot determine the current directory")?;

    if let Err(e) = cli::run(&args, &cwd) {
        ui::display_error(&e.to_string());
        std::process::exit(1);
    }

    Ok(())
}
