use std::env;

use anyhow::{Result, anyhow};
use clap::Parser;
use gridrun::solve;

pub fn run_in_repo_root(args: &str) -> Result<()> {
    // working directory is this crate, a.k.a. "[...]/gridrun/gridrun-tests",
    // unless an earlier test in this process already moved to the repo root
    let current = env::current_dir()?;
    if current.ends_with("gridrun-tests") {
        env::set_current_dir(current.parent().ok_or(anyhow!("No parent directory"))?)?;
    }

    let args = solve::Cli::parse_from(args.split_whitespace());
    solve::cli(args)
}
