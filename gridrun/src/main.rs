use anyhow::Result;
use clap::Parser;
use gridrun::solve;

fn main() -> Result<()> {
    solve::cli(solve::Cli::parse())
}
