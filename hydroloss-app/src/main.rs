use anyhow::Result;
use clap::Parser;

mod config;
mod report;
mod workflow;

fn main() -> Result<()> {
    let cli = config::Cli::parse();
    workflow::run(&cli)
}
