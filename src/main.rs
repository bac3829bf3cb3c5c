//! concord - A persistent word occurrence indexer for text files
//!
//! concord provides:
//! - Word indexing over text files with per-file line tracking
//! - A repository persisted across runs under .concord/
//! - Three alphabetical report modes (-pf/-pl/-po)

use anyhow::Result;
use clap::Parser;

mod cli;
mod core;
mod index;
mod repo;
mod report;
mod scan;
mod tree;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    cli::run(cli)
}
