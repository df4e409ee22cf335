//! src/main.rs
//!
//! CLI entry point: reads an instance from stdin (or a file path
//! argument), runs the search under the §6 deadline policy, and writes
//! the solution to stdout. Grounded on `problemreductions-cli`'s
//! `main.rs` (clap parse up front, dispatch into a small set of
//! commands, `anyhow::Result` at the boundary) and its `tracing_subscriber`
//! init pattern in `mcp/mod.rs`.

use anyhow::{Context, Result};
use clap::Parser;
use mwds_cc2fs::clock::Deadline;
use mwds_cc2fs::{io, run_search, Cli};
use std::io::{BufReader, BufWriter};

fn main() -> Result<()> {
    let cli = Cli::parse();

    if !cli.quiet {
        tracing_subscriber::fmt().with_writer(std::io::stderr).init();
    }

    let instance = io::read_instance(BufReader::new(std::io::stdin()))
        .context("failed to parse graph instance from stdin")?;

    let deadline = Deadline::after(cli.budget(instance.graph.n()));
    let result = run_search(&instance.graph, deadline);

    tracing::info!(
        vertices = result.len(),
        weight = result.weight(),
        "search finished"
    );

    let stdout = std::io::stdout();
    io::write_solution(BufWriter::new(stdout.lock()), &instance.names, &result)
        .context("failed to write solution")?;

    Ok(())
}
