//! Binary that reads a graph in the weighted .gr format from a file or standart in, approximates a
//! minimum weight dominating set with the greedy heuristic and writes a report to standart out.

use std::io;
use std::path::PathBuf;
use std::time::Instant;

use clap::Parser;
use tracing::{info, warn};

use weighted_domset::graph::WUGraph;

#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
struct Cli {
    /// Graph in the weighted .gr format (default: standart in)
    #[arg(short, long)]
    input: Option<PathBuf>,

    #[arg(short, long)]
    debug: bool,
}

pub fn main() -> Result<(), anyhow::Error> {
    let cli = Cli::parse();
    tracing_subscriber::fmt()
        .with_max_level(if cli.debug {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        })
        .with_writer(io::stderr)
        .init();

    let graph = WUGraph::read_gr_from(cli.input.as_deref())?;
    info!(nodes = graph.num_nodes(), edges = graph.num_edges(), "Graph loaded");

    let start = Instant::now();
    let solution = graph.greedy_dominating_set();
    let elapsed = start.elapsed();

    let valid = graph.validate_solution(&solution.subset)?;
    if !valid {
        warn!("Greedy result does not dominate the graph");
    }

    let stdout = io::stdout();
    solution.write_report("Iterations", elapsed, valid, stdout.lock())?;
    Ok(())
}
