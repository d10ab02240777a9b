//! Binary that reads a graph in the weighted .gr format from a file or standart in, computes a
//! minimum weight dominating set by exhaustive search and writes a report to standart out.

use std::io;
use std::path::PathBuf;
use std::time::Instant;

use clap::Parser;
use tracing::info;

use weighted_domset::{cust_error::ProcessingError, graph::WUGraph};

#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
struct Cli {
    /// Graph in the weighted .gr format (default: standart in)
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Refuse graphs with more nodes, the search tests 2^n configurations
    #[arg(short, long, default_value_t = 30)]
    max_nodes: usize,

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
    if graph.num_nodes() > cli.max_nodes {
        return Err(ProcessingError::TooLarge {
            num_nodes: graph.num_nodes(),
            max_nodes: cli.max_nodes,
        }.into());
    }

    let start = Instant::now();
    let solution = graph.exhaustive_search();
    let elapsed = start.elapsed();

    // Validate
    let valid = graph.validate_solution(&solution.subset)?;
    if !valid {
        return Err(ProcessingError::InvalidSolution("exhaustive search result does not dominate the graph".to_owned()).into());
    }

    let stdout = io::stdout();
    solution.write_report("Configurations", elapsed, valid, stdout.lock())?;
    Ok(())
}
