//! Binary that reads a graph in the weighted .gr format from a file or standart in and writes a
//! summary of its nodes, weights and edges to standart out.

use std::io;
use std::path::PathBuf;

use clap::Parser;
use tracing::info;

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

    let stdout = io::stdout();
    graph.write_inspection(stdout.lock())?;
    Ok(())
}
