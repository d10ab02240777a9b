//! Binary that generates seeded random benchmark graphs and writes each one in the weighted .gr
//! format into an output directory.

use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use clap::Parser;
use tracing::info;

use weighted_domset::generation::{GeneratorConfig, GraphGenerator, DEFAULT_DENSITIES, DEFAULT_SEED};

#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
struct Cli {
    /// Directory the graphs are written to, created if missing
    #[arg(short, long)]
    output: PathBuf,

    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    seed: u64,

    #[arg(long, default_value_t = 4)]
    n_min: usize,

    #[arg(long, default_value_t = 30)]
    n_max: usize,

    /// Edge densities in [0, 1] (default: 0.125 0.25 0.5 0.75)
    #[arg(long, num_args = 1..)]
    densities: Option<Vec<f64>>,

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

    let densities = cli.densities.unwrap_or_else(|| DEFAULT_DENSITIES.to_vec());
    let mut generator = GraphGenerator::new(GeneratorConfig { seed: cli.seed, ..GeneratorConfig::default() })?;
    fs::create_dir_all(&cli.output)?;
    info!(seed = cli.seed, n_min = cli.n_min, n_max = cli.n_max, "Generating graphs");
    for generated in generator.generate_range(cli.n_min, cli.n_max, &densities)? {
        let path = cli.output.join(generated.file_name());
        let mut out = BufWriter::new(File::create(&path)?);
        // Positions are only kept as comments, readers ignore them.
        for (node, (x, y)) in generated.positions.iter().enumerate() {
            writeln!(out, "c pos {} {} {}", node + 1, x, y)?;
        }
        generated.graph.write_gr(&mut out)?;
        out.flush()?;
        info!(path = %path.display(), "Graph written");
    }
    Ok(())
}
