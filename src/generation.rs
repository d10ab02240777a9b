//! Seeded generation of random benchmark graphs.
//!
//! Nodes are placed at random integer coordinates with a minimum pairwise distance and get a
//! random integer weight. For every node count all node pairs are shuffled once, a graph of
//! density `p` then takes the first `round(p * n * (n - 1) / 2)` pairs as edges. So all graphs of
//! the same node count share their nodes, and denser graphs extend sparser ones.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use tracing::debug;
use crate::cust_error::ProcessingError;
use crate::graph::WUGraph;

pub const DEFAULT_SEED: u64 = 113816;
pub const DEFAULT_DENSITIES: &[f64] = &[0.125, 0.25, 0.5, 0.75];

/// Parameters of a `GraphGenerator`.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratorConfig {
    pub seed: u64,
    /// Inclusive range of both coordinates.
    pub coord_min: i64,
    pub coord_max: i64,
    /// Minimal euclidean distance between two nodes.
    pub min_distance: f64,
    /// Inclusive range of the node weights.
    pub weight_min: i64,
    pub weight_max: i64,
    /// Number of tries to place a single node before giving up.
    pub max_placement_attempts: usize,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        GeneratorConfig {
            seed: DEFAULT_SEED,
            coord_min: 1,
            coord_max: 500,
            min_distance: 10.0,
            weight_min: 1,
            weight_max: 100,
            max_placement_attempts: 10_000,
        }
    }
}

/// A generated graph together with the parameters and node positions it was generated from.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedGraph {
    pub graph: WUGraph,
    pub density: f64,
    pub positions: Vec<(i64, i64)>,
}

impl GeneratedGraph {

    /// Returns a file name like `graph_n12_p12,5.gr` for `n = 12` and a density of `0.125`.
    pub fn file_name(&self) -> String {
        let percent = format!("{:?}", self.density * 100.0).replace('.', ",");
        format!("graph_n{}_p{}.gr", self.graph.num_nodes(), percent)
    }
}

pub struct GraphGenerator {
    config: GeneratorConfig,
    rng: StdRng,
}

impl GraphGenerator {

    /// Creates a generator seeded with `config.seed`. Returns a `ProcessingError` if a range of
    /// `config` is empty or weights could be negative.
    pub fn new(config: GeneratorConfig) -> Result<Self, ProcessingError> {
        if config.coord_min > config.coord_max {
            return Err(ProcessingError::InvalidParameter("empty coordinate range".to_owned()))
        }
        if config.weight_min < 0 || config.weight_min > config.weight_max {
            return Err(ProcessingError::InvalidParameter(
                "weight range must be non-empty and non-negative".to_owned(),
            ))
        }
        if !(config.min_distance >= 0.0) {
            return Err(ProcessingError::InvalidParameter("negative minimal distance".to_owned()))
        }
        let rng = StdRng::seed_from_u64(config.seed);
        Ok(GraphGenerator { config, rng })
    }

    /// Generates one graph with `n` nodes for each density in `densities`, all on the same
    /// nodes and the same shuffled node pairs.
    pub fn generate(&mut self, n: usize, densities: &[f64]) -> Result<Vec<GeneratedGraph>, ProcessingError> {
        if let Some(p) = densities.iter().find(|p| !(0.0..=1.0).contains(*p)) {
            return Err(ProcessingError::InvalidParameter(format!("density {} not in [0, 1]", p)))
        }
        let (positions, weights) = self.place_nodes(n)?;
        let mut pairs: Vec<(usize, usize)> = (0..n)
            .flat_map(|src| ((src + 1)..n).map(move |trg| (src, trg)))
            .collect();
        pairs.shuffle(&mut self.rng);
        let max_edges = pairs.len() as f64;
        densities
            .iter()
            .map(|&density| -> Result<GeneratedGraph, ProcessingError> {
                let num_edges = (density * max_edges).round_ties_even() as usize;
                let graph = WUGraph::new(&weights, &pairs[..num_edges])?;
                debug!(n, density, num_edges, "Generated graph");
                Ok(GeneratedGraph { graph, density, positions: positions.clone() })
            })
            .collect()
    }

    /// Calls `self.generate(n, densities)` for every `n` in `n_min..=n_max`.
    pub fn generate_range(
        &mut self,
        n_min: usize,
        n_max: usize,
        densities: &[f64],
    ) -> Result<Vec<GeneratedGraph>, ProcessingError> {
        let mut graphs = Vec::new();
        for n in n_min..=n_max {
            graphs.extend(self.generate(n, densities)?);
        }
        Ok(graphs)
    }

    /// Places `n` nodes at least `min_distance` apart and draws their weights.
    fn place_nodes(&mut self, n: usize) -> Result<(Vec<(i64, i64)>, Vec<i64>), ProcessingError> {
        let config = &self.config;
        let mut positions: Vec<(i64, i64)> = Vec::with_capacity(n);
        let mut weights = Vec::with_capacity(n);
        for node in 0..n {
            let mut placed = None;
            for _ in 0..config.max_placement_attempts {
                let candidate = (
                    self.rng.gen_range(config.coord_min..=config.coord_max),
                    self.rng.gen_range(config.coord_min..=config.coord_max),
                );
                if positions.iter().all(|other| distance(candidate, *other) >= config.min_distance) {
                    placed = Some(candidate);
                    break
                }
            }
            let Some(position) = placed else {
                return Err(ProcessingError::InvalidParameter(format!(
                    "could not place node {} after {} attempts",
                    node, config.max_placement_attempts
                )))
            };
            positions.push(position);
            weights.push(self.rng.gen_range(config.weight_min..=config.weight_max));
        }
        Ok((positions, weights))
    }
}

fn distance(a: (i64, i64), b: (i64, i64)) -> f64 {
    ((a.0 - b.0) as f64).hypot((a.1 - b.1) as f64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deterministic_test() {
        let mut gen1 = GraphGenerator::new(GeneratorConfig::default()).unwrap();
        let mut gen2 = GraphGenerator::new(GeneratorConfig::default()).unwrap();
        assert_eq!(
            gen1.generate_range(4, 8, DEFAULT_DENSITIES).unwrap(),
            gen2.generate_range(4, 8, DEFAULT_DENSITIES).unwrap()
        );
    }

    #[test]
    fn generated_graph_test() {
        let config = GeneratorConfig::default();
        let mut generator = GraphGenerator::new(config.clone()).unwrap();
        let graphs = generator.generate(10, DEFAULT_DENSITIES).unwrap();
        assert_eq!(graphs.len(), 4);
        // 45 node pairs: 5.625, 11.25, 22.5 and 33.75 edges.
        let edge_counts: Vec<usize> = graphs.iter().map(|g| g.graph.num_edges()).collect();
        assert_eq!(edge_counts, vec![6, 11, 22, 34]);
        for generated in &graphs {
            assert_eq!(generated.graph.num_nodes(), 10);
            assert_eq!(generated.positions, graphs[0].positions);
            for node in generated.graph.nodes() {
                let weight = generated.graph.weight(node) as i64;
                assert!((config.weight_min..=config.weight_max).contains(&weight));
                assert_eq!(weight as u64, graphs[0].graph.weight(node));
            }
            for (i, a) in generated.positions.iter().enumerate() {
                for b in &generated.positions[(i + 1)..] {
                    assert!(distance(*a, *b) >= config.min_distance);
                }
            }
        }
        // Denser graphs extend sparser ones.
        for (src, trg) in graphs[0].graph.edges() {
            assert!(graphs[3].graph.edge_exists((src, trg)));
        }
    }

    #[test]
    fn file_name_test() {
        let mut generator = GraphGenerator::new(GeneratorConfig::default()).unwrap();
        let names: Vec<String> = generator
            .generate(12, DEFAULT_DENSITIES)
            .unwrap()
            .iter()
            .map(|g| g.file_name())
            .collect();
        assert_eq!(names, vec![
            "graph_n12_p12,5.gr", "graph_n12_p25,0.gr", "graph_n12_p50,0.gr", "graph_n12_p75,0.gr",
        ]);
    }

    #[test]
    fn invalid_parameter_test() {
        let config = GeneratorConfig { weight_min: -1, ..GeneratorConfig::default() };
        assert!(GraphGenerator::new(config).is_err());
        let config = GeneratorConfig { coord_min: 5, coord_max: 4, ..GeneratorConfig::default() };
        assert!(GraphGenerator::new(config).is_err());
        let mut generator = GraphGenerator::new(GeneratorConfig::default()).unwrap();
        assert!(matches!(
            generator.generate(5, &[1.5]),
            Err(ProcessingError::InvalidParameter(_))
        ));
        // Two nodes do not fit into a 2x2 square with distance 10.
        let config = GeneratorConfig {
            coord_min: 1,
            coord_max: 2,
            max_placement_attempts: 50,
            ..GeneratorConfig::default()
        };
        let mut generator = GraphGenerator::new(config).unwrap();
        assert!(generator.generate(2, &[0.5]).is_err());
        assert_eq!(generator.generate(1, &[0.5]).unwrap()[0].graph.num_edges(), 0);
    }
}
