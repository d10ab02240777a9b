//! Implementation of a simple, undirected, vertex-weighted graph data structure.
//! A graph is built once (directly, from a `.gr` input, or by the generator) and is read-only
//! afterwards.

use fxhash::FxHashSet;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::ops::Range;
use std::path::Path;
use tracing::warn;
use crate::cust_error::{GraphError, ImportError};

/// Largest node count `WUGraph::read_gr` accepts in a header.
pub const MAX_GR_NODES: usize = 1 << 24;

/// A simple undirected graph datastructure with a non-negative integer weight on every node.
/// Nodes are the dense ids `0..self.num_nodes()`.
#[derive(Debug, Eq, PartialEq, Clone, Default)]
pub struct WUGraph {
    adj_list: Vec<FxHashSet<usize>>,
    weights: Vec<u64>,
}

// Construction
impl WUGraph {

    /// Creates a graph with `weights.len()` nodes, where node `i` has weight `weights[i]`, and the
    /// undirected `edges`. Duplicate edges are merged.
    ///
    /// Returns a `GraphError` if a weight is negative, an edge is a self loop or an endpoint is not
    /// a node.
    pub fn new(weights: &[i64], edges: &[(usize, usize)]) -> Result<Self, GraphError> {
        let weights = weights
            .iter()
            .enumerate()
            .map(|(vertex, &weight)| {
                u64::try_from(weight).map_err(|_| GraphError::NegativeWeight { vertex, weight })
            })
            .collect::<Result<Vec<u64>, GraphError>>()?;
        let mut graph = WUGraph {
            adj_list: vec![FxHashSet::default(); weights.len()],
            weights,
        };
        for &(src, trg) in edges {
            if !graph.add_edge(src, trg)? {
                warn!(src, trg, "duplicate edge ignored");
            }
        }
        Ok(graph)
    }

    /// Creates a graph with `n` nodes of weight 1 and the undirected `edges`.
    pub fn unweighted(n: usize, edges: &[(usize, usize)]) -> Result<Self, GraphError> {
        Self::new(&vec![1; n], edges)
    }

    /// Inserts the edge `(src, trg)`. Returns `false` if it already existed.
    fn add_edge(&mut self, src: usize, trg: usize) -> Result<bool, GraphError> {
        self.check_node(src)?;
        self.check_node(trg)?;
        if src == trg {
            return Err(GraphError::SelfLoop(src))
        }
        let fresh = self.adj_list[src].insert(trg);
        self.adj_list[trg].insert(src);
        Ok(fresh)
    }
}

// Static functions
impl WUGraph {

    /// Returns an `Iterator` over all nodes.
    pub fn nodes(&self) -> Range<usize> {
        0..self.adj_list.len()
    }

    /// Returns the number of nodes of `self`.
    pub fn num_nodes(&self) -> usize {
        self.adj_list.len()
    }

    /// Returns the number of edges of `self`.
    pub fn num_edges(&self) -> usize {
        self.adj_list.iter().map(|neighbors| neighbors.len()).sum::<usize>() / 2
    }

    /// Checks if `self` has no nodes.
    pub fn is_empty(&self) -> bool {
        self.adj_list.is_empty()
    }

    /// Returns the open neighborhood of `node`.
    ///
    /// # Panics
    /// Panics if `node` is not a node of `self`.
    pub fn neighbors(&self, node: usize) -> &FxHashSet<usize> {
        &self.adj_list[node]
    }

    /// Returns an `Iterator` over the closed neighborhood of `node`, starting with `node` itself.
    pub fn closed_neighborhood(&self, node: usize) -> impl Iterator<Item=usize> + '_ {
        std::iter::once(node).chain(self.adj_list[node].iter().copied())
    }

    /// Returns the weight of `node`.
    ///
    /// # Panics
    /// Panics if `node` is not a node of `self`.
    pub fn weight(&self, node: usize) -> u64 {
        self.weights[node]
    }

    /// Returns the sum of all node weights.
    pub fn total_weight(&self) -> u64 {
        self.weights.iter().sum()
    }

    /// Returns the degree of `node`.
    pub fn degree(&self, node: usize) -> usize {
        self.adj_list[node].len()
    }

    /// Returns the highest degree of `self`, or `None` if `self` is empty.
    pub fn max_degree(&self) -> Option<usize> {
        self.adj_list.iter().map(|neighbors| neighbors.len()).max()
    }

    /// Returns an iterator over all edges `(src, trg)` with `src < trg`.
    pub fn edges(&self) -> impl Iterator<Item=(usize, usize)> + '_ {
        self.adj_list
            .iter()
            .enumerate()
            .flat_map(|(src, neighbors)| {
                neighbors
                    .iter()
                    .filter(move |trg| src < **trg)
                    .map(move |trg| (src, *trg))
            })
    }

    /// Checks if `edge` exists.
    pub fn edge_exists(&self, edge: (usize, usize)) -> bool {
        self.adj_list
            .get(edge.0)
            .map_or(false, |neighbors| neighbors.contains(&edge.1))
    }

    /// Checks if `node` is a node of `self`.
    pub fn check_node(&self, node: usize) -> Result<(), GraphError> {
        if node < self.num_nodes() {
            Ok(())
        } else {
            Err(GraphError::InvalidVertex { vertex: node, num_nodes: self.num_nodes() })
        }
    }

    /// Checks that `subset` only holds nodes of `self`, each at most once.
    pub fn check_subset(&self, subset: &[usize]) -> Result<(), GraphError> {
        let mut seen = FxHashSet::default();
        for &node in subset {
            self.check_node(node)?;
            if !seen.insert(node) {
                return Err(GraphError::DuplicateVertex(node))
            }
        }
        Ok(())
    }

    /// Returns a set of all nodes reachable by `node`, including `node`.
    pub fn reachable(&self, node: usize) -> FxHashSet<usize> {
        let mut reached = FxHashSet::default();
        let mut queue = vec![node];
        while let Some(next) = queue.pop() {
            if reached.insert(next) {
                queue.extend(self.adj_list[next].iter().filter(|neigh| !reached.contains(*neigh)));
            }
        }
        reached
    }

    /// Checks if `self` is disconnected. The empty graph is connected.
    pub fn disconnected(&self) -> bool {
        if self.is_empty() {
            return false
        }
        self.reachable(0).len() != self.num_nodes()
    }
}

impl WUGraph {

    /// Reads a weighted `.gr` input and creates a `WUGraph`.
    ///
    /// The format is `p ds <n> <m>` followed by optional weight lines `w <node> <weight>` and
    /// exactly `m` edge lines `<src> <trg>`. Nodes are 1-based, nodes without weight line get
    /// weight 1. Empty lines and lines starting with `c ` are ignored. Headers with more than
    /// `MAX_GR_NODES` nodes are rejected as malformed.
    pub fn read_gr<R: BufRead>(gr: R) -> Result<Self, ImportError> {
        let (lines, _): (Vec<_>, Vec<_>) = gr.lines()
            .partition(|l| {
                if let Ok(line) = l {
                    // ignore empty lines and comment lines
                    !line.starts_with("c ") && !line.is_empty()
                } else {
                    true
                }
            });
        let mut lines = lines.into_iter();
        // p ds <n> <m>
        let (n, m) = {
            let line = lines.next().ok_or(ImportError::InputMalformedError)??;
            let mut s = line.split_whitespace();
            if let Some("p") = s.next() {} else { return Err(ImportError::InputMalformedError); }
            if let Some("ds") = s.next() {} else { return Err(ImportError::InputMalformedError); }
            let n: usize = s.next().ok_or(ImportError::InputMalformedError)?.parse()?;
            let m: usize = s.next().ok_or(ImportError::InputMalformedError)?.parse()?;
            if s.next().is_some() { return Err(ImportError::InputMalformedError); }
            if n > MAX_GR_NODES { return Err(ImportError::InputMalformedError); }
            (n, m)
        };
        let mut weights: Vec<Option<i64>> = vec![None; n];
        let mut edges = Vec::new();
        for line in lines {
            let line = line?;
            let mut s = line.split_whitespace();
            let first = s.next().ok_or(ImportError::InputMalformedError)?;
            if first == "w" {
                // w <node> <weight>
                let node = to_zero_based(s.next().ok_or(ImportError::InputMalformedError)?)?;
                let weight: i64 = s.next().ok_or(ImportError::InputMalformedError)?.parse()?;
                if s.next().is_some() { return Err(ImportError::InputMalformedError); }
                let slot = weights
                    .get_mut(node)
                    .ok_or(GraphError::InvalidVertex { vertex: node, num_nodes: n })?;
                if slot.replace(weight).is_some() {
                    return Err(ImportError::InputMalformedError);
                }
            } else {
                // <src> <trg>
                let src = to_zero_based(first)?;
                let trg = to_zero_based(s.next().ok_or(ImportError::InputMalformedError)?)?;
                if s.next().is_some() { return Err(ImportError::InputMalformedError); }
                edges.push((src, trg));
            }
        }
        if edges.len() != m { return Err(ImportError::InputMalformedError); }
        let weights: Vec<i64> = weights.into_iter().map(|w| w.unwrap_or(1)).collect();
        Ok(WUGraph::new(&weights, &edges)?)
    }

    /// Reads a weighted `.gr` file at `path`, or standard in if `path` is `None`.
    pub fn read_gr_from(path: Option<&Path>) -> Result<Self, ImportError> {
        match path {
            Some(path) => Self::read_gr(BufReader::new(File::open(path)?)),
            None => Self::read_gr(io::stdin().lock()),
        }
    }

    /// Writes `self` in the weighted `.gr` format to a `Write` type. Every weight is written
    /// explicitly, edges are sorted.
    pub fn write_gr<W: Write>(&self, mut out: W) -> Result<(), io::Error> {
        writeln!(out, "p ds {} {}", self.num_nodes(), self.num_edges())?;
        for (node, weight) in self.weights.iter().enumerate() {
            writeln!(out, "w {} {}", node + 1, weight)?;
        }
        let mut edges: Vec<(usize, usize)> = self.edges().collect();
        edges.sort_unstable();
        for (src, trg) in edges {
            writeln!(out, "{} {}", src + 1, trg + 1)?;
        }
        Ok(())
    }
}

impl WUGraph {

    /// Writes a human readable summary of `self` to a `Write` type: node and edge count, highest
    /// degree, connectivity, every node with weight and degree, and the edge list. Nodes are
    /// written 1-based.
    pub fn write_inspection<W: Write>(&self, mut out: W) -> Result<(), io::Error> {
        writeln!(out, "Nodes (n)     : {}", self.num_nodes())?;
        writeln!(out, "Edges (m)     : {}", self.num_edges())?;
        writeln!(out, "Max degree    : {}", self.max_degree().unwrap_or(0))?;
        writeln!(out, "Connected     : {}", if self.disconnected() { "no" } else { "yes" })?;
        writeln!(out, "Total weight  : {}", self.total_weight())?;
        writeln!(out, "--- nodes (node weight degree) ---")?;
        for node in self.nodes() {
            writeln!(out, "{} {} {}", node + 1, self.weight(node), self.degree(node))?;
        }
        writeln!(out, "--- edges ---")?;
        let mut edges: Vec<(usize, usize)> = self.edges().collect();
        edges.sort_unstable();
        for (src, trg) in edges {
            writeln!(out, "{} {}", src + 1, trg + 1)?;
        }
        Ok(())
    }
}

/// Parses a 1-based node id.
fn to_zero_based(token: &str) -> Result<usize, ImportError> {
    token
        .parse::<usize>()?
        .checked_sub(1)
        .ok_or(ImportError::InputMalformedError)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn read_gr_test() {
        let gr = Cursor::new("c two triangles\np ds 6 6\nw 1 5\nw 4 0\n1 2\n1 3\n2 3\n4 5\n4 6\n5 6\n");
        let graph = WUGraph::read_gr(gr);
        assert!(graph.is_ok());
        let graph = graph.unwrap();
        assert_eq!(graph.num_nodes(), 6);
        assert_eq!(graph.num_edges(), 6);
        assert_eq!(graph.weight(0), 5);
        assert_eq!(graph.weight(1), 1);
        assert_eq!(graph.weight(3), 0);
        assert!(graph.edge_exists((1, 0)));
        assert!(!graph.edge_exists((2, 3)));
        assert_eq!(graph.total_weight(), 9);
    }

    #[test]
    fn read_gr_malformed_test() {
        // wrong edge count
        let gr = Cursor::new("p ds 3 3\n1 2\n2 3\n");
        assert!(matches!(WUGraph::read_gr(gr), Err(ImportError::InputMalformedError)));
        // wrong problem descriptor
        let gr = Cursor::new("p td 3 2\n1 2\n2 3\n");
        assert!(matches!(WUGraph::read_gr(gr), Err(ImportError::InputMalformedError)));
        // node ids are 1-based
        let gr = Cursor::new("p ds 3 1\n0 2\n");
        assert!(matches!(WUGraph::read_gr(gr), Err(ImportError::InputMalformedError)));
        // weighted twice
        let gr = Cursor::new("p ds 2 0\nw 1 3\nw 1 4\n");
        assert!(matches!(WUGraph::read_gr(gr), Err(ImportError::InputMalformedError)));
        let gr = Cursor::new("p ds 2 1\n1 x\n");
        assert!(matches!(WUGraph::read_gr(gr), Err(ImportError::BadIntError(_))));
    }

    #[test]
    fn read_gr_huge_header_test() {
        let gr = Cursor::new("p ds 2 18446744073709551615\n1 2\n");
        assert!(matches!(WUGraph::read_gr(gr), Err(ImportError::InputMalformedError)));
        let gr = Cursor::new("p ds 18446744073709551615 1\n1 2\n");
        assert!(matches!(WUGraph::read_gr(gr), Err(ImportError::InputMalformedError)));
        let gr = Cursor::new(format!("p ds {} 0\n", MAX_GR_NODES + 1));
        assert!(matches!(WUGraph::read_gr(gr), Err(ImportError::InputMalformedError)));
    }

    #[test]
    fn read_gr_invalid_graph_test() {
        let gr = Cursor::new("p ds 2 0\nw 2 -4\n");
        assert!(matches!(
            WUGraph::read_gr(gr),
            Err(ImportError::Graph(GraphError::NegativeWeight { vertex: 1, weight: -4 }))
        ));
        let gr = Cursor::new("p ds 2 1\n1 3\n");
        assert!(matches!(
            WUGraph::read_gr(gr),
            Err(ImportError::Graph(GraphError::InvalidVertex { vertex: 2, num_nodes: 2 }))
        ));
        let gr = Cursor::new("p ds 2 1\n2 2\n");
        assert!(matches!(WUGraph::read_gr(gr), Err(ImportError::Graph(GraphError::SelfLoop(1)))));
    }

    #[test]
    fn read_gr_from_missing_file_test() {
        let path = Path::new("this/file/does/not/exist.gr");
        assert!(matches!(WUGraph::read_gr_from(Some(path)), Err(ImportError::IoError(_))));
    }

    #[test]
    fn write_read_test() {
        let graph = WUGraph::new(&[3, 0, 7, 1], &[(0, 1), (1, 2), (2, 3), (3, 0)]).unwrap();
        let mut buf = Vec::new();
        graph.write_gr(&mut buf).unwrap();
        let text = String::from_utf8(buf.clone()).unwrap();
        assert!(text.starts_with("p ds 4 4\nw 1 3\n"));
        let read = WUGraph::read_gr(Cursor::new(buf)).unwrap();
        assert_eq!(read, graph);
    }

    #[test]
    fn duplicate_edges_test() {
        let graph = WUGraph::unweighted(3, &[(0, 1), (1, 0), (1, 2)]).unwrap();
        assert_eq!(graph.num_edges(), 2);
        assert_eq!(graph.degree(1), 2);
        assert_eq!(graph.max_degree(), Some(2));
        let mut closed: Vec<usize> = graph.closed_neighborhood(1).collect();
        closed.sort_unstable();
        assert_eq!(closed, vec![0, 1, 2]);
    }

    #[test]
    fn check_subset_test() {
        let graph = WUGraph::unweighted(3, &[(0, 1)]).unwrap();
        assert!(graph.check_subset(&[]).is_ok());
        assert!(graph.check_subset(&[2, 0]).is_ok());
        assert_eq!(
            graph.check_subset(&[0, 3]),
            Err(GraphError::InvalidVertex { vertex: 3, num_nodes: 3 })
        );
        assert_eq!(graph.check_subset(&[1, 1]), Err(GraphError::DuplicateVertex(1)));
    }

    #[test]
    fn write_inspection_test() {
        let graph = WUGraph::new(&[4, 1, 2], &[(1, 0), (1, 2)]).unwrap();
        let mut out = Vec::new();
        graph.write_inspection(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("Nodes (n)     : 3\nEdges (m)     : 2\nMax degree    : 2\n"));
        assert!(text.contains("Connected     : yes\nTotal weight  : 7\n"));
        assert!(text.contains("--- nodes (node weight degree) ---\n1 4 1\n2 1 2\n3 2 1\n"));
        assert!(text.ends_with("--- edges ---\n1 2\n2 3\n"));
        let mut out = Vec::new();
        WUGraph::unweighted(2, &[]).unwrap().write_inspection(&mut out).unwrap();
        assert!(String::from_utf8(out).unwrap().contains("Connected     : no\n"));
    }

    #[test]
    fn connected_test() {
        let gr = Cursor::new("p ds 7 9\n1 2\n1 3\n2 3\n4 5\n4 6\n4 7\n5 6\n5 7\n6 7\n");
        let graph = WUGraph::read_gr(gr).unwrap();
        assert!(graph.disconnected());
        assert_eq!(graph.reachable(4).len(), 4);
        let path = WUGraph::unweighted(4, &[(0, 1), (1, 2), (2, 3)]).unwrap();
        assert!(!path.disconnected());
        assert!(!WUGraph::default().disconnected());
    }

}
