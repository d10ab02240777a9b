//! Exhaustive search for a minimum weight dominating set.

use itertools::Itertools;
use tracing::{debug, trace};
use crate::graph::WUGraph;
use crate::solution::Solution;

/// Returns a lazy iterator over all subsets of `0..n`, by increasing size and lexicographically
/// within each size. Yields exactly `2^n` subsets, the first one is the empty subset. Only the
/// current subset is held as state, a fresh enumeration is started by calling `subsets` again.
pub fn subsets(n: usize) -> impl Iterator<Item=Vec<usize>> {
    (0..=n).flat_map(move |k| (0..n).combinations(k))
}

impl WUGraph {

    /// Finds a minimum weight dominating set by testing every subset of the nodes.
    ///
    /// The subsets are enumerated by increasing size and lexicographically within each size. A
    /// dominating subset only replaces the best one found so far if it is strictly lighter, so
    /// among several optimal sets the first one in enumeration order is returned.
    ///
    /// `work` of the returned `Solution` is the number of tested configurations, which is always
    /// `2^n`. For the empty graph the empty set with weight `0` is returned.
    ///
    /// The running time is exponential in the number of nodes, callers have to bound the size of
    /// the graph themselves.
    pub fn exhaustive_search(&self) -> Solution {
        let n = self.num_nodes();
        debug!(n, "Start exhaustive search over 2^{} configurations", n);
        let mut best: Option<(Vec<usize>, u64)> = None;
        let mut tested_configs: u64 = 0;
        for subset in subsets(n) {
            tested_configs += 1;
            if !self.is_dominating(&subset) {
                continue
            }
            let weight = self.subset_weight(&subset);
            if best.as_ref().map_or(true, |(_, best_weight)| weight < *best_weight) {
                trace!(weight, size = subset.len(), "New best dominating set");
                best = Some((subset, weight));
            }
        }
        // The complete node set always dominates, so `best` is only unset if nothing was tested.
        let (subset, weight) = best.unwrap_or_else(|| (self.nodes().collect(), self.total_weight()));
        debug!(weight, tested_configs, "Exhaustive search finished");
        Solution::new(subset, weight, tested_configs)
    }
}
