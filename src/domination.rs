//! The domination predicate and the weight evaluator shared by all solvers.

use fxhash::FxHashSet;
use crate::cust_error::GraphError;
use crate::graph::WUGraph;

impl WUGraph {

    /// Checks if `subset` dominates `self`, i.e. if every node is in `subset` or adjacent to a
    /// node in `subset`. The empty subset only dominates the empty graph.
    ///
    /// `subset` must only hold nodes of `self`, this is not checked. Use
    /// `self.validate_solution()` for untrusted input.
    pub fn is_dominating(&self, subset: &[usize]) -> bool {
        if subset.is_empty() {
            return self.is_empty()
        }
        let mut covered: FxHashSet<usize> = subset.iter().copied().collect();
        for node in subset {
            covered.extend(self.neighbors(*node));
        }
        covered.len() == self.num_nodes()
    }

    /// Returns the sum of the weights of the nodes in `subset`, `0` for the empty subset.
    pub fn subset_weight(&self, subset: &[usize]) -> u64 {
        subset.iter().map(|node| self.weight(*node)).sum()
    }

    /// Checks if `subset` is a valid dominating set of `self`. Does not check for optimality.
    /// Returns a `GraphError` if `subset` holds a node twice or a node that does not exist.
    pub fn validate_solution(&self, subset: &[usize]) -> Result<bool, GraphError> {
        self.check_subset(subset)?;
        Ok(self.is_dominating(subset))
    }
}
