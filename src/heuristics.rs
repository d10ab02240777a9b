//! Implementation of a greedy heuristic for the Minimum Weight Dominating Set Problem.
//!
//! The heuristic repeatedly picks the node that covers the most uncovered nodes per unit of
//! weight. It always returns a dominating set but gives no guarantee on its weight.

use std::cmp::Ordering;
use fxhash::FxHashSet;
use tracing::{debug, trace};
use crate::graph::WUGraph;
use crate::solution::Solution;

/// Cost-benefit ranking of a candidate node: the number of uncovered nodes it would cover
/// (`gain`) per unit of weight.
///
/// Nodes of weight 0 are ranked above every node of positive weight and among each other by
/// their gain. Ratios of positive weight nodes are compared exactly via cross-multiplication.
#[derive(Debug, Clone, Copy)]
pub enum Efficiency {
    Free { gain: usize },
    Ratio { gain: usize, weight: u64 },
}

impl Efficiency {

    pub fn new(gain: usize, weight: u64) -> Self {
        if weight == 0 {
            Efficiency::Free { gain }
        } else {
            Efficiency::Ratio { gain, weight }
        }
    }

    pub fn gain(&self) -> usize {
        match self {
            Efficiency::Free { gain } | Efficiency::Ratio { gain, .. } => *gain,
        }
    }
}

impl Ord for Efficiency {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Efficiency::Free { gain: g1 }, Efficiency::Free { gain: g2 }) => g1.cmp(g2),
            (Efficiency::Free { .. }, Efficiency::Ratio { .. }) => Ordering::Greater,
            (Efficiency::Ratio { .. }, Efficiency::Free { .. }) => Ordering::Less,
            (
                Efficiency::Ratio { gain: g1, weight: w1 },
                Efficiency::Ratio { gain: g2, weight: w2 },
            ) => (*g1 as u128 * *w2 as u128).cmp(&(*g2 as u128 * *w1 as u128)),
        }
    }
}

impl PartialOrd for Efficiency {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Efficiency {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Efficiency {}

impl WUGraph {

    /// Greedily computes a dominating set:
    /// 1. For every node not yet in the solution, in increasing order, counts the uncovered nodes
    ///    in its closed neighborhood.
    /// 2. Picks the node with the strictly best `Efficiency` among those covering at least one
    ///    uncovered node. On ties the smallest node wins.
    /// 3. If no node covers anything new, picks the cheapest uncovered node instead.
    /// 4. Marks the closed neighborhood of the picked node as covered.
    /// Until every node is covered.
    ///
    /// `work` of the returned `Solution` is the number of iterations, `subset` holds the nodes in
    /// the order they were picked. The weight is the true weight of the picked nodes.
    pub fn greedy_dominating_set(&self) -> Solution {
        let mut solution = Vec::new();
        let mut in_solution = vec![false; self.num_nodes()];
        let mut uncovered: FxHashSet<usize> = self.nodes().collect();
        let mut iterations: u64 = 0;
        debug!(n = self.num_nodes(), "Start greedy heuristic");
        while !uncovered.is_empty() {
            let mut best: Option<(usize, Efficiency)> = None;
            for node in self.nodes().filter(|node| !in_solution[*node]) {
                let gain = self
                    .closed_neighborhood(node)
                    .filter(|covered| uncovered.contains(covered))
                    .count();
                if gain == 0 {
                    continue
                }
                let efficiency = Efficiency::new(gain, self.weight(node));
                if best.map_or(true, |(_, best_eff)| efficiency > best_eff) {
                    best = Some((node, efficiency));
                }
            }
            let Some(picked) = best
                .map(|(node, _)| node)
                .or_else(|| self.cheapest_in(&uncovered)) else {
                break
            };
            trace!(picked, gain = best.map_or(0, |(_, eff)| eff.gain()), "Greedy pick");
            in_solution[picked] = true;
            solution.push(picked);
            iterations += 1;
            for covered in self.closed_neighborhood(picked) {
                uncovered.remove(&covered);
            }
        }
        let weight = self.subset_weight(&solution);
        debug!(weight, iterations, "Greedy heuristic finished");
        Solution::new(solution, weight, iterations)
    }

    /// Returns the node of `set` with the smallest weight, the smallest such node on ties.
    fn cheapest_in(&self, set: &FxHashSet<usize>) -> Option<usize> {
        set.iter().copied().min_by_key(|node| (self.weight(*node), *node))
    }
}
