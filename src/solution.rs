//! The result of a solver run and its human readable report.

use std::io::{self, Write};
use std::time::Duration;

/// A dominating set computed by a solver, its total weight, and the work the solver performed
/// (configurations tested by the exhaustive search, iterations of the greedy heuristic).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    pub subset: Vec<usize>,
    pub weight: u64,
    pub work: u64,
}

impl Solution {

    pub fn new(subset: Vec<usize>, weight: u64, work: u64) -> Self {
        Solution { subset, weight, work }
    }

    /// Returns the nodes of `self.subset` in increasing order.
    pub fn sorted_subset(&self) -> Vec<usize> {
        let mut sorted = self.subset.clone();
        sorted.sort_unstable();
        sorted
    }

    /// Writes a report of `self` to a `Write` type. `work_label` names `self.work`, nodes are
    /// written 1-based like in the `.gr` format.
    pub fn write_report<W: Write>(
        &self,
        work_label: &str,
        elapsed: Duration,
        valid: bool,
        mut out: W,
    ) -> Result<(), io::Error> {
        let selected = self
            .sorted_subset()
            .iter()
            .map(|node| (node + 1).to_string())
            .collect::<Vec<_>>()
            .join(" ");
        writeln!(out, "{:<16}: {:.6} seconds", "Execution time", elapsed.as_secs_f64())?;
        writeln!(out, "{:<16}: {}", work_label, self.work)?;
        writeln!(out, "{:<16}: {}", "Total weight", self.weight)?;
        writeln!(out, "{:<16}: {}", "Set size", self.subset.len())?;
        writeln!(out, "{:<16}: {}", "Valid solution", if valid { "yes" } else { "no" })?;
        writeln!(out, "{:<16}: {}", "Selected nodes", selected)?;
        Ok(())
    }
}
