//! runs both exact solvers on the same graph and cross-checks agreement.

use std::time::Instant;

use crate::abort::AbortSignal;
use crate::coloring::{chromatic_number, is_proper_coloring, Coloring};
use crate::dsatur_bnb::DSaturBnBSolver;
use crate::error::Error;
use crate::graph::AdjacencyGraph;
use crate::olemskoy::OlemskoySolver;
use crate::upper_bound::greedy_upper_bound;

/// timing breakdown for one [`Coordinator::run`] invocation, useful to a
/// benchmark collaborator but not otherwise load-bearing.
#[derive(Debug, Clone, Copy)]
pub struct Timings {
    pub greedy: std::time::Duration,
    pub dsatur_bnb: std::time::Duration,
    pub olemskoy: std::time::Duration,
}

/// the output of a cross-checked solve: the agreed chromatic number, one
/// witnessing coloring, and how long each stage took.
#[derive(Debug, Clone)]
pub struct CoordinatorReport {
    pub chromatic_number: usize,
    pub coloring: Coloring,
    pub timings: Timings,
}

/// runs [`DSaturBnBSolver`] and [`OlemskoySolver`] on the same graph,
/// seeded from the same greedy upper bound, and fails with
/// [`Error::SolverDisagreement`] if they report different χ.
///
/// this is the crate's only cross-cutting correctness check: agreement
/// between two independently derived algorithms is the strongest
/// evidence available that neither has a bug, short of exhaustive
/// verification.
#[derive(Debug)]
pub struct Coordinator<'g> {
    graph: &'g AdjacencyGraph,
}

impl<'g> Coordinator<'g> {
    pub fn new(graph: &'g AdjacencyGraph) -> Self {
        Self { graph }
    }

    pub fn run(&self) -> Result<CoordinatorReport, Error> {
        let abort = AbortSignal::never();

        let t0 = Instant::now();
        let greedy = greedy_upper_bound(self.graph);
        let greedy_elapsed = t0.elapsed();
        let ub = greedy.num_colors();

        let t1 = Instant::now();
        let mut dsatur = DSaturBnBSolver::new(self.graph, Some(ub));
        let dsatur_coloring = dsatur.run(&abort)?;
        let dsatur_elapsed = t1.elapsed();

        let t2 = Instant::now();
        let mut olemskoy = OlemskoySolver::new(self.graph, Some(ub));
        let olemskoy_coloring = olemskoy.run(&abort)?;
        let olemskoy_elapsed = t2.elapsed();

        let dsatur_chi = chromatic_number(&dsatur_coloring);
        let olemskoy_chi = chromatic_number(&olemskoy_coloring);

        if dsatur_chi != olemskoy_chi {
            return Err(Error::SolverDisagreement {
                dsatur: dsatur_chi,
                olemskoy: olemskoy_chi,
            });
        }

        debug_assert!(is_proper_coloring(self.graph, &dsatur_coloring).unwrap_or(false));
        debug_assert!(is_proper_coloring(self.graph, &olemskoy_coloring).unwrap_or(false));

        Ok(CoordinatorReport {
            chromatic_number: dsatur_chi,
            coloring: dsatur_coloring,
            timings: Timings {
                greedy: greedy_elapsed,
                dsatur_bnb: dsatur_elapsed,
                olemskoy: olemskoy_elapsed,
            },
        })
    }
}
