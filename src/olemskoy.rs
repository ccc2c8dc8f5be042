//! the Olemskoy method: block-by-block independent-set construction via
//! non-adjacent vertex pairs.

use bit_set::BitSet;

use crate::abort::AbortSignal;
use crate::coloring::Coloring;
use crate::error::Error;
use crate::graph::{AdjacencyGraph, VertexId};
use crate::pair_enum::{pairs, Pair};
use crate::upper_bound::greedy_upper_bound;

/// state recorded when entering a level of `build_block`, kept around so
/// that the *child* level which finds Ω empty can look back at it to run
/// Ψ\Z thinning. grounded on `OlemskoyColorGraph::lvl`/`LevelState`.
#[derive(Debug)]
struct LevelState {
    omega: BitSet,
    pairs: Vec<Pair>,
}

/// recursive block-by-block coloring search.
///
/// unlike the source's `OlemskoyColorGraph`, `currentBlock` is never kept
/// sorted for its own sake (iteration order does not matter for
/// correctness, only membership) and Ψ is computed directly as
/// `last.omega \ block`, which is exactly `⋃_{μ<s} Q^{j,μ}` since every
/// vertex ever added to this block arrived as part of some committed
/// pair. Ψ\Z thinning is bookkeeping only (mirrors `markAsTail` in the
/// ground truth): Ψ\Z vertices are ruled out of this block, since they
/// are adjacent to its last committed pair (which is exactly why
/// `omega` emptied out), and are never absorbed into `block`/`used`.
#[derive(Debug)]
pub struct OlemskoySolver<'g> {
    graph: &'g AdjacencyGraph,
    n: usize,
    used: Vec<bool>,
    best_k: usize,
    best_partition: Option<Vec<Vec<VertexId>>>,
    current_partition: Vec<Vec<VertexId>>,
    lvl_stack: Vec<LevelState>,
    lower_bound_chi: Option<usize>,
    fallback: Coloring,
}

impl<'g> OlemskoySolver<'g> {
    /// seeded the same way as [`crate::dsatur_bnb::DSaturBnBSolver`]: the
    /// greedy coloring is always computed as a guaranteed-valid fallback
    /// witness, and `initial_ub` only tightens the search bound used by
    /// checks A/B/C.
    pub fn new(graph: &'g AdjacencyGraph, initial_ub: Option<usize>) -> Self {
        let n = graph.n();
        let fallback = greedy_upper_bound(graph);
        let greedy_count = fallback.num_colors();
        let best_k = if n == 0 {
            0
        } else {
            initial_ub.map(|u| u.min(n)).unwrap_or(greedy_count).max(1).min(greedy_count.max(1))
        };
        let best_partition = if n == 0 || best_k >= greedy_count {
            Some(fallback.classes())
        } else {
            None
        };
        Self {
            graph,
            n,
            used: vec![false; n],
            best_k,
            best_partition,
            current_partition: Vec::new(),
            lvl_stack: Vec::new(),
            lower_bound_chi: None,
            fallback,
        }
    }

    /// best lower bound on χ proved by check B so far, if any.
    pub fn lower_bound_chi(&self) -> Option<usize> {
        self.lower_bound_chi
    }

    /// runs the search. see [`crate::dsatur_bnb::DSaturBnBSolver::run`]
    /// for the abort/fallback contract, which mirrors this one exactly.
    pub fn run(&mut self, abort: &AbortSignal) -> Result<Coloring, Error> {
        if self.n == 0 {
            return Ok(Coloring::new(vec![]));
        }
        let aborted = self.search_blocks(0, abort);
        if aborted {
            return Err(Error::Aborted);
        }
        Ok(self.best_coloring())
    }

    /// best partition found so far, or the fallback witness.
    pub fn best_coloring(&self) -> Coloring {
        match &self.best_partition {
            Some(partition) => partition_to_coloring(self.n, partition),
            None => self.fallback.clone(),
        }
    }

    fn search_blocks(&mut self, j: usize, abort: &AbortSignal) -> bool {
        if abort.is_aborted() {
            return true;
        }
        if self.used.iter().all(|&u| u) {
            if j < self.best_k {
                self.best_k = j;
                self.best_partition = Some(self.current_partition.clone());
                log::debug!("olemskoy: improved upper bound to {j}");
            }
            return false;
        }

        let mut omega = BitSet::with_capacity(self.n);
        for v in 0..self.n {
            if !self.used[v] {
                omega.insert(v);
            }
        }
        let mut block = Vec::new();
        self.build_block(j, 0, &mut block, omega, abort)
    }

    fn build_block(
        &mut self,
        j: usize,
        s: usize,
        block: &mut Vec<VertexId>,
        omega: BitSet,
        abort: &AbortSignal,
    ) -> bool {
        if abort.is_aborted() {
            return true;
        }

        if omega.is_empty() {
            // Psi\Z thinning: these are Omega-candidates from the parent
            // level that this branch's chosen pair ruled out (they are
            // adjacent to that pair, which is exactly why `omega` above
            // is empty). They are bookkeeping only (F^{j,s}, mirroring
            // `markAsTail` in the ground truth), never joining
            // `block`/`used`: doing so would make the emitted class
            // adjacent to itself.
            if let Some(last) = self.lvl_stack.last() {
                let mut psi = last.omega.clone();
                for &v in block.iter() {
                    psi.remove(v);
                }
                let mut z = BitSet::with_capacity(self.n);
                for p in &last.pairs {
                    if p.d == psi {
                        z.insert(p.i);
                        z.insert(p.j);
                    }
                }
                let singles: Vec<VertexId> =
                    psi.iter().filter(|v| !z.contains(*v)).collect();
                for v in singles {
                    log::trace!("olemskoy: F-tail (bookkeeping only) {v}");
                }
            }

            let mut snapshot = block.clone();
            snapshot.sort_unstable();
            self.current_partition.push(snapshot);
            let aborted = self.search_blocks(j + 1, abort);
            self.current_partition.pop();
            return aborted;
        }

        let g = pairs(self.graph, &omega);

        if g.is_empty() {
            // Omega induces a clique: at most one more vertex can join
            // this block. pick the smallest index deterministically,
            // absorb it as a tail, and close the block immediately
            // (every other vertex in Omega is adjacent to it).
            let v = omega.iter().min().expect("checked non-empty above");
            self.used[v] = true;
            block.push(v);
            let aborted = self.build_block(j, s, block, BitSet::with_capacity(self.n), abort);
            block.pop();
            self.used[v] = false;
            return aborted;
        }

        let rho = g[0].d.len().max(1);

        if j >= 1 && j + omega.len() / rho > self.best_k {
            return false;
        }

        if j == 0 {
            let potential = 2 * s + rho;
            let floored = self.n / self.best_k.max(1);
            if potential <= floored {
                return false;
            }
            let candidate = (self.n + rho - 1) / rho;
            self.lower_bound_chi = Some(match self.lower_bound_chi {
                Some(lb) => lb.min(candidate),
                None => candidate,
            });
        }

        if j + 2 == self.best_k && 2 * s + rho == omega.len() {
            return false;
        }

        self.lvl_stack.push(LevelState {
            omega: omega.clone(),
            pairs: g.clone(),
        });

        let mut aborted = false;
        for p in &g {
            self.used[p.i] = true;
            self.used[p.j] = true;
            block.push(p.i);
            block.push(p.j);

            let mut next_omega = omega.clone();
            next_omega.remove(p.i);
            next_omega.remove(p.j);
            next_omega.difference_with(self.graph.neighbors(p.i));
            next_omega.difference_with(self.graph.neighbors(p.j));

            if self.build_block(j, s + 1, block, next_omega, abort) {
                aborted = true;
            }

            block.pop();
            block.pop();
            self.used[p.i] = false;
            self.used[p.j] = false;

            if aborted {
                break;
            }
        }

        self.lvl_stack.pop();
        aborted
    }
}

fn partition_to_coloring(n: usize, partition: &[Vec<VertexId>]) -> Coloring {
    let mut color = vec![0usize; n];
    for (c, class) in partition.iter().enumerate() {
        for &v in class {
            color[v] = c;
        }
    }
    Coloring::new(color)
}

/// solves for an exact minimum coloring of `graph` via the Olemskoy method.
pub fn solve_olemskoy(graph: &AdjacencyGraph, initial_ub: Option<usize>) -> Result<Coloring, Error> {
    let mut solver = OlemskoySolver::new(graph, initial_ub);
    solver.run(&AbortSignal::never())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coloring::{chromatic_number, is_proper_coloring};

    fn chi(graph: &AdjacencyGraph) -> usize {
        let c = solve_olemskoy(graph, None).unwrap();
        assert!(is_proper_coloring(graph, &c).unwrap());
        chromatic_number(&c)
    }

    #[test]
    fn empty_graph_has_chi_zero() {
        let g = AdjacencyGraph::build(&[]).unwrap();
        assert_eq!(chi(&g), 0);
    }

    #[test]
    fn single_vertex_has_chi_one() {
        let g = AdjacencyGraph::build(&vec![vec![0]]).unwrap();
        assert_eq!(chi(&g), 1);
    }

    #[test]
    fn edgeless_graph_has_chi_one() {
        let g = AdjacencyGraph::build(&vec![vec![0; 6]; 6]).unwrap();
        assert_eq!(chi(&g), 1);
    }

    #[test]
    fn complete_graph_has_chi_n() {
        let m: Vec<Vec<u8>> = (0..5)
            .map(|i| (0..5).map(|j| u8::from(i != j)).collect())
            .collect();
        let g = AdjacencyGraph::build(&m).unwrap();
        assert_eq!(chi(&g), 5);
    }

    #[test]
    fn even_cycle_has_chi_two() {
        let g = AdjacencyGraph::from_edges(6, &[(0, 1), (1, 2), (2, 3), (3, 4), (4, 5), (0, 5)]).unwrap();
        assert_eq!(chi(&g), 2);
    }

    #[test]
    fn odd_cycle_has_chi_three() {
        let g = AdjacencyGraph::from_edges(5, &[(0, 1), (1, 2), (2, 3), (3, 4), (0, 4)]).unwrap();
        assert_eq!(chi(&g), 3);
    }

    #[test]
    fn complete_bipartite_has_chi_two() {
        let g = AdjacencyGraph::from_edges(4, &[(0, 2), (0, 3), (1, 2), (1, 3)]).unwrap();
        assert_eq!(chi(&g), 2);
    }

    #[test]
    fn scenario_one_has_chi_three() {
        let g = AdjacencyGraph::from_edges(10, &[
            (0, 5), (1, 2), (1, 6), (2, 3), (2, 4), (2, 5), (3, 6), (3, 7), (4, 6), (5, 7), (5, 8), (6, 9),
        ]).unwrap();
        assert_eq!(chi(&g), 3);
    }

    #[test]
    fn petersen_minus_has_chi_three() {
        let g = AdjacencyGraph::from_edges(6, &[(0, 1), (1, 2), (2, 0), (3, 4), (4, 5), (5, 3), (0, 3)]).unwrap();
        assert_eq!(chi(&g), 3);
    }

    #[test]
    fn determinism() {
        let g = AdjacencyGraph::from_edges(5, &[(0, 1), (1, 2), (2, 3), (3, 4), (0, 4)]).unwrap();
        let c1 = solve_olemskoy(&g, None).unwrap();
        let c2 = solve_olemskoy(&g, None).unwrap();
        assert_eq!(c1, c2);
    }

    #[test]
    fn agrees_with_dsatur_on_every_scenario() {
        use crate::dsatur_bnb::solve_dsatur_bnb;
        let graphs = [
            AdjacencyGraph::build(&vec![vec![0; 4]; 4]).unwrap(),
            AdjacencyGraph::from_edges(7, &[(0, 1), (1, 2), (2, 3), (3, 4), (4, 5), (5, 6), (0, 6)]).unwrap(),
            AdjacencyGraph::from_edges(4, &[(0, 2), (0, 3), (1, 2), (1, 3)]).unwrap(),
        ];
        for g in graphs {
            let a = chromatic_number(&solve_dsatur_bnb(&g, None).unwrap());
            let b = chromatic_number(&solve_olemskoy(&g, None).unwrap());
            assert_eq!(a, b);
        }
    }
}
