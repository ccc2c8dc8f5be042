//! exact DSATUR branch-and-bound solver.

use crate::abort::AbortSignal;
use crate::coloring::Coloring;
use crate::error::Error;
use crate::graph::AdjacencyGraph;
use crate::upper_bound::greedy_upper_bound;

const UNCOLORED: i64 = -1;

/// exact DSATUR branch-and-bound: enumerates colorings in
/// saturation-first order, pruned by a greedy upper bound and a
/// saturation-based lower bound.
///
/// state is a single mutable struct restored on backtrack (no
/// persistent data structures in the hot path), per the teacher's own
/// preference for in-place rollback over immutable snapshots.
#[derive(Debug)]
pub struct DSaturBnBSolver<'g> {
    graph: &'g AdjacencyGraph,
    n: usize,
    degree: Vec<usize>,
    color: Vec<i64>,
    /// forbid_cnt[v][c]: number of colored neighbors of v using color c.
    forbid_cnt: Vec<Vec<u32>>,
    /// sat[v]: number of distinct colors on colored neighbors of v.
    sat: Vec<usize>,
    max_used: usize,
    best_k: usize,
    best_coloring: Option<Vec<usize>>,
    /// always-valid fallback, returned verbatim if the search never
    /// finds (or is aborted before finding) a strict improvement.
    fallback: Coloring,
}

impl<'g> DSaturBnBSolver<'g> {
    /// builds a solver seeded from `initial_ub` if given, otherwise
    /// from `greedy_upper_bound`. the greedy coloring is always
    /// computed and kept as the fallback witness: a caller-supplied
    /// `initial_ub` only tightens the *search* bound, it never removes
    /// the guarantee that `solve` returns a valid coloring.
    pub fn new(graph: &'g AdjacencyGraph, initial_ub: Option<usize>) -> Self {
        let n = graph.n();
        let degree = (0..n).map(|v| graph.degree(v)).collect();
        let fallback = greedy_upper_bound(graph);
        let greedy_count = fallback.num_colors();
        let best_k = if n == 0 {
            0
        } else {
            initial_ub.map(|u| u.min(n)).unwrap_or(greedy_count).max(1).min(greedy_count.max(1))
        };
        let best_coloring = if n == 0 || best_k >= greedy_count {
            Some(fallback.as_slice().to_vec())
        } else {
            None
        };
        Self {
            graph,
            n,
            degree,
            color: vec![UNCOLORED; n],
            forbid_cnt: vec![vec![0; n.max(1)]; n],
            sat: vec![0; n],
            max_used: 0,
            best_k,
            best_coloring,
            fallback,
        }
    }

    /// runs the branch-and-bound search, checking `abort` at every
    /// recursion entry. returns `Err(Aborted)` if the search was cut
    /// short; the caller can still recover [`Self::best_coloring`]
    /// afterwards, which is always a valid (if not certified minimal)
    /// coloring.
    pub fn run(&mut self, abort: &AbortSignal) -> Result<Coloring, Error> {
        if self.n == 0 {
            return Ok(Coloring::new(vec![]));
        }
        let aborted = self.recurse(0, abort);
        if aborted {
            return Err(Error::Aborted);
        }
        Ok(self.best_coloring())
    }

    /// best coloring found so far: the fallback witness if the search
    /// never improved on it.
    pub fn best_coloring(&self) -> Coloring {
        match &self.best_coloring {
            Some(c) => Coloring::new(c.clone()),
            None => self.fallback.clone(),
        }
    }

    /// returns true if the search was aborted.
    fn recurse(&mut self, k: usize, abort: &AbortSignal) -> bool {
        if abort.is_aborted() {
            return true;
        }

        let lb_sat = (0..self.n)
            .filter(|&t| self.color[t] == UNCOLORED)
            .map(|t| self.sat[t] + 1)
            .max()
            .unwrap_or(0);
        let lb = self.max_used.max(lb_sat);
        if lb >= self.best_k {
            return false;
        }

        if k == self.n {
            self.best_k = self.max_used;
            self.best_coloring = Some(self.color.iter().map(|&c| c as usize).collect());
            log::debug!("dsatur_bnb: improved upper bound to {}", self.best_k);
            return false;
        }

        let v = (0..self.n)
            .filter(|&v| self.color[v] == UNCOLORED)
            .max_by_key(|&v| (self.sat[v], self.degree[v], std::cmp::Reverse(v)))
            .expect("at least one uncolored vertex remains");

        for c in 0..self.max_used {
            if self.forbid_cnt[v][c] != 0 {
                continue;
            }
            self.assign(v, c);
            if self.recurse(k + 1, abort) {
                self.unassign(v, c);
                return true;
            }
            self.unassign(v, c);
        }

        if self.max_used + 1 < self.best_k {
            let c = self.max_used;
            self.assign(v, c);
            self.max_used += 1;
            let aborted = self.recurse(k + 1, abort);
            self.max_used -= 1;
            self.unassign(v, c);
            if aborted {
                return true;
            }
        }

        false
    }

    fn assign(&mut self, v: usize, c: usize) {
        self.color[v] = c as i64;
        for u in self.graph.neighbors(v).iter() {
            if self.color[u] == UNCOLORED {
                self.forbid_cnt[u][c] += 1;
                if self.forbid_cnt[u][c] == 1 {
                    self.sat[u] += 1;
                }
            }
        }
    }

    fn unassign(&mut self, v: usize, c: usize) {
        self.color[v] = UNCOLORED;
        for u in self.graph.neighbors(v).iter() {
            if self.color[u] == UNCOLORED {
                self.forbid_cnt[u][c] -= 1;
                if self.forbid_cnt[u][c] == 0 {
                    self.sat[u] -= 1;
                }
            }
        }
    }
}

/// solves for an exact minimum coloring of `graph`.
pub fn solve_dsatur_bnb(
    graph: &AdjacencyGraph,
    initial_ub: Option<usize>,
) -> Result<Coloring, Error> {
    let mut solver = DSaturBnBSolver::new(graph, initial_ub);
    solver.run(&AbortSignal::never())
}
