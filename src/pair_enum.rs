//! candidate-pair enumeration for the Olemskoy block construction.

use bit_set::BitSet;

use crate::graph::{AdjacencyGraph, VertexId};

/// a non-adjacent vertex pair `(i, j)` together with `d`, the set of
/// vertices in the current support `Omega` that are non-adjacent to
/// both `i` and `j` (including `i` and `j` themselves).
///
/// grounded on `GPair`/`buildGPairsHV` in the original Olemskoy
/// implementation: `d` there is `H(i) ∩ H(j) ∩ Omega`, which since `H`
/// and `V` coincide for a symmetric graph collapses to a single
/// intersection rather than the original's two-sided `d_qr`/`d_rq`
/// computation.
#[derive(Debug, Clone, PartialEq)]
pub struct Pair {
    pub i: VertexId,
    pub j: VertexId,
    pub d: BitSet,
}

/// enumerates every non-adjacent pair `(i, j)` with `i < j` drawn from
/// `omega`, along with its common non-neighborhood `d` (restricted to
/// `omega`, always containing at least `i` and `j`).
///
/// the result is sorted by `|d|` descending, then `i` ascending, then
/// `j` ascending, matching the source's tie-break so block construction
/// is deterministic.
pub fn pairs(graph: &AdjacencyGraph, omega: &BitSet) -> Vec<Pair> {
    let mut out = Vec::new();
    let members: Vec<VertexId> = omega.iter().collect();
    for (idx, &i) in members.iter().enumerate() {
        for &j in &members[idx + 1..] {
            if graph.adj(i, j) {
                continue;
            }
            let mut d = graph.h_set(i);
            d.intersect_with(&graph.h_set(j));
            d.intersect_with(omega);
            if !d.contains(i) || !d.contains(j) {
                continue;
            }
            out.push(Pair { i, j, d });
        }
    }
    out.sort_by(|a, b| {
        b.d.len()
            .cmp(&a.d.len())
            .then_with(|| a.i.cmp(&b.i))
            .then_with(|| a.j.cmp(&b.j))
    });
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_omega(n: usize) -> BitSet {
        let mut s = BitSet::with_capacity(n);
        for v in 0..n {
            s.insert(v);
        }
        s
    }

    #[test]
    fn edgeless_graph_pairs_everyone() {
        let g = AdjacencyGraph::build(&vec![vec![0; 4]; 4]).unwrap();
        let ps = pairs(&g, &full_omega(4));
        // C(4,2) = 6 pairs, each D = all 4 vertices (no edges at all).
        assert_eq!(ps.len(), 6);
        assert!(ps.iter().all(|p| p.d.len() == 4));
    }

    #[test]
    fn complete_graph_has_no_pairs() {
        let m: Vec<Vec<u8>> = (0..4)
            .map(|i| (0..4).map(|j| u8::from(i != j)).collect())
            .collect();
        let g = AdjacencyGraph::build(&m).unwrap();
        assert!(pairs(&g, &full_omega(4)).is_empty());
    }

    #[test]
    fn pair_d_always_contains_both_endpoints() {
        let g = AdjacencyGraph::from_edges(5, &[(0, 1), (1, 2)]).unwrap();
        for p in pairs(&g, &full_omega(5)) {
            assert!(p.d.contains(p.i));
            assert!(p.d.contains(p.j));
        }
    }

    #[test]
    fn sorted_by_d_size_descending_then_indices() {
        let g = AdjacencyGraph::from_edges(5, &[(0, 1)]).unwrap();
        let ps = pairs(&g, &full_omega(5));
        for w in ps.windows(2) {
            assert!(w[0].d.len() >= w[1].d.len());
        }
    }

    #[test]
    fn omega_restricts_candidates() {
        let g = AdjacencyGraph::build(&vec![vec![0; 4]; 4]).unwrap();
        let mut omega = BitSet::with_capacity(4);
        omega.insert(0);
        omega.insert(1);
        let ps = pairs(&g, &omega);
        assert_eq!(ps.len(), 1);
        assert_eq!((ps[0].i, ps[0].j), (0, 1));
        assert_eq!(ps[0].d.len(), 2);
    }
}
