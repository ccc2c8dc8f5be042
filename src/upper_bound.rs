//! greedy Welsh-Powell upper bound provider.

use bit_set::BitSet;

use crate::coloring::Coloring;
use crate::graph::AdjacencyGraph;

/// produces a proper coloring using the Welsh-Powell order: vertices
/// sorted by descending degree, ties broken by ascending index. each
/// vertex takes the smallest color not used by an already-colored
/// neighbor.
///
/// guarantees a proper coloring with at most Delta(G)+1 colors; the
/// count seeds the exact solvers' initial upper bound.
///
/// grounded on the teacher's `search/greedy_dsatur.rs`, simplified to a
/// static ordering since the exact solvers below own live saturation
/// bookkeeping themselves.
pub fn greedy_upper_bound(graph: &AdjacencyGraph) -> Coloring {
    let n = graph.n();
    if n == 0 {
        return Coloring::new(vec![]);
    }

    let mut order: Vec<usize> = (0..n).collect();
    order.sort_by(|&a, &b| {
        graph
            .degree(b)
            .cmp(&graph.degree(a))
            .then_with(|| a.cmp(&b))
    });

    let mut color = vec![usize::MAX; n];
    let mut adj_colors: Vec<BitSet> = vec![BitSet::new(); n];
    for v in order {
        let mut c = 0;
        while adj_colors[v].contains(c) {
            c += 1;
        }
        color[v] = c;
        for u in graph.neighbors(v).iter() {
            if color[u] == usize::MAX {
                adj_colors[u].insert(c);
            }
        }
    }
    Coloring::new(color)
}
