//! immutable adjacency model shared by every solver.

use bit_set::BitSet;

use crate::error::Error;

/// opaque 0-based vertex index.
pub type VertexId = usize;

/// an immutable, symmetric simple graph, represented as dense bitset
/// neighbor/non-neighbor masks alongside per-vertex degree.
///
/// the hot inner loop of both solvers is `Omega <- Omega \ N(v) \ {v}`,
/// which with a bitset representation is a single AND/AND-NOT.
#[derive(Debug, Clone)]
pub struct AdjacencyGraph {
    n: usize,
    neighbors: Vec<BitSet>,
    non_neighbors: Vec<BitSet>,
    degree: Vec<usize>,
}

impl AdjacencyGraph {
    /// builds a graph from a square 0/1 adjacency matrix.
    ///
    /// rejects non-square input and input whose upper and lower
    /// triangles disagree (outside the diagonal, which is always
    /// forced to "no edge" regardless of what the matrix carries
    /// there).
    pub fn build(matrix: &[Vec<u8>]) -> Result<Self, Error> {
        let n = matrix.len();
        for (i, row) in matrix.iter().enumerate() {
            if row.len() != n {
                return Err(Error::InvalidGraph(format!(
                    "row {i} has length {}, expected {n} (matrix must be square)",
                    row.len()
                )));
            }
        }
        for i in 0..n {
            for j in (i + 1)..n {
                let a = matrix[i][j] != 0;
                let b = matrix[j][i] != 0;
                if a != b {
                    return Err(Error::InvalidGraph(format!(
                        "matrix is not symmetric at ({i},{j}): {a} vs {b}"
                    )));
                }
            }
        }

        let mut neighbors = vec![BitSet::with_capacity(n); n];
        for i in 0..n {
            for j in 0..n {
                if i != j && matrix[i][j] != 0 {
                    neighbors[i].insert(j);
                }
            }
        }
        let mut non_neighbors = vec![BitSet::with_capacity(n); n];
        for i in 0..n {
            for j in 0..n {
                if i != j && !neighbors[i].contains(j) {
                    non_neighbors[i].insert(j);
                }
            }
        }
        let degree = neighbors.iter().map(BitSet::len).collect();

        Ok(Self {
            n,
            neighbors,
            non_neighbors,
            degree,
        })
    }

    /// builds a graph from an edge list over vertices `0..n`.
    pub fn from_edges(n: usize, edges: &[(VertexId, VertexId)]) -> Result<Self, Error> {
        let mut matrix = vec![vec![0u8; n]; n];
        for &(u, v) in edges {
            if u >= n || v >= n {
                return Err(Error::InvalidGraph(format!(
                    "edge ({u},{v}) references a vertex outside 0..{n}"
                )));
            }
            matrix[u][v] = 1;
            matrix[v][u] = 1;
        }
        Self::build(&matrix)
    }

    /// number of vertices.
    pub fn n(&self) -> usize {
        self.n
    }

    /// whether `i` and `j` are adjacent. `adj(i,i)` is always `false`.
    pub fn adj(&self, i: VertexId, j: VertexId) -> bool {
        i != j && self.neighbors[i].contains(j)
    }

    /// degree of vertex `i`.
    pub fn degree(&self, i: VertexId) -> usize {
        self.degree[i]
    }

    /// bitset of vertices adjacent to `i` (`i` excluded).
    pub fn neighbors(&self, i: VertexId) -> &BitSet {
        &self.neighbors[i]
    }

    /// bitset of vertices non-adjacent to `i` (`i` excluded).
    pub fn non_neighbors(&self, i: VertexId) -> &BitSet {
        &self.non_neighbors[i]
    }

    /// H(i) = non_neighbors(i) U {i}, as used by the Olemskoy pair
    /// enumeration. kept distinct from `non_neighbors` to mirror the
    /// source formulation even though it is semantically redundant.
    pub fn h_set(&self, i: VertexId) -> BitSet {
        let mut s = self.non_neighbors[i].clone();
        s.insert(i);
        s
    }

    /// V(j), symmetric counterpart of `h_set`.
    pub fn v_set(&self, j: VertexId) -> BitSet {
        self.h_set(j)
    }

    /// all edges (u,v) with u < v.
    pub fn edges(&self) -> Vec<(VertexId, VertexId)> {
        let mut res = Vec::new();
        for i in 0..self.n {
            for j in self.neighbors[i].iter() {
                if i < j {
                    res.push((i, j));
                }
            }
        }
        res
    }

    /// maximum degree, Delta(G). 0 for the empty graph (n=0).
    pub fn max_degree(&self) -> usize {
        self.degree.iter().copied().max().unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_non_square() {
        let m = vec![vec![0, 1], vec![1, 0], vec![0, 0]];
        assert!(AdjacencyGraph::build(&m).is_err());
    }

    #[test]
    fn rejects_non_symmetric() {
        let m = vec![vec![0, 1], vec![0, 0]];
        assert!(AdjacencyGraph::build(&m).is_err());
    }

    #[test]
    fn diagonal_is_ignored() {
        let m = vec![vec![1, 0], vec![0, 1]];
        let g = AdjacencyGraph::build(&m).unwrap();
        assert!(!g.adj(0, 0));
        assert!(!g.adj(0, 1));
    }

    #[test]
    fn degrees_and_masks() {
        // triangle
        let m = vec![vec![0, 1, 1], vec![1, 0, 1], vec![1, 1, 0]];
        let g = AdjacencyGraph::build(&m).unwrap();
        assert_eq!(g.degree(0), 2);
        assert!(g.non_neighbors(0).is_empty());
        assert_eq!(g.h_set(0).len(), 1);
    }

    #[test]
    fn from_edges_matches_build() {
        let g = AdjacencyGraph::from_edges(4, &[(0, 1), (1, 2)]).unwrap();
        assert!(g.adj(0, 1));
        assert!(g.adj(1, 2));
        assert!(!g.adj(0, 2));
        assert_eq!(g.degree(3), 0);
    }

    #[test]
    fn empty_graph() {
        let g = AdjacencyGraph::build(&[]).unwrap();
        assert_eq!(g.n(), 0);
        assert_eq!(g.max_degree(), 0);
    }
}
