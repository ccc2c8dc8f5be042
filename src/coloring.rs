//! coloring representation and the validator.

use crate::error::Error;
use crate::graph::{AdjacencyGraph, VertexId};

/// a total function V -> N, represented as an ordered sequence of
/// per-vertex colors. colors are contiguous starting at 0 by
/// construction of every solver in this crate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Coloring {
    color: Vec<usize>,
}

impl Coloring {
    /// wraps a raw per-vertex color vector.
    pub fn new(color: Vec<usize>) -> Self {
        Self { color }
    }

    /// color assigned to `v`.
    pub fn color_of(&self, v: VertexId) -> usize {
        self.color[v]
    }

    /// number of vertices covered by this coloring.
    pub fn n(&self) -> usize {
        self.color.len()
    }

    /// raw per-vertex color vector.
    pub fn as_slice(&self) -> &[usize] {
        &self.color
    }

    /// number of colors used: `max(color) + 1`, or 0 for the empty
    /// coloring.
    pub fn num_colors(&self) -> usize {
        self.color.iter().max().map_or(0, |m| m + 1)
    }

    /// the partition view: `classes()[c]` lists the vertices colored `c`.
    pub fn classes(&self) -> Vec<Vec<VertexId>> {
        let mut classes = vec![Vec::new(); self.num_colors()];
        for (v, &c) in self.color.iter().enumerate() {
            classes[c].push(v);
        }
        classes
    }
}

/// chromatic number implied by a coloring: its color count.
pub fn chromatic_number(coloring: &Coloring) -> usize {
    coloring.num_colors()
}

/// verifies that `coloring` is a proper coloring of `graph`: every
/// vertex is covered, and no edge is monochromatic.
///
/// returns `Err(InvalidColoring)` only when `coloring`'s length does
/// not match `graph.n()` — a precondition failure, not an improper
/// coloring. a length-matching but improper coloring returns `Ok(false)`.
pub fn is_proper_coloring(graph: &AdjacencyGraph, coloring: &Coloring) -> Result<bool, Error> {
    if coloring.n() != graph.n() {
        return Err(Error::InvalidColoring(format!(
            "coloring covers {} vertices, graph has {}",
            coloring.n(),
            graph.n()
        )));
    }
    for (u, v) in graph.edges() {
        if coloring.color_of(u) == coloring.color_of(v) {
            return Ok(false);
        }
    }
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_coloring_has_zero_colors() {
        let c = Coloring::new(vec![]);
        assert_eq!(chromatic_number(&c), 0);
    }

    #[test]
    fn detects_monochromatic_edge() {
        let g = AdjacencyGraph::from_edges(2, &[(0, 1)]).unwrap();
        let bad = Coloring::new(vec![0, 0]);
        assert_eq!(is_proper_coloring(&g, &bad).unwrap(), false);
        let good = Coloring::new(vec![0, 1]);
        assert_eq!(is_proper_coloring(&g, &good).unwrap(), true);
    }

    #[test]
    fn length_mismatch_is_an_error() {
        let g = AdjacencyGraph::from_edges(3, &[(0, 1)]).unwrap();
        let c = Coloring::new(vec![0, 1]);
        assert!(is_proper_coloring(&g, &c).is_err());
    }

    #[test]
    fn classes_partition_matches_color_vector() {
        let c = Coloring::new(vec![0, 1, 0, 2]);
        assert_eq!(c.classes(), vec![vec![0, 2], vec![1], vec![3]]);
    }
}
