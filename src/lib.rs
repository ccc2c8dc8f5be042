//! exact chromatic-number solver: DSATUR branch-and-bound and the
//! Olemskoy pair-expansion method, cross-checked against each other.

// #![warn(clippy::all, clippy::pedantic)]
// useful additional warnings if docs are missing, or crates imported but unused, etc.
#![warn(missing_debug_implementations)]
#![warn(missing_docs)]
#![warn(trivial_casts, trivial_numeric_casts)]
#![warn(unsafe_code)]
#![warn(unused_extern_crates)]
#![warn(variant_size_differences)]

// not sure if already by default in clippy
#![warn(clippy::similar_names)]
#![warn(clippy::shadow_unrelated)]
#![warn(clippy::shadow_same)]
#![warn(clippy::shadow_reuse)]

/// cooperative cancellation for long-running searches.
pub mod abort;
/// the coordinator: runs both solvers and cross-checks agreement.
pub mod coordinator;
/// graph representation and validator.
pub mod coloring;
/// read/write DIMACS edge lists.
pub mod dimacs;
/// exact DSATUR branch-and-bound solver.
pub mod dsatur_bnb;
/// error taxonomy.
pub mod error;
/// immutable adjacency model shared by every solver.
pub mod graph;
/// the matrix-record text format loader.
pub mod matrix_io;
/// the Olemskoy pair-expansion method.
pub mod olemskoy;
/// candidate-pair enumeration for block construction.
pub mod pair_enum;
/// greedy Welsh-Powell upper bound provider.
pub mod upper_bound;

pub use abort::AbortSignal;
pub use coloring::{chromatic_number, is_proper_coloring, Coloring};
pub use coordinator::{Coordinator, CoordinatorReport, Timings};
pub use dsatur_bnb::{solve_dsatur_bnb, DSaturBnBSolver};
pub use error::Error;
pub use graph::{AdjacencyGraph, VertexId};
pub use olemskoy::{solve_olemskoy, OlemskoySolver};
pub use upper_bound::greedy_upper_bound;

/// constructs an [`AdjacencyGraph`] from a square 0/1 matrix.
pub fn build_graph(matrix: &[Vec<u8>]) -> Result<AdjacencyGraph, Error> {
    AdjacencyGraph::build(matrix)
}
