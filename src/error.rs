//! error taxonomy for the coloring engine.

/// errors produced by the graph model, the solvers, and the validator.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// raised at graph construction: non-square, non-symmetric, or
    /// otherwise ill-formed adjacency input.
    #[error("invalid graph: {0}")]
    InvalidGraph(String),

    /// raised by the validator when a color vector cannot possibly
    /// describe a coloring of the graph (wrong length).
    #[error("invalid coloring: {0}")]
    InvalidColoring(String),

    /// raised by the Coordinator when the two solvers disagree on chi(G).
    /// this indicates a correctness bug in one of the solvers, not a
    /// bad input.
    #[error("solver disagreement: dsatur found chi={dsatur}, olemskoy found chi={olemskoy}")]
    SolverDisagreement {
        /// chromatic number reported by DSaturBnBSolver
        dsatur: usize,
        /// chromatic number reported by OlemskoySolver
        olemskoy: usize,
    },

    /// raised when a solver observes its cooperative abort flag set.
    /// the caller may still recover the solver's last `best_coloring`
    /// through means outside this error (e.g. by wrapping the solver).
    #[error("solve aborted before completion")]
    Aborted,
}
