//! cooperative cancellation for long-running searches.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// a cheap, cloneable flag a caller can flip from another thread to ask
/// a running solver to stop at its next recursion entry. checking it is
/// a single relaxed atomic load, so solvers can afford to check it at
/// every node.
#[derive(Debug, Clone, Default)]
pub struct AbortSignal(Arc<AtomicBool>);

impl AbortSignal {
    /// a signal that is never set; solvers never observe an abort.
    pub fn never() -> Self {
        Self::default()
    }

    /// flip the flag; any solver holding a clone will observe this at
    /// its next recursion entry.
    pub fn abort(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    /// true once `abort` has been called.
    pub fn is_aborted(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}
