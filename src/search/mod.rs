//! Search orchestration module
//!
//! Drives generation and checking until a target count of available
//! names is collected.

mod orchestrator;
mod state;

pub use orchestrator::{SearchContext, SearchOrchestrator, MAX_REQUEST_COUNT};
pub use state::SearchState;

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Cooperative cancellation handle for a search run.
///
/// Cancelling does not abort an in-flight check; the loop observes the
/// flag on its next iteration and returns the partial result set.
#[derive(Debug, Clone, Default)]
pub struct CancelHandle(Arc<AtomicBool>);

impl CancelHandle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Request cancellation
    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cancel_handle_is_shared() {
        let handle = CancelHandle::new();
        let clone = handle.clone();
        assert!(!handle.is_cancelled());
        clone.cancel();
        assert!(handle.is_cancelled());
    }
}
