//! Reconciliation engine
//!
//! This module implements the session-scoped sweep lifecycle: the one-time
//! initial cleanup before the first compilation and the steady-state
//! stale-output reconciliation after every completed round.

mod engine;
mod executor;
mod reporting;

pub use engine::Sweeper;

/// Result of one sweep pass
#[derive(Debug, Clone, Default)]
pub struct SweepReport {
    /// Relative paths matched this pass, ascending lexicographic
    pub removed: Vec<String>,
    /// Whether the pass was simulated (nothing touched on disk)
    pub dry_run: bool,
    /// Whether reconciliation was skipped due to compile errors
    pub skipped_for_errors: bool,
}

impl SweepReport {
    /// Report for a round skipped because the compilation had errors
    pub(crate) fn skipped() -> Self {
        Self {
            skipped_for_errors: true,
            ..Self::default()
        }
    }

    /// Whether the pass removed (or would have removed) nothing
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.removed.is_empty()
    }
}
