//! # outsweep
//!
//! Stale-output reconciliation for incremental build pipelines.
//!
//! After every successful compilation the host build tool reports the set of
//! output files it produced. [`Sweeper`] diffs that set against the previous
//! round's snapshot and removes outputs no longer produced, so a watch
//! session never accumulates artifacts from deleted or renamed source
//! modules.

#![warn(missing_docs)]
#![warn(clippy::all)]

/// Core error types for the outsweep library
pub mod error {
    /// Result type alias using `anyhow::Error`
    pub type Result<T> = anyhow::Result<T>;
}

/// Compilation-round summary reported by the host build tool
pub mod compilation;

/// Construction-time options and removal pattern matching
pub mod config;

/// Output-root traversal
pub mod scanner;

/// Reconciliation engine: lifecycle hooks, snapshot diffing, removal
pub mod sweep;

pub use compilation::CompilationSummary;
pub use config::SweepOptions;
pub use sweep::{SweepReport, Sweeper};
