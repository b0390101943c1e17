//! Sweep diagnostics
//!
//! One stderr line per removed (or would-be-removed) file, plus the pause
//! and self-disable notices. No other output is produced.

/// Prefix on every diagnostic line
const MESSAGE_PREFIX: &str = "outsweep";

/// Emits per-file and lifecycle diagnostic lines
pub struct SweepReporter {
    verbose: bool,
    dry_run: bool,
}

impl SweepReporter {
    /// Create a new reporter
    #[must_use]
    pub const fn new(verbose: bool, dry_run: bool) -> Self {
        Self { verbose, dry_run }
    }

    /// Report one removed (or simulated) path, by base name
    pub fn entry_removed(&self, rel: &str) {
        if !self.verbose {
            return;
        }

        let basename = rel.rsplit('/').next().unwrap_or(rel);
        let action = if self.dry_run { "dryRun" } else { "removed" };
        eprintln!("{MESSAGE_PREFIX}: {action} {basename}");
    }

    /// Report a round skipped due to compile errors
    pub fn paused() {
        eprintln!("{MESSAGE_PREFIX}: pausing due to compile errors");
    }

    /// Report permanent self-disable due to a missing output path
    pub fn disabled() {
        eprintln!("{MESSAGE_PREFIX}: output path not defined; disabling");
    }
}
