//! Sweep orchestration - lifecycle hooks and snapshot diffing

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use super::SweepReport;
use super::executor::RemovalExecutor;
use super::reporting::SweepReporter;
use crate::compilation::CompilationSummary;
use crate::config::{PatternSet, SweepOptions};
use crate::error::Result;
use crate::scanner;

/// Reconciles a build output directory across compilation rounds
///
/// One instance lives for an entire watch/build session. The host binds the
/// session's output root once with [`Sweeper::attach`], invokes
/// [`Sweeper::on_compile_start`] before compilation begins, and
/// [`Sweeper::on_compile_finished`] after every completed round.
pub struct Sweeper {
    options: SweepOptions,
    output_root: Option<PathBuf>,
    disabled: bool,
    current_assets: BTreeSet<String>,
    initial_sweep_done: bool,
}

impl Sweeper {
    /// Create a sweeper from construction-time options
    #[must_use]
    pub fn new(options: SweepOptions) -> Self {
        Self {
            options,
            output_root: None,
            disabled: false,
            current_assets: BTreeSet::new(),
            initial_sweep_done: false,
        }
    }

    /// Bind the session's output root
    ///
    /// The host calls this once, before any lifecycle hook. A host without a
    /// configured output path passes `None`; the sweeper then emits a single
    /// diagnostic and stays permanently inert for the session. After a
    /// successful bind the first root wins and later calls are ignored.
    pub fn attach(&mut self, output_root: Option<&Path>) {
        if self.disabled || self.output_root.is_some() {
            return;
        }

        match output_root {
            Some(root) => self.output_root = Some(root.to_path_buf()),
            None => {
                SweepReporter::disabled();
                self.disabled = true;
            }
        }
    }

    /// Relative paths of the outputs of the most recent successful round
    #[must_use]
    pub const fn current_assets(&self) -> &BTreeSet<String> {
        &self.current_assets
    }

    /// One-time cleanup before the first compilation
    ///
    /// No-op unless `initial_patterns` is configured, and at most once per
    /// session no matter how often the host fires its pre-compile hook.
    ///
    /// # Errors
    ///
    /// Returns an error if pattern compilation, traversal, or removal fails.
    pub fn on_compile_start(&mut self) -> Result<SweepReport> {
        let Some(root) = self.output_root.clone() else {
            return Ok(SweepReport::default());
        };

        if self.initial_sweep_done || self.options.initial_patterns.is_empty() {
            return Ok(SweepReport::default());
        }

        self.initial_sweep_done = true;

        let patterns: Vec<String> = self
            .options
            .initial_patterns
            .iter()
            .chain(&self.options.custom_patterns)
            .cloned()
            .collect();

        self.remove_matched(&root, &patterns)
    }

    /// Reconcile after a completed compilation attempt
    ///
    /// A round with errors is skipped whole: the snapshot keeps the last
    /// successful round's assets and nothing is removed. On success the
    /// snapshot is replaced and every previously-known asset missing from
    /// the new list is swept, together with `custom_patterns` matches.
    ///
    /// # Errors
    ///
    /// Returns an error if pattern compilation, traversal, or removal fails.
    pub fn on_compile_finished(&mut self, summary: &CompilationSummary) -> Result<SweepReport> {
        let Some(root) = self.output_root.clone() else {
            return Ok(SweepReport::default());
        };

        if summary.has_errors() {
            if self.options.effective_verbose() {
                SweepReporter::paused();
            }
            return Ok(SweepReport::skipped());
        }

        let new_assets: BTreeSet<String> = summary
            .assets
            .iter()
            .map(|name| scanner::normalize_separators(name))
            .collect();

        // BTreeSet::difference iterates ascending, so the stale list is
        // already in deterministic order.
        let stale: Vec<String> = self
            .current_assets
            .difference(&new_assets)
            .cloned()
            .collect();

        self.current_assets = new_assets;

        if stale.is_empty() && self.options.custom_patterns.is_empty() {
            return Ok(SweepReport::default());
        }

        // Stale entries are exact paths, not globs; anchor them so a stale
        // top-level name never matches a live file deeper in the tree.
        let patterns: Vec<String> = stale
            .iter()
            .map(|path| format!("/{path}"))
            .chain(self.options.custom_patterns.iter().cloned())
            .collect();

        self.remove_matched(&root, &patterns)
    }

    /// Delete primitive: resolve patterns under `root` and remove matches
    fn remove_matched(&self, root: &Path, patterns: &[String]) -> Result<SweepReport> {
        let pattern_set = PatternSet::compile(patterns)?;
        let matched = scanner::scan(root, &pattern_set)?;

        let executor = RemovalExecutor::new(self.options.dry_run);
        let reporter = SweepReporter::new(self.options.effective_verbose(), self.options.dry_run);

        let mut removed = Vec::with_capacity(matched.len());
        for entry in matched {
            executor.remove(&entry)?;
            reporter.entry_removed(&entry.rel);
            removed.push(entry.rel);
        }

        Ok(SweepReport {
            removed,
            dry_run: self.options.dry_run,
            skipped_for_errors: false,
        })
    }
}
