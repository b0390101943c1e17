//! Dry-run-aware filesystem removal

use std::fs;
use std::io;

use anyhow::Context;

use crate::error::Result;
use crate::scanner::MatchedEntry;

/// Removes matched entries, or leaves the filesystem untouched in dry-run
pub struct RemovalExecutor {
    dry_run: bool,
}

impl RemovalExecutor {
    /// Create a new executor
    #[must_use]
    pub const fn new(dry_run: bool) -> Self {
        Self { dry_run }
    }

    /// Remove one matched entry
    ///
    /// Directories are removed recursively. An entry that vanished between
    /// traversal and removal counts as removed.
    ///
    /// # Errors
    ///
    /// Returns an error if the filesystem removal fails.
    pub fn remove(&self, entry: &MatchedEntry) -> Result<()> {
        if self.dry_run {
            return Ok(());
        }

        let outcome = if entry.is_dir {
            fs::remove_dir_all(&entry.path)
        } else {
            fs::remove_file(&entry.path)
        };

        match outcome {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(err) => {
                Err(err).with_context(|| format!("Failed to remove {}", entry.path.display()))
            }
        }
    }
}
