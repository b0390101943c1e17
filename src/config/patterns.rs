//! Gitignore-style removal pattern matching using the ignore crate

use std::path::Path;

use anyhow::Context;
use ignore::gitignore::{Gitignore, GitignoreBuilder};

use crate::error::Result;

/// Ordered removal patterns for one sweep pass
///
/// A plain pattern marks matching paths for removal; a `!`-prefixed pattern
/// re-includes matches of earlier patterns. Later lines win, so negations
/// belong after the positives they protect against.
pub struct PatternSet {
    gitignore: Gitignore,
}

impl PatternSet {
    /// Compile an ordered pattern sequence
    ///
    /// # Errors
    ///
    /// Returns an error if a pattern is not valid glob syntax.
    pub fn compile<S: AsRef<str>>(patterns: &[S]) -> Result<Self> {
        let mut builder = GitignoreBuilder::new("");

        for pattern in patterns {
            let pattern = pattern.as_ref();
            builder
                .add_line(None, pattern)
                .with_context(|| format!("Invalid removal pattern: '{pattern}'"))?;
        }

        let gitignore = builder.build()?;

        Ok(Self { gitignore })
    }

    /// Whether a path relative to the sweep root is marked for removal
    #[must_use]
    pub fn marks_for_removal(&self, path: &Path, is_dir: bool) -> bool {
        self.gitignore.matched(path, is_dir).is_ignore()
    }
}
