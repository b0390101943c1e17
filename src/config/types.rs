//! Options supplied by the host build tool at construction time

use serde::{Deserialize, Serialize};

/// Sweeper options
///
/// Every field defaults when absent, so a host can embed this struct in its
/// own configuration file and construct a [`crate::Sweeper`] from it
/// directly. Patterns are not validated here; a malformed pattern surfaces
/// from the sweep pass that first compiles it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct SweepOptions {
    /// Simulate removals without touching the filesystem
    #[serde(default)]
    pub dry_run: bool,

    /// Report every removed (or would-be-removed) file
    #[serde(default)]
    pub verbose: bool,

    /// Removal patterns applied on every reconciliation round
    ///
    /// Ordered, gitignore syntax; a `!`-prefixed pattern re-includes
    /// (protects) matches of earlier patterns.
    #[serde(default)]
    pub custom_patterns: Vec<String>,

    /// Removal patterns applied exactly once, before the first compilation
    #[serde(default)]
    pub initial_patterns: Vec<String>,
}

impl SweepOptions {
    /// Whether per-file diagnostics are emitted
    ///
    /// A dry run always reports, regardless of `verbose`.
    #[must_use]
    pub const fn effective_verbose(&self) -> bool {
        self.verbose || self.dry_run
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_options_default() {
        let options = SweepOptions::default();
        assert!(!options.dry_run);
        assert!(!options.verbose);
        assert!(options.custom_patterns.is_empty());
        assert!(options.initial_patterns.is_empty());
    }

    #[test]
    fn test_absent_fields_take_defaults() {
        let options: SweepOptions = serde_json::from_str("{}").unwrap();
        assert_eq!(options, SweepOptions::default());
    }

    #[test]
    fn test_options_serde_roundtrip() {
        let options = SweepOptions {
            dry_run: true,
            verbose: false,
            custom_patterns: vec!["*.map".to_string(), "!keep.map".to_string()],
            initial_patterns: vec!["**/*".to_string()],
        };

        let json = serde_json::to_string(&options).unwrap();
        let parsed: SweepOptions = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed, options);
    }

    #[test]
    fn test_dry_run_forces_verbose() {
        let quiet = SweepOptions::default();
        assert!(!quiet.effective_verbose());

        let verbose = SweepOptions {
            verbose: true,
            ..SweepOptions::default()
        };
        assert!(verbose.effective_verbose());

        let dry = SweepOptions {
            dry_run: true,
            ..SweepOptions::default()
        };
        assert!(dry.effective_verbose());
    }
}
