use crate::artifacts::diff::diff_record::Side;
use crate::artifacts::filter::{compile_patterns, matches_path_or_name};
use crate::errors::CompareResult;
use glob::Pattern;
use std::path::Path;
use tracing::trace;

/// Excludes entries from the comparison, as if absent from both trees
#[derive(Debug, Clone, Default)]
pub struct IgnoreFilter {
    patterns: Vec<Pattern>,
}

impl IgnoreFilter {
    pub fn new<S: AsRef<str>>(patterns: &[S]) -> CompareResult<Self> {
        Ok(IgnoreFilter {
            patterns: compile_patterns(patterns)?,
        })
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// `relative_path` is relative to the root of `side`
    pub fn should_ignore(&self, relative_path: &Path, side: Side) -> bool {
        if self.is_empty() {
            return false;
        }

        let ignored = matches_path_or_name(&self.patterns, relative_path);
        if ignored {
            trace!(path = %relative_path.display(), %side, "ignoring entry");
        }

        ignored
    }
}
