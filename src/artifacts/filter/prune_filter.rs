use crate::artifacts::diff::diff_record::DiffRecord;
use crate::artifacts::filter::{compile_patterns, matches_path_or_name};
use crate::errors::CompareResult;
use glob::Pattern;
use std::path::Path;

/// Version control metadata, never expanded unless the defaults are disabled
pub const DEFAULT_PRUNE_NAMES: [&str; 5] = [".git", ".hg", ".svn", ".bzr", "CVS"];

/// Decides at render time which differing directories are shown without their contents.
/// The computed diff tree itself is never altered.
#[derive(Debug, Clone, Default)]
pub struct PruneFilter {
    patterns: Vec<Pattern>,
    max_depth: Option<usize>,
}

impl PruneFilter {
    pub fn new<S: AsRef<str>>(
        patterns: &[S],
        use_defaults: bool,
        max_depth: Option<usize>,
    ) -> CompareResult<Self> {
        let mut compiled = compile_patterns(patterns)?;

        if use_defaults {
            let defaults = DEFAULT_PRUNE_NAMES
                .iter()
                .map(|name| Pattern::escape(name))
                .collect::<Vec<_>>();
            compiled.extend(compile_patterns(&defaults)?);
        }

        Ok(PruneFilter {
            patterns: compiled,
            max_depth,
        })
    }

    /// `relative_path` locates the record under the compared roots; its depth counts from
    /// 0 for the entries directly under them
    pub fn should_prune(&self, record: &DiffRecord, relative_path: &Path) -> bool {
        if !record.is_dir() {
            return false;
        }

        let depth = relative_path.components().count().saturating_sub(1);
        if self.max_depth.is_some_and(|max_depth| depth >= max_depth) {
            return true;
        }

        matches_path_or_name(&self.patterns, relative_path)
    }
}
