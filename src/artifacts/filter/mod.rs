//! Glob-based filters
//!
//! - `ignore_filter`: names dropped from the comparison entirely
//! - `prune_filter`: directory records shown as differing but not expanded
//!
//! Patterns are shell globs. A pattern matches an entry when it matches the entry's path
//! relative to its root (`*` does not cross `/`) or the entry's base name alone, so `*.o`
//! catches object files at any depth while `build/*.o` only matches under `build`.

pub mod ignore_filter;
pub mod prune_filter;

use crate::errors::{CompareError, CompareResult};
use glob::{MatchOptions, Pattern};
use std::path::Path;

const MATCH_OPTIONS: MatchOptions = MatchOptions {
    case_sensitive: true,
    require_literal_separator: true,
    require_literal_leading_dot: false,
};

pub(crate) fn compile_patterns<S: AsRef<str>>(patterns: &[S]) -> CompareResult<Vec<Pattern>> {
    patterns
        .iter()
        .map(|pattern| {
            let pattern = pattern.as_ref();
            Pattern::new(pattern).map_err(|source| CompareError::InvalidPattern {
                pattern: pattern.to_string(),
                source,
            })
        })
        .collect()
}

pub(crate) fn matches_path_or_name(patterns: &[Pattern], path: &Path) -> bool {
    let name = path.file_name().map(|name| name.to_string_lossy());

    patterns.iter().any(|pattern| {
        pattern.matches_path_with(path, MATCH_OPTIONS)
            || name
                .as_deref()
                .is_some_and(|name| pattern.matches_with(name, MATCH_OPTIONS))
    })
}
