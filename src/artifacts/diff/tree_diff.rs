use crate::areas::filesystem::{EntryKind, FileSystem};
use crate::areas::session::CompareOptions;
use crate::artifacts::diff::diff_record::{DiffRecord, Side};
use crate::artifacts::diff::oracle::ContentOracle;
use crate::artifacts::filter::ignore_filter::IgnoreFilter;
use crate::artifacts::progress::ProgressSink;
use crate::errors::{CompareError, CompareResult};
use std::collections::BTreeSet;
use std::ffi::OsStr;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, trace};

/// Walks two directory trees in lock-step and records every name that differs.
///
/// Each level lists both directories, takes the union of child names in byte order and
/// classifies every name: missing on one side, different entry type, or same type with
/// different content. Matching subdirectories are compared recursively and only reported
/// when their subtree differs.
pub struct TreeDiff<'s> {
    fs: &'s dyn FileSystem,
    oracle: ContentOracle<'s>,
    ignore: &'s IgnoreFilter,
    progress: &'s dyn ProgressSink,
}

impl<'s> TreeDiff<'s> {
    pub fn new(
        fs: &'s dyn FileSystem,
        progress: &'s dyn ProgressSink,
        options: &'s CompareOptions,
    ) -> Self {
        TreeDiff {
            fs,
            oracle: ContentOracle::new(fs, progress, options.paranoid),
            ignore: &options.ignore,
            progress,
        }
    }

    /// Validate both roots, then compare them
    pub fn compare_roots(&self, a: &Path, b: &Path) -> CompareResult<Vec<DiffRecord>> {
        self.check_root(a)?;
        self.check_root(b)?;

        self.diff_trees(a, b, Path::new(""))
    }

    fn check_root(&self, path: &Path) -> CompareResult<()> {
        match self.fs.metadata(path) {
            Ok(stat) if stat.kind == EntryKind::Directory => Ok(()),
            Ok(_) => Err(CompareError::NotADirectory(path.to_path_buf())),
            Err(CompareError::Filesystem { source, .. }) if source.kind() == ErrorKind::NotFound => {
                Err(CompareError::NotFound(path.to_path_buf()))
            }
            Err(err) => Err(err),
        }
    }

    /// Differences between `a_dir` and `b_dir`, which sit at `prefix` relative to their
    /// roots. An empty result means the two subtrees are equivalent.
    pub fn diff_trees(
        &self,
        a_dir: &Path,
        b_dir: &Path,
        prefix: &Path,
    ) -> CompareResult<Vec<DiffRecord>> {
        self.progress.on_visit(a_dir);

        let a_children = self.fs.list_dir(a_dir)?;
        let b_children = self.fs.list_dir(b_dir)?;

        let names = a_children
            .keys()
            .chain(b_children.keys())
            .collect::<BTreeSet<_>>();

        let mut records = Vec::new();
        for name in names {
            let relative = prefix.join(name);
            let a_entry = a_children.get(name);
            let b_entry = b_children.get(name);

            if self.is_ignored(&relative, a_entry, b_entry) {
                continue;
            }

            if let Some(record) = self.compare_entry(name, &relative, a_entry, b_entry)? {
                records.push(record);
            }
        }

        debug!(
            dir = %prefix.display(),
            entries = a_children.len().max(b_children.len()),
            differences = records.len(),
            "compared directory"
        );

        Ok(records)
    }

    fn is_ignored(&self, relative: &Path, a: Option<&PathBuf>, b: Option<&PathBuf>) -> bool {
        (a.is_some() && self.ignore.should_ignore(relative, Side::A))
            || (b.is_some() && self.ignore.should_ignore(relative, Side::B))
    }

    fn compare_entry(
        &self,
        name: &OsStr,
        relative: &Path,
        a: Option<&PathBuf>,
        b: Option<&PathBuf>,
    ) -> CompareResult<Option<DiffRecord>> {
        let (a, b) = match (a, b) {
            (Some(a), Some(b)) => (a, b),
            (Some(_), None) => return Ok(Some(DiffRecord::missing(name, Side::B))),
            (None, Some(_)) => return Ok(Some(DiffRecord::missing(name, Side::A))),
            (None, None) => return Ok(None),
        };

        let a_stat = self.fs.stat(a)?;
        let b_stat = self.fs.stat(b)?;

        if a_stat.kind != b_stat.kind {
            trace!(path = %relative.display(), a = %a_stat.kind, b = %b_stat.kind, "types differ");
            return Ok(Some(DiffRecord::type_mismatch(name)));
        }

        if a_stat.kind == EntryKind::Directory {
            let children = self.diff_trees(a, b, relative)?;

            return Ok((!children.is_empty())
                .then(|| DiffRecord::changed_dir(name, a, b, children)));
        }

        if self.oracle.entries_differ(a, &a_stat, b, &b_stat)? {
            Ok(Some(DiffRecord::changed_leaf(name)))
        } else {
            Ok(None)
        }
    }
}
