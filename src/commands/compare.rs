use crate::areas::session::{CompareOptions, Session};
use crate::artifacts::diff::diff_record::DiffRecord;
use crate::artifacts::diff::tree_diff::TreeDiff;
use crate::commands::patch::{PatchOptions, write_patches};
use crate::commands::render::RenderOptions;
use anyhow::Context;
use derive_new::new;
use std::path::Path;
use tracing::{debug, info};

#[derive(Debug, Clone, Default, new)]
pub struct RunOptions {
    pub compare: CompareOptions,
    pub render: RenderOptions,
    pub patch: Option<PatchOptions>,
}

impl Session {
    pub fn compare(
        &self,
        a: &Path,
        b: &Path,
        options: &CompareOptions,
    ) -> anyhow::Result<Vec<DiffRecord>> {
        debug!(a = %a.display(), b = %b.display(), paranoid = options.paranoid, "comparing trees");

        let result = TreeDiff::new(self.fs(), self.progress(), options).compare_roots(a, b);
        self.progress().finish();

        match result {
            Ok(diffs) => Ok(diffs),
            Err(err) if err.is_invalid_root() => Err(err.into()),
            Err(err) => Err(err).with_context(|| {
                format!(
                    "comparison of {} and {} aborted",
                    a.display(),
                    b.display()
                )
            }),
        }
    }

    /// Compare, print the diff tree, then write patches if requested. Returns the
    /// synthetic root wrapping the top-level differences.
    pub fn run(&self, a: &Path, b: &Path, options: &RunOptions) -> anyhow::Result<DiffRecord> {
        let root = DiffRecord::root(self.compare(a, b, &options.compare)?);
        info!(differences = root.descendant_count(), "comparison finished");

        self.render(&root, &options.render)?;

        if let Some(patch_options) = &options.patch {
            let written = write_patches(&root.children, patch_options);
            info!(patches = written.len(), "patch generation finished");
        }

        Ok(root)
    }
}
