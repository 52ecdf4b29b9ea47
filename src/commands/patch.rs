//! Unified patches for differing directories
//!
//! For every differing directory at the configured depth an external line-diff tool is
//! run as `<tool> -Naur <a> <b>` and its output saved as a `.patch` file. The tool's exit
//! codes 0 (no differences) and 1 (differences) both count as success. Anything else,
//! including a tool that cannot be spawned, is logged and skipped: patches never make the
//! comparison itself fail.

use crate::artifacts::diff::diff_record::DiffRecord;
use anyhow::Context;
use derive_new::new;
use std::path::{Path, PathBuf};
use std::process::Command;
use tracing::{info, warn};

pub const DEFAULT_DIFF_TOOL: &str = "diff";

#[derive(Debug, Clone, new)]
pub struct PatchOptions {
    /// Depth of the directories to patch, 0 being the entries directly under the roots
    pub depth: usize,
    pub tool: String,
    pub output_dir: PathBuf,
}

/// Write one patch per differing directory at `options.depth`; returns the files written
pub fn write_patches(diffs: &[DiffRecord], options: &PatchOptions) -> Vec<PathBuf> {
    if let Err(err) = std::fs::create_dir_all(&options.output_dir) {
        warn!(
            dir = %options.output_dir.display(),
            "cannot create patch directory: {err}"
        );
        return Vec::new();
    }

    let mut written = Vec::new();
    collect_patches(diffs, Path::new(""), 0, options, &mut written);
    written
}

fn collect_patches(
    diffs: &[DiffRecord],
    prefix: &Path,
    depth: usize,
    options: &PatchOptions,
    written: &mut Vec<PathBuf>,
) {
    for record in diffs.iter().filter(|record| record.is_dir()) {
        let relative = prefix.join(&record.name);

        if depth < options.depth {
            collect_patches(&record.children, &relative, depth + 1, options, written);
            continue;
        }

        match generate_patch(record, &relative, options) {
            Ok(patch) => {
                info!(patch = %patch.display(), "wrote patch");
                written.push(patch);
            }
            Err(err) => warn!(dir = %relative.display(), "patch generation failed: {err:#}"),
        }
    }
}

fn generate_patch(
    record: &DiffRecord,
    relative: &Path,
    options: &PatchOptions,
) -> anyhow::Result<PathBuf> {
    let (Some(a_path), Some(b_path)) = (&record.a_path, &record.b_path) else {
        anyhow::bail!("no directory paths recorded for {}", relative.display());
    };

    let output = Command::new(&options.tool)
        .arg("-Naur")
        .arg(a_path)
        .arg(b_path)
        .output()
        .with_context(|| format!("failed to run '{}'", options.tool))?;

    match output.status.code() {
        Some(0) | Some(1) => {}
        code => anyhow::bail!(
            "'{}' exited with {}: {}",
            options.tool,
            code.map_or_else(|| "a signal".to_string(), |code| format!("status {code}")),
            String::from_utf8_lossy(&output.stderr).trim()
        ),
    }

    let patch = options.output_dir.join(patch_file_name(relative));
    std::fs::write(&patch, &output.stdout)
        .with_context(|| format!("failed to write {}", patch.display()))?;

    Ok(patch)
}

/// `src/lib` becomes `src_lib.patch`
pub fn patch_file_name(relative: &Path) -> String {
    let stem = relative
        .components()
        .map(|component| component.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("_");

    format!("{stem}.patch")
}
