//! Content equality for non-directory entries
//!
//! Checks run from cheapest to most expensive and stop at the first decisive one:
//!
//! 1. regular files with different sizes differ
//! 2. entries with the same device and inode are the same object (skipped when paranoid)
//! 3. symlinks compare their target strings
//! 4. regular files are streamed in `CHUNK_SIZE` blocks and compared byte for byte
//! 5. special files compare their device numbers
//!
//! Identity comes from `lstat`, so two hard links to one symlink are equal without
//! reading either target.

use crate::areas::filesystem::{EntryKind, EntryStat, FileSystem};
use crate::artifacts::progress::ProgressSink;
use crate::errors::{CompareError, CompareResult};
use derive_new::new;
use std::io::Read;
use std::path::Path;
use tracing::trace;

pub const CHUNK_SIZE: usize = 4096;

#[derive(new)]
pub struct ContentOracle<'s> {
    fs: &'s dyn FileSystem,
    progress: &'s dyn ProgressSink,
    paranoid: bool,
}

impl ContentOracle<'_> {
    /// Entries of different kinds always differ; directories are rejected
    pub fn files_differ(&self, a: &Path, b: &Path) -> CompareResult<bool> {
        let a_stat = self.fs.stat(a)?;
        let b_stat = self.fs.stat(b)?;

        self.entries_differ(a, &a_stat, b, &b_stat)
    }

    /// Same as [`ContentOracle::files_differ`] for callers that already hold both stats
    pub(crate) fn entries_differ(
        &self,
        a: &Path,
        a_stat: &EntryStat,
        b: &Path,
        b_stat: &EntryStat,
    ) -> CompareResult<bool> {
        if a_stat.kind != b_stat.kind {
            trace!(path = %a.display(), a = %a_stat.kind, b = %b_stat.kind, "kinds differ");
            return Ok(true);
        }

        if a_stat.kind == EntryKind::File && a_stat.size != b_stat.size {
            trace!(path = %a.display(), "sizes differ");
            return Ok(true);
        }

        if !self.paranoid && a_stat.same_identity(b_stat) {
            trace!(path = %a.display(), "same device and inode");
            return Ok(false);
        }

        match a_stat.kind {
            EntryKind::Symlink => {
                self.progress.on_visit(a);
                Ok(self.fs.read_link(a)? != self.fs.read_link(b)?)
            }
            EntryKind::File => {
                self.progress.on_visit(a);
                self.contents_differ(a, b)
            }
            EntryKind::Special => Ok(a_stat.rdev != b_stat.rdev),
            EntryKind::Directory => Err(CompareError::IsADirectory(a.to_path_buf())),
        }
    }

    fn contents_differ(&self, a: &Path, b: &Path) -> CompareResult<bool> {
        let mut a_reader = self.fs.open(a)?;
        let mut b_reader = self.fs.open(b)?;

        let mut a_chunk = [0u8; CHUNK_SIZE];
        let mut b_chunk = [0u8; CHUNK_SIZE];

        loop {
            let a_len = fill_chunk(&mut a_reader, &mut a_chunk)
                .map_err(|err| CompareError::filesystem("read", a, err))?;
            let b_len = fill_chunk(&mut b_reader, &mut b_chunk)
                .map_err(|err| CompareError::filesystem("read", b, err))?;

            if a_chunk[..a_len] != b_chunk[..b_len] {
                return Ok(true);
            }

            // equal short chunks: both sides hit EOF at the same length
            if a_len < CHUNK_SIZE {
                return Ok(false);
            }
        }
    }
}

/// Read until `chunk` is full or the reader is exhausted
fn fill_chunk(reader: &mut impl Read, chunk: &mut [u8]) -> std::io::Result<usize> {
    let mut filled = 0;

    while filled < chunk.len() {
        match reader.read(&mut chunk[filled..]) {
            Ok(0) => break,
            Ok(read) => filled += read,
            Err(err) if err.kind() == std::io::ErrorKind::Interrupted => continue,
            Err(err) => return Err(err),
        }
    }

    Ok(filled)
}
